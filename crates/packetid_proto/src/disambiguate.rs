//! Renames packets whose name is used by both directions of a state.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::state::{Direction, DirectionTable, StateMapping};

/// Makes every name in `mapping` unique across its two directions.
///
/// A name used by both a clientbound and a serverbound packet is replaced by
/// `<name>Clientbound` and `<name>Serverbound` respectively. IDs are never
/// changed and entries whose name is not shared are left alone.
///
/// Apply once, right after extraction. Running it again changes nothing,
/// since the suffixed names no longer collide.
///
/// Names still repeated inside one direction afterwards, including those the
/// renaming itself produced, are logged as warnings.
pub fn disambiguate(mapping: &mut StateMapping) {
    let clientbound = ids_by_name(&mapping.clientbound);

    let shared: Vec<(i32, String)> = mapping
        .serverbound
        .iter()
        .filter(|(_, name)| clientbound.contains_key(name.as_str()))
        .map(|(&id, name)| (id, name.clone()))
        .collect();

    for (serverbound_id, name) in shared {
        if let Some(clientbound_ids) = clientbound.get(&name) {
            for &id in clientbound_ids {
                mapping
                    .clientbound
                    .insert(id, format!("{name}{}", Direction::Clientbound));
            }
        }
        mapping
            .serverbound
            .insert(serverbound_id, format!("{name}{}", Direction::Serverbound));
        debug!("Renamed {name} packets used in both directions");
    }

    for (direction, name, ids) in duplicate_names(mapping) {
        let ids: Vec<String> = ids.iter().map(|id| format!("{id:#04x}")).collect();
        warn!("{direction} name {name} is shared by packet ids {}", ids.join(", "));
    }
}

/// Lists the names given to more than one packet ID within a single direction,
/// with the IDs carrying each of them.
pub fn duplicate_names(mapping: &StateMapping) -> Vec<(Direction, String, Vec<i32>)> {
    Direction::ALL
        .into_iter()
        .flat_map(|direction| {
            ids_by_name(mapping.table(direction))
                .into_iter()
                .filter(|(_, ids)| ids.len() > 1)
                .map(move |(name, ids)| (direction, name, ids))
        })
        .collect()
}

fn ids_by_name(table: &DirectionTable) -> BTreeMap<String, Vec<i32>> {
    let mut index: BTreeMap<String, Vec<i32>> = BTreeMap::new();
    for (&id, name) in table {
        index.entry(name.clone()).or_default().push(id);
    }
    index
}

#[cfg(test)]
mod test {
    use super::*;

    use maplit::btreemap;

    fn mapping(clientbound: DirectionTable, serverbound: DirectionTable) -> StateMapping {
        StateMapping {
            clientbound,
            serverbound,
        }
    }

    #[test]
    fn shared_name_is_suffixed() {
        let mut state = mapping(
            btreemap! { 5 => "KeepAlive".to_string() },
            btreemap! { 7 => "KeepAlive".to_string() },
        );
        disambiguate(&mut state);
        assert_eq!(
            state.clientbound,
            btreemap! { 5 => "KeepAliveClientbound".to_string() }
        );
        assert_eq!(
            state.serverbound,
            btreemap! { 7 => "KeepAliveServerbound".to_string() }
        );
    }

    #[test]
    fn only_collisions_are_touched() {
        let mut state = mapping(
            btreemap! {
                0x00 => "SpawnEntity".to_string(),
                0x0f => "Chat".to_string(),
                0x21 => "KeepAlive".to_string(),
            },
            btreemap! {
                0x00 => "TeleportConfirm".to_string(),
                0x03 => "Chat".to_string(),
                0x0f => "KeepAlive".to_string(),
            },
        );
        disambiguate(&mut state);
        assert_eq!(
            state,
            mapping(
                btreemap! {
                    0x00 => "SpawnEntity".to_string(),
                    0x0f => "ChatClientbound".to_string(),
                    0x21 => "KeepAliveClientbound".to_string(),
                },
                btreemap! {
                    0x00 => "TeleportConfirm".to_string(),
                    0x03 => "ChatServerbound".to_string(),
                    0x0f => "KeepAliveServerbound".to_string(),
                },
            )
        );
    }

    #[test]
    fn no_shared_names_is_a_no_op() {
        let original = mapping(
            btreemap! { 0 => "SpawnEntity".to_string(), 1 => "Login".to_string() },
            btreemap! { 0 => "Chat".to_string() },
        );
        let mut state = original.clone();
        disambiguate(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn second_run_changes_nothing() {
        let mut state = mapping(
            btreemap! { 0 => "Ping".to_string(), 1 => "ServerInfo".to_string() },
            btreemap! { 0 => "PingStart".to_string(), 1 => "Ping".to_string() },
        );
        disambiguate(&mut state);
        let once = state.clone();
        disambiguate(&mut state);
        assert_eq!(state, once);
        assert_eq!(state.clientbound[&0], "PingClientbound");
        assert_eq!(state.serverbound[&1], "PingServerbound");
    }

    #[test]
    fn ids_are_preserved() {
        let mut state = mapping(
            btreemap! { 3 => "A".to_string(), 9 => "B".to_string() },
            btreemap! { 3 => "B".to_string(), 4 => "C".to_string() },
        );
        disambiguate(&mut state);
        assert_eq!(state.clientbound.keys().copied().collect::<Vec<_>>(), vec![3, 9]);
        assert_eq!(state.serverbound.keys().copied().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn repeated_names_are_all_suffixed() {
        let mut state = mapping(
            btreemap! { 1 => "Ping".to_string(), 2 => "Ping".to_string() },
            btreemap! { 7 => "Ping".to_string() },
        );
        disambiguate(&mut state);
        assert_eq!(
            state.clientbound,
            btreemap! {
                1 => "PingClientbound".to_string(),
                2 => "PingClientbound".to_string(),
            }
        );
        assert_eq!(
            state.serverbound,
            btreemap! { 7 => "PingServerbound".to_string() }
        );
    }

    #[test]
    fn renaming_can_create_duplicates() {
        let mut state = mapping(
            btreemap! { 0 => "Ping".to_string(), 1 => "PingClientbound".to_string() },
            btreemap! { 0 => "Ping".to_string() },
        );
        assert!(duplicate_names(&state).is_empty());
        disambiguate(&mut state);
        assert_eq!(
            duplicate_names(&state),
            vec![(Direction::Clientbound, "PingClientbound".to_string(), vec![0, 1])]
        );
    }

    #[test]
    fn duplicates_within_a_direction() {
        let state = mapping(
            btreemap! { 2 => "Chat".to_string() },
            btreemap! { 4 => "Move".to_string(), 6 => "Move".to_string(), 8 => "Look".to_string() },
        );
        assert_eq!(
            duplicate_names(&state),
            vec![(Direction::Serverbound, "Move".to_string(), vec![4, 6])]
        );
    }

    #[test]
    fn empty_mapping() {
        let mut state = StateMapping::default();
        disambiguate(&mut state);
        assert!(state.is_empty());
    }
}
