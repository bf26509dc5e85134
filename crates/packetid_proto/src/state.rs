//! Connection states, directions, and the packet ID tables extracted for them.

use std::collections::BTreeMap;
use std::fmt;

/// Packet ID to canonical packet name, for one state and direction.
///
/// Ordered by ID so that iteration order is also emission order.
pub type DirectionTable = BTreeMap<i32, String>;

/// A phase of the connection during which a distinct set of packets is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConnectionState {
    Handshaking,
    Status,
    Login,
    Play,
}

impl ConnectionState {
    /// States that get constants generated for them, in output order.
    ///
    /// Handshaking is left out: nothing in it needs a named ID.
    pub const GENERATED: [ConnectionState; 3] = [
        ConnectionState::Login,
        ConnectionState::Status,
        ConnectionState::Play,
    ];

    /// Top-level key of this state in `protocol.json`.
    pub fn key(self) -> &'static str {
        match self {
            ConnectionState::Handshaking => "handshaking",
            ConnectionState::Status => "status",
            ConnectionState::Login => "login",
            ConnectionState::Play => "play",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Server to client.
    Clientbound,
    /// Client to server.
    Serverbound,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clientbound, Direction::Serverbound];

    /// Key of this direction under a state in `protocol.json`.
    pub fn key(self) -> &'static str {
        match self {
            Direction::Clientbound => "toClient",
            Direction::Serverbound => "toServer",
        }
    }

    /// Human-readable name, also used as the collision suffix.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Clientbound => "Clientbound",
            Direction::Serverbound => "Serverbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Both direction tables of a single connection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateMapping {
    pub clientbound: DirectionTable,
    pub serverbound: DirectionTable,
}

impl StateMapping {
    pub fn table(&self, direction: Direction) -> &DirectionTable {
        match direction {
            Direction::Clientbound => &self.clientbound,
            Direction::Serverbound => &self.serverbound,
        }
    }

    pub fn table_mut(&mut self, direction: Direction) -> &mut DirectionTable {
        match direction {
            Direction::Clientbound => &mut self.clientbound,
            Direction::Serverbound => &mut self.serverbound,
        }
    }

    /// Total number of packets across both directions.
    pub fn len(&self) -> usize {
        self.clientbound.len() + self.serverbound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clientbound.is_empty() && self.serverbound.is_empty()
    }
}

/// Packet IDs for every generated state of one protocol version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolIds {
    /// Minecraft version the IDs were extracted for, e.g. `1.17.1`.
    pub version: String,
    pub login: StateMapping,
    pub status: StateMapping,
    pub play: StateMapping,
}

impl ProtocolIds {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            login: StateMapping::default(),
            status: StateMapping::default(),
            play: StateMapping::default(),
        }
    }

    /// The mapping for `state`, or `None` for states that are never generated.
    pub fn state(&self, state: ConnectionState) -> Option<&StateMapping> {
        match state {
            ConnectionState::Handshaking => None,
            ConnectionState::Status => Some(&self.status),
            ConnectionState::Login => Some(&self.login),
            ConnectionState::Play => Some(&self.play),
        }
    }

    pub fn state_mut(&mut self, state: ConnectionState) -> Option<&mut StateMapping> {
        match state {
            ConnectionState::Handshaking => None,
            ConnectionState::Status => Some(&mut self.status),
            ConnectionState::Login => Some(&mut self.login),
            ConnectionState::Play => Some(&mut self.play),
        }
    }

    /// Generated states with their mappings, in output order.
    pub fn states(&self) -> impl Iterator<Item = (ConnectionState, &StateMapping)> + '_ {
        ConnectionState::GENERATED
            .into_iter()
            .filter_map(move |state| self.state(state).map(|mapping| (state, mapping)))
    }

    /// Total number of packets across all states and directions.
    pub fn len(&self) -> usize {
        self.states().map(|(_, mapping)| mapping.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
