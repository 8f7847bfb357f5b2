// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (edge) definitions for the graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    /// Create a new random connection ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// What a connection carries.
///
/// Derived from its endpoint pins: if either endpoint is an execution pin the
/// connection is an execution connection, otherwise a data connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Control transfer
    Execution,
    /// Value flow
    Data,
}

/// A directed edge from one node's output pin to another node's input pin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection ID
    pub id: ConnectionId,
    /// Source node ID
    pub from_node: NodeId,
    /// Source pin ID
    pub from_pin: String,
    /// Target node ID
    pub to_node: NodeId,
    /// Target pin ID
    pub to_pin: String,
    /// What this connection carries
    pub kind: ConnectionKind,
    /// Value type tag for data connections
    pub data_type: Option<String>,
}

impl Connection {
    /// Create a new connection
    pub fn new(
        from_node: NodeId,
        from_pin: impl Into<String>,
        to_node: NodeId,
        to_pin: impl Into<String>,
        kind: ConnectionKind,
        data_type: Option<String>,
    ) -> Self {
        Self {
            id: ConnectionId::new(),
            from_node,
            from_pin: from_pin.into(),
            to_node,
            to_pin: to_pin.into(),
            kind,
            data_type,
        }
    }

    /// Check if this connection involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.from_node == node_id || self.to_node == node_id
    }
}
