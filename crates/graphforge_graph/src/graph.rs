// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and connections.

use crate::catalog;
use crate::connection::{Connection, ConnectionId, ConnectionKind};
use crate::cycle::would_create_cycle;
use crate::node::{Node, NodeConfig, NodeId, NodeKind, NodeUpdate};
use crate::pin::PinKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Graph name
    pub name: String,
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Connections between nodes
    connections: IndexMap<ConnectionId, Connection>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
            connections: IndexMap::new(),
        }
    }

    /// Add a node with an empty config
    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        self.add_node_with_config(kind, NodeConfig::new())
    }

    /// Add a node with an initial config.
    ///
    /// The node gets its catalog pin list and a sequential display name
    /// (`"<template name> <n>"`).
    pub fn add_node_with_config(&mut self, kind: NodeKind, config: NodeConfig) -> NodeId {
        let name = format!("{} {}", catalog::template(kind).name, self.nodes.len() + 1);
        let node = Node::new(kind, name, config);
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Replace node fields wholesale. Unknown ids are a silent no-op so the
    /// editor stays resilient to stale selection state.
    pub fn update_node(&mut self, node_id: NodeId, update: NodeUpdate) {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return;
        };
        if let Some(name) = update.name {
            node.name = name;
        }
        if let Some(position) = update.position {
            node.position = position;
        }
        if let Some(config) = update.config {
            node.config = config;
        }
    }

    /// Remove a node and every connection touching it
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.connections.retain(|_, c| !c.involves_node(node_id));
        self.nodes.swap_remove(&node_id)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a connection between pins.
    ///
    /// Both endpoints must exist, and the edge must not close a dependency
    /// cycle; on rejection the graph is left untouched. The connection kind is
    /// derived from the endpoint pins (execution wins over data), and data
    /// connections inherit the source pin's value type tag.
    pub fn add_connection(
        &mut self,
        from_node: NodeId,
        from_pin: &str,
        to_node: NodeId,
        to_pin: &str,
    ) -> Result<ConnectionId, ConnectionError> {
        let (kind, data_type) = {
            let source = self
                .nodes
                .get(&from_node)
                .ok_or(ConnectionError::NodeNotFound(from_node))?;
            let target = self
                .nodes
                .get(&to_node)
                .ok_or(ConnectionError::NodeNotFound(to_node))?;

            let source_pin = source.pin(from_pin).ok_or_else(|| ConnectionError::PinNotFound {
                node: from_node,
                pin: from_pin.to_string(),
            })?;
            let target_pin = target.pin(to_pin).ok_or_else(|| ConnectionError::PinNotFound {
                node: to_node,
                pin: to_pin.to_string(),
            })?;

            let kind = if source_pin.kind == PinKind::Execution || target_pin.kind == PinKind::Execution
            {
                ConnectionKind::Execution
            } else {
                ConnectionKind::Data
            };
            let data_type = match kind {
                ConnectionKind::Data => source_pin.data_type.clone(),
                ConnectionKind::Execution => None,
            };
            (kind, data_type)
        };

        if would_create_cycle(from_node, to_node, self.connections.values()) {
            tracing::debug!(from = ?from_node, to = ?to_node, "rejected edge: would create a cycle");
            return Err(ConnectionError::WouldCycle);
        }

        let connection = Connection::new(from_node, from_pin, to_node, to_pin, kind, data_type);
        let id = connection.id;
        self.connections.insert(id, connection);
        Ok(id)
    }

    /// Remove a connection. Unknown ids are a silent no-op.
    pub fn remove_connection(&mut self, connection_id: ConnectionId) -> Option<Connection> {
        self.connections.swap_remove(&connection_id)
    }

    /// Get a connection by ID
    pub fn connection(&self, connection_id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&connection_id)
    }

    /// Get all connections, in insertion order
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Get connections involving a node
    pub fn connections_for_node(&self, node_id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.involves_node(node_id))
    }

    /// Get the number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// Error when creating a connection
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConnectionError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Pin not found on the node
    #[error("Pin not found on node {node:?}: {pin}")]
    PinNotFound {
        /// Node the pin was looked up on
        node: NodeId,
        /// Requested pin ID
        pin: String,
    },

    /// Edge would close a dependency cycle
    #[error("Connection would create a cycle")]
    WouldCycle,
}
