// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph model for GraphForge.
//!
//! This crate provides the data model behind the visual code designer:
//! - Typed nodes from a closed catalog (control flow, variables, functions, operators)
//! - Typed execution/data pins supplied per node kind
//! - Directed connections with cycle rejection at edge-creation time
//!
//! Code generation from a graph lives in `graphforge_codegen`; this crate only
//! owns the structure and its invariants.

pub mod catalog;
pub mod connection;
pub mod cycle;
pub mod graph;
pub mod node;
pub mod pin;

pub use connection::{Connection, ConnectionId, ConnectionKind};
pub use cycle::would_create_cycle;
pub use graph::{ConnectionError, Graph};
pub use node::{Node, NodeCategory, NodeConfig, NodeId, NodeKind, NodeUpdate};
pub use pin::{Pin, PinDirection, PinKind};
