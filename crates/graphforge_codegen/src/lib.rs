// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rust source generation from GraphForge node graphs.
//!
//! An export walks the whole graph from scratch:
//! 1. [`schedule::order`] linearizes the nodes along their dependency edges.
//! 2. [`emit::generate`] turns each node into source lines, threading variable
//!    bindings through a lexical scope chain and tracking nested block depth.
//!
//! The emitter never fails: missing configuration falls back to documented
//! defaults and unrecognized nodes are skipped, so the worst outcome of a
//! malformed graph is malformed text.

pub mod emit;
pub mod schedule;
pub mod scope;

pub use emit::generate;
