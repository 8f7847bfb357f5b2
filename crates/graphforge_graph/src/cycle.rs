// SPDX-License-Identifier: MIT OR Apache-2.0
//! Cycle detection for proposed edges.

use crate::connection::Connection;
use crate::node::NodeId;
use std::collections::HashSet;

/// Check whether adding an edge `from -> to` would close a dependency cycle.
///
/// Connections are treated as edges of a "flows-into" relation; the check
/// walks the chain of predecessors of `from` and reports a cycle as soon as
/// `to` is reached. A self-loop (`from == to`) is always a cycle. The visited
/// set is fresh per call, so independent queries never poison each other.
///
/// Runs in `O(V + E)` per proposed edge, which is plenty for interactive
/// editing on small graphs.
pub fn would_create_cycle<'a, I>(from: NodeId, to: NodeId, connections: I) -> bool
where
    I: IntoIterator<Item = &'a Connection> + Clone,
{
    let mut visited = HashSet::new();
    reaches_backward(from, to, connections, &mut visited)
}

/// Walk predecessors of `current`, looking for `target`.
fn reaches_backward<'a, I>(
    current: NodeId,
    target: NodeId,
    connections: I,
    visited: &mut HashSet<NodeId>,
) -> bool
where
    I: IntoIterator<Item = &'a Connection> + Clone,
{
    if current == target {
        return true;
    }
    if !visited.insert(current) {
        return false;
    }

    connections
        .clone()
        .into_iter()
        .filter(|c| c.to_node == current)
        .any(|c| reaches_backward(c.from_node, target, connections.clone(), visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionKind;

    fn edge(from: NodeId, to: NodeId) -> Connection {
        Connection::new(from, "exec_out", to, "exec_in", ConnectionKind::Execution, None)
    }

    #[test]
    fn test_self_loop_is_always_a_cycle() {
        let a = NodeId::new();
        let connections: Vec<Connection> = Vec::new();
        assert!(would_create_cycle(a, a, connections.iter()));
    }

    #[test]
    fn test_direct_back_edge() {
        let a = NodeId::new();
        let b = NodeId::new();
        let connections = vec![edge(a, b)];
        // b already depends on a; a -> b -> a would cycle
        assert!(would_create_cycle(b, a, connections.iter()));
        // the forward direction is fine (duplicate edges are not cycles)
        assert!(!would_create_cycle(a, b, connections.iter()));
    }

    #[test]
    fn test_transitive_back_edge() {
        let a = NodeId::new();
        let b = NodeId::new();
        let c = NodeId::new();
        let connections = vec![edge(a, b), edge(b, c)];
        assert!(would_create_cycle(c, a, connections.iter()));
        assert!(would_create_cycle(c, b, connections.iter()));
        assert!(!would_create_cycle(a, c, connections.iter()));
    }

    #[test]
    fn test_unrelated_branches_do_not_poison_each_other() {
        // Diamond: a -> b, a -> c, b -> d, c -> d. No proposal within the
        // diamond except a back edge should report a cycle.
        let a = NodeId::new();
        let b = NodeId::new();
        let c = NodeId::new();
        let d = NodeId::new();
        let connections = vec![edge(a, b), edge(a, c), edge(b, d), edge(c, d)];
        assert!(!would_create_cycle(b, c, connections.iter()));
        assert!(!would_create_cycle(c, b, connections.iter()));
        assert!(would_create_cycle(d, a, connections.iter()));
    }

    #[test]
    fn test_fresh_visited_set_per_query() {
        let a = NodeId::new();
        let b = NodeId::new();
        let connections = vec![edge(a, b)];
        // Repeat the same queries; results must not drift across calls.
        for _ in 0..3 {
            assert!(would_create_cycle(b, a, connections.iter()));
            assert!(!would_create_cycle(a, b, connections.iter()));
        }
    }
}
