// SPDX-License-Identifier: MIT OR Apache-2.0
//! Emission scheduling: linearizes a graph along its dependency edges.

use graphforge_graph::{Graph, Node, NodeId};
use std::collections::HashSet;

/// Order nodes for emission.
///
/// Start nodes are the sinks of the "flows-into" relation (nodes with no
/// outgoing connection; a node with no connections at all counts). Each start
/// node is expanded depth-first, visiting every predecessor before the node
/// itself, with one visited set spanning the whole call. The resulting
/// post-order puts every producer ahead of its consumers.
///
/// Determinism comes from insertion-ordered node and connection storage:
/// scheduling the same graph twice yields the same sequence.
///
/// Cycle-freedom is guaranteed by the graph's edge-creation path; this walk
/// does not defend against cycles.
pub fn order(graph: &Graph) -> Vec<&Node> {
    let mut visited = HashSet::new();
    let mut sorted = Vec::new();

    let start_ids: Vec<NodeId> = graph
        .nodes()
        .filter(|node| !graph.connections().any(|c| c.from_node == node.id))
        .map(|node| node.id)
        .collect();

    for id in start_ids {
        visit(graph, id, &mut visited, &mut sorted);
    }

    sorted
}

fn visit<'a>(
    graph: &'a Graph,
    node_id: NodeId,
    visited: &mut HashSet<NodeId>,
    sorted: &mut Vec<&'a Node>,
) {
    if !visited.insert(node_id) {
        return;
    }

    let predecessors: Vec<NodeId> = graph
        .connections()
        .filter(|c| c.to_node == node_id)
        .map(|c| c.from_node)
        .collect();
    for predecessor in predecessors {
        visit(graph, predecessor, visited, sorted);
    }

    if let Some(node) = graph.node(node_id) {
        sorted.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphforge_graph::NodeKind;

    #[test]
    fn test_producers_come_before_consumers() {
        let mut graph = Graph::new("test");
        let a = graph.add_node(NodeKind::Arithmetic);
        let b = graph.add_node(NodeKind::Arithmetic);
        let c = graph.add_node(NodeKind::Arithmetic);
        graph.add_connection(a, "result", b, "left").unwrap();
        graph.add_connection(b, "result", c, "left").unwrap();

        let ids: Vec<NodeId> = order(&graph).iter().map(|n| n.id).collect();
        let pos = |id| ids.iter().position(|&x| x == id).unwrap();
        assert!(pos(a) < pos(b));
        assert!(pos(b) < pos(c));
    }

    #[test]
    fn test_disconnected_nodes_are_included() {
        let mut graph = Graph::new("test");
        let a = graph.add_node(NodeKind::LetDeclaration);
        let b = graph.add_node(NodeKind::Loop);

        let ids: Vec<NodeId> = order(&graph).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_each_node_appears_exactly_once() {
        // Diamond: shared predecessor must not be emitted twice.
        let mut graph = Graph::new("test");
        let a = graph.add_node(NodeKind::Arithmetic);
        let b = graph.add_node(NodeKind::Arithmetic);
        let c = graph.add_node(NodeKind::Arithmetic);
        let d = graph.add_node(NodeKind::Arithmetic);
        graph.add_connection(a, "result", b, "left").unwrap();
        graph.add_connection(a, "result", c, "left").unwrap();
        graph.add_connection(b, "result", d, "left").unwrap();
        graph.add_connection(c, "result", d, "right").unwrap();

        let ids: Vec<NodeId> = order(&graph).iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 4);
        let pos = |id| ids.iter().position(|&x| x == id).unwrap();
        assert!(pos(a) < pos(b));
        assert!(pos(a) < pos(c));
        assert!(pos(d) > pos(b));
        assert!(pos(d) > pos(c));
    }

    #[test]
    fn test_scheduling_is_deterministic() {
        let mut graph = Graph::new("test");
        let a = graph.add_node(NodeKind::Arithmetic);
        let b = graph.add_node(NodeKind::Comparison);
        let c = graph.add_node(NodeKind::LetDeclaration);
        graph.add_connection(a, "result", b, "left").unwrap();
        graph.add_connection(b, "result", c, "value").unwrap();

        let first: Vec<NodeId> = order(&graph).iter().map(|n| n.id).collect();
        let second: Vec<NodeId> = order(&graph).iter().map(|n| n.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_removed_node_no_longer_scheduled() {
        let mut graph = Graph::new("test");
        let a = graph.add_node(NodeKind::Arithmetic);
        let b = graph.add_node(NodeKind::Arithmetic);
        graph.add_connection(a, "result", b, "left").unwrap();

        graph.remove_node(a);

        let ids: Vec<NodeId> = order(&graph).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![b]);
    }
}
