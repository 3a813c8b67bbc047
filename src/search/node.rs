use super::data::Data;
use crate::cards::card::Card;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// A Node is a thin wrapper around a NodeIndex and a &Graph: cheap to
/// Copy, useful for navigating parent/child relations without fighting
/// ownership of the underlying graph.
#[derive(Clone, Copy)]
pub struct Node<'tree> {
    index: NodeIndex,
    graph: &'tree DiGraph<Data, Card>,
}

impl<'tree> From<(NodeIndex, &'tree DiGraph<Data, Card>)> for Node<'tree> {
    fn from((index, graph): (NodeIndex, &'tree DiGraph<Data, Card>)) -> Self {
        Self { index, graph }
    }
}

impl<'tree> Node<'tree> {
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn data(&self) -> &'tree Data {
        self.graph
            .node_weight(self.index)
            .expect("valid node index")
    }
    pub fn spawn(&self, index: NodeIndex) -> Node<'tree> {
        Self::from((index, self.graph))
    }

    pub fn parent(&self) -> Option<Node<'tree>> {
        self.graph
            .neighbors_directed(self.index, Incoming)
            .next()
            .map(|index| self.spawn(index))
    }
    pub fn children(&self) -> Vec<Node<'tree>> {
        self.graph
            .neighbors_directed(self.index, Outgoing)
            .map(|index| self.spawn(index))
            .collect()
    }
    /// the action that produced this node from its parent
    pub fn incoming(&self) -> Option<Card> {
        self.parent()
            .and_then(|parent| self.graph.find_edge(parent.index, self.index))
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }
}
