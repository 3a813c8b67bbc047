use super::data::Data;
use super::node::Node;
use crate::Probability;
use crate::Utility;
use crate::cards::card::Card;
use crate::game::game::Game;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// One search tree per decision. Nodes own their positions, edges carry
/// the producing action; parent/child structure lives in the graph, so
/// backpropagation is a walk along Incoming edges up to the root.
pub struct Tree {
    graph: DiGraph<Data, Card>,
    root: NodeIndex,
}

impl Tree {
    pub fn new(game: Game) -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(Data::from(game));
        Self { graph, root }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }
    pub fn at(&self, index: NodeIndex) -> Node {
        Node::from((index, &self.graph))
    }
    pub fn data(&self, index: NodeIndex) -> &Data {
        &self.graph[index]
    }
    pub fn size(&self) -> usize {
        self.graph.node_count()
    }

    /// descend while fully expanded and not childless, maximizing UCB1
    pub fn descend(&self, from: NodeIndex) -> NodeIndex {
        let mut head = from;
        while self.graph[head].untried() == 0 {
            match self.select(head) {
                Some(child) => head = child,
                None => break,
            }
        }
        head
    }

    /// best child under UCB1, ties broken by first encounter. only
    /// meaningful once `head` is fully expanded.
    fn select(&self, head: NodeIndex) -> Option<NodeIndex> {
        let above = self.graph[head].visits();
        let mut best: Option<(NodeIndex, Utility)> = None;
        for child in self.graph.neighbors_directed(head, Outgoing) {
            let score = self.graph[child].ucb(above);
            match best {
                Some((_, top)) if score <= top => (),
                _ => best = Some((child, score)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// pop one untried action, apply it to a copy of the position, and
    /// attach the resulting child
    pub fn expand(&mut self, head: NodeIndex) -> NodeIndex {
        let action = self.graph[head].pop().expect("untried action available");
        let mut game = *self.graph[head].game();
        game.apply(game.ticker(), action);
        let child = self.graph.add_node(Data::from(game));
        self.graph.add_edge(head, child, action);
        child
    }

    /// credit one result, in [0, 1] from the searching team's point of
    /// view, to every node from `leaf` up to and including the root
    pub fn backpropagate(&mut self, leaf: NodeIndex, result: Utility) {
        let mut head = Some(leaf);
        while let Some(index) = head {
            self.graph[index].credit(result);
            head = self.graph.neighbors_directed(index, Incoming).next();
        }
    }

    /// final decision: the root child with the highest visit count (the
    /// robust signal under UCB1), ties broken by encounter order, with
    /// its empirical win rate
    pub fn best(&self) -> Option<(Card, Probability)> {
        let root = self.at(self.root);
        let mut best: Option<(Node, u32)> = None;
        for child in root.children() {
            let visits = child.data().visits();
            match best {
                Some((_, top)) if visits <= top => (),
                _ => best = Some((child, visits)),
            }
        }
        best.map(|(child, _)| {
            (
                child.incoming().expect("child reached by an action"),
                child.data().mean(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N;
    use crate::cards::hand::Hand;

    fn rigged() -> Game {
        let hands = [
            Hand::from("4c 5c 6c"),
            Hand::from("4h 5h 6h"),
            Hand::from("4s 5s 6s"),
            Hand::from("4d 5d 6d"),
        ];
        Game::rig(hands, Card::from("Jh"), 0)
    }

    #[test]
    fn expansion_is_exhaustive() {
        let mut tree = Tree::new(rigged());
        let root = tree.root();
        let mut actions = Vec::new();
        while tree.data(root).untried() > 0 {
            let child = tree.expand(root);
            actions.push(tree.at(child).incoming().expect("edge action"));
        }
        actions.sort();
        assert_eq!(actions, Vec::from(Hand::from("4c 5c 6c")));
        assert_eq!(tree.at(root).children().len(), 3);
    }

    #[test]
    fn backpropagation_reaches_root() {
        let mut tree = Tree::new(rigged());
        let root = tree.root();
        let child = tree.expand(root);
        let grand = tree.expand(child);
        tree.backpropagate(grand, 1.);
        tree.backpropagate(grand, 0.);
        assert_eq!(tree.data(root).visits(), 2);
        assert_eq!(tree.data(child).visits(), 2);
        assert_eq!(tree.data(grand).visits(), 2);
        assert_eq!(tree.data(root).wins(), 1.);
    }

    #[test]
    fn ucb_ratio_matches_credits() {
        let mut tree = Tree::new(rigged());
        let root = tree.root();
        let child = tree.expand(root);
        for _ in 0..3 {
            tree.backpropagate(child, 1.);
        }
        tree.backpropagate(child, 0.);
        assert_eq!(tree.data(child).mean(), 0.75);
    }

    #[test]
    fn decision_prefers_visits_over_win_rate() {
        let mut tree = Tree::new(rigged());
        let root = tree.root();
        let first = tree.expand(root);
        let second = tree.expand(root);
        let third = tree.expand(root);
        // `second` is visited most despite a worse win rate
        tree.backpropagate(first, 1.);
        for _ in 0..5 {
            tree.backpropagate(second, 0.5);
        }
        tree.backpropagate(third, 0.);
        let first = tree.at(first).incoming().expect("action");
        let second = tree.at(second).incoming().expect("action");
        let (card, estimate) = tree.best().expect("expanded root");
        assert_ne!(card, first);
        assert_eq!(card, second);
        assert_eq!(estimate, 0.5);
    }

    #[test]
    fn descent_stops_at_unexpanded_nodes() {
        let mut tree = Tree::new(rigged());
        let root = tree.root();
        assert_eq!(tree.descend(root), root);
        let child = tree.expand(root);
        tree.backpropagate(child, 1.);
        assert_eq!(tree.descend(root), root); // two actions still untried
        let _ = tree.expand(root);
        let _ = tree.expand(root);
        assert_ne!(tree.descend(root), root); // fully expanded, descends
        assert_eq!(tree.at(root).children().len(), N - 1);
    }
}
