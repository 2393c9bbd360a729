//! Search tree storage.
//!
//! Nodes live in a single vector and point at their parent by index, so path
//! reconstruction is a walk up integer links and dropping the arena frees the
//! whole tree at once.
use crate::engine::{Move, PuzzleState};

pub type NodeId = usize;

#[derive(Clone, Debug)]
pub struct Node {
    pub state: PuzzleState,
    pub parent: Option<NodeId>,
    /// Move that produced this node from its parent; `None` for the root.
    pub action: Option<Move>,
    /// Moves from the root, which is also the path cost.
    pub depth: u32,
}

#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    pub fn push_root(&mut self, state: PuzzleState) -> NodeId {
        self.nodes.push(Node {
            state,
            parent: None,
            action: None,
            depth: 0,
        });
        self.nodes.len() - 1
    }

    /// # Panics
    /// Panics if `parent` was not allocated by this arena.
    pub fn push_child(&mut self, parent: NodeId, state: PuzzleState, action: Move) -> NodeId {
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            depth,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// States from the root to `id` inclusive, and the moves between them.
    pub fn path_to(&self, id: NodeId) -> (Vec<PuzzleState>, Vec<Move>) {
        let mut states = Vec::new();
        let mut moves = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current];
            states.push(node.state.clone());
            if let Some(action) = node.action {
                moves.push(action);
            }
            cursor = node.parent;
        }
        states.reverse();
        moves.reverse();
        (states, moves)
    }
}
