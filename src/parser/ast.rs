// Syntax tree definitions for the predictive parser

use super::lexer::Token;
use std::fmt;

/// Index of a node in its tree's arena
pub type NodeId = usize;

/// Grammar production that created a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Factor,
    ExprPrime, // additive operator
    TermPrime, // multiplicative operator
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Factor => "factor",
            NodeKind::ExprPrime => "expr_prime",
            NodeKind::TermPrime => "term_prime",
        };
        f.write_str(label)
    }
}

/// A node of the binary syntax tree.
///
/// Children are owned by the tree's arena and referenced by [`NodeId`];
/// `parent` is a plain back-index and never keeps anything alive.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub token: Option<Token>,
    pub left_child: Option<NodeId>,
    pub right_child: Option<NodeId>,
    pub parent: Option<NodeId>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, token: Option<Token>) -> Self {
        SyntaxNode {
            kind,
            token,
            left_child: None,
            right_child: None,
            parent: None,
        }
    }

    /// A node without a token stands for an epsilon production.
    pub fn is_epsilon(&self) -> bool {
        self.token.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.left_child.is_none() && self.right_child.is_none()
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(f, "{}", token),
            None => Ok(()),
        }
    }
}

/// A completed syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    root: NodeId,
}

impl SyntaxTree {
    pub(crate) fn new(nodes: Vec<SyntaxNode>, root: NodeId) -> Self {
        SyntaxTree { nodes, root }
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.nodes[self.root]
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.node(id)?.parent.and_then(|p| self.node(p))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.depth_from(self.root)
    }

    fn depth_from(&self, id: NodeId) -> usize {
        let node = &self.nodes[id];
        let left = node.left_child.map_or(0, |c| self.depth_from(c));
        let right = node.right_child.map_or(0, |c| self.depth_from(c));
        1 + left.max(right)
    }

    /// Node ids in visit order: node, then right subtree, then left subtree.
    ///
    /// Right comes first because assembly stores the earlier operand in
    /// `right_child`.
    pub fn pre_order_ids(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        self.visit(self.root, &mut order);
        order
    }

    fn visit(&self, id: NodeId, order: &mut Vec<NodeId>) {
        order.push(id);
        let node = &self.nodes[id];
        if let Some(right) = node.right_child {
            self.visit(right, order);
        }
        if let Some(left) = node.left_child {
            self.visit(left, order);
        }
    }

    pub fn pre_order(&self) -> Vec<&SyntaxNode> {
        self.pre_order_ids()
            .into_iter()
            .map(|id| &self.nodes[id])
            .collect()
    }

    /// Concatenate the token text of every node in traversal order.
    pub fn print_tree(&self) -> String {
        self.pre_order().iter().map(|node| node.to_string()).collect()
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_tree())
    }
}
