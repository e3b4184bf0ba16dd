// Mon Oct 19 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    NoValue,
    #[default]
    OneD,
    TwoD,
    ThreeD,
    Color,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    #[default]
    Named,
    Indexed,
}

#[derive(Debug, Clone, Default)]
pub struct Group {
    pub kind: GroupKind,
    children: Vec<NodeId>,
}

impl Group {
    pub fn new(kind: GroupKind) -> Self {
        Self { kind, children: Vec::new() }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaf {
    pub match_name: String,
    #[serde(default)]
    pub expression: String,
    #[serde(default)]
    pub expression_enabled: bool,
    #[serde(default = "default_true")]
    pub can_set_expression: bool,
    #[serde(default)]
    pub value_type: ValueType,
    /// Message the host raises when this expression is evaluated. Only read
    /// by [`SimulatedRuntime`](crate::document::SimulatedRuntime).
    #[serde(default)]
    pub evaluation_fault: Option<String>,
    /// Error the host already holds from an earlier evaluation.
    #[serde(default)]
    pub cached_error: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Leaf {
    pub fn new(match_name: &str) -> Self {
        Self {
            match_name: match_name.to_string(),
            expression: String::new(),
            expression_enabled: false,
            can_set_expression: true,
            value_type: ValueType::default(),
            evaluation_fault: None,
            cached_error: None,
        }
    }

    pub fn with_expression(mut self, expression: &str) -> Self {
        self.expression = expression.to_string();
        self.expression_enabled = !expression.is_empty();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.expression_enabled = enabled;
        self
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn with_fault(mut self, fault: &str) -> Self {
        self.evaluation_fault = Some(fault.to_string());
        self
    }

    pub fn with_cached_error(mut self, error: &str) -> Self {
        self.cached_error = Some(error.to_string());
        self
    }

    pub fn without_expression_support(mut self) -> Self {
        self.can_set_expression = false;
        self
    }

    /// Non-empty text or the host's enabled flag both count as an active expression.
    pub fn has_active_expression(&self) -> bool {
        self.can_set_expression && (!self.expression.is_empty() || self.expression_enabled)
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Group(Group),
    Leaf(Leaf),
}

#[derive(Debug, Clone)]
pub struct PropertyNode {
    pub name: String,
    parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl PropertyNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match &self.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match &self.kind {
            NodeKind::Group(group) => Some(group),
            NodeKind::Leaf(_) => None,
        }
    }
}

/// Property tree of a single layer. Node 0 is the layer itself.
///
/// Nodes are only ever appended beneath an existing group, so every node
/// except the root has exactly one parent and the tree cannot contain a cycle.
#[derive(Debug, Clone)]
pub struct PropertyTree {
    nodes: Vec<PropertyNode>,
}

impl PropertyTree {
    pub fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![PropertyNode {
                name: root_name.to_string(),
                parent: None,
                kind: NodeKind::Group(Group::new(GroupKind::Named)),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&PropertyNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn add_group(&mut self, parent: NodeId, name: &str, kind: GroupKind) -> Option<NodeId> {
        self.push(parent, name, NodeKind::Group(Group::new(kind)))
    }

    pub fn add_leaf(&mut self, parent: NodeId, name: &str, leaf: Leaf) -> Option<NodeId> {
        self.push(parent, name, NodeKind::Leaf(leaf))
    }

    /// Returns `None` when `parent` is unknown or is a leaf.
    fn push(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        match self.nodes.get_mut(parent.0).map(|n| &mut n.kind) {
            Some(NodeKind::Group(group)) => group.children.push(id),
            _ => return None,
        }
        self.nodes.push(PropertyNode {
            name: name.to_string(),
            parent: Some(parent),
            kind,
        });
        Some(id)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id)
            .and_then(PropertyNode::as_group)
            .map(Group::children)
            .unwrap_or(&[])
    }
}
