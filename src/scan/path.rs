// Mon Oct 19 2026 - Alex

use crate::document::{NodeId, PropertyTree};
use serde::Serialize;
use std::fmt;

pub const PATH_SEPARATOR: &str = " > ";

/// Names from the layer root (exclusive) down to a property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PropertyPath(Vec<String>);

impl PropertyPath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(PATH_SEPARATOR))
    }
}

pub struct PathTracker<'a> {
    tree: &'a PropertyTree,
}

impl<'a> PathTracker<'a> {
    pub fn new(tree: &'a PropertyTree) -> Self {
        Self { tree }
    }

    pub fn path(&self, node: NodeId) -> PropertyPath {
        let mut names = Vec::new();
        let mut current = self.tree.get(node);

        while let Some(n) = current {
            let Some(parent) = n.parent() else { break };
            names.push(n.name.clone());
            current = self.tree.get(parent);
        }

        names.reverse();
        PropertyPath(names)
    }
}
