// Mon Oct 19 2026 - Alex

use crate::document::model::{Composition, Layer};
use crate::document::tree::{Leaf, NodeId};
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Expression evaluation failed: {message}")]
pub struct EvaluationFault {
    pub message: String,
}

impl EvaluationFault {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

/// A leaf together with everything needed to locate it in the host document.
#[derive(Debug, Clone, Copy)]
pub struct LeafRef<'a> {
    pub composition: &'a Composition,
    pub layer: &'a Layer,
    pub node: NodeId,
    pub leaf: &'a Leaf,
}

impl<'a> LeafRef<'a> {
    pub fn key(&self) -> LeafKey {
        LeafKey {
            composition: self.composition.name.clone(),
            layer_index: self.layer.index,
            node: self.node,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeafKey {
    pub composition: String,
    pub layer_index: usize,
    pub node: NodeId,
}

/// Host-side expression evaluation. Error state is owned by the host and may
/// only be populated once a value has been requested.
pub trait ExpressionRuntime {
    fn value_at_time(&self, target: LeafRef<'_>, time: f64) -> Result<(), EvaluationFault>;

    fn expression_error(&self, target: LeafRef<'_>) -> Option<String>;
}

/// In-memory host driven by the `evaluation_fault` and `cached_error` fields
/// of each leaf.
#[derive(Debug, Default)]
pub struct SimulatedRuntime {
    evaluated: RwLock<HashMap<LeafKey, Option<String>>>,
    evaluations: RwLock<HashMap<LeafKey, usize>>,
}

impl SimulatedRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluation_count(&self, key: &LeafKey) -> usize {
        self.evaluations.read().get(key).copied().unwrap_or(0)
    }

    pub fn total_evaluations(&self) -> usize {
        self.evaluations.read().values().sum()
    }

    pub fn reset(&self) {
        self.evaluated.write().clear();
        self.evaluations.write().clear();
    }
}

impl ExpressionRuntime for SimulatedRuntime {
    fn value_at_time(&self, target: LeafRef<'_>, _time: f64) -> Result<(), EvaluationFault> {
        let key = target.key();
        *self.evaluations.write().entry(key.clone()).or_insert(0) += 1;

        let fault = target.leaf.evaluation_fault.clone();
        self.evaluated.write().insert(key, fault.clone());

        match fault {
            Some(message) => Err(EvaluationFault::new(&message)),
            None => Ok(()),
        }
    }

    fn expression_error(&self, target: LeafRef<'_>) -> Option<String> {
        match self.evaluated.read().get(&target.key()) {
            Some(result) => result.clone(),
            None => target.leaf.cached_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tree::PropertyTree;

    fn fixture(leaf: Leaf) -> (Composition, NodeId) {
        let mut comp = Composition::new("Main", 2.0);
        let mut tree = PropertyTree::new("Box");
        let node = tree.add_leaf(tree.root(), "Scale", leaf).unwrap();
        comp.push_layer(Layer::new("Box", 1).with_properties(tree));
        (comp, node)
    }

    fn target<'a>(comp: &'a Composition, node: NodeId) -> LeafRef<'a> {
        let layer = comp.layer(1).unwrap();
        LeafRef {
            composition: comp,
            layer,
            node,
            leaf: layer.properties.get(node).unwrap().as_leaf().unwrap(),
        }
    }

    #[test]
    fn test_error_is_lazy_until_evaluated() {
        let (comp, node) = fixture(Leaf::new("ADBE Scale").with_expression("[1]").with_fault("bad array"));
        let runtime = SimulatedRuntime::new();
        let t = target(&comp, node);

        assert_eq!(runtime.expression_error(t), None);
        assert_eq!(runtime.value_at_time(t, 1.0), Err(EvaluationFault::new("bad array")));
        assert_eq!(runtime.expression_error(t).as_deref(), Some("bad array"));
        assert_eq!(runtime.evaluation_count(&t.key()), 1);
    }

    #[test]
    fn test_evaluation_replaces_cached_error() {
        let (comp, node) = fixture(Leaf::new("ADBE Scale").with_expression("[1,1,1]").with_cached_error("stale"));
        let runtime = SimulatedRuntime::new();
        let t = target(&comp, node);

        assert_eq!(runtime.expression_error(t).as_deref(), Some("stale"));
        runtime.value_at_time(t, 0.5).unwrap();
        assert_eq!(runtime.expression_error(t), None);

        runtime.reset();
        assert_eq!(runtime.total_evaluations(), 0);
    }
}
