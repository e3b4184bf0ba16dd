// Mon Oct 19 2026 - Alex

use crate::document::tree::PropertyTree;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanScope {
    #[default]
    ActiveComposition,
    AllCompositions,
}

impl ScanScope {
    pub fn label(&self) -> &'static str {
        match self {
            ScanScope::ActiveComposition => "active composition only",
            ScanScope::AllCompositions => "all compositions",
        }
    }
}

impl fmt::Display for ScanScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub index: usize,
    pub three_d: bool,
    pub properties: PropertyTree,
}

impl Layer {
    pub fn new(name: &str, index: usize) -> Self {
        Self {
            name: name.to_string(),
            index,
            three_d: false,
            properties: PropertyTree::new(name),
        }
    }

    pub fn with_three_d(mut self, three_d: bool) -> Self {
        self.three_d = three_d;
        self
    }

    pub fn with_properties(mut self, properties: PropertyTree) -> Self {
        self.properties = properties;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Composition {
    pub name: String,
    pub duration: f64,
    pub layers: Vec<Layer>,
}

impl Composition {
    pub fn new(name: &str, duration: f64) -> Self {
        Self {
            name: name.to_string(),
            duration: duration.max(0.0),
            layers: Vec::new(),
        }
    }

    /// Appends a layer, assigning it the next 1-based index.
    pub fn push_layer(&mut self, mut layer: Layer) -> usize {
        layer.index = self.layers.len() + 1;
        self.layers.push(layer);
        self.layers.len()
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        index.checked_sub(1).and_then(|i| self.layers.get(i))
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name.as_str())
    }

    pub fn has_layer_named(&self, name: &str) -> bool {
        self.layer_names().any(|n| n == name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Project {
    pub host_version: String,
    pub active: Option<String>,
    pub compositions: Vec<Composition>,
}

impl Project {
    pub fn new(host_version: &str) -> Self {
        Self {
            host_version: host_version.to_string(),
            active: None,
            compositions: Vec::new(),
        }
    }

    pub fn with_active(mut self, name: &str) -> Self {
        self.active = Some(name.to_string());
        self
    }

    pub fn add_composition(&mut self, composition: Composition) {
        self.compositions.push(composition);
    }

    pub fn composition(&self, name: &str) -> Option<&Composition> {
        self.compositions.iter().find(|c| c.name == name)
    }

    pub fn active_composition(&self) -> Option<&Composition> {
        self.active.as_deref().and_then(|name| self.composition(name))
    }

    pub fn compositions_in_scope(&self, scope: ScanScope) -> Vec<&Composition> {
        match scope {
            ScanScope::AllCompositions => self.compositions.iter().collect(),
            ScanScope::ActiveComposition => self.active_composition().into_iter().collect(),
        }
    }
}
