// Mon Oct 19 2026 - Alex

use crate::document::error::{DocumentError, DocumentResult};
use crate::document::model::{Composition, Layer, Project};
use crate::document::tree::{GroupKind, Leaf, NodeId, PropertyTree};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    host_version: String,
    #[serde(default)]
    active: Option<String>,
    #[serde(default)]
    compositions: Vec<CompositionFile>,
}

#[derive(Debug, Deserialize)]
struct CompositionFile {
    name: String,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    layers: Vec<LayerFile>,
}

#[derive(Debug, Deserialize)]
struct LayerFile {
    name: String,
    #[serde(default)]
    three_d: bool,
    #[serde(default)]
    properties: Vec<NodeFile>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NodeFile {
    Group {
        group: String,
        #[serde(default)]
        kind: GroupKind,
        #[serde(default)]
        children: Vec<NodeFile>,
    },
    Property {
        property: String,
        #[serde(flatten)]
        leaf: Leaf,
    },
}

pub fn load_project<P: AsRef<Path>>(path: P) -> DocumentResult<Project> {
    let text = fs::read_to_string(path.as_ref())?;
    let project = parse_project(&text)?;
    log::debug!(
        "Loaded {} composition(s) from {}",
        project.compositions.len(),
        path.as_ref().display()
    );
    Ok(project)
}

pub fn parse_project(json: &str) -> DocumentResult<Project> {
    let file: ProjectFile = serde_json::from_str(json)?;

    let mut project = Project::new(&file.host_version);
    project.active = file.active;

    for comp_file in file.compositions {
        if !comp_file.duration.is_finite() || comp_file.duration < 0.0 {
            return Err(DocumentError::InvalidComposition {
                name: comp_file.name,
                reason: format!("duration must be a non-negative number, got {}", comp_file.duration),
            });
        }

        let mut composition = Composition::new(&comp_file.name, comp_file.duration);
        for layer_file in comp_file.layers {
            let mut tree = PropertyTree::new(&layer_file.name);
            let root = tree.root();
            for node in layer_file.properties {
                attach(&mut tree, root, node);
            }
            composition.push_layer(
                Layer::new(&layer_file.name, 0)
                    .with_three_d(layer_file.three_d)
                    .with_properties(tree),
            );
        }
        project.add_composition(composition);
    }

    Ok(project)
}

fn attach(tree: &mut PropertyTree, parent: NodeId, node: NodeFile) {
    match node {
        NodeFile::Group { group, kind, children } => {
            if let Some(id) = tree.add_group(parent, &group, kind) {
                for child in children {
                    attach(tree, id, child);
                }
            }
        }
        NodeFile::Property { property, leaf } => {
            tree.add_leaf(parent, &property, leaf);
        }
    }
}
