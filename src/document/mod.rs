// Mon Oct 19 2026 - Alex

pub mod error;
pub mod loader;
pub mod model;
pub mod runtime;
pub mod tree;

pub use error::{DocumentError, DocumentResult};
pub use loader::{load_project, parse_project};
pub use model::{Composition, Layer, Project, ScanScope};
pub use runtime::{EvaluationFault, ExpressionRuntime, LeafKey, LeafRef, SimulatedRuntime};
pub use tree::{Group, GroupKind, Leaf, NodeId, NodeKind, PropertyNode, PropertyTree, ValueType};
