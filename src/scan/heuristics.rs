// Mon Oct 19 2026 - Alex

use crate::document::{Layer, Leaf};

pub const SCALE_MATCH_NAME: &str = "ADBE Scale";

pub const SCALE_DIMENSION_NOTE: &str =
    "Layer is 3D: Scale expects [x,y,z]. Expression may be returning 2D.";

/// Advisory notes for a faulting property. One rule: a failing scale
/// expression on a 3D layer most likely returns a two-component array.
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, leaf: &Leaf, layer: &Layer, error: Option<&str>) -> Option<String> {
        let faulted = error.is_some_and(|e| !e.is_empty());

        if leaf.match_name == SCALE_MATCH_NAME && faulted && layer.three_d {
            Some(SCALE_DIMENSION_NOTE.to_string())
        } else {
            None
        }
    }
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_on_3d_layer_with_error() {
        let classifier = HeuristicClassifier::new();
        let layer = Layer::new("Box", 1).with_three_d(true);
        let scale = Leaf::new(SCALE_MATCH_NAME);

        assert_eq!(
            classifier.classify(&scale, &layer, Some("Expression result must be of dimension 3")),
            Some(SCALE_DIMENSION_NOTE.to_string())
        );
    }

    #[test]
    fn test_no_note_otherwise() {
        let classifier = HeuristicClassifier::new();
        let flat = Layer::new("Box", 1);
        let deep = Layer::new("Box", 1).with_three_d(true);
        let scale = Leaf::new(SCALE_MATCH_NAME);
        let opacity = Leaf::new("ADBE Opacity");

        assert_eq!(classifier.classify(&scale, &flat, Some("error")), None);
        assert_eq!(classifier.classify(&scale, &deep, None), None);
        assert_eq!(classifier.classify(&scale, &deep, Some("")), None);
        assert_eq!(classifier.classify(&opacity, &deep, Some("error")), None);
    }
}
