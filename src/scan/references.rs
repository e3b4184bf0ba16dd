// Mon Oct 19 2026 - Alex

use crate::document::Composition;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// `thisComp.layer("NAME")` or `thisComp.layer('NAME')`, whitespace tolerant.
static LAYER_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"thisComp\s*\.\s*layer\s*\(\s*["']([^"']+)["']\s*\)"#)
        .expect("layer call pattern is valid")
});

/// Syntactic scan for by-name layer references. Matches inside string
/// literals or comments are reported too.
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Every referenced layer name in order of appearance, duplicates included.
    pub fn referenced_layers<'e>(&self, expression: &'e str) -> Vec<&'e str> {
        LAYER_CALL
            .captures_iter(expression)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Referenced names with no layer of that exact name in `composition`,
    /// deduplicated in first-seen order.
    pub fn find_missing_references(&self, expression: &str, composition: &Composition) -> Vec<String> {
        let missing: IndexSet<&str> = self
            .referenced_layers(expression)
            .into_iter()
            .filter(|name| !composition.has_layer_named(name))
            .collect();

        missing.into_iter().map(str::to_string).collect()
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Layer;

    fn comp() -> Composition {
        let mut comp = Composition::new("Main", 10.0);
        comp.push_layer(Layer::new("Box", 0));
        comp.push_layer(Layer::new("Camera 1", 0));
        comp
    }

    #[test]
    fn test_quotes_and_whitespace() {
        let extractor = ReferenceExtractor::new();
        let expr = "a = thisComp.layer(\"Box\");\nb = thisComp . layer ( 'Camera 1' );\nc = thisComp.layer(3);";
        assert_eq!(extractor.referenced_layers(expr), vec!["Box", "Camera 1"]);
        assert!(extractor.find_missing_references(expr, &comp()).is_empty());
    }

    #[test]
    fn test_missing_names_deduplicated_in_order() {
        let extractor = ReferenceExtractor::new();
        let expr = r#"thisComp.layer("Null").position + thisComp.layer("Box").scale
            + thisComp.layer('Ctrl') + thisComp.layer("Null")"#;
        let missing = extractor.find_missing_references(expr, &comp());
        assert_eq!(missing, vec!["Null".to_string(), "Ctrl".to_string()]);

        // same text and layer set, same answer
        assert_eq!(extractor.find_missing_references(expr, &comp()), missing);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let extractor = ReferenceExtractor::new();
        assert_eq!(extractor.find_missing_references(r#"thisComp.layer("box")"#, &comp()), vec!["box"]);
        assert!(extractor.referenced_layers(r#"ThisComp.layer("Box")"#).is_empty());
    }

    #[test]
    fn test_matches_inside_comments() {
        let extractor = ReferenceExtractor::new();
        let expr = "// thisComp.layer(\"Old\")\nvalue";
        assert_eq!(extractor.find_missing_references(expr, &comp()), vec!["Old"]);
    }
}
