// Mon Oct 19 2026 - Alex

use crate::document::{Composition, ExpressionRuntime, Layer, LeafRef, NodeId, NodeKind};
use crate::scan::evaluate::EvaluationForcer;
use crate::scan::heuristics::HeuristicClassifier;
use crate::scan::path::PathTracker;
use crate::scan::record::{DiagnosticRecord, ScanStatistics};
use crate::scan::references::ReferenceExtractor;
use crate::scan::snippet::{self, DEFAULT_SNIPPET_LINES};

/// Depth-first, pre-order walk over one layer's property tree.
pub struct TreeWalker<'r, R: ExpressionRuntime + ?Sized> {
    forcer: EvaluationForcer<'r, R>,
    runtime: &'r R,
    references: ReferenceExtractor,
    classifier: HeuristicClassifier,
    snippet_lines: usize,
}

impl<'r, R: ExpressionRuntime + ?Sized> TreeWalker<'r, R> {
    pub fn new(runtime: &'r R) -> Self {
        Self {
            forcer: EvaluationForcer::new(runtime),
            runtime,
            references: ReferenceExtractor::new(),
            classifier: HeuristicClassifier::new(),
            snippet_lines: DEFAULT_SNIPPET_LINES,
        }
    }

    pub fn with_snippet_lines(mut self, lines: usize) -> Self {
        self.snippet_lines = lines;
        self
    }

    pub fn scan(
        &self,
        composition: &Composition,
        layer: &Layer,
        group: NodeId,
        time: f64,
    ) -> Vec<DiagnosticRecord> {
        let mut out = Vec::new();
        let mut stats = ScanStatistics::default();
        self.scan_into(composition, layer, group, time, &mut out, &mut stats);
        out
    }

    pub fn scan_into(
        &self,
        composition: &Composition,
        layer: &Layer,
        group: NodeId,
        time: f64,
        out: &mut Vec<DiagnosticRecord>,
        stats: &mut ScanStatistics,
    ) {
        let tree = &layer.properties;

        for &child in tree.children(group) {
            let Some(node) = tree.get(child) else { continue };

            match &node.kind {
                NodeKind::Leaf(leaf) => {
                    if !leaf.has_active_expression() {
                        continue;
                    }
                    stats.expressions += 1;

                    let target = LeafRef { composition, layer, node: child, leaf };
                    if let Some(record) = self.inspect(target, time) {
                        stats.record(&record);
                        out.push(record);
                    }
                }
                NodeKind::Group(_) => {
                    self.scan_into(composition, layer, child, time, out, stats);
                }
            }
        }
    }

    fn inspect(&self, target: LeafRef<'_>, time: f64) -> Option<DiagnosticRecord> {
        self.forcer.force(target, time);

        let error = self.runtime.expression_error(target).filter(|e| !e.is_empty());
        let missing = self
            .references
            .find_missing_references(&target.leaf.expression, target.composition);
        let note = self.classifier.classify(target.leaf, target.layer, error.as_deref());

        let record = DiagnosticRecord {
            composition: target.composition.name.clone(),
            layer_index: target.layer.index,
            layer_name: target.layer.name.clone(),
            property_path: PathTracker::new(&target.layer.properties).path(target.node),
            match_name: target.leaf.match_name.clone(),
            error,
            missing_references: missing,
            note,
            snippet: snippet::first_lines(&target.leaf.expression, self.snippet_lines),
        };
        if !record.has_findings() {
            return None;
        }

        log::debug!(
            "Issue in {} / [{}] {}: {}",
            record.composition,
            record.layer_index,
            record.layer_name,
            record.property_path
        );
        Some(record)
    }
}
