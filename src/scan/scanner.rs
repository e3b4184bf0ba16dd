// Mon Oct 19 2026 - Alex

use crate::config::ScanConfig;
use crate::document::{Composition, ExpressionRuntime, Layer, Project};
use crate::report::{ScanMetadata, ScanReport};
use crate::scan::error::{ScanError, ScanResult};
use crate::scan::evaluate::representative_time;
use crate::scan::record::{DiagnosticRecord, ScanStatistics};
use crate::scan::walker::TreeWalker;
use crate::utils::logging::scoped_timer;

#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub records: Vec<DiagnosticRecord>,
    pub statistics: ScanStatistics,
}

/// Drives the tree walk over every layer of every composition in scope.
pub struct ExpressionScanner<'r, R: ExpressionRuntime + ?Sized> {
    runtime: &'r R,
    config: ScanConfig,
}

impl<'r, R: ExpressionRuntime + ?Sized> ExpressionScanner<'r, R> {
    pub fn new(runtime: &'r R) -> Self {
        Self {
            runtime,
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scan(&self, compositions: &[&Composition]) -> ScanResult<ScanOutput> {
        self.scan_with_progress(compositions, |_, _| {})
    }

    /// `on_layer` runs after each layer has been walked.
    pub fn scan_with_progress<F>(&self, compositions: &[&Composition], mut on_layer: F) -> ScanResult<ScanOutput>
    where
        F: FnMut(&Composition, &Layer),
    {
        if compositions.is_empty() {
            log::warn!("Scan requested with no compositions in scope");
            return Err(ScanError::EmptyScope);
        }
        self.config
            .validate()
            .map_err(|e| ScanError::InvalidConfig(e.to_string()))?;

        let _timer = scoped_timer("expression scan");
        let walker = TreeWalker::new(self.runtime).with_snippet_lines(self.config.snippet_lines);
        let mut output = ScanOutput::default();

        for composition in compositions {
            let time = representative_time(composition.duration);
            log::info!(
                "Scanning '{}' ({} layers) at t={:.3}s",
                composition.name,
                composition.layers.len(),
                time
            );

            for layer in &composition.layers {
                let root = layer.properties.root();
                walker.scan_into(composition, layer, root, time, &mut output.records, &mut output.statistics);
                output.statistics.layers += 1;
                on_layer(composition, layer);
            }
            output.statistics.compositions += 1;
        }

        log::info!(
            "Scan finished: {} expression(s), {} issue(s)",
            output.statistics.expressions,
            output.statistics.records
        );
        Ok(output)
    }

    pub fn scan_project(&self, project: &Project) -> ScanResult<ScanReport> {
        self.scan_project_with_progress(project, |_, _| {})
    }

    pub fn scan_project_with_progress<F>(&self, project: &Project, on_layer: F) -> ScanResult<ScanReport>
    where
        F: FnMut(&Composition, &Layer),
    {
        let compositions = project.compositions_in_scope(self.config.scope);
        let output = self.scan_with_progress(&compositions, on_layer)?;

        let host_version = self
            .config
            .host_version
            .as_deref()
            .unwrap_or(&project.host_version);
        let metadata = ScanMetadata::now(&self.config.tool_name, host_version, self.config.scope);

        Ok(ScanReport::new(metadata, output.records, output.statistics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Leaf, ScanScope, SimulatedRuntime};
    use crate::report::render::NO_ISSUES;
    use crate::scan::fixtures;
    use crate::scan::heuristics::SCALE_DIMENSION_NOTE;

    fn all() -> ScanConfig {
        ScanConfig::new().with_scope(ScanScope::AllCompositions)
    }

    #[test]
    fn test_box_scale_scenario() {
        let comp = fixtures::single_leaf(
            true,
            Leaf::new("ADBE Scale")
                .with_expression("thisComp.layer(\"Null\").scale.slice(0, 2)")
                .with_fault("Expression result must be of dimension 3, not 2"),
        );
        let runtime = SimulatedRuntime::new();
        let output = ExpressionScanner::new(&runtime).scan(&[&comp]).unwrap();

        assert_eq!(output.records.len(), 1);
        let record = &output.records[0];
        assert!(record.error.is_some());
        assert_eq!(record.missing_references, vec!["Null".to_string()]);
        assert_eq!(record.note.as_deref(), Some(SCALE_DIMENSION_NOTE));
    }

    #[test]
    fn test_empty_scope_is_distinct() {
        let runtime = SimulatedRuntime::new();
        let scanner = ExpressionScanner::new(&runtime);
        assert!(matches!(scanner.scan(&[]), Err(ScanError::EmptyScope)));

        let mut project = fixtures::project();
        project.active = None;
        assert!(matches!(scanner.scan_project(&project), Err(ScanError::EmptyScope)));
        assert_eq!(runtime.total_evaluations(), 0);
    }

    #[test]
    fn test_empty_composition_reports_no_issues() {
        let mut project = fixtures::project();
        project.compositions.push(Composition::new("Empty", 1.0));
        project.active = Some("Empty".to_string());

        let runtime = SimulatedRuntime::new();
        let report = ExpressionScanner::new(&runtime).scan_project(&project).unwrap();
        assert!(report.is_clean());
        assert!(report.render().ends_with(NO_ISSUES));
    }

    #[test]
    fn test_traversal_order_across_compositions() {
        let project = fixtures::project();
        let runtime = SimulatedRuntime::new();
        let report = ExpressionScanner::new(&runtime).with_config(all()).scan_project(&project).unwrap();

        let order: Vec<_> = report
            .records()
            .iter()
            .map(|r| (r.composition.as_str(), r.layer_index, r.match_name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Main", 1, "ADBE Scale"),
                ("Main", 2, "ADBE Position"),
                ("Titles", 1, "ADBE Gaussian Blur 2-0001"),
            ]
        );

        let stats = report.statistics();
        assert_eq!(stats.compositions, 2);
        assert_eq!(stats.layers, 3);
        assert_eq!(stats.expressions, 4);
        assert_eq!(stats.errors, 2);
        assert_eq!(stats.records, 3);
    }

    #[test]
    fn test_existing_reference_is_not_missing() {
        let project = fixtures::project();
        let runtime = SimulatedRuntime::new();
        let report = ExpressionScanner::new(&runtime).with_config(all()).scan_project(&project).unwrap();

        assert!(report.records().iter().all(|r| !r.missing_references.contains(&"Box".to_string())));
        assert_eq!(report.records()[1].missing_references, vec!["Ctrl".to_string(), "Anchor".to_string()]);
    }

    #[test]
    fn test_repeated_scans_render_identically() {
        let project = fixtures::project();
        let first_runtime = SimulatedRuntime::new();
        let second_runtime = SimulatedRuntime::new();
        let first = ExpressionScanner::new(&first_runtime).with_config(all()).scan_project(&project).unwrap();
        let second = ExpressionScanner::new(&second_runtime).with_config(all()).scan_project(&project).unwrap();

        let strip = |text: String| {
            text.lines()
                .filter(|l| !l.starts_with("Timestamp: "))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip(first.render()), strip(second.render()));
    }

    #[test]
    fn test_each_leaf_is_evaluated_once() {
        let project = fixtures::project();
        let runtime = SimulatedRuntime::new();
        ExpressionScanner::new(&runtime).with_config(all()).scan_project(&project).unwrap();
        assert_eq!(runtime.total_evaluations(), 4);
    }

    #[test]
    fn test_host_version_override_and_progress() {
        let project = fixtures::project();
        let runtime = SimulatedRuntime::new();
        let mut seen = Vec::new();
        let report = ExpressionScanner::new(&runtime)
            .with_config(all().with_host_version("25.0"))
            .scan_project_with_progress(&project, |comp, layer| seen.push(format!("{}/{}", comp.name, layer.name)))
            .unwrap();

        assert_eq!(report.metadata().host_version, "25.0");
        assert_eq!(seen, vec!["Main/Box", "Main/Title", "Titles/Background"]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let comp = fixtures::single_leaf(false, Leaf::new("ADBE Opacity"));
        let runtime = SimulatedRuntime::new();
        let result = ExpressionScanner::new(&runtime)
            .with_config(ScanConfig::new().with_snippet_lines(0))
            .scan(&[&comp]);
        assert!(matches!(result, Err(ScanError::InvalidConfig(_))));
    }
}
