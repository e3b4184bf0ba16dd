// Mon Oct 19 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use expression_diagnostics::{
    config::ScanConfig,
    document::{load_project, ScanScope, SimulatedRuntime},
    report::{json, ReportWriter, ScanReport},
    scan::{ExpressionScanner, ScanError},
    utils::logging,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "expression-diagnostics")]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Scan composition expressions for evaluation errors and dangling layer references", long_about = None)]
struct Args {
    /// Project description (JSON)
    project: PathBuf,

    /// Scan every composition instead of the active one
    #[arg(long, conflicts_with = "active")]
    all: bool,

    /// Treat this composition as the active one
    #[arg(long)]
    active: Option<String>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[arg(long)]
    no_save: bool,

    #[arg(long)]
    json: Option<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_color: bool,
}

const EXIT_EMPTY_SCOPE: i32 = 2;

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    logging::init_logger(&args.log_level, !args.no_color);

    match run(args) {
        Ok(()) => {}
        Err(e) => match e.downcast_ref::<ScanError>() {
            Some(ScanError::EmptyScope) => {
                eprintln!("{} {}", "[!]".yellow(), ScanError::EmptyScope);
                std::process::exit(EXIT_EMPTY_SCOPE);
            }
            _ => {
                eprintln!("{} {:#}", "[!]".red(), e);
                std::process::exit(1);
            }
        },
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScanConfig::default(),
    };
    if args.all {
        config = config.with_scope(ScanScope::AllCompositions);
    }
    if let Some(dir) = args.output_dir {
        config = config.with_output_dir(dir);
    }
    if args.no_save {
        config = config.with_save_report(false);
    }
    if let Some(path) = args.json {
        config = config.with_json_output(path);
    }
    config.validate()?;

    let mut project = load_project(&args.project)
        .with_context(|| format!("Failed to load project {}", args.project.display()))?;
    if let Some(name) = args.active {
        project.active = Some(name);
    }

    let total_layers: usize = project
        .compositions_in_scope(config.scope)
        .iter()
        .map(|c| c.layers.len())
        .sum();
    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total_layers as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        pb
    };

    let runtime = SimulatedRuntime::new();
    let scanner = ExpressionScanner::new(&runtime).with_config(config.clone());
    let report = scanner.scan_project_with_progress(&project, |comp, layer| {
        progress.set_message(format!("{} / {}", comp.name, layer.name));
        progress.inc(1);
    });
    progress.finish_and_clear();
    let report = report?;

    let text = report.render();
    println!("{}", text);
    println!();

    if config.save_report {
        let writer = ReportWriter::new(&config.output_dir, &config.file_prefix);
        match writer.write(&text, &report.metadata().timestamp) {
            Ok(path) => println!("{} Saved: {}", "[+]".green(), path.display()),
            Err(e) => {
                log::warn!("{}", e);
                eprintln!("{} Could not save report: {}", "[!]".red(), e);
            }
        }
    }

    if let Some(path) = &config.json_output {
        match json::write_json(&report, path) {
            Ok(()) => println!("{} JSON: {}", "[+]".green(), path.display()),
            Err(e) => eprintln!("{} Could not save JSON report: {}", "[!]".red(), e),
        }
    }

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &ScanReport) {
    let stats = report.statistics();
    println!("{}", "=".repeat(40).cyan());
    println!(
        "{} {} composition(s), {} layer(s), {} expression(s)",
        "[*]".blue(),
        stats.compositions,
        stats.layers,
        stats.expressions
    );

    if report.is_clean() {
        println!("{} No expression issues found", "[+]".green());
        return;
    }

    println!("{} {} issue(s)", "[!]".yellow(), stats.records.to_string().bold());
    println!("    Evaluation errors:   {}", stats.errors.to_string().red());
    println!("    Missing references:  {}", stats.missing_references.to_string().yellow());
    println!("    Heuristic notes:     {}", stats.notes.to_string().yellow());
}
