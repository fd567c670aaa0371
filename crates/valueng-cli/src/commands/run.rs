//! The `run` subcommand: execute the full pipeline over a project.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tracing::info;

use valueng_core::pipeline::{Pipeline, RunReport};
use valueng_core::types::{CostCatalogEntry, MaterialSpec, Strategy};
use valueng_core::{HeuristicJudge, Judge, PolicyConfig};
use valueng_judge::{JudgeConfig, RemoteJudge, ResilientJudge};

/// Arguments for `valueng run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Normalized material specs (JSON array)
    #[arg(long)]
    pub specs: PathBuf,

    /// Cost catalog entries (JSON array)
    #[arg(long)]
    pub catalog: PathBuf,

    /// Policy overrides (JSON); defaults apply when omitted
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Directory for exported selections/metrics; print-only when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip the remote judge even when credentials are present
    #[arg(long)]
    pub offline: bool,

    /// Strategies to run (default: all built-ins)
    #[arg(long = "strategy")]
    pub strategies: Vec<String>,
}

/// Execute the `run` subcommand.
pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    let specs = load_specs(&args.specs)?;
    let catalog = load_catalog(&args.catalog)?;
    let policy = load_policy(args.policy.as_deref())?;

    let strategies = if args.strategies.is_empty() {
        Strategy::builtin()
    } else {
        args.strategies
            .iter()
            .map(|name| Strategy::by_name(name).map_err(valueng_core::ValuengError::from))
            .collect::<Result<Vec<_>, _>>()?
    };

    let judge = build_judge(args.offline);
    let pipeline = Pipeline::new(policy, strategies)?;
    let report = pipeline.run(&specs, &catalog, judge).await?;

    print_summary(&report);

    if let Some(output_dir) = &args.output {
        export_report(&report, output_dir)?;
        info!(dir = %output_dir.display(), "exported run artifacts");
    }
    Ok(())
}

fn load_specs(path: &Path) -> anyhow::Result<Vec<MaterialSpec>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading specs from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing specs from {}", path.display()))
}

fn load_catalog(path: &Path) -> anyhow::Result<Vec<CostCatalogEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing catalog from {}", path.display()))
}

fn load_policy(path: Option<&Path>) -> anyhow::Result<PolicyConfig> {
    match path {
        None => Ok(PolicyConfig::default()),
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading policy from {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing policy from {}", path.display()))
        }
    }
}

/// Choose the judge backend.
///
/// Remote with heuristic fallback when credentials are present; heuristic
/// only otherwise. Missing credentials never block startup.
fn build_judge(offline: bool) -> Arc<dyn Judge> {
    if offline {
        info!("offline mode: using the heuristic judge");
        return Arc::new(HeuristicJudge::new());
    }
    let config = JudgeConfig::from_env();
    if !config.is_available() {
        info!("no judge credentials: using the heuristic judge");
        return Arc::new(HeuristicJudge::new());
    }
    match RemoteJudge::new(config.clone()) {
        Ok(remote) => Arc::new(ResilientJudge::new(remote, HeuristicJudge::new(), config)),
        Err(err) => {
            tracing::warn!(%err, "remote judge unavailable, using the heuristic judge");
            Arc::new(HeuristicJudge::new())
        }
    }
}

fn print_summary(report: &RunReport) {
    println!("Materials resolved: {}", report.resolved_count);
    println!("Baseline total cost: ${:.2}", report.baseline_total_cost);
    if !report.unresolved.is_empty() {
        println!("Unresolved materials ({}):", report.unresolved.len());
        for unresolved in &report.unresolved {
            println!("  {} - {}", unresolved.material_id, unresolved.reason);
        }
    }

    for outcome in &report.outcomes {
        let overall = &outcome.metrics.overall;
        println!("\n{}", outcome.strategy.name);
        println!("  Original cost:  ${:>14.2}", overall.total_original_cost);
        println!("  Selected cost:  ${:>14.2}", overall.total_selected_cost);
        println!(
            "  Savings:        ${:>14.2} ({:.2}%)",
            overall.total_savings, overall.savings_pct
        );
        println!(
            "  Avg scores:     functional {:.2} / design {:.2} / cost {:.2}",
            overall.avg_functional_score, overall.avg_design_score, overall.avg_cost_score
        );
        for (category, metrics) in &outcome.metrics.per_category {
            println!(
                "    {:<15} savings ${:.2} ({:.2}%) over {} materials",
                category.label(),
                metrics.total_savings,
                metrics.savings_pct,
                metrics.material_count
            );
        }
    }
}

/// Write per-strategy selections and metrics, plus unresolved materials.
fn export_report(report: &RunReport, output_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    for outcome in &report.outcomes {
        let selection_path = output_dir.join(format!("{}_selection.json", outcome.strategy.name));
        fs::write(
            &selection_path,
            serde_json::to_string_pretty(&outcome.selection)?,
        )
        .with_context(|| format!("writing {}", selection_path.display()))?;

        let metrics_path = output_dir.join(format!("{}_metrics.json", outcome.strategy.name));
        fs::write(
            &metrics_path,
            serde_json::to_string_pretty(&outcome.metrics)?,
        )
        .with_context(|| format!("writing {}", metrics_path.display()))?;
    }

    let unresolved_path = output_dir.join("unresolved.json");
    fs::write(
        &unresolved_path,
        serde_json::to_string_pretty(&report.unresolved)?,
    )
    .with_context(|| format!("writing {}", unresolved_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use valueng_core::types::{Category, Dimensions};

    fn write_fixture(dir: &Path) -> (PathBuf, PathBuf) {
        let specs = vec![MaterialSpec {
            id: "W2".to_string(),
            category: Category::Window,
            dimensions: Some(Dimensions::new(71.0, 62.0)),
            material_type: "wood".to_string(),
            style: "casement".to_string(),
            quantity: 4,
        }];
        let catalog = vec![
            CostCatalogEntry {
                code: "WIN-0180".to_string(),
                category: Category::Window,
                dimensions: Some(Dimensions::new(71.0, 62.0)),
                material_type: "Wood".to_string(),
                style: "casement".to_string(),
                unit_material_cost: 1430.0,
                unit_labor_cost: 285.0,
                unit_total_cost: 1715.0,
            },
            CostCatalogEntry {
                code: "WIN-0210".to_string(),
                category: Category::Window,
                dimensions: Some(Dimensions::new(53.0, 63.0)),
                material_type: "Aluminum".to_string(),
                style: "casement".to_string(),
                unit_material_cost: 1100.0,
                unit_labor_cost: 235.0,
                unit_total_cost: 1335.0,
            },
        ];
        let specs_path = dir.join("specs.json");
        let catalog_path = dir.join("catalog.json");
        fs::write(&specs_path, serde_json::to_string_pretty(&specs).unwrap()).unwrap();
        fs::write(&catalog_path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();
        (specs_path, catalog_path)
    }

    #[tokio::test]
    async fn offline_run_exports_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let (specs, catalog) = write_fixture(dir.path());
        let output = dir.path().join("out");

        let args = RunArgs {
            specs,
            catalog,
            policy: None,
            output: Some(output.clone()),
            offline: true,
            strategies: Vec::new(),
        };
        execute(args).await.unwrap();

        for name in [
            "functional-only",
            "cost-only",
            "design-only",
            "balanced",
        ] {
            assert!(output.join(format!("{name}_selection.json")).exists());
            assert!(output.join(format!("{name}_metrics.json")).exists());
        }
        assert!(output.join("unresolved.json").exists());

        // the cost-only selection must pick the cheaper casement
        let raw = fs::read_to_string(output.join("cost-only_selection.json")).unwrap();
        let selection: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(selection["choices"]["W2"]["rank"], 1);
    }

    #[tokio::test]
    async fn unknown_strategy_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let (specs, catalog) = write_fixture(dir.path());
        let args = RunArgs {
            specs,
            catalog,
            policy: None,
            output: None,
            offline: true,
            strategies: vec!["cheapest".to_string()],
        };
        let err = execute(args).await.unwrap_err();
        assert_eq!(crate::exit_code_for_error(&err), crate::error::EXIT_INVALID_INPUT);
    }

    #[tokio::test]
    async fn malformed_specs_fail_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let (_, catalog) = write_fixture(dir.path());
        let bad_specs = dir.path().join("bad.json");
        fs::write(&bad_specs, "{not json").unwrap();
        let args = RunArgs {
            specs: bad_specs,
            catalog,
            policy: None,
            output: None,
            offline: true,
            strategies: Vec::new(),
        };
        let err = execute(args).await.unwrap_err();
        assert!(format!("{err:#}").contains("parsing specs"));
    }
}
