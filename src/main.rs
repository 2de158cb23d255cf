use std::path::PathBuf;

use accesslens_core::export::render_summary;
use accesslens_core::{analyze_source, init_logger, AnalysisConfig};
use anyhow::Context;
use clap::Parser;

/// Summarize traffic and failures in an access log.
#[derive(Debug, Parser)]
#[command(name = "accesslens", version, about)]
struct Cli {
    /// Access log to analyze
    log_file: PathBuf,

    /// Directory for CSV tables and report.json
    #[arg(long, default_value = "datasets/cleaned")]
    output_dir: PathBuf,

    /// Entries kept in top-N rankings
    #[arg(long, default_value_t = accesslens_core::config::DEFAULT_TOP_N)]
    top_n: usize,

    /// Progress notification step in percent
    #[arg(long, default_value_t = accesslens_core::config::DEFAULT_PROGRESS_STEP)]
    progress_step: u32,

    /// Summary text output
    #[arg(long, default_value = "reports/summary_output.txt")]
    summary: PathBuf,

    /// Append-only error log
    #[arg(long, default_value = "reports/error_log.txt")]
    error_log: PathBuf,

    /// Run aggregation passes on worker threads
    #[arg(long)]
    parallel: bool,

    /// Print the report bundle as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            top_n: self.top_n,
            progress_step_percent: self.progress_step,
            output_dir: self.output_dir.clone(),
            summary_path: self.summary.clone(),
            error_log_path: self.error_log.clone(),
            parallel: self.parallel,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let cli = Cli::parse();
    let config = cli.config();

    let outcome = analyze_source(&cli.log_file, &config)
        .with_context(|| format!("analysis of {} failed", cli.log_file.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&outcome.aggregates.report)
            .context("rendering report bundle")?;
        println!("{json}");
    } else {
        print!("{}", render_summary(&outcome.aggregates.summary, config.top_n));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["accesslens", "access.log"]);
        let config = cli.config();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "accesslens",
            "access.log",
            "--top-n",
            "5",
            "--parallel",
            "--output-dir",
            "out",
        ]);
        let config = cli.config();
        assert_eq!(config.top_n, 5);
        assert!(config.parallel);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }
}
