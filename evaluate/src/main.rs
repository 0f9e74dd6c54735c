use anyhow::{Context, Result};
use clap::Parser;
use evaluate::logging::init_logger;
use evaluate::store::default_scores_path;
use evaluate::{run_scoring, EvaluationContext, StageInputs};
use std::path::PathBuf;
use tracing::info;

/// Score reviewed submissions and write the ranked results.
#[derive(Debug, Parser)]
#[command(name = "evaluate", version)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "evaluate/config.toml")]
    config: PathBuf,

    /// Directory holding upstream stage outputs (overrides `data_dir` in the config).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Where to write the scores (defaults to `<data_dir>/scores.json`).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Default log level when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志记录器
    init_logger(&cli.log_level);

    // 加载配置
    let mut ctx = EvaluationContext::load_config(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        ctx.data_dir = data_dir;
    }

    let inputs = StageInputs::load(&ctx.data_dir)
        .with_context(|| format!("Failed to load stage outputs from {}", ctx.data_dir.display()))?;

    let out_path = cli
        .output
        .unwrap_or_else(|| default_scores_path(&ctx.data_dir));

    // 运行评分并保存结果
    let outcome = run_scoring(&ctx, &inputs, &out_path)?;
    if outcome.is_skipped() {
        info!("No scores produced");
    }

    Ok(())
}
