use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scriptcheck_core::{load_config, validate_and_write, CheckOptions, Config, DEFAULT_CONFIG_PATH, DEFAULT_INPUT};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "scriptcheck", version, about = "Syntax-check inline <script> blocks of an HTML file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 逐块检查 HTML 中的内联脚本
    Check {
        /// 输入 HTML 文件（默认取配置文件中的 input，再退回内置路径）
        #[arg(long)]
        input: Option<PathBuf>,

        /// 配置文件（TOML），默认 ./scriptcheck.toml（存在时）
        #[arg(long)]
        config: Option<PathBuf>,

        /// 临时文件目录（默认当前目录）
        #[arg(long, default_value = ".")]
        work_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, config, work_dir } => {
            let cfg = resolve_config(config.as_deref())?;
            let checker = cfg.checker.to_checker().context("invalid checker configuration")?;
            let input = input.or(cfg.input).unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            info!(?input, ?work_dir, program = %cfg.checker.program, "starting check");

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let opts = CheckOptions { work_dir };
            let stats = validate_and_write(&input, &mut out, &checker, &opts)
                .with_context(|| format!("check of {} failed", input.display()))?;
            out.flush().context("flush report")?;

            info!(passed = stats.passed, failed = stats.failed, errored = stats.errored, "check finished");
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只保留报告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 配置优先级：显式 --config > 默认路径（存在时）> 内置默认
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path).with_context(|| format!("load config {}", path.display()));
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.is_file() {
        return load_config(default_path).with_context(|| format!("load config {}", default_path.display()));
    }
    debug!("no config file, using built-in defaults");
    Ok(Config::default())
}
