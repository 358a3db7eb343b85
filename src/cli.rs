use crate::{
    client::ControlPlaneClient,
    config::Config,
    pipeline,
    task::{load_suite, load_task},
    util::ensure_dir,
};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "arena-harness")]
#[command(about = "Evaluation harness for the agentic browser control plane")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./harness.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a single task file against the control plane.
    Run {
        task: PathBuf,
        #[arg(long)]
        driver: Option<String>,
        #[arg(long)]
        control_plane_url: Option<String>,
        #[arg(long)]
        reports_dir: Option<PathBuf>,
    },
    /// Execute a suite file (ordered task list) against the control plane.
    Suite {
        suite: PathBuf,
        #[arg(long)]
        driver: Option<String>,
        #[arg(long)]
        control_plane_url: Option<String>,
        #[arg(long)]
        reports_dir: Option<PathBuf>,
    },
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg_path = resolve_config_path(args.config.as_deref())?;
    let cfg = Config::load(&cfg_path)?;

    match &args.cmd {
        Command::Run {
            task,
            driver,
            control_plane_url,
            reports_dir,
        } => {
            let reports_dir = resolve_reports_dir(&cfg, reports_dir.as_deref());
            let _guard = init_logging(&args, &cfg, &reports_dir)?;
            run_task(&cfg, task, driver.as_deref(), control_plane_url.as_deref(), &reports_dir)
        }
        Command::Suite {
            suite,
            driver,
            control_plane_url,
            reports_dir,
        } => {
            let reports_dir = resolve_reports_dir(&cfg, reports_dir.as_deref());
            let _guard = init_logging(&args, &cfg, &reports_dir)?;
            run_suite(&cfg, suite, driver.as_deref(), control_plane_url.as_deref(), &reports_dir)
        }
    }
}

fn run_task(
    cfg: &Config,
    task_path: &Path,
    driver: Option<&str>,
    url: Option<&str>,
    reports_dir: &Path,
) -> Result<()> {
    let task = load_task(task_path)?;
    let driver = driver.unwrap_or(&cfg.harness.driver);
    let url = url.unwrap_or(&cfg.harness.control_plane_url);

    let client = connect(cfg, url)?;
    let out = pipeline::run_task_job(&client, cfg, driver, &task, reports_dir)?;

    println!(
        "Run {} complete success={} report={}",
        out.report.run_id,
        out.report.success,
        out.report_path.display()
    );
    Ok(())
}

fn run_suite(
    cfg: &Config,
    suite_path: &Path,
    driver: Option<&str>,
    url: Option<&str>,
    reports_dir: &Path,
) -> Result<()> {
    let suite = load_suite(suite_path)?;
    let driver = driver.unwrap_or(&cfg.harness.driver);
    let url = url.unwrap_or(&cfg.harness.control_plane_url);

    let client = connect(cfg, url)?;
    let out = pipeline::run_suite_job(&client, cfg, driver, &suite, reports_dir)?;

    println!(
        "Completed {} tasks report={}",
        out.entries.len(),
        out.report_path.display()
    );
    Ok(())
}

fn connect(cfg: &Config, url: &str) -> Result<ControlPlaneClient> {
    ControlPlaneClient::connect(
        url,
        Duration::from_secs(cfg.harness.request_timeout_seconds),
    )
    .with_context(|| format!("connecting to control plane {url}"))
}

fn resolve_config_path(user: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = user {
        return Ok(p.to_path_buf());
    }
    let default = PathBuf::from("harness.toml");
    if default.exists() {
        Ok(default)
    } else {
        Ok(PathBuf::from("harness.example.toml"))
    }
}

fn resolve_reports_dir(cfg: &Config, user: Option<&Path>) -> PathBuf {
    user.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&cfg.reports.dir))
}

fn init_logging(args: &Args, cfg: &Config, reports_dir: &Path) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = resolve_log_path(cfg, reports_dir) {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn resolve_log_path(cfg: &Config, reports_dir: &Path) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }

    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }

    Some(reports_dir.join("arena-harness.log"))
}
