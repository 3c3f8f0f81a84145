//! Flax build tool command-line interface.

mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use flaxbuild_deps::{DependencyRegistry, DepsRequest};
use flaxbuild_targets::TargetPlatform;
use flaxbuild_workspace::WorkspaceState;
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use config::BuildConfig;

#[derive(Parser)]
#[command(
    name = "flaxbuild",
    version,
    about = "Build tool for the engine's third-party dependencies"
)]
struct Cli {
    /// Workspace root (default: the folder holding flaxbuild.toml, else the current folder)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Engine root (default: from flaxbuild.toml, else the workspace root)
    #[arg(long, global = true)]
    engine_root: Option<PathBuf>,
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, build and stage third-party dependencies
    Deps {
        /// Target platform to build (repeatable; default: the host platform)
        #[arg(long = "platform")]
        platforms: Vec<TargetPlatform>,
        /// Build only the named dependency (repeatable)
        #[arg(long)]
        only: Vec<String>,
        /// Print what would be built without running anything
        #[arg(long)]
        dry_run: bool,
    },
    /// List the available dependency recipes
    List,
    /// Show workspace, project and toolchain information
    Info,
    /// Remove dependency build scratch folders
    Clean,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `RUST_LOG` directives (default `info`); `-v` raises the default level to
/// `debug` on top of them.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, config_dir) = load_config_optional(&cwd)?;
    let (root, engine_root) = resolve_roots(&cli, &config, config_dir.as_deref(), &cwd);
    debug!(root = %root.display(), engine_root = %engine_root.display(), "workspace");

    let state = WorkspaceState::load(&root, &engine_root)
        .with_context(|| format!("loading workspace at {}", root.display()))?;
    let registry = DependencyRegistry::builtin();

    match cli.command {
        Commands::Deps {
            platforms,
            only,
            dry_run,
        } => {
            let platforms = if platforms.is_empty() {
                config.deps.platforms.clone()
            } else {
                platforms
            };
            let request = DepsRequest { platforms, only };
            commands::deps::run(&state, &config.tools, &registry, &request, dry_run).map(|_| ())
        }
        Commands::List => commands::list::run(&registry, state.host_platform()),
        Commands::Info => commands::info::run(&state, &config.tools),
        Commands::Clean => commands::clean::run(&state),
    }
}

/// Load `flaxbuild.toml` if one exists at or above `cwd`.
fn load_config_optional(cwd: &Path) -> anyhow::Result<(BuildConfig, Option<PathBuf>)> {
    match BuildConfig::find_and_load(cwd)? {
        Some((config, dir)) => {
            debug!(dir = %dir.display(), "loaded {}", config::CONFIG_FILE);
            Ok((config, Some(dir)))
        }
        None => Ok((BuildConfig::default(), None)),
    }
}

/// Command-line flags win over the config file, which wins over `cwd`.
/// Relative flags resolve against `cwd`.
fn resolve_roots(
    cli: &Cli,
    config: &BuildConfig,
    config_dir: Option<&Path>,
    cwd: &Path,
) -> (PathBuf, PathBuf) {
    let root = cli
        .root
        .as_ref()
        .map(|p| cwd.join(p))
        .or_else(|| config_dir.map(Path::to_path_buf))
        .unwrap_or_else(|| cwd.to_path_buf());
    let engine_root = cli
        .engine_root
        .as_ref()
        .map(|p| cwd.join(p))
        .or_else(|| config_dir.and_then(|dir| config.engine_root(dir)))
        .unwrap_or_else(|| root.clone());
    (root, engine_root)
}
