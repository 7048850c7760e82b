//! depsee CLI - Go dependency analysis and Mermaid diagram generation

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use depsee::pipeline::{self, AnalysisOptions};
use depsee::report;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "depsee")]
#[command(about = "Go dependency graph and stability analyzer", version)]
struct Cli {
    /// Log verbosity
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a directory of Go source
    Analyze {
        /// Directory to analyze
        dir: PathBuf,

        /// Include package-level dependencies and group the diagram by package
        #[arg(short = 'p', long)]
        include_package_deps: bool,

        /// Highlight Stable Dependencies Principle violations in red
        #[arg(short = 's', long)]
        highlight_sdp_violations: bool,

        /// Analyze only these packages (comma-separated)
        #[arg(short = 't', long, value_delimiter = ',')]
        target_packages: Vec<String>,

        /// Exclude these packages (comma-separated)
        #[arg(short = 'e', long, value_delimiter = ',')]
        exclude_packages: Vec<String>,

        /// Skip directories with these names (comma-separated)
        #[arg(short = 'd', long, value_delimiter = ',')]
        exclude_dirs: Vec<String>,
    },
    /// Print the version
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not failures.
            if e.use_stderr() {
                eprint!("{e}");
                return ExitCode::FAILURE;
            }
            print!("{e}");
            return ExitCode::SUCCESS;
        }
    };

    init_tracing(cli.log_level, cli.log_format);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: LogLevel, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("depsee={}", level.as_str())));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            dir,
            include_package_deps,
            highlight_sdp_violations,
            target_packages,
            exclude_packages,
            exclude_dirs,
        } => {
            let options = AnalysisOptions {
                include_package_deps,
                highlight_sdp_violations,
                target_packages,
                exclude_packages,
                exclude_dirs,
            };
            let analysis = pipeline::analyze(&dir, &options)?;
            if analysis.failed_with_no_output() {
                tracing::warn!("nothing extracted; every scanned file failed");
            }
            report::print(&analysis, &options)?;
            Ok(())
        }
        Commands::Version => {
            println!("depsee {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
