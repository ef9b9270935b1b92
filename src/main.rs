use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, FromArgMatches};
use tracing_subscriber::EnvFilter;

use transform_release::cli::{run_release, ReleaseRequest};
use transform_release::config::{self, discover_projects, Config};
use transform_release::domain::VersionBump;
use transform_release::exec::SystemRunner;
use transform_release::{exit_codes, preflight, ui, ReleaseError};

#[derive(clap::Parser, Debug)]
#[command(
    name = "transform-release",
    about = "Build a data transform and publish it as the next versioned release"
)]
struct Args {
    #[arg(long, help = "Project directory to release")]
    project: String,

    #[arg(long, value_enum, help = "Version component to increment")]
    version: VersionBump,
}

impl Args {
    /// Parse arguments, restricting `--project` to the discovered projects.
    fn parse_for(projects: &[String]) -> Self {
        let matches = Args::command()
            .mut_arg("project", |arg| {
                arg.value_parser(PossibleValuesParser::new(projects.iter().cloned()))
            })
            .get_matches();
        Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

fn main() {
    init_tracing();

    let code = match run() {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            ui::display_error(&format!("{:#}", err));
            err.downcast_ref::<ReleaseError>()
                .map(ReleaseError::exit_code)
                .unwrap_or(exit_codes::ERROR)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let config: Config = config::load_config()?;
    let projects = discover_projects(&config.root, &config.manifest_file)?;
    let args = Args::parse_for(&projects);

    preflight::check_tools(&config.tools)?;

    let request = ReleaseRequest {
        project: args.project,
        bump: args.version,
    };
    run_release(&request, &config, &SystemRunner::new())
        .with_context(|| format!("Failed to release '{}'", request.project))?;
    Ok(())
}

/// Console logging controlled by RUST_LOG (default: warn), written to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
