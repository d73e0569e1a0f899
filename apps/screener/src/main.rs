mod catalog;
mod config;
mod demo;
mod errors;
mod extraction;
mod ingest;
mod llm_client;
mod models;
mod questions;
mod routes;
mod scoring;
mod screening;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::{Backend, Config};
use crate::demo::DemoCandidate;
use crate::ingest::load_resume;
use crate::routes::build_router;
use crate::screening::{render::render_text, Screener};
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "screener", version, about = "Score resumes against job profiles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Screen one resume and print the report
    Screen(ScreenArgs),
    /// List built-in job profiles and weight presets
    Jobs,
    /// Run the HTTP API
    Serve(ServeArgs),
}

#[derive(Args)]
#[command(group(clap::ArgGroup::new("input").required(true).args(["demo", "resume"])))]
struct ScreenArgs {
    /// Use a bundled sample resume
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "strong")]
    demo: Option<DemoCandidate>,

    /// Resume file (PDF or plain text)
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Job profile key (see `screener jobs`)
    #[arg(long)]
    job: Option<String>,

    /// Weight preset key (see `screener jobs`)
    #[arg(long)]
    weights: Option<String>,

    /// Write the JSON report to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip the human-readable report
    #[arg(long)]
    json_only: bool,

    #[arg(long, value_enum)]
    backend: Option<Backend>,
}

#[derive(Args)]
struct ServeArgs {
    #[arg(long)]
    port: Option<u16>,

    #[arg(long, value_enum)]
    backend: Option<Backend>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so `screen --json-only` output stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = Catalog::builtin();

    match cli.command {
        Command::Screen(args) => run_screen(args, &config, &catalog).await,
        Command::Jobs => {
            print_catalog(&catalog);
            Ok(())
        }
        Command::Serve(args) => run_serve(args, config, catalog).await,
    }
}

async fn run_screen(args: ScreenArgs, config: &Config, catalog: &Catalog) -> Result<()> {
    let backend = args.backend.unwrap_or(config.backend);
    let screener = Screener::for_backend(backend, config.anthropic_api_key.as_deref())?;

    let job_key = args.job.as_deref().unwrap_or(&config.default_job);
    let job = catalog
        .job(job_key)
        .with_context(|| format!("unknown job profile '{job_key}' (see `screener jobs`)"))?;
    let weights_key = args.weights.as_deref().unwrap_or(&config.default_weights);
    let weights = catalog
        .weights(weights_key)
        .with_context(|| format!("unknown weight preset '{weights_key}' (see `screener jobs`)"))?;

    let resume_text = match (&args.demo, &args.resume) {
        (Some(demo), _) => demo.resume().to_string(),
        (None, Some(path)) => load_resume(path)
            .await
            .with_context(|| format!("failed to load resume {}", path.display()))?,
        (None, None) => bail!("either --demo or --resume is required"),
    };

    info!(backend = %screener.backend_label(), job = job_key, weights = weights_key, "screening");

    let report = screener
        .screen(&resume_text, job, weights)
        .await
        .context("screening failed")?;

    if !args.json_only {
        println!("{}", render_text(&report));
    }

    let json = serde_json::to_string_pretty(&report)?;
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &json)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None if args.json_only || args.demo.is_some() => println!("{json}"),
        None => {}
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("Job profiles:");
    for entry in catalog.jobs() {
        println!("  {:<28} {}", entry.key, entry.profile.title);
    }
    println!();
    println!("Weight presets:");
    for preset in catalog.weight_presets() {
        println!("  {}", preset.key);
    }
}

async fn run_serve(args: ServeArgs, config: Config, catalog: Catalog) -> Result<()> {
    let backend = args.backend.unwrap_or(config.backend);
    let screener = Screener::for_backend(backend, config.anthropic_api_key.as_deref())?;
    let port = args.port.unwrap_or(config.port);

    info!(
        "Starting screener API v{} ({})",
        env!("CARGO_PKG_VERSION"),
        screener.backend_label()
    );

    let state = AppState {
        screener,
        catalog: Arc::new(catalog),
        config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_screen_requires_an_input() {
        assert!(Cli::try_parse_from(["screener", "screen"]).is_err());
    }

    #[test]
    fn test_bare_demo_flag_defaults_to_strong() {
        let cli = Cli::try_parse_from(["screener", "screen", "--demo"]).unwrap();
        let Command::Screen(args) = cli.command else {
            panic!("expected screen subcommand");
        };
        assert_eq!(args.demo, Some(DemoCandidate::Strong));
    }

    #[test]
    fn test_demo_and_resume_conflict() {
        let result =
            Cli::try_parse_from(["screener", "screen", "--demo", "weak", "--resume", "cv.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_backend_flag() {
        let cli = Cli::try_parse_from(["screener", "serve", "--backend", "heuristic"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(args.backend, Some(Backend::Heuristic));
    }
}
