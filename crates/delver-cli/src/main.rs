use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use delver_core::client::{ResearchBackend, ResearchClient};
use delver_core::config::Config;
use delver_core::report::{ReportFile, ResearchReport};
use delver_core::{ExportDir, Session};

mod progress;
mod render;

#[derive(Parser)]
#[command(name = "delver")]
#[command(about = "Multi-agent deep research from your terminal", long_about = None)]
struct Cli {
    /// Backend API URL (overrides config)
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a research query and render the report
    Run {
        /// The research question
        #[arg(required = true)]
        query: Vec<String>,

        /// Research depth: number of search tasks (3 = quick, 10 = deep)
        #[arg(long, value_parser = clap::value_parser!(u32).range(3..=10))]
        depth: Option<u32>,

        /// Export the report after rendering
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,

        /// Directory exported reports are written to
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check that the backend is up
    Health,
    /// Print example research queries
    Examples,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Markdown,
    Json,
    Both,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delver=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(url) = cli.backend {
        config.backend.base_url = url;
    }

    let client = ResearchClient::from_config(&config.backend);

    match cli.command {
        Commands::Run {
            query,
            depth,
            export,
            output,
        } => run(&client, &config, query, depth, export, output).await,
        Commands::Health => health(&client).await,
        Commands::Examples => {
            render::print_examples();
            Ok(())
        }
    }
}

async fn run(
    client: &ResearchClient,
    config: &Config,
    query: Vec<String>,
    depth: Option<u32>,
    export: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let query = query.join(" ");
    if query.trim().is_empty() {
        anyhow::bail!("Please enter a research query");
    }
    let depth = depth.unwrap_or(config.backend.max_tasks);

    let mut session = Session::new();
    session.begin()?;

    let ticker = progress::ProgressTicker::start();
    let outcome = client.run_research(&query, depth).await;
    ticker.finish(outcome.is_ok());
    session.settle(outcome);

    match session.report() {
        Some(report) => {
            render::print_report(report);

            if let Some(format) = export {
                let dir = match output {
                    Some(path) => ExportDir::new(path),
                    None => ExportDir::from_config(&config.export),
                };
                save_exports(&dir, report, format)?;
            }
            Ok(())
        }
        None => {
            let message = session.error().unwrap_or("research failed").to_string();
            anyhow::bail!(
                "{}\n(make sure your backend is running at {})",
                message,
                client.base_url()
            );
        }
    }
}

fn save_exports(
    dir: &ExportDir,
    report: &ResearchReport,
    format: ExportFormat,
) -> anyhow::Result<()> {
    let files = match format {
        ExportFormat::Markdown => vec![ReportFile::markdown(report)],
        ExportFormat::Json => vec![ReportFile::json(report)?],
        ExportFormat::Both => vec![ReportFile::markdown(report), ReportFile::json(report)?],
    };

    for file in files {
        let path = dir.save(&file)?;
        println!("Exported {} ({})", path.display(), file.mime_type);
    }
    Ok(())
}

async fn health(client: &ResearchClient) -> anyhow::Result<()> {
    match client.health().await {
        Ok(status) => {
            render::print_health(&status, client.base_url());
            Ok(())
        }
        Err(err) => anyhow::bail!(
            "{}\n(make sure your backend is running at {})",
            err,
            client.base_url()
        ),
    }
}
