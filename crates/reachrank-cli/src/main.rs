use clap::Parser;
use reachrank_analysis::{run_analysis, ProviderSet};
use reachrank_core::AppConfig;

mod report;

#[derive(Debug, Parser)]
#[command(name = "reachrank")]
#[command(about = "Cross-platform influence scoring")]
struct Cli {
    /// Channel handle, channel URL, or bare channel name.
    #[arg(long)]
    youtube: Option<String>,

    /// Account handle, profile URL, or bare username.
    #[arg(long)]
    instagram: Option<String>,

    /// Emit the full report as JSON instead of text panels.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.youtube.is_none() && cli.instagram.is_none() {
        anyhow::bail!("provide at least one of --youtube or --instagram");
    }

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let providers = ProviderSet::from_config(&config)?;

    tracing::info!(
        youtube = cli.youtube.is_some(),
        instagram = cli.instagram.is_some(),
        "starting analysis"
    );
    let report = run_analysis(&providers, cli.youtube.as_deref(), cli.instagram.as_deref()).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render(&report));
    }

    Ok(())
}
