use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use valdash_dashboard::{Dashboard, DashboardConfig, ReplayFixture};

const USAGE: &str = "usage: valdash <fixture.json> [config.json]";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(fixture_path) = args.next() else {
        bail!(USAGE);
    };

    let config = match args.next() {
        Some(path) => DashboardConfig::from_json_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => DashboardConfig::default(),
    };

    let fixture = ReplayFixture::from_json_file(&fixture_path)
        .with_context(|| format!("loading fixture from {}", fixture_path))?;
    let (overview, feed, settings) = fixture.into_parts();

    let mut dashboard = Dashboard::new(config, feed, settings);
    dashboard.init().await;
    let view = dashboard.refresh(overview).await;

    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}
