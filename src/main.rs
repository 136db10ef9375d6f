use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use reqwest::Client;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use apiprobe::config::page_context::PageContext;
use apiprobe::probe::probe::probe_connection;
use apiprobe::resolver::resolve_base_url;

#[derive(Parser)]
#[command(name = "apiprobe")]
#[command(about = "Resolve the API base URL and probe an endpoint for connectivity", long_about = None)]
#[command(version)]
struct Args {
    /// API endpoint path to probe
    #[arg(default_value = "/api/health")]
    endpoint: String,

    /// Page origin to resolve against, scheme://host[:port]
    #[arg(long, env = "PAGE_ORIGIN", default_value = "http://localhost:5000")]
    origin: String,

    /// Request timeout in seconds
    #[arg(long, env = "PROBE_TIMEOUT_SECS", default_value_t = 5)]
    timeout_secs: u64,

    /// Print the probe result as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let page = PageContext::from_origin(&args.origin)?;
    log::info!("resolved API base URL: {}", resolve_base_url(&page));

    let client = Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .user_agent(concat!("apiprobe/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let start = Instant::now();
    let result = probe_connection(&client, &page, &args.endpoint).await;
    let elapsed = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.success {
        println!(
            "✅ URL: {}, Status: {} {}, Elapsed: {:.2}ms",
            result.url,
            result.status.unwrap_or_default(),
            result.status_text.as_deref().unwrap_or(""),
            elapsed.as_secs_f64() * 1000.0
        );
    } else if let Some(status) = result.status {
        println!(
            "❌ Unexpected status for {}: {} {}",
            result.url,
            status,
            result.status_text.as_deref().unwrap_or("")
        );
    } else {
        println!(
            "❌ Probe error for {}: {}",
            result.url,
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
