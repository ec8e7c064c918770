//! Resolve command - one-shot logo lookup from the terminal

use clap::Args;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::{manual_search_url, LogoQuery, Sport};
use crate::infrastructure::logging;
use crate::infrastructure::logo::create_resolver;

#[derive(Args)]
pub struct ResolveArgs {
    /// Team name to look up
    #[arg(long)]
    pub team: String,

    /// Sport the team plays (football or basketball)
    #[arg(long, default_value = "football")]
    pub sport: String,
}

/// Resolve a single logo and print its URL to stdout.
///
/// The printed URL is empty when every source came up short, so the
/// command stays scriptable either way.
pub async fn run(args: ResolveArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let sport: Sport = args.sport.parse()?;
    let query = LogoQuery::new(&args.team, sport);
    let resolver = create_resolver(&config.sources);

    let resolution = resolver.resolve(&query).await;

    for attempt in resolution.attempts() {
        debug!(
            source = attempt.source,
            outcome = ?attempt.outcome,
            latency_ms = attempt.latency_ms,
            "Source attempt"
        );
    }

    println!("{}", resolution.url());

    if !resolution.is_resolved() {
        eprintln!("No logo found for '{}'", args.team);
        if let Some(url) = manual_search_url(&query) {
            eprintln!("Try a manual image search: {}", url);
        }
    }

    Ok(())
}
