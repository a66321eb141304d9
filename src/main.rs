use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use locale_humanizer::{Humanizer, HumanizerConfig};
use tracing::{debug, info};

const USAGE: &str = "usage: humanize <RFC3339 instant> [RFC3339 reference]\n       humanize never";

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_humanizer=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        bail!(USAGE);
    }

    // Load configuration from environment
    let config = HumanizerConfig::from_env()?;
    let humanizer = Humanizer::from_config(&config).context("Failed to build humanizer")?;

    let input = match args[0].as_str() {
        "never" => None,
        text => Some(parse_instant(text)?),
    };
    let reference = args.get(1).map(|text| parse_instant(text)).transpose()?;

    info!("Humanizing {} for locale {}", args[0], humanizer.locale());
    println!("{}", humanizer.humanize_date(input, reference));

    debug!("{}", humanizer.metrics().format());
    Ok(())
}

fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(text)
        .with_context(|| format!("'{}' is not an RFC 3339 timestamp", text))?;
    Ok(parsed.with_timezone(&Utc))
}
