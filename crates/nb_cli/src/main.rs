use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use nb_core::Result;
use nb_pipeline::{
    default_sources, load_sources, Classifier, HttpTransport, PipelineConfig, PipelineManager,
};
use nb_web::AppState;

/// Duration in compact human form: `30m`, `1h15m`, `90s`, `1d`.
#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_value = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                match c {
                    's' => total_seconds += num,
                    'm' => total_seconds += num * 60,
                    'h' => total_seconds += num * 3600,
                    'd' => total_seconds += num * 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                }
                current_number.clear();
                has_value = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // a bare number means seconds
        if !current_number.is_empty() {
            match current_number.parse::<u64>() {
                Ok(num) => {
                    total_seconds += num;
                    has_value = true;
                }
                Err(_) => return Err("Invalid number in duration".to_string()),
            }
        }

        if !has_value {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "News ingestion pipeline with a read-only article API")]
struct Cli {
    /// Refresh period between cycles (e.g. 30m, 1h15m)
    #[arg(long, default_value = "30m")]
    interval: HumanDuration,
    /// Address to serve the JSON API on
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: SocketAddr,
    /// JSON file with the source registry; built-in sources when omitted
    #[arg(long)]
    sources: Option<PathBuf>,
    /// Maximum sources fetched concurrently per cycle
    #[arg(long, default_value_t = 4)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let sources = match &cli.sources {
        Some(path) => load_sources(path)?,
        None => default_sources(),
    };
    info!("📰 Source registry loaded: {} sources", sources.len());

    let transport = Arc::new(HttpTransport::new()?);
    let config = PipelineConfig {
        interval: cli.interval.0,
        concurrency: cli.concurrency,
    };
    let manager = Arc::new(PipelineManager::new(
        sources,
        transport,
        Classifier::default(),
        config,
    ));

    Arc::clone(&manager).start();
    info!("🔄 Refresh cycles started (every {}s)", cli.interval.0.as_secs());

    let app = nb_web::create_app(AppState { pipeline: manager });
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!("🌐 Serving article API on {}", cli.bind);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_duration_units() {
        assert_eq!("30m".parse::<HumanDuration>().unwrap().0.as_secs(), 1800);
        assert_eq!("1h15m".parse::<HumanDuration>().unwrap().0.as_secs(), 4500);
        assert_eq!("90".parse::<HumanDuration>().unwrap().0.as_secs(), 90);
        assert_eq!("1d".parse::<HumanDuration>().unwrap().0.as_secs(), 86400);
    }

    #[test]
    fn test_human_duration_rejects_garbage() {
        assert!("".parse::<HumanDuration>().is_err());
        assert!("abc".parse::<HumanDuration>().is_err());
        assert!("10x".parse::<HumanDuration>().is_err());
    }
}
