//! Command-line interface and the runtime configuration built from it.

use std::time::Duration;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Story-style terminal carousel demo")]
pub struct Cli {
    /// Seconds each slide stays on screen.
    #[arg(long, default_value = "1.0", value_parser = positive_secs)]
    pub duration: Duration,

    /// UI tick interval in milliseconds.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Skip the intro screens and open the carousel immediately.
    #[arg(long)]
    pub carousel: bool,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub segment_duration: Duration,
    pub tick_rate: Duration,
    pub open_carousel: bool,
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            segment_duration: cli.duration,
            tick_rate: Duration::from_millis(cli.tick_ms),
            open_carousel: cli.carousel,
        }
    }
}

fn positive_secs(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .parse()
        .map_err(|err| format!("not a number: {err}"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err("duration must be a positive number of seconds".to_string());
    }
    Ok(Duration::from_secs_f64(secs))
}
