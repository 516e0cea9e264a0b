//! kinema — mirrors the movie playing in VLC to Discord Rich Presence.
//!
//! One sequential loop: poll VLC's HTTP status, run the filename →
//! metadata → presence pipeline on change, sleep, repeat. Ctrl-C breaks
//! the loop and closes the Discord connection.

mod discord;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kinema_api::omdb::OmdbClient;
use kinema_api::vlc::VlcClient;
use kinema_core::config::AppConfig;
use kinema_core::driver::Driver;
use kinema_core::error::KinemaError;

use crate::discord::DiscordSink;

#[derive(Parser)]
#[command(name = "kinema", version, about = "VLC movie presence for Discord")]
struct Args {
    /// Path to the config file (defaults to the user config dir,
    /// then ./config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), KinemaError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kinema=info")),
        )
        .init();

    let config = AppConfig::load(args.config.as_deref())?;

    let vlc = VlcClient::new(&config.vlc.host, config.vlc.port, config.vlc.password.clone())
        .map_err(|e| KinemaError::Player(e.to_string()))?;
    let omdb = OmdbClient::new(config.omdb.api_key.clone())
        .map_err(|e| KinemaError::Metadata(e.to_string()))?;
    let mut sink = DiscordSink::connect(&config.discord.client_id)?;
    let mut driver = Driver::new();
    let interval = Duration::from_secs(config.general.poll_interval);

    info!(
        host = %config.vlc.host,
        port = config.vlc.port,
        poll_interval = config.general.poll_interval,
        "Watching VLC"
    );

    loop {
        match vlc.status().await {
            Ok(snapshot) => {
                if let Err(e) = driver.tick(&snapshot, &omdb, &mut sink).await {
                    warn!(error = %e, "Presence update failed");
                }
            }
            Err(e) => {
                // Player unreachable: skip this cycle entirely, leave
                // whatever presence is currently shown.
                warn!(error = %e, "Could not fetch VLC status");
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    sink.close();
    Ok(())
}
