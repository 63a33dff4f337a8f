use tabled::Table;

use crate::{
    cli::{connect, spinner},
    error, info, success,
    spotify::{Client, PlayOptions, ResourceType, SpotifyUri},
    types::DeviceTableRow,
    utils, warning,
};

/// Playback commands that need no output beyond a confirmation.
#[derive(Debug, Clone)]
pub enum PlayerAction {
    Play { uri: Option<String> },
    Pause,
    Next,
    Previous,
}

pub async fn player_status() {
    let client = connect().await;

    let pb = spinner("Loading playback state...");
    let state = client.player().playback(None).await;
    pb.finish_and_clear();

    let state = match state {
        Ok(Some(s)) => s,
        Ok(None) => {
            warning!("Nothing is playing right now");
            return;
        }
        Err(e) => error!("Failed to load playback state. Err: {}", e),
    };

    match &state.item {
        Some(track) => {
            let progress = utils::format_duration(state.progress_ms.unwrap_or_default());
            let verb = if state.is_playing { "Playing" } else { "Paused" };
            success!(
                "{}: {} - {} [{} / {}]",
                verb,
                utils::artist_names(track.artists.iter().map(|a| a.name.as_str())),
                track.name,
                progress,
                utils::format_duration(track.duration_ms)
            );
        }
        None => info!("Playing {}", state.currently_playing_type),
    }

    if let Some(device) = &state.device {
        info!("Device: {} ({})", device.name, device.kind);
    }
    info!(
        "Shuffle: {}, repeat: {}",
        if state.shuffle_state { "on" } else { "off" },
        state.repeat_state
    );
}

pub async fn player_devices() {
    let client = connect().await;

    let pb = spinner("Loading devices...");
    let devices = client.player().devices().await;
    pb.finish_and_clear();

    match devices {
        Ok(devices) if devices.is_empty() => warning!("No active device found"),
        Ok(devices) => {
            let rows: Vec<DeviceTableRow> = devices
                .into_iter()
                .map(|d| DeviceTableRow {
                    name: d.name,
                    kind: d.kind,
                    active: d.is_active,
                    volume: d
                        .volume_percent
                        .map(|v| format!("{v}%"))
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to load devices. Err: {}", e),
    }
}

pub async fn player_command(action: PlayerAction) {
    let client = connect().await;

    match run(&client, &action).await {
        Ok(message) => success!("{}", message),
        Err(e) => error!("Player command failed. Err: {}", e),
    }
}

async fn run(client: &Client, action: &PlayerAction) -> crate::Result<String> {
    let player = client.player();

    match action {
        PlayerAction::Play { uri: None } => {
            player.play(PlayOptions::default()).await?;
            Ok("Playback resumed".to_string())
        }
        PlayerAction::Play { uri: Some(uri) } => {
            let parsed: SpotifyUri = uri.parse()?;
            let options = match parsed.kind {
                ResourceType::Track | ResourceType::Episode => PlayOptions::uris([uri.as_str()]),
                _ => PlayOptions::context(uri.as_str()),
            };
            player.play(options).await?;
            Ok(format!("Playing {uri}"))
        }
        PlayerAction::Pause => {
            player.pause(None).await?;
            Ok("Playback paused".to_string())
        }
        PlayerAction::Next => {
            player.next(None).await?;
            Ok("Skipped to next track".to_string())
        }
        PlayerAction::Previous => {
            player.previous(None).await?;
            Ok("Skipped to previous track".to_string())
        }
    }
}
