// SPDX-License-Identifier: MPL-2.0
//! Sound collaborator of the desktop host.
//!
//! Resolves cues against the sound files embedded from `assets/sounds/`.
//! Desktop builds carry no audio backend, so playback and vibration are
//! reported through `tracing`.

use crate::banner::SoundService;
use crate::error::SoundError;
use crate::notification::SoundCue;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/sounds/"]
struct SoundAssets;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogSound;

impl LogSound {
    fn resource(cue: &SoundCue) -> String {
        format!("{}.{}", cue.name, cue.kind)
    }
}

impl SoundService for LogSound {
    fn play(&mut self, cue: &SoundCue) -> Result<(), SoundError> {
        let resource = Self::resource(cue);
        let Some(file) = SoundAssets::get(&resource) else {
            return Err(SoundError::ResourceNotFound {
                name: cue.name.clone(),
                kind: cue.kind.clone(),
            });
        };
        if file.data.is_empty() {
            return Err(SoundError::Playback(format!("{resource} is empty")));
        }
        tracing::info!(%resource, bytes = file.data.len(), "playing sound");
        Ok(())
    }

    fn play_system_alert(&mut self) {
        tracing::info!("playing system alert");
    }

    fn vibrate(&mut self) {
        tracing::info!("vibrating");
    }
}
