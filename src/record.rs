//! Output records
//!
//! Field order here is the key order of the emitted JSON.

use crate::audio::{extract_cover_art, normalize, AudioHandle};
use base64::prelude::*;
use serde::Serialize;

/// Normalized metadata for one audio file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: Option<String>,
    /// Seconds
    pub duration: f64,
    /// Base64 of the raw embedded picture bytes
    pub cover_art: Option<String>,
}

impl MetadataRecord {
    pub fn from_handle(handle: &AudioHandle) -> Self {
        let fields = normalize(handle);
        let cover_art = extract_cover_art(handle).map(|data| BASE64_STANDARD.encode(data));

        Self {
            title: fields.title,
            artist: fields.artist,
            album: fields.album,
            genre: fields.genre,
            duration: duration_or_zero(handle.duration),
            cover_art,
        }
    }
}

fn duration_or_zero(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Emitted instead of a record when a run fails
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
