//! File loading
//!
//! Opens an audio file once, detects its container from content (falling back
//! to the extension) and snapshots the tags and stream duration into an
//! [`AudioHandle`]. The file is closed before any extraction happens.

use super::cover_art::ArtSource;
use super::{ogg, stream_info};
use crate::error::{ExtractError, Result};
use lofty::file::FileType;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{Tag, TagType};
use std::fmt;
use std::path::{Path, PathBuf};

/// Read-only view of one loaded audio file
#[derive(Clone)]
pub struct AudioHandle {
    pub path: PathBuf,
    pub file_type: FileType,
    /// Tag containers in the order the file stores them
    pub tags: Vec<Tag>,
    pub primary_tag_type: TagType,
    /// Stored `METADATA_BLOCK_PICTURE` values, Ogg files only
    pub picture_blocks: Vec<Vec<u8>>,
    /// Stream length in seconds, 0.0 when unknown
    pub duration: f64,
}

impl fmt::Debug for AudioHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioHandle")
            .field("path", &self.path)
            .field("file_type", &self.file_type)
            .field("tags", &self.tags.len())
            .field("primary_tag_type", &self.primary_tag_type)
            .field("picture_blocks", &self.picture_blocks.len())
            .field("duration", &self.duration)
            .finish()
    }
}

impl AudioHandle {
    /// The primary tag container, or the first one present
    pub fn main_tag(&self) -> Option<&Tag> {
        self.tags
            .iter()
            .find(|tag| tag.tag_type() == self.primary_tag_type)
            .or_else(|| self.tags.first())
    }
}

/// Load an audio file
pub fn load(path: &Path) -> Result<AudioHandle> {
    let tagged_file = Probe::open(path)
        .map_err(|e| ExtractError::load(path, e))?
        .guess_file_type()
        .map_err(|e| ExtractError::load(path, e))?
        .read()
        .map_err(|e| ExtractError::load(path, e))?;

    // Frame counts are exact; lofty rounds to milliseconds
    let duration = match stream_info::probe_duration(path) {
        Some(seconds) if seconds > 0.0 => seconds,
        _ => tagged_file.properties().duration().as_secs_f64(),
    };

    let file_type = tagged_file.file_type();
    let picture_blocks = if ArtSource::of(&file_type) == ArtSource::OggBlock {
        ogg::read_picture_blocks(path, &file_type).unwrap_or_else(|e| {
            log::error!("Error extracting cover art: {}", e);
            Vec::new()
        })
    } else {
        Vec::new()
    };

    log::debug!(
        "Loaded {} as {:?} with {} tag(s)",
        path.display(),
        tagged_file.file_type(),
        tagged_file.tags().len()
    );

    Ok(AudioHandle {
        path: path.to_path_buf(),
        file_type,
        tags: tagged_file.tags().to_vec(),
        primary_tag_type: tagged_file.primary_tag_type(),
        picture_blocks,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::cover_art::extract_cover_art;
    use crate::test_fixtures::{
        tagged_mp3, tagged_wav, write_wav, write_wav_samples, MP3_SAMPLES_PER_FRAME,
    };
    use lofty::tag::ItemKey;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load(Path::new("/nonexistent/file.mp3"));
        assert!(matches!(result, Err(ExtractError::Load { .. })));
    }

    #[test]
    fn test_load_text_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("readme.txt");
        std::fs::write(&path, b"this is not audio at all").unwrap();

        assert!(matches!(load(&path), Err(ExtractError::Load { .. })));
    }

    #[test]
    fn test_load_untagged_wav() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.wav");
        write_wav(&path, 8000, 1.0);

        let handle = load(&path).unwrap();
        assert_eq!(handle.file_type, FileType::Wav);
        assert!(handle.main_tag().is_none());
        assert!((handle.duration - 1.0).abs() < 0.01, "got {}", handle.duration);
    }

    #[test]
    fn test_load_tagged_wav() {
        let dir = TempDir::new().unwrap();
        let path = tagged_wav(dir.path(), "Song", None);

        let handle = load(&path).unwrap();
        let tag = handle.main_tag().unwrap();
        assert_eq!(tag.get_string(&ItemKey::TrackTitle), Some("Song"));
    }

    #[test]
    fn test_load_keeps_sub_millisecond_duration() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("odd_length.wav");
        write_wav_samples(&path, 44100, 44107);

        let handle = load(&path).unwrap();
        assert!(
            (handle.duration - 44107.0 / 44100.0).abs() < 1e-9,
            "got {}",
            handle.duration
        );
    }

    #[test]
    fn test_load_tagged_mp3() {
        let dir = TempDir::new().unwrap();
        let path = tagged_mp3(dir.path(), "Mp3 Song", Some(&[0x01, 0x02, 0x03]));

        let handle = load(&path).unwrap();
        assert_eq!(handle.file_type, FileType::Mpeg);
        assert!(handle.picture_blocks.is_empty());
        assert_eq!(
            handle.main_tag().unwrap().get_string(&ItemKey::TrackTitle),
            Some("Mp3 Song")
        );
        assert_eq!(extract_cover_art(&handle), Some(&[0x01, 0x02, 0x03][..]));

        let expected = (40 * MP3_SAMPLES_PER_FRAME) as f64 / 44100.0;
        assert!((handle.duration - expected).abs() < 0.1, "got {}", handle.duration);
    }

    #[test]
    fn test_main_tag_prefers_primary() {
        let handle = AudioHandle {
            path: PathBuf::from("x.wav"),
            file_type: FileType::Wav,
            tags: vec![Tag::new(TagType::RiffInfo), Tag::new(TagType::Id3v2)],
            primary_tag_type: TagType::Id3v2,
            picture_blocks: Vec::new(),
            duration: 0.0,
        };
        assert_eq!(handle.main_tag().unwrap().tag_type(), TagType::Id3v2);
    }

    #[test]
    fn test_main_tag_falls_back_to_first() {
        let handle = AudioHandle {
            path: PathBuf::from("x.wav"),
            file_type: FileType::Wav,
            tags: vec![Tag::new(TagType::RiffInfo)],
            primary_tag_type: TagType::Id3v2,
            picture_blocks: Vec::new(),
            duration: 0.0,
        };
        assert_eq!(handle.main_tag().unwrap().tag_type(), TagType::RiffInfo);
    }
}
