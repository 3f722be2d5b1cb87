//! Embedded cover art lookup
//!
//! The file type picks exactly one lookup policy. A policy that finds nothing
//! means the file has no cover; it does not fall through to the generic scan.

use super::loader::AudioHandle;
use crate::error::{ExtractError, Result};
use lofty::file::FileType;
use lofty::picture::Picture;
use lofty::tag::{ItemKey, ItemValue, Tag, TagType};

/// Vorbis comment field holding an embedded picture block
const PICTURE_BLOCK_KEY: &str = "METADATA_BLOCK_PICTURE";

/// Where a container keeps its cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtSource {
    /// APIC frames of an ID3v2 tag
    Id3,
    /// Native picture list (FLAC)
    PictureList,
    /// `covr` atom list (MP4)
    Atom,
    /// Stored picture block comments (Ogg), returned undecoded
    OggBlock,
    /// First binary payload anywhere in the tags
    Generic,
}

impl ArtSource {
    pub fn of(file_type: &FileType) -> Self {
        match file_type {
            FileType::Mpeg => ArtSource::Id3,
            FileType::Flac => ArtSource::PictureList,
            FileType::Mp4 => ArtSource::Atom,
            FileType::Vorbis | FileType::Opus | FileType::Speex => ArtSource::OggBlock,
            _ => ArtSource::Generic,
        }
    }
}

/// Find the raw bytes of the embedded cover, if any
///
/// Lookup failures are logged and reported as no cover.
pub fn extract_cover_art(handle: &AudioHandle) -> Option<&[u8]> {
    let source = ArtSource::of(&handle.file_type);
    let found = match source {
        ArtSource::Id3 => from_id3(&handle.tags),
        ArtSource::PictureList => first_picture(&handle.tags, TagType::VorbisComments),
        ArtSource::Atom => first_picture(&handle.tags, TagType::Mp4Ilst),
        ArtSource::OggBlock => from_ogg(&handle.picture_blocks, &handle.tags),
        ArtSource::Generic => from_any(&handle.tags),
    };

    match found {
        Ok(Some(data)) => {
            log::debug!("Found {} byte cover via {:?}", data.len(), source);
            Some(data)
        }
        Ok(None) => {
            log::debug!("No cover art in {}", handle.path.display());
            None
        }
        Err(e) => {
            log::error!("Error extracting cover art: {}", e);
            None
        }
    }
}

fn tag_of(tags: &[Tag], tag_type: TagType) -> Option<&Tag> {
    tags.iter().find(|tag| tag.tag_type() == tag_type)
}

fn payload(picture: &Picture) -> Result<&[u8]> {
    match picture.data() {
        [] => Err(ExtractError::field("cover art", "picture has no data")),
        data => Ok(data),
    }
}

/// The untitled APIC frame first, then any APIC frame
fn from_id3(tags: &[Tag]) -> Result<Option<&[u8]>> {
    let Some(tag) = tag_of(tags, TagType::Id3v2) else {
        return Ok(None);
    };
    let pictures = tag.pictures();
    let untitled = pictures
        .iter()
        .find(|p| p.description().is_none_or(str::is_empty));

    untitled.or_else(|| pictures.first()).map(payload).transpose()
}

fn first_picture(tags: &[Tag], tag_type: TagType) -> Result<Option<&[u8]>> {
    tag_of(tags, tag_type)
        .and_then(|tag| tag.pictures().first())
        .map(payload)
        .transpose()
}

/// First stored block, as written in the file
fn from_ogg<'a>(blocks: &'a [Vec<u8>], tags: &'a [Tag]) -> Result<Option<&'a [u8]>> {
    if let Some(block) = blocks.first() {
        return Ok(Some(block.as_slice()).filter(|data| !data.is_empty()));
    }

    // Blocks lofty could not parse stay behind as plain comments
    let key = ItemKey::Unknown(PICTURE_BLOCK_KEY.to_string());
    let raw = tag_of(tags, TagType::VorbisComments)
        .and_then(|tag| tag.get(&key))
        .and_then(|item| item_bytes(item.value()));

    Ok(raw.filter(|data| !data.is_empty()))
}

/// First non-empty picture or binary item, across all tags
fn from_any(tags: &[Tag]) -> Result<Option<&[u8]>> {
    for tag in tags {
        if let Some(data) = tag.pictures().iter().find_map(|p| payload(p).ok()) {
            return Ok(Some(data));
        }
        if let Some(data) = tag.items().find_map(|item| match item.value() {
            ItemValue::Binary(data) if !data.is_empty() => Some(data.as_slice()),
            _ => None,
        }) {
            return Ok(Some(data));
        }
    }
    Ok(None)
}

fn item_bytes(value: &ItemValue) -> Option<&[u8]> {
    match value {
        ItemValue::Binary(data) => Some(data.as_slice()),
        ItemValue::Text(text) | ItemValue::Locator(text) => Some(text.as_bytes()),
    }
}
