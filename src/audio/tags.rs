//! Tag normalization
//!
//! Every tag container is read through one of three shapes. The shape decides
//! which key is tried first for each field; the generic key always backs it up.

use super::loader::AudioHandle;
use lofty::prelude::*;
use lofty::tag::{ItemKey, Tag, TagType};
use std::borrow::Cow;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// How a tag container names its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    /// One canonical key per field (Vorbis comments, APE, RIFF INFO, AIFF text)
    KeyValue,
    /// Vendor atoms such as `©nam` (MP4 ilst)
    Namespaced,
    /// Frames with readable accessors and short binary codes such as `TIT2` (ID3)
    Attribute,
}

impl TagShape {
    pub fn of(tag_type: TagType) -> Self {
        match tag_type {
            TagType::Mp4Ilst => TagShape::Namespaced,
            TagType::Id3v2 | TagType::Id3v1 => TagShape::Attribute,
            _ => TagShape::KeyValue,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Artist,
    Album,
    Genre,
}

impl Field {
    fn item_key(self) -> ItemKey {
        match self {
            Field::Title => ItemKey::TrackTitle,
            Field::Artist => ItemKey::TrackArtist,
            Field::Album => ItemKey::AlbumTitle,
            Field::Genre => ItemKey::Genre,
        }
    }

    fn atom(self) -> &'static str {
        match self {
            Field::Title => "\u{a9}nam",
            Field::Artist => "\u{a9}ART",
            Field::Album => "\u{a9}alb",
            Field::Genre => "\u{a9}gen",
        }
    }

    fn frame_id(self) -> &'static str {
        match self {
            Field::Title => "TIT2",
            Field::Artist => "TPE1",
            Field::Album => "TALB",
            Field::Genre => "TCON",
        }
    }
}

/// The four text fields of a metadata record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFields {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: Option<String>,
}

impl Default for TextFields {
    fn default() -> Self {
        Self {
            title: UNKNOWN_TITLE.to_string(),
            artist: UNKNOWN_ARTIST.to_string(),
            album: UNKNOWN_ALBUM.to_string(),
            genre: None,
        }
    }
}

/// Map the handle's main tag container onto the four text fields
pub fn normalize(handle: &AudioHandle) -> TextFields {
    match handle.main_tag() {
        Some(tag) => normalize_tag(tag),
        None => {
            log::debug!("No tags found in {}", handle.path.display());
            TextFields::default()
        }
    }
}

pub fn normalize_tag(tag: &Tag) -> TextFields {
    let shape = TagShape::of(tag.tag_type());
    let read = |field| lookup(tag, shape, field).map(Cow::into_owned);

    TextFields {
        title: read(Field::Title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        artist: read(Field::Artist).unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        album: read(Field::Album).unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
        genre: read(Field::Genre),
    }
}

fn lookup(tag: &Tag, shape: TagShape, field: Field) -> Option<Cow<'_, str>> {
    match shape {
        TagShape::KeyValue => by_key(tag, &field.item_key()),
        TagShape::Namespaced => {
            by_key(tag, &ItemKey::Unknown(field.atom().to_string()))
                .or_else(|| by_key(tag, &field.item_key()))
        }
        TagShape::Attribute => {
            by_accessor(tag, field)
                .or_else(|| by_key(tag, &ItemKey::Unknown(field.frame_id().to_string())))
        }
    }
}

/// First value stored under `key`
fn by_key<'a>(tag: &'a Tag, key: &ItemKey) -> Option<Cow<'a, str>> {
    tag.get_string(key).map(Cow::Borrowed).filter(is_present)
}

fn by_accessor(tag: &Tag, field: Field) -> Option<Cow<'_, str>> {
    match field {
        Field::Title => tag.title(),
        Field::Artist => tag.artist(),
        Field::Album => tag.album(),
        Field::Genre => tag.genre(),
    }
    .filter(is_present)
}

fn is_present(value: &Cow<'_, str>) -> bool {
    !value.trim().is_empty()
}
