//! Ogg picture blocks
//!
//! lofty decodes `METADATA_BLOCK_PICTURE` comments into pictures while reading.
//! Cover art for Ogg files is the stored comment value itself, so the block is
//! rebuilt from the concrete Vorbis comments in its stored (base64) form.

use crate::error::{ExtractError, Result};
use lofty::config::ParseOptions;
use lofty::file::FileType;
use lofty::ogg::{OggPictureStorage, OpusFile, SpeexFile, VorbisComments, VorbisFile};
use lofty::prelude::*;
use std::fs::File;
use std::path::Path;

/// Stored `METADATA_BLOCK_PICTURE` values of an Ogg file, in file order
///
/// Returns an empty list for non-Ogg file types.
pub fn read_picture_blocks(path: &Path, file_type: &FileType) -> Result<Vec<Vec<u8>>> {
    let mut file = File::open(path)?;
    let to_err = |e: lofty::error::LoftyError| ExtractError::field("cover art", e);

    let blocks = match file_type {
        FileType::Vorbis => picture_blocks(
            VorbisFile::read_from(&mut file, ParseOptions::new())
                .map_err(to_err)?
                .vorbis_comments(),
        ),
        FileType::Opus => picture_blocks(
            OpusFile::read_from(&mut file, ParseOptions::new())
                .map_err(to_err)?
                .vorbis_comments(),
        ),
        FileType::Speex => picture_blocks(
            SpeexFile::read_from(&mut file, ParseOptions::new())
                .map_err(to_err)?
                .vorbis_comments(),
        ),
        _ => Vec::new(),
    };

    Ok(blocks)
}

/// Encode each picture back into its comment form
pub fn picture_blocks(comments: &VorbisComments) -> Vec<Vec<u8>> {
    comments
        .pictures()
        .iter()
        .map(|(picture, info)| picture.as_flac_bytes(*info, true))
        .collect()
}
