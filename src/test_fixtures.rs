//! Test fixtures for tag extraction tests
//!
//! Generates small WAV and MP3 files and tags them through lofty, so tests do
//! not depend on external encoders.

#![cfg(test)]

use lofty::config::WriteOptions;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::prelude::*;
use lofty::tag::{Tag, TagType};
use std::path::{Path, PathBuf};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no CRC, no padding
const MP3_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MP3_FRAME_LEN: usize = 417;
pub const MP3_SAMPLES_PER_FRAME: usize = 1152;

/// Write a silent mono 16-bit WAV file with an exact sample count
pub fn write_wav_samples(path: &Path, sample_rate: u32, num_samples: usize) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV file");
    for _ in 0..num_samples {
        writer.write_sample(0i16).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// Write a silent mono 16-bit WAV file
pub fn write_wav(path: &Path, sample_rate: u32, duration_secs: f64) {
    let num_samples = (duration_secs * sample_rate as f64).round() as usize;
    write_wav_samples(path, sample_rate, num_samples);
}

/// Write an untagged MP3 made of silent frames
pub fn write_mp3(path: &Path, frames: usize) {
    let mut frame = vec![0u8; MP3_FRAME_LEN];
    frame[..4].copy_from_slice(&MP3_FRAME_HEADER);

    let data: Vec<u8> = frame.iter().copied().cycle().take(MP3_FRAME_LEN * frames).collect();
    std::fs::write(path, data).expect("Failed to write MP3");
}

fn id3_tag(title: &str, cover: Option<&[u8]>) -> Tag {
    let mut tag = Tag::new(TagType::Id3v2);
    tag.set_title(title.to_string());
    if let Some(data) = cover {
        tag.push_picture(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::Png),
            None,
            data.to_vec(),
        ));
    }
    tag
}

/// Write a one second WAV carrying an ID3v2 tag with a title and optional cover
pub fn tagged_wav(dir: &Path, title: &str, cover: Option<&[u8]>) -> PathBuf {
    let path = dir.join("tagged.wav");
    write_wav(&path, 8000, 1.0);
    id3_tag(title, cover)
        .save_to_path(&path, WriteOptions::default())
        .expect("Failed to write tag");
    path
}

/// Write a 40 frame MP3 carrying an ID3v2 tag with a title and optional APIC frame
pub fn tagged_mp3(dir: &Path, title: &str, cover: Option<&[u8]>) -> PathBuf {
    let path = dir.join("tagged.mp3");
    write_mp3(&path, 40);
    id3_tag(title, cover)
        .save_to_path(&path, WriteOptions::default())
        .expect("Failed to write tag");
    path
}
