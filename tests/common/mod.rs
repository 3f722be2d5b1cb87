//! Shared helpers for the integration tests
//!
//! The crate is a binary, so `src/test_fixtures.rs` is not reachable from
//! here; these generators produce the same files.

#![allow(dead_code)]

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::tag::Tag;
use std::path::Path;
use std::process::{Command, Output};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no CRC, no padding
const MP3_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MP3_FRAME_LEN: usize = 417;

/// Run the binary with a clean logging environment
pub fn extract_tags(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_extract-tags"))
        .args(args)
        .env_remove("EXTRACT_TAGS_LOG")
        .env_remove("EXTRACT_TAGS_LOG_FILE")
        .output()
        .expect("Failed to run extract-tags")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

/// Silent mono 16-bit WAV
pub fn generate_wav(path: &Path, sample_rate: u32, duration_secs: f64) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV file");
    let num_samples = (duration_secs * sample_rate as f64).round() as usize;
    for _ in 0..num_samples {
        writer.write_sample(0i16).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV");
}

/// Untagged MP3 made of silent frames
pub fn generate_mp3(path: &Path, frames: usize) {
    let mut frame = vec![0u8; MP3_FRAME_LEN];
    frame[..4].copy_from_slice(&MP3_FRAME_HEADER);

    let data: Vec<u8> = frame.iter().copied().cycle().take(MP3_FRAME_LEN * frames).collect();
    std::fs::write(path, data).expect("Failed to write MP3");
}

pub fn tag_file(path: &Path, tag: Tag) {
    tag.save_to_path(path, WriteOptions::default())
        .expect("Failed to write tag");
}
