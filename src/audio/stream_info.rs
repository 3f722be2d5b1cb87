use std::fs::File;
use std::path::Path;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Read the stream duration in seconds through the decoder's probe
///
/// Used when the tag reader could not determine a duration. Returns None when
/// the stream cannot be probed or does not declare its length.
pub fn probe_duration(path: &Path) -> Option<f64> {
    let file = File::open(path).ok()?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(&ext.to_string_lossy());
    }

    let probed = match symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    ) {
        Ok(probed) => probed,
        Err(e) => {
            log::debug!("Stream probe failed for {}: {}", path.display(), e);
            return None;
        }
    };

    let track = probed.format.default_track()?;
    let sample_rate = track.codec_params.sample_rate?;
    let n_frames = track.codec_params.n_frames?;
    if sample_rate == 0 {
        return None;
    }

    Some(n_frames as f64 / sample_rate as f64)
}
