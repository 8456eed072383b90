//! Deterministic WAV file writer.
//!
//! Writes mono 16-bit PCM WAV files with no timestamps or variable
//! metadata, so identical samples always serialize to identical bytes. The
//! header layout is a hard compatibility contract: any standard PCM WAV
//! consumer must be able to parse the output without special-casing.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{quantize_sample, samples_to_pcm16, write_wav, write_wav_to_vec, HEADROOM};
