//! saywave synthesis core
//!
//! This crate renders a playable WAV clip that approximates spoken
//! narration of the input text, without any external speech model. It is a
//! parametric synthesizer: word-count timing plus a fixed table of acoustic
//! parameters per language/voice drive a formant oscillator bank and
//! envelope shaper, sample by sample, into mono 16-bit PCM.
//!
//! # Determinism
//!
//! All rendering is deterministic. The only random term (breathiness noise)
//! is drawn from a PCG32 generator seeded from a BLAKE3 hash of
//! `(text, language)` — or from an explicit seed on the request — so the
//! same request always yields byte-identical output.
//!
//! # Example
//!
//! ```
//! use saywave_synth::{render, Language, SynthesisRequest};
//!
//! let request = SynthesisRequest::new("Hello world", Language::En);
//! let result = render(&request).expect("valid request");
//!
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] - Main entry point composing the whole pipeline
//! - [`cache`] - Advisory render cache and [`CachingRenderer`]
//! - [`voice`] - Voice profile resolution
//! - [`timing`] - Word timing and duration planning
//! - [`oscillator`] - Formant oscillator bank
//! - [`envelope`] - Word and utterance amplitude shaping
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - Quantizer and deterministic WAV file writer

pub mod cache;
pub mod envelope;
pub mod error;
pub mod oscillator;
pub mod render;
pub mod request;
pub mod rng;
pub mod timing;
pub mod voice;
pub mod wav;

// Re-export main types at crate root
pub use cache::{AudioCache, CachingRenderer};
pub use error::{SynthError, SynthResult};
pub use render::{render, RenderResult, SAMPLE_RATE};
pub use request::{Language, SynthesisRequest, MAX_TEXT_CHARS};
pub use voice::VoiceProfile;
pub use wav::WavResult;
