//! Word timing and duration planning.
//!
//! The "word" unit here is a run of non-whitespace characters, not a
//! linguistic token: it exists only to drive timing. Speaking rate is a
//! fixed words-per-minute constant per language, and a duration floor
//! keeps very short (or all-whitespace) input from producing a degenerate
//! clip.

use crate::request::Language;

/// English speaking rate in words per minute.
pub const WPM_EN: f64 = 145.0;

/// Chinese speaking rate in words per minute. Faster than English,
/// reflecting syllable density.
pub const WPM_ZH: f64 = 165.0;

/// Minimum clip duration in seconds.
pub const MIN_DURATION_SECONDS: f64 = 1.8;

/// Returns the speaking rate for a language.
pub fn words_per_minute(language: Language) -> f64 {
    match language {
        Language::En => WPM_EN,
        Language::Zh => WPM_ZH,
    }
}

/// Word list and sample-domain timing for one render.
#[derive(Debug, Clone)]
pub struct TimingPlan {
    /// Words in input order.
    pub words: Vec<String>,
    /// Total clip duration in seconds.
    pub total_duration_seconds: f64,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Number of output samples, `floor(sample_rate * duration)`, always >= 1.
    pub sample_count: usize,
}

impl TimingPlan {
    /// Plans timing for the given text.
    ///
    /// Splits on runs of whitespace, dropping empty tokens. Zero words
    /// (all-whitespace input) still yields a floor-length plan; the render
    /// loop treats the wordless span as silence.
    pub fn plan(text: &str, language: Language, sample_rate: u32) -> Self {
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

        let base_seconds = words.len() as f64 / words_per_minute(language) * 60.0;
        let total_duration_seconds = base_seconds.max(MIN_DURATION_SECONDS);

        let sample_count = ((sample_rate as f64 * total_duration_seconds) as usize).max(1);

        Self {
            words,
            total_duration_seconds,
            sample_rate,
            sample_count,
        }
    }

    /// Returns the number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
