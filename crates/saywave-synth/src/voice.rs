//! Voice profile resolution.
//!
//! A [`VoiceProfile`] is the complete set of acoustic parameters driving one
//! render: fundamental pitch, formant shift, and the unit-range character
//! knobs. Profiles are fixed data, not code paths — the per-language
//! defaults and the named-voice override table below are the entire "voice"
//! surface of the synthesizer.
//!
//! The language defaults encode a fixed editorial choice: English sits in a
//! lower, drier register; Chinese in a higher register with more breath and
//! clarity.

use crate::request::Language;

/// Acoustic parameters for one voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceProfile {
    /// Fundamental (base pitch) frequency in Hz.
    pub fundamental_pitch_hz: f64,
    /// Multiplier applied to all formant frequencies.
    pub formant_shift: f64,
    /// Amount of noise mixed in (0.0-1.0) for breathiness.
    pub breathiness: f64,
    /// Sub-harmonic resonance amount (0.0-1.0).
    pub warmth: f64,
    /// Harmonic emphasis (0.0-1.0); higher is more hard-edged.
    pub clarity: f64,
    /// Organic micro-modulation amount (0.0-1.0).
    pub naturalness: f64,
    /// Vocal roughness amount (0.0-1.0).
    pub roughness: f64,
}

impl VoiceProfile {
    /// Default English register: lower pitch, minimal breathiness, some
    /// roughness.
    pub fn english() -> Self {
        Self {
            fundamental_pitch_hz: 145.0,
            formant_shift: 1.0,
            breathiness: 0.06,
            warmth: 0.14,
            clarity: 0.92,
            naturalness: 0.88,
            roughness: 0.08,
        }
    }

    /// Default Chinese register: higher pitch, more breath and clarity.
    pub fn chinese() -> Self {
        Self {
            fundamental_pitch_hz: 162.0,
            formant_shift: 1.06,
            breathiness: 0.08,
            warmth: 0.14,
            clarity: 0.94,
            naturalness: 0.88,
            roughness: 0.03,
        }
    }

    /// Returns the default profile for a language.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self::english(),
            Language::Zh => Self::chinese(),
        }
    }
}

/// A partial profile layered over a language default. Only the fields an
/// override names are replaced; later table entries win field-by-field.
#[derive(Debug, Clone, Copy, Default)]
struct VoiceOverride {
    fundamental_pitch_hz: Option<f64>,
    breathiness: Option<f64>,
    warmth: Option<f64>,
    clarity: Option<f64>,
    naturalness: Option<f64>,
}

impl VoiceOverride {
    fn apply(&self, profile: &mut VoiceProfile) {
        if let Some(v) = self.fundamental_pitch_hz {
            profile.fundamental_pitch_hz = v;
        }
        if let Some(v) = self.breathiness {
            profile.breathiness = v;
        }
        if let Some(v) = self.warmth {
            profile.warmth = v;
        }
        if let Some(v) = self.clarity {
            profile.clarity = v;
        }
        if let Some(v) = self.naturalness {
            profile.naturalness = v;
        }
    }
}

/// Fixed table of named voices.
const VOICE_TABLE: &[(&str, VoiceOverride)] = &[
    (
        "adam",
        VoiceOverride {
            warmth: Some(0.16),
            breathiness: Some(0.05),
            naturalness: Some(0.90),
            fundamental_pitch_hz: None,
            clarity: None,
        },
    ),
    (
        "alice",
        VoiceOverride {
            fundamental_pitch_hz: Some(168.0),
            clarity: Some(0.96),
            breathiness: Some(0.09),
            warmth: None,
            naturalness: None,
        },
    ),
];

/// Resolves a voice profile from a language and optional voice selector.
///
/// Total over valid languages: an unknown selector falls back to the
/// language default rather than failing.
pub fn resolve(language: Language, voice: Option<&str>) -> VoiceProfile {
    let mut profile = VoiceProfile::for_language(language);

    if let Some(name) = voice {
        for (voice_name, voice_override) in VOICE_TABLE {
            if voice_name.eq_ignore_ascii_case(name) {
                voice_override.apply(&mut profile);
            }
        }
    }

    profile
}
