//! Formant oscillator bank.
//!
//! Per-sample synthesis of a harmonic-rich waveform from a voice profile.
//! Formants are approximated as fixed multiples of the fundamental rather
//! than tracked resonances. The non-robotic timbre comes from layered
//! sinusoidal drift: the fundamental wanders under a slow three-term drift,
//! and every formant above it is perturbed by its own faster secondary
//! drift. All multipliers, drift rates, and mix weights are fixed constants
//! of the design — they are the "voice" of the synthesizer and stay stable
//! across releases so acoustic regressions are detectable.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::voice::VoiceProfile;

/// Formant frequencies as multiples of the (shifted) fundamental.
const FORMANT_MULTIPLES: [f64; 5] = [1.0, 2.2, 3.6, 4.8, 6.2];

/// Mix weight per formant; the fundamental dominates.
const FORMANT_WEIGHTS: [f64; 5] = [0.42, 0.30, 0.18, 0.08, 0.04];

/// Secondary drift rate (rad/s) per formant above the fundamental.
const FORMANT_DRIFT_RATES: [f64; 4] = [5.5, 8.2, 10.5, 12.8];

/// Secondary drift depth (Hz) per formant above the fundamental.
const FORMANT_DRIFT_DEPTHS: [f64; 4] = [10.0, 6.0, 4.0, 3.0];

/// Master scale applied to the formant sum before character terms mix in.
const FORMANT_MIX_SCALE: f64 = 0.55;

/// Sub-harmonic ratio for the warmth term.
const WARMTH_RATIO: f64 = 0.48;

/// Vibrato rate (rad/s) and depth.
const VIBRATO_RATE: f64 = 5.2;
const VIBRATO_DEPTH: f64 = 0.012;

/// Voiced-waveform generator for one render.
///
/// Holds the resolved profile; all state beyond the profile is the caller's
/// sample clock and the seeded RNG threaded through for breathiness noise.
#[derive(Debug, Clone, Copy)]
pub struct VoiceOscillator {
    profile: VoiceProfile,
}

impl VoiceOscillator {
    /// Creates an oscillator for a resolved voice profile.
    pub fn new(profile: VoiceProfile) -> Self {
        Self { profile }
    }

    /// Returns the profile driving this oscillator.
    pub fn profile(&self) -> &VoiceProfile {
        &self.profile
    }

    /// Computes the raw (pre-envelope) amplitude at `time` seconds.
    ///
    /// Output is roughly in [-1, 1]; transient overshoot is handled by the
    /// quantizer's headroom, not here. The RNG is consumed once per call
    /// when the profile has any breathiness, so callers must invoke this
    /// for every voiced sample in order.
    pub fn sample_at(&self, time: f64, rng: &mut Pcg32) -> f64 {
        let p = &self.profile;

        // Slow pitch wander, three incommensurate terms.
        let pitch_variation =
            (time * 0.6).sin() * 7.0 + (time * 1.8).sin() * 3.5 + (time * 0.35).cos() * 2.5;
        let pitch = p.fundamental_pitch_hz + pitch_variation;

        // Weighted formant sum. Each formant above the fundamental carries
        // its own faster drift.
        let mut voice = (2.0 * PI * pitch * p.formant_shift * time).sin() * FORMANT_WEIGHTS[0];
        for i in 1..FORMANT_MULTIPLES.len() {
            let drift = (time * FORMANT_DRIFT_RATES[i - 1]).sin() * FORMANT_DRIFT_DEPTHS[i - 1];
            let freq = pitch * FORMANT_MULTIPLES[i] * p.formant_shift + drift;
            voice += (2.0 * PI * freq * time).sin() * FORMANT_WEIGHTS[i];
        }
        voice *= FORMANT_MIX_SCALE;

        // Breathiness: additive uniform noise.
        if p.breathiness > 0.0 {
            voice += (rng.gen::<f64>() - 0.5) * p.breathiness;
        }

        // Warmth: sub-harmonic resonance below the fundamental.
        voice += (2.0 * PI * (pitch * WARMTH_RATIO) * time).sin() * p.warmth;

        // Clarity biases toward a hard-edged character, naturalness toward
        // an organically modulated one.
        voice *= p.clarity + (time * 14.0).sin() * (1.0 - p.clarity) * 0.1;
        voice *= p.naturalness + (time * 6.3).sin() * (1.0 - p.naturalness) * 0.15;

        // Roughness rides on the current pitch.
        voice *= 1.0 + (time * pitch * 0.1).sin() * p.roughness;

        // Constant-rate vibrato.
        voice *= 1.0 + (time * VIBRATO_RATE).sin() * VIBRATO_DEPTH;

        voice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Language;
    use crate::rng::create_rng;
    use crate::voice;

    fn sample_run(profile: VoiceProfile, seed: u32, count: usize) -> Vec<f64> {
        let osc = VoiceOscillator::new(profile);
        let mut rng = create_rng(seed);
        (0..count)
            .map(|i| osc.sample_at(i as f64 / 44100.0, &mut rng))
            .collect()
    }

    #[test]
    fn test_output_stays_in_mix_range() {
        for language in [Language::En, Language::Zh] {
            let samples = sample_run(voice::resolve(language, None), 42, 44100);
            for &s in &samples {
                assert!(s.abs() <= 1.2, "sample {} outside mix range", s);
                assert!(s.is_finite());
            }
        }
    }

    #[test]
    fn test_determinism_with_same_seed() {
        let profile = voice::resolve(Language::En, None);
        let a = sample_run(profile, 42, 2000);
        let b = sample_run(profile, 42, 2000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_breathiness_noise_varies_with_seed() {
        let profile = voice::resolve(Language::En, None);
        let a = sample_run(profile, 42, 2000);
        let b = sample_run(profile, 43, 2000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_breathiness_skips_rng() {
        let mut profile = voice::resolve(Language::En, None);
        profile.breathiness = 0.0;
        let osc = VoiceOscillator::new(profile);

        let mut rng1 = create_rng(7);
        let mut rng2 = create_rng(1234);
        let a: Vec<f64> = (0..500)
            .map(|i| osc.sample_at(i as f64 / 44100.0, &mut rng1))
            .collect();
        let b: Vec<f64> = (0..500)
            .map(|i| osc.sample_at(i as f64 / 44100.0, &mut rng2))
            .collect();

        // Without noise the waveform is a pure function of time.
        assert_eq!(a, b);
    }

    #[test]
    fn test_waveform_is_not_silent() {
        let samples = sample_run(voice::resolve(Language::Zh, None), 42, 4410);
        let peak = samples.iter().fold(0.0_f64, |a, &s| a.max(s.abs()));
        assert!(peak > 0.1, "peak {} too quiet for a voiced span", peak);
    }

    #[test]
    fn test_profiles_produce_distinct_waveforms() {
        let en = sample_run(voice::resolve(Language::En, None), 42, 2000);
        let zh = sample_run(voice::resolve(Language::Zh, None), 42, 2000);
        assert_ne!(en, zh);
    }
}
