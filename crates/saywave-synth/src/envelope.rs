//! Amplitude envelopes for word and utterance shaping.
//!
//! Two envelopes multiply into every voiced sample: a per-word
//! attack/sustain/decay curve and a per-utterance half-sine that fades the
//! whole clip in and out. Two slow trembles (breathing and speech rhythm)
//! and a micro-variation term ride on top.

use std::f64::consts::PI;

/// Word fraction spent in the attack phase.
const ATTACK_END: f64 = 0.15;

/// Word fraction where the decay phase begins.
const DECAY_START: f64 = 0.82;

/// Decay never falls below this, so words trail off instead of gating to
/// hard silence.
const DECAY_FLOOR: f64 = 0.28;

/// Per-word amplitude envelope.
///
/// `word_progress` is the position inside the current word in [0, 1):
/// a power-curve attack over the first 15%, a near-unity sustain with a
/// small periodic dip through the middle, and a power-curve decay over the
/// final 18% floored at a nonzero value.
pub fn word_envelope(word_progress: f64) -> f64 {
    if word_progress < ATTACK_END {
        (word_progress / ATTACK_END).powf(0.7)
    } else if word_progress > DECAY_START {
        ((1.0 - word_progress) / (1.0 - DECAY_START))
            .powf(0.5)
            .max(DECAY_FLOOR)
    } else {
        0.94 + (word_progress * PI * 2.5).sin() * 0.06
    }
}

/// Per-utterance envelope: a single half-sine over the whole clip, so the
/// render fades in and out rather than starting and stopping abruptly.
pub fn utterance_envelope(global_progress: f64) -> f64 {
    (global_progress * PI).sin()
}

/// Slow breathing-rate amplitude tremble.
pub fn breathing_modulation(time: f64) -> f64 {
    0.98 + (time * 0.3).sin() * 0.02
}

/// Speech-rhythm amplitude tremble, slightly faster than breathing.
pub fn rhythm_modulation(time: f64) -> f64 {
    0.96 + (time * 1.2).sin() * 0.04
}

/// Micro-variation multiplied into the final voiced signal.
pub fn micro_variation(time: f64) -> f64 {
    0.97 + (time * 3.7).sin() * 0.03
}

/// Combined envelope value in [0, 1] for one voiced sample.
pub fn envelope_at(word_progress: f64, global_progress: f64, time: f64) -> f64 {
    word_envelope(word_progress)
        * utterance_envelope(global_progress)
        * breathing_modulation(time)
        * rhythm_modulation(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_rises_from_zero() {
        assert_eq!(word_envelope(0.0), 0.0);
        assert!(word_envelope(0.05) < word_envelope(0.10));
        assert!(word_envelope(0.10) < word_envelope(0.149));
    }

    #[test]
    fn test_sustain_stays_near_unity() {
        for wp in [0.2, 0.35, 0.5, 0.65, 0.8] {
            let env = word_envelope(wp);
            assert!((0.88..=1.0).contains(&env), "sustain {} at {}", env, wp);
        }
    }

    #[test]
    fn test_decay_floors_above_zero() {
        assert!(word_envelope(0.9) > DECAY_FLOOR - 1e-12);
        assert_eq!(word_envelope(0.999), DECAY_FLOOR);
        // End of word never gates to hard silence.
        assert!(word_envelope(1.0 - 1e-9) >= DECAY_FLOOR);
    }

    #[test]
    fn test_decay_is_monotonic_until_floor() {
        assert!(word_envelope(0.83) > word_envelope(0.87));
        assert!(word_envelope(0.87) > word_envelope(0.91));
    }

    #[test]
    fn test_utterance_envelope_fades_in_and_out() {
        assert!(utterance_envelope(0.0).abs() < 1e-12);
        assert!((utterance_envelope(0.5) - 1.0).abs() < 1e-12);
        assert!(utterance_envelope(1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trembles_stay_subtle() {
        for i in 0..2000 {
            let t = i as f64 * 0.01;
            assert!((0.96..=1.0).contains(&breathing_modulation(t)));
            assert!((0.92..=1.0).contains(&rhythm_modulation(t)));
            assert!((0.94..=1.0).contains(&micro_variation(t)));
        }
    }

    #[test]
    fn test_combined_envelope_unit_range() {
        for i in 0..1000 {
            let wp = (i as f64 * 0.137) % 1.0;
            let gp = i as f64 / 1000.0;
            let env = envelope_at(wp, gp, i as f64 * 0.003);
            assert!((0.0..=1.0).contains(&env), "envelope {} out of range", env);
        }
    }
}
