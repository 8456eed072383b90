//! Main entry point for speech rendering.
//!
//! Composes the profile resolver, timing model, oscillator bank, envelope
//! shaper, quantizer, and WAV writer into one synchronous pipeline. A render
//! is a pure, bounded computation: validation fails fast before any buffer
//! is allocated, and a synthesis-stage failure aborts the whole render
//! rather than returning a partial file.

use rand_pcg::Pcg32;

use crate::envelope;
use crate::error::{SynthError, SynthResult};
use crate::oscillator::VoiceOscillator;
use crate::request::SynthesisRequest;
use crate::rng::{create_rng, derive_render_seed};
use crate::timing::TimingPlan;
use crate::voice;
use crate::wav::WavResult;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Result of one speech render.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// WAV file data.
    pub wav: WavResult,
    /// Number of words that drove the timing plan.
    pub word_count: usize,
    /// The seed the render ran with (derived or caller-supplied).
    pub seed: u32,
}

/// Renders a speech waveform for a validated request.
///
/// # Errors
/// `InvalidText` / `InvalidLanguage` for caller-correctable input problems
/// (detected before synthesis begins), `Synthesis` if the numeric pipeline
/// produces a non-finite sample.
pub fn render(request: &SynthesisRequest) -> SynthResult<RenderResult> {
    request.validate()?;

    let seed = request
        .seed
        .unwrap_or_else(|| derive_render_seed(&request.text, request.language));

    let profile = voice::resolve(request.language, request.voice.as_deref());
    let plan = TimingPlan::plan(&request.text, request.language, SAMPLE_RATE);

    let samples = synthesize(&plan, VoiceOscillator::new(profile), create_rng(seed))?;
    let wav = WavResult::from_mono(&samples, SAMPLE_RATE);

    Ok(RenderResult {
        wav,
        word_count: plan.word_count(),
        seed,
    })
}

/// Runs the per-sample synthesis loop.
///
/// Each output sample maps to a word slot by linear progress through the
/// plan. Samples outside any word slot (wordless input, index overrun at
/// the tail) are forced to zero without evaluating the oscillator.
fn synthesize(
    plan: &TimingPlan,
    oscillator: VoiceOscillator,
    mut rng: Pcg32,
) -> SynthResult<Vec<f64>> {
    let word_count = plan.word_count();
    let rate = plan.sample_rate as f64;
    let mut samples = Vec::with_capacity(plan.sample_count);

    for i in 0..plan.sample_count {
        let time = i as f64 / rate;
        let progress = time / plan.total_duration_seconds;
        let word_position = progress * word_count as f64;
        let word_index = word_position as usize;

        let sample = if word_count > 0 && word_index < word_count {
            let word_progress = word_position.fract();
            oscillator.sample_at(time, &mut rng)
                * envelope::envelope_at(word_progress, progress, time)
                * envelope::micro_variation(time)
        } else {
            0.0
        };

        if !sample.is_finite() {
            return Err(SynthError::synthesis(format!(
                "non-finite sample at index {}",
                i
            )));
        }

        samples.push(sample);
    }

    Ok(samples)
}
