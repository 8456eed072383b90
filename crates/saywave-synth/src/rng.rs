//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the synthesizer flows through this module so that
//! output is reproducible. The only random term in the pipeline is the
//! breathiness noise; seeding it from a hash of the request makes repeated
//! renders of the same `(text, language)` byte-identical.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::request::Language;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives the render seed for a request from its text and language.
///
/// Hashes the language tag and text bytes with BLAKE3 and truncates to u32.
/// The language tag is length-prefixed so distinct `(language, text)` pairs
/// never collide on concatenation.
pub fn derive_render_seed(text: &str, language: Language) -> u32 {
    let tag = language.tag();
    let mut input = Vec::with_capacity(1 + tag.len() + text.len());
    input.push(tag.len() as u8);
    input.extend_from_slice(tag.as_bytes());
    input.extend_from_slice(text.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}
