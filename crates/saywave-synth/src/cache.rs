//! Advisory render cache.
//!
//! A process-lifetime map from `(language, text)` to a finished render.
//! The cache is an explicit, injected component rather than ambient shared
//! state: tests construct fresh instances in isolation, and the boundary
//! decides whether to share one across requests. It is advisory only — a
//! miss always re-synthesizes, and because renders are deterministic a hit
//! returns byte-identical output.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::SynthResult;
use crate::render::{render, RenderResult};
use crate::request::SynthesisRequest;

/// Concurrency-safe map of finished renders keyed by `(language, text)`.
///
/// Unbounded by design (matching the boundary's usage pattern of a small
/// fixed set of prompts). Concurrent inserts on the same key resolve by
/// any writer winning; the values are identical either way.
#[derive(Debug, Default)]
pub struct AudioCache {
    entries: RwLock<HashMap<String, Arc<RenderResult>>>,
}

impl AudioCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the cache key for a request: a BLAKE3 hash of the
    /// canonical `(language, text)` string. The voice selector is folded
    /// into the language choice and does not participate.
    fn key(request: &SynthesisRequest) -> String {
        let canonical = format!("language:{},text:{}", request.language.tag(), request.text);
        blake3::hash(canonical.as_bytes()).to_hex().to_string()
    }

    fn get(&self, key: &str) -> Option<Arc<RenderResult>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn insert(&self, key: String, result: Arc<RenderResult>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, result);
    }

    /// Number of cached renders.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no renders are cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all cached renders.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Renderer that memoizes results in an [`AudioCache`].
///
/// Requests carrying an explicit seed or a voice selector bypass the cache
/// entirely: the key only captures `(language, text)`, and serving them
/// from it could return a differently-voiced clip.
#[derive(Debug, Default)]
pub struct CachingRenderer {
    cache: AudioCache,
}

impl CachingRenderer {
    /// Creates a renderer with a fresh cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying cache.
    pub fn cache(&self) -> &AudioCache {
        &self.cache
    }

    /// Renders a request, serving cached bytes when possible.
    pub fn render(&self, request: &SynthesisRequest) -> SynthResult<Arc<RenderResult>> {
        if request.seed.is_some() || request.voice.is_some() {
            return render(request).map(Arc::new);
        }

        request.validate()?;

        let key = AudioCache::key(request);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let result = Arc::new(render(request)?);
        self.cache.insert(key, Arc::clone(&result));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use crate::request::Language;

    #[test]
    fn test_hit_returns_identical_bytes() {
        let renderer = CachingRenderer::new();
        let request = SynthesisRequest::new("Hello world", Language::En);

        let first = renderer.render(&request).unwrap();
        let second = renderer.render(&request).unwrap();

        assert_eq!(renderer.cache().len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.wav.wav_data, second.wav.wav_data);
    }

    #[test]
    fn test_distinct_keys_do_not_collide() {
        let renderer = CachingRenderer::new();

        let en = renderer
            .render(&SynthesisRequest::new("Hello", Language::En))
            .unwrap();
        let zh = renderer
            .render(&SynthesisRequest::new("Hello", Language::Zh))
            .unwrap();

        assert_eq!(renderer.cache().len(), 2);
        assert_ne!(en.wav.pcm_hash, zh.wav.pcm_hash);
    }

    #[test]
    fn test_invalid_request_is_not_cached() {
        let renderer = CachingRenderer::new();
        let err = renderer
            .render(&SynthesisRequest::new("", Language::En))
            .unwrap_err();

        assert!(matches!(err, SynthError::InvalidText { .. }));
        assert!(renderer.cache().is_empty());
    }

    #[test]
    fn test_seeded_request_bypasses_cache() {
        let renderer = CachingRenderer::new();
        let request = SynthesisRequest::new("Hello", Language::En).with_seed(7);

        renderer.render(&request).unwrap();
        assert!(renderer.cache().is_empty());
    }

    #[test]
    fn test_voiced_request_bypasses_cache() {
        let renderer = CachingRenderer::new();
        let request = SynthesisRequest::new("Hello", Language::En).with_voice("adam");

        renderer.render(&request).unwrap();
        assert!(renderer.cache().is_empty());
    }

    #[test]
    fn test_clear_empties_cache() {
        let renderer = CachingRenderer::new();
        renderer
            .render(&SynthesisRequest::new("Hello", Language::En))
            .unwrap();
        assert_eq!(renderer.cache().len(), 1);

        renderer.cache().clear();
        assert!(renderer.cache().is_empty());
    }

    #[test]
    fn test_concurrent_renders_share_one_entry() {
        let renderer = Arc::new(CachingRenderer::new());
        let request = SynthesisRequest::new("Concurrent hello", Language::En);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let renderer = Arc::clone(&renderer);
                let request = request.clone();
                std::thread::spawn(move || renderer.render(&request).unwrap().wav.pcm_hash.clone())
            })
            .collect();

        let hashes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(hashes.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(renderer.cache().len(), 1);
    }
}
