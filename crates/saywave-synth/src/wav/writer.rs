//! Core WAV writing and PCM quantization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Headroom factor applied before quantization, leaving room for transient
/// overshoot from the oscillator mix instead of hard-clipping it.
pub const HEADROOM: f64 = 0.88;

/// 16-bit full-scale value. The clamp is symmetric at +/-32767; -32768 is
/// never emitted.
const FULL_SCALE: f64 = 32767.0;

/// Quantizes one float sample to 16-bit PCM.
///
/// Multiplies by full scale and the headroom factor, rounds to nearest,
/// and hard-clamps to the representable range. Clamping is a normal,
/// silent occurrence, not an error.
pub fn quantize_sample(sample: f64) -> i16 {
    (sample * FULL_SCALE * HEADROOM)
        .round()
        .clamp(-FULL_SCALE, FULL_SCALE) as i16
}

/// Converts f64 samples to little-endian 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize_sample(sample).to_le_bytes());
    }
    pcm
}

/// Writes a complete WAV file (44-byte header + PCM payload) to a writer.
///
/// All multi-byte header fields are little-endian; `ChunkSize` is
/// `36 + data_size` and `Subchunk2Size` equals the payload length.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let chunk_size = 36 + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&chunk_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = linear PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}
