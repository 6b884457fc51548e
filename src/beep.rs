use std::f32::consts::TAU;
use raylib::core::audio::{RaylibAudio, Sound};
use crate::constants::*;
use crate::error::{GliderError, GliderResult};

const BITS_PER_SAMPLE: u16 = 16;
const AMPLITUDE: f32 = 0.3;

/// Mono 16-bit PCM WAV file holding a pure sine tone.
pub fn tone_wav(frequency: u32, duration: f32, sample_rate: u32) -> Vec<u8> {
    let sample_count = (sample_rate as f32 * duration.max(0.0)).round() as u32;
    let block_align = BITS_PER_SAMPLE / 8;
    let data_len = sample_count * block_align as u32;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for i in 0..sample_count {
        let t = i as f32 / sample_rate as f32;
        let sample = (TAU * frequency as f32 * t).sin() * AMPLITUDE * i16::MAX as f32;
        bytes.extend_from_slice(&(sample as i16).to_le_bytes());
    }

    bytes
}

/// Short fixed tone played at the start of every cycle.
pub struct Beeper<'aud> {
    sound: Sound<'aud>,
}

impl<'aud> Beeper<'aud> {
    pub fn new(audio: &'aud RaylibAudio) -> GliderResult<Self> {
        let bytes = tone_wav(BEEP_FREQUENCY, BEEP_DURATION, BEEP_SAMPLE_RATE);
        let wave = audio.new_wave_from_memory(".wav", &bytes)
            .map_err(|e| GliderError::audio(format!("tone wave: {}", e)))?;
        let sound = audio.new_sound_from_wave(&wave)
            .map_err(|e| GliderError::audio(format!("tone sound: {}", e)))?;
        Ok(Self { sound })
    }

    pub fn beep(&self) {
        self.sound.play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn header_describes_mono_pcm16() {
        let wav = tone_wav(2000, 0.1, 44100);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, 24), 44100);
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
    }

    #[test]
    fn data_length_matches_duration() {
        let wav = tone_wav(2000, 0.1, 44100);
        let data_len = u32_at(&wav, 40);
        assert_eq!(data_len, 4410 * 2);
        assert_eq!(wav.len(), 44 + data_len as usize);
        assert_eq!(u32_at(&wav, 4) as usize, wav.len() - 8);
    }

    #[test]
    fn samples_stay_within_amplitude() {
        let wav = tone_wav(2000, 0.05, 8000);
        let limit = (AMPLITUDE * i16::MAX as f32) as i16 + 1;
        for chunk in wav[44..].chunks_exact(2) {
            let s = i16::from_le_bytes([chunk[0], chunk[1]]);
            assert!(s.abs() <= limit);
        }
    }
}
