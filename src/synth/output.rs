use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use super::{voices_for, ToneSink, Voice};
use crate::{NoteName, Result};

const SAMPLE_RATE: u32 = 44100;

/// The default audio output: a stereo i16 stream whose callback mixes the
/// queued voices. Keep it alive for as long as tones should sound.
pub struct AudioOutput {
    _stream: cpal::Stream,
    handle: SynthHandle,
}

/// Cloneable handle that fires notes into the output's voice queue.
#[derive(Clone)]
pub struct SynthHandle {
    voices: Arc<Mutex<Vec<Voice>>>,
    sample_rate: u32,
}

impl AudioOutput {
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow!("no output device available"))?;
        log::info!("Audio device: {}", device.name().unwrap_or("UNKNOWN".into()));

        let config = device
            .supported_output_configs()?
            .find(|c| {
                c.channels() == 2
                    && c.max_sample_rate().0 >= SAMPLE_RATE
                    && c.sample_format() == cpal::SampleFormat::I16
            })
            .ok_or_else(|| anyhow!("no suitable output config"))?
            .with_sample_rate(cpal::SampleRate(SAMPLE_RATE));
        log::info!("Audio output config: {:?}", config);

        let sample_rate = config.sample_rate().0;
        let voices: Arc<Mutex<Vec<Voice>>> = Arc::new(Mutex::new(Vec::new()));

        let callback_voices = voices.clone();
        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [i16], _info: &cpal::OutputCallbackInfo| {
                let mut voices = callback_voices.lock().unwrap();
                for frame in data.chunks_mut(2) {
                    let mut mixed = 0.0f32;
                    voices.retain_mut(|voice| match voice.next() {
                        Some(value) => {
                            mixed += value;
                            true
                        }
                        None => false,
                    });
                    for sample in frame.iter_mut() {
                        *sample = (mixed * 32767.0) as i16;
                    }
                }
            },
            move |err| {
                log::error!("Audio error: {:?}", err);
            },
            None,
        )?;
        stream.play()?;

        Ok(Self {
            _stream: stream,
            handle: SynthHandle {
                voices,
                sample_rate,
            },
        })
    }

    pub fn handle(&self) -> SynthHandle {
        self.handle.clone()
    }
}

impl ToneSink for SynthHandle {
    fn fire(&self, note: NoteName) {
        let new_voices = voices_for(self.sample_rate, note);
        self.voices.lock().unwrap().extend(new_voices);
    }
}
