//! Procedurally generated sound cues.
//!
//! No sound files are shipped; cues are synthesized with fundsp at
//! trigger time and played fire-and-forget through rodio. Opening the
//! output device is best-effort: on failure the sink stays disabled for
//! the whole session and `play` is a no-op, with gameplay unaffected.

use fundsp::{hpc::*, prelude::*};
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use std::time::Duration;

/// Sound cue identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The player left the ground.
    Jump,
    /// The run just ended on a spike.
    Crash,
}

/// Audio output for the game.
pub struct AudioSink {
    stream: Option<OutputStream>,
}

impl Default for AudioSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink {
    /// Open the default output stream. A missing or busy audio device
    /// leaves the sink disabled; there is no retry.
    pub fn new() -> Self {
        Self {
            stream: OutputStreamBuilder::open_default_stream().ok(),
        }
    }

    /// True when an output device was opened at startup.
    pub fn is_enabled(&self) -> bool {
        self.stream.is_some()
    }

    /// Play a cue. Does nothing when the sink is disabled.
    pub fn play(&self, cue: Cue) {
        let Some(stream) = &self.stream else { return };
        let sink = Sink::connect_new(stream.mixer());
        match cue {
            Cue::Jump => queue_jump(&sink),
            Cue::Crash => queue_crash(&sink),
        }
        sink.detach();
    }
}

/// Short rising chirp: 260Hz up to 540Hz over 90ms, fading out over 120ms.
fn queue_jump(sink: &Sink) {
    let freq = lfo(|t: f64| lerp11(260.0, 540.0, (t / 0.09).min(1.0)));
    let gain = lfo(|t: f64| lerp11(0.12, 0.0, (t / 0.12).min(1.0)));
    let sound = freq >> square() >> mul(gain);

    // fundsp uses 44.1kHz by default
    let source = rodio::source::from_iter(sound.take(44100 * 0.12))
        .convert_samples::<f32>()
        .periodic_samples(Duration::from_secs_f32(1.0 / 44100.0), 1);
    sink.append(source);
}

/// Falling sawtooth sweep: 400Hz down to 90Hz over 0.35s, fading over 0.45s.
fn queue_crash(sink: &Sink) {
    let freq = lfo(|t: f64| lerp11(400.0, 90.0, (t / 0.35).min(1.0)));
    let gain = lfo(|t: f64| lerp11(0.15, 0.0, (t / 0.45).min(1.0)));
    let sound = freq >> saw() >> mul(gain);

    let source = rodio::source::from_iter(sound.take(44100 * 0.45))
        .convert_samples::<f32>()
        .periodic_samples(Duration::from_secs_f32(1.0 / 44100.0), 1);
    sink.append(source);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_sink_plays_as_noop() {
        // The no-device path: every cue must be silently swallowed.
        let sink = AudioSink { stream: None };
        assert!(!sink.is_enabled());
        sink.play(Cue::Jump);
        sink.play(Cue::Crash);
    }
}
