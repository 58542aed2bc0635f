pub mod announcer;
pub mod speech;
pub mod tone;

use tracing::info;

use crate::config::{VoiceBackend, VoiceConfig};

pub use announcer::CountdownAnnouncer;

/// Something that can voice a short countdown cue.
///
/// Implementations are best effort and never report failure: a missing
/// speech engine or audio device simply means nothing is heard.
pub trait Voice {
    fn speak(&mut self, text: &str);
    /// Cut off whatever is currently playing.
    fn cancel(&mut self);
}

/// The `off` backend.
pub struct SilentVoice;

impl Voice for SilentVoice {
    fn speak(&mut self, _text: &str) {}
    fn cancel(&mut self) {}
}

/// Build the voice configured in `[voice]`.
pub fn from_config(config: &VoiceConfig) -> Box<dyn Voice> {
    match config.backend {
        VoiceBackend::Speech => {
            let voice = speech::SpeechVoice::new(config.command.as_deref());
            if !voice.is_available() {
                info!("no speech program found, countdown cues are silent");
            }
            Box::new(voice)
        }
        VoiceBackend::Tone => Box::new(tone::ToneVoice::new()),
        VoiceBackend::Off => Box::new(SilentVoice),
    }
}
