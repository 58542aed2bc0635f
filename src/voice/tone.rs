use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

use super::Voice;

const BEEP_MS: u64 = 180;

/// Beeps through the default audio output instead of speaking.
///
/// The output device is opened on first use. If it can't be opened the
/// voice stays silent for the rest of the session.
pub struct ToneVoice {
    sink: Option<Sink>,
    // Declared after `sink` so the stream is dropped last.
    output: Option<(OutputStream, OutputStreamHandle)>,
    unavailable: bool,
}

impl ToneVoice {
    pub fn new() -> Self {
        Self {
            sink: None,
            output: None,
            unavailable: false,
        }
    }

    fn handle(&mut self) -> Option<&OutputStreamHandle> {
        if self.output.is_none() && !self.unavailable {
            match OutputStream::try_default() {
                Ok(output) => self.output = Some(output),
                Err(e) => {
                    debug!(error = %e, "no audio output, tone cues disabled");
                    self.unavailable = true;
                }
            }
        }
        self.output.as_ref().map(|(_, handle)| handle)
    }
}

impl Default for ToneVoice {
    fn default() -> Self {
        Self::new()
    }
}

impl Voice for ToneVoice {
    fn speak(&mut self, text: &str) {
        let freq = pitch_for(text);
        let Some(handle) = self.handle() else {
            return;
        };
        let sink = match Sink::try_new(handle) {
            Ok(sink) => sink,
            Err(e) => {
                debug!(error = %e, "failed to create audio sink");
                return;
            }
        };
        let beep = SineWave::new(freq)
            .take_duration(Duration::from_millis(BEEP_MS))
            .amplify(0.25);
        sink.append(beep);
        self.sink = Some(sink);
    }

    fn cancel(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Higher pitch the closer the countdown is to zero.
fn pitch_for(text: &str) -> f32 {
    match text {
        "Three" => 660.0,
        "Two" => 740.0,
        "One" => 880.0,
        _ => 520.0,
    }
}
