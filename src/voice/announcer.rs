use tracing::debug;

use super::Voice;

/// Speaks "Three", "Two", "One" as the countdown reaches those values.
///
/// Cues fire on value changes only: seeing the same remaining value twice in
/// a row (pause and resume at 2, say) stays silent, while a reset followed by
/// a fresh countdown announces again.
pub struct CountdownAnnouncer {
    voice: Box<dyn Voice>,
    last_seen: Option<u32>,
}

impl CountdownAnnouncer {
    pub fn new(voice: Box<dyn Voice>) -> Self {
        Self {
            voice,
            last_seen: None,
        }
    }

    /// Feed the latest remaining-seconds value. Returns the cue spoken, if any.
    pub fn observe(&mut self, remaining: u32) -> Option<&'static str> {
        if self.last_seen == Some(remaining) {
            return None;
        }
        self.last_seen = Some(remaining);

        let cue = cue_for(remaining)?;
        debug!(remaining, cue, "countdown cue");
        self.voice.cancel();
        self.voice.speak(cue);
        Some(cue)
    }

    /// Stop any utterance still playing.
    pub fn silence(&mut self) {
        self.voice.cancel();
    }
}

fn cue_for(remaining: u32) -> Option<&'static str> {
    match remaining {
        3 => Some("Three"),
        2 => Some("Two"),
        1 => Some("One"),
        _ => None,
    }
}
