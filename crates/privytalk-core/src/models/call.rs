use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Voice,
    Video,
}

impl CallKind {
    pub fn label(&self) -> &'static str {
        match self {
            CallKind::Voice => "Voice Call",
            CallKind::Video => "Video Call",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub kind: CallKind,
    pub duration: &'static str,
    pub when: &'static str,
    pub incoming: bool,
}

/// Fixed history shown under the call buttons.
pub fn call_history() -> Vec<CallRecord> {
    vec![
        CallRecord { kind: CallKind::Video, duration: "12:34", when: "2 hours ago", incoming: false },
        CallRecord { kind: CallKind::Voice, duration: "05:42", when: "Yesterday", incoming: true },
        CallRecord { kind: CallKind::Video, duration: "25:18", when: "2 days ago", incoming: false },
    ]
}

/// A pretend call. Starting one connects instantly; nothing is transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallState {
    active: bool,
    kind: CallKind,
    video_on: bool,
    mic_on: bool,
}

impl Default for CallState {
    fn default() -> Self {
        Self {
            active: false,
            kind: CallKind::Voice,
            video_on: false,
            mic_on: true,
        }
    }
}

impl CallState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, kind: CallKind) {
        debug!(?kind, "Call started");
        self.kind = kind;
        self.active = true;
        if kind == CallKind::Video {
            self.video_on = true;
        }
    }

    pub fn end(&mut self) {
        debug!("Call ended");
        self.active = false;
        self.video_on = false;
        self.mic_on = true;
    }

    pub fn toggle_mic(&mut self) {
        if self.active {
            self.mic_on = !self.mic_on;
        }
    }

    pub fn toggle_video(&mut self) {
        if self.active {
            self.video_on = !self.video_on;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    pub fn is_video_on(&self) -> bool {
        self.video_on
    }

    pub fn is_mic_on(&self) -> bool {
        self.mic_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_call_turns_camera_on() {
        let mut call = CallState::new();
        call.start(CallKind::Video);
        assert!(call.is_active());
        assert!(call.is_video_on());
        assert_eq!(call.kind(), CallKind::Video);
    }

    #[test]
    fn test_voice_call_leaves_camera_off() {
        let mut call = CallState::new();
        call.start(CallKind::Voice);
        assert!(!call.is_video_on());
        assert!(call.is_mic_on());
    }

    #[test]
    fn test_end_resets_devices() {
        let mut call = CallState::new();
        call.start(CallKind::Video);
        call.toggle_mic();
        assert!(!call.is_mic_on());

        call.end();
        assert!(!call.is_active());
        assert!(!call.is_video_on());
        assert!(call.is_mic_on());
    }

    #[test]
    fn test_toggles_ignored_when_idle() {
        let mut call = CallState::new();
        call.toggle_mic();
        call.toggle_video();
        assert_eq!(call, CallState::default());
    }
}
