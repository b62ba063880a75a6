/// Canned suggestions shown at the bottom of the assistant panel.
pub const SUGGESTIONS: [&str; 6] = [
    "That's awesome! 👍",
    "Sounds like a plan! 🎯",
    "Let's catch up soon! ☕",
    "Missing you! 💕",
    "That's hilarious! 😂",
    "Good morning sunshine! ☀️",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Funny,
    Professional,
    #[default]
    Friendly,
    Romantic,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Funny, Tone::Professional, Tone::Friendly, Tone::Romantic];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Funny => "Funny",
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Romantic => "Romantic",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tone::Funny => "😄",
            Tone::Professional => "💼",
            Tone::Friendly => "😊",
            Tone::Romantic => "💕",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tone::Funny => "Humorous and playful responses",
            Tone::Professional => "Formal and business-like",
            Tone::Friendly => "Warm and casual conversation",
            Tone::Romantic => "Sweet and affectionate",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, 1)
    }

    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, *self, Self::ALL.len() - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Hinglish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Hinglish];

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Hinglish => "Hinglish",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, 1)
    }

    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, *self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(index + step) % all.len()]
}

/// Rows of the assistant panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssistantField {
    #[default]
    Tone,
    Language,
    AutoSuggestions,
    ContextAware,
}

impl AssistantField {
    pub const ALL: [AssistantField; 4] = [
        AssistantField::Tone,
        AssistantField::Language,
        AssistantField::AutoSuggestions,
        AssistantField::ContextAware,
    ];

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, 1)
    }

    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, *self, Self::ALL.len() - 1)
    }
}

/// Reply-style preferences. Held in memory for as long as the panel is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    pub tone: Tone,
    pub language: Language,
    pub auto_suggestions: bool,
    pub context_aware: bool,
    pub focus: AssistantField,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            language: Language::default(),
            auto_suggestions: true,
            context_aware: true,
            focus: AssistantField::default(),
        }
    }
}

impl AssistantSettings {
    /// Step the focused row's value forward (or backward).
    pub fn adjust(&mut self, forward: bool) {
        match self.focus {
            AssistantField::Tone => {
                self.tone = if forward { self.tone.next() } else { self.tone.prev() };
            }
            AssistantField::Language => {
                self.language = if forward { self.language.next() } else { self.language.prev() };
            }
            AssistantField::AutoSuggestions => self.auto_suggestions = !self.auto_suggestions,
            AssistantField::ContextAware => self.context_aware = !self.context_aware,
        }
    }
}
