pub const AI_PROVIDER_FAILURE_MESSAGE: &str = "❌ Fehler bei der KI-Verarbeitung.";
pub const AI_INTERNAL_FAILURE_MESSAGE: &str = "❌ Interner Serverfehler bei der KI.";

/// Result of one completion call, collapsed to what the caller may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiOutcome {
    Completed(String),
    ProviderFailed,
    InternalFailed,
}

impl AiOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn into_message(self) -> String {
        match self {
            Self::Completed(text) => text,
            Self::ProviderFailed => AI_PROVIDER_FAILURE_MESSAGE.to_string(),
            Self::InternalFailed => AI_INTERNAL_FAILURE_MESSAGE.to_string(),
        }
    }
}
