use std::fmt;

pub const UNSUPPORTED_FILE_MESSAGE: &str = "❌ Dateityp nicht unterstützt.";
pub const NO_READABLE_TEXT_MESSAGE: &str = "❌ Datei enthält keinen lesbaren Text.";
pub const MISSING_FILE_MESSAGE: &str = "❌ Keine Datei hochgeladen.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Summarize,
    SummarizeFile,
    EmailReply,
    Translate,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::SummarizeFile => "summarize_file",
            Self::EmailReply => "email_reply",
            Self::Translate => "translate",
        }
    }

    /// Generic result text returned when the task fails unexpectedly.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Summarize => "❌ Fehler bei der Text-Zusammenfassung.",
            Self::SummarizeFile => "❌ Fehler bei der Datei-Zusammenfassung.",
            Self::EmailReply => "❌ Fehler bei der E-Mail-Erstellung.",
            Self::Translate => "❌ Fehler bei der Übersetzung.",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTask {
    pub text: String,
    pub focus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReplyTask {
    pub original_email: String,
    pub keywords: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateTask {
    pub text: String,
    pub target_lang: String,
    pub style: String,
    pub context: Option<String>,
}
