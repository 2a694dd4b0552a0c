mod ai_outcome;
mod directive;
mod document;
mod task;

pub use ai_outcome::{AI_INTERNAL_FAILURE_MESSAGE, AI_PROVIDER_FAILURE_MESSAGE, AiOutcome};
pub use directive::Directive;
pub use document::{ContentType, Document};
pub use task::{
    EmailReplyTask, MISSING_FILE_MESSAGE, NO_READABLE_TEXT_MESSAGE, SummaryTask, TaskKind,
    TranslateTask, UNSUPPORTED_FILE_MESSAGE,
};
