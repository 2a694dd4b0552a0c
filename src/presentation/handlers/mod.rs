mod email_reply;
mod health;
mod summarize;
mod summarize_file;
mod task_response;
mod translate;

pub use email_reply::{EmailReplyRequest, email_reply_handler};
pub use health::{HealthResponse, SERVICE_NAME, health_handler};
pub use summarize::{SummarizeRequest, summarize_handler};
pub use summarize_file::summarize_file_handler;
pub use task_response::TaskResponse;
pub use translate::{TranslateRequest, translate_handler};
