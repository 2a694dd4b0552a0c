mod ai_gateway;
mod assistant_service;
mod instruction_parser;
mod prompt_composer;

pub use ai_gateway::AiGateway;
pub use assistant_service::{AssistantError, AssistantService};
pub use instruction_parser::parse_directives;
pub use prompt_composer::{
    NO_CONTEXT_PLACEHOLDER, SYSTEM_ROLE, compose_email_reply, compose_summary, compose_translation,
};
