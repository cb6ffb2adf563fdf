//! Domain models for the brand content service.

pub mod organization;
pub mod prompt;

pub use organization::Organization;
pub use prompt::PromptRecord;
