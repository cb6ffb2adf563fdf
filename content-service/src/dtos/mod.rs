pub mod analytics;
pub mod content;

pub use analytics::{AnalyticsResponse, FeedbackEntry};
pub use content::{
    GenerateRequest, GenerateResponse, MessageResponse, OnboardRequest, RateRequest,
};
