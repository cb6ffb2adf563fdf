pub mod analytics;
pub mod fallback;
pub mod generate;
pub mod health;
pub mod onboard;
pub mod rate;

pub use analytics::get_analytics;
pub use fallback::not_found;
pub use generate::generate_content;
pub use health::{health_check, metrics_endpoint, readiness_check, welcome};
pub use onboard::onboard_organization;
pub use rate::rate_content;
