pub mod analytics;
pub mod database;
pub mod instructions;
pub mod metrics;
pub mod providers;
pub mod store;

pub use analytics::summarize;
pub use database::MongoContentStore;
pub use instructions::build_system_instruction;
pub use self::metrics::{get_metrics, init_metrics};
pub use store::{ContentStore, InMemoryContentStore};
