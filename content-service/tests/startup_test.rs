use content_service::config::{ContentConfig, MongoConfig, OpenAiConfig};
use content_service::startup::Application;
use service_core::config::Config;
use service_core::error::AppError;

fn config_with_mongo_uri(uri: &str) -> ContentConfig {
    ContentConfig {
        common: Config { port: 0 },
        mongodb: MongoConfig {
            uri: uri.to_string(),
            database: "brand_content_test".to_string(),
        },
        openai: OpenAiConfig {
            api_key: "test-key".to_string(),
            model: "gpt-4".to_string(),
            base_url: "http://localhost:9999/v1".to_string(),
        },
    }
}

#[tokio::test]
async fn starts_when_srv_host_cannot_be_resolved() {
    let config = config_with_mongo_uri("mongodb+srv://cluster0.does-not-exist.invalid/app");

    let app = Application::build(config)
        .await
        .expect("Startup should tolerate an unreachable database");

    assert_ne!(app.port(), 0);
}

#[tokio::test]
async fn refuses_to_start_with_malformed_uri() {
    let config = config_with_mongo_uri("postgres://localhost/app");

    let result = Application::build(config).await;

    assert!(matches!(result, Err(AppError::ConfigError(_))));
}
