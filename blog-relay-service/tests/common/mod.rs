use blog_relay_service::config::{CorsSettings, GeminiSettings, RelayConfig};
use blog_relay_service::startup::Application;
use relay_core::config::Config as CoreConfig;
use secrecy::Secret;
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-1.5-flash";
pub const TEST_ORIGIN: &str = "https://blog-buddy-ai.vercel.app";

pub fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", TEST_MODEL)
}

pub fn test_config(api_base: String) -> RelayConfig {
    RelayConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        gemini: GeminiSettings {
            api_key: Secret::new(TEST_API_KEY.to_string()),
            model: TEST_MODEL.to_string(),
            api_base,
            request_timeout_secs: Some(10),
        },
        cors: CorsSettings {
            allowed_origin: TEST_ORIGIN.to_string(),
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub gemini: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let gemini = MockServer::start().await;
        let api_base = format!("{}/v1beta", gemini.uri());

        let app = Application::build(test_config(api_base))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, gemini }
    }

    pub async fn post_blog(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&self.address)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
