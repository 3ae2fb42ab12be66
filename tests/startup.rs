//! End-to-end startup sequencing: gate resolves, then the root view reads
//! the loaded configuration.

use shellcfg::app::App;
use shellcfg::config::ConfigLoader;
use shellcfg::environment::ENVIRONMENT;
use shellcfg::startup::Sequencer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONFIG_PATH: &str = "/assets/config.json";

async fn mock_config_server(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CONFIG_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn gate_then_view_shows_the_runtime_value() {
    let server = mock_config_server(200, serde_json::json!({"helloWorld": "Hello from Config"})).await;
    let mut loader = ConfigLoader::new(format!("{}{CONFIG_PATH}", server.uri()));

    Sequencer::new()
        .step("runtime config", async {
            loader.load().await.map_err(anyhow::Error::from)
        })
        .run()
        .await
        .expect("startup should succeed");

    let config = loader.get().unwrap().clone();
    let app = App::new(&config, ENVIRONMENT);

    assert_eq!(app.hello_from_config(), "Hello from Config");
    assert_eq!(app.hello_from_environment(), ENVIRONMENT.hello_world);
}

#[tokio::test]
async fn failed_gate_aborts_startup_with_the_step_name() {
    let server = mock_config_server(500, serde_json::json!({})).await;
    let mut loader = ConfigLoader::new(format!("{}{CONFIG_PATH}", server.uri()));

    let err = Sequencer::new()
        .step("runtime config", async {
            loader.load().await.map_err(anyhow::Error::from)
        })
        .run()
        .await
        .unwrap_err();

    assert_eq!(err.step, "runtime config");
    // The view is never constructed: the loader still refuses access.
    assert!(loader.get().is_err());
}
