use once_cell::sync::Lazy;
use serde_json::Value;
use std::fs::copy;
use tempfile::TempDir;
use uuid::Uuid;

use plantlog::config::{ServerConfig, Settings, TelemetryConfig};
use plantlog::database::{new_pool, run_migrations, DbPool};
use plantlog::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db_pool: DbPool,
    pub api_client: reqwest::Client,
}

const DB_TEMPLATE_FILE: &str = "test.db";

// A migrated template database; each test copies it rather than re-running
// migrations.
static TEST_DB_TEMPLATE: Lazy<TempDir> = Lazy::new(|| {
    let temp_dir = TempDir::new().unwrap();
    let template_db_path = temp_dir.path().join(DB_TEMPLATE_FILE);

    let pool = new_pool(template_db_path.to_str().unwrap()).unwrap();
    run_migrations(&pool).expect("diesel migrations");

    temp_dir
});

impl TestApp {
    pub async fn get_plants(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/plant", &self.address))
            .send()
            .await
            .unwrap()
    }

    pub async fn get_plant_names(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/plant/name", &self.address))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_create_plant<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/plant/create", &self.address))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_update_plant<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/plant/update", &self.address))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_fertilize(&self, body: &Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/plant/fertilize", &self.address))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_repot(&self, body: &Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/plant/repot", &self.address))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_water(&self, body: &Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/plant/water", &self.address))
            .json(body)
            .send()
            .await
            .unwrap()
    }
}

pub fn spawn_test_db() -> String {
    let test_db_dir = Lazy::force(&TEST_DB_TEMPLATE);
    let test_db_path = test_db_dir.path().to_str().unwrap().to_string();
    let template_db = format!("{}/{}", test_db_path, DB_TEMPLATE_FILE);

    let db_instance = format!("{}/{}.db", test_db_path, Uuid::new_v4());
    copy(&template_db, &db_instance).unwrap();

    db_instance
}

pub async fn spawn_app() -> TestApp {
    let settings = Settings {
        database_url: spawn_test_db(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            allow_localhost_cors: false,
        },
        telemetry: TelemetryConfig {
            receiver_url: None,
            api_key: None,
        },
    };

    let db_pool = new_pool(&settings.database_url).unwrap();

    let application = Application::build(settings, db_pool.clone());
    let port = application.port();

    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://localhost:{}", port),
        port,
        db_pool,
        api_client,
    }
}
