use glossary_service::config::GlossaryConfig;
use glossary_service::services::MongoDb;
use glossary_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("glossary_test_{}", Uuid::new_v4());

        let mut config = GlossaryConfig::load().expect("Failed to load configuration");
        config.http.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Create an entry over HTTP and return its id, read back from the listing
    /// (the create response carries only a message).
    pub async fn create_entry(&self, term: &str, interpretation: &str) -> String {
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/entries", self.address))
            .json(&serde_json::json!({ "term": term, "interpretation": interpretation }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "Create failed");

        let entries: Vec<serde_json::Value> = client
            .get(format!("{}/entries", self.address))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse JSON");

        entries
            .iter()
            .find(|e| e["term"] == term && e["interpretation"] == interpretation)
            .expect("Created entry missing from listing")["id"]
            .as_str()
            .expect("Entry id is not a string")
            .to_string()
    }

    /// Cleanup test resources (drop the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
