use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use surrealdb::engine::remote::http::{Client, Http};
use surrealdb::opt::auth::Root;
use surrealdb::{Response, Surreal};
use tracing::{error, info};

/// Database service. Thin wrapper around the SurrealDB HTTP client so the
/// rest of the crate works with `AppError` and plain tables.
#[derive(Clone)]
pub struct Database {
    client: Surreal<Client>,
}

impl Database {
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Initializing database connection to {}", config.database_url);

        let endpoint = config
            .database_url
            .trim_start_matches("http://")
            .trim_start_matches("https://")
            .to_string();

        let client = Surreal::new::<Http>(endpoint).await?;
        client
            .signin(Root {
                username: &config.database_username,
                password: &config.database_password,
            })
            .await?;
        client
            .use_ns(&config.database_namespace)
            .use_db(&config.database_name)
            .await?;

        Ok(Self { client })
    }

    /// Runs a trivial query to confirm the connection is usable.
    pub async fn verify_connection(&self) -> Result<()> {
        match self.client.query("INFO FOR DB").await {
            Ok(_) => {
                info!("Database connection verified successfully");
                Ok(())
            }
            Err(e) => {
                error!("Failed to verify database connection: {}", e);
                Err(e.into())
            }
        }
    }

    pub async fn query(&self, sql: &str) -> Result<Response> {
        Ok(self.client.query(sql).await?)
    }

    pub async fn query_with_params<P>(&self, sql: &str, params: P) -> Result<Response>
    where
        P: Serialize,
    {
        Ok(self.client.query(sql).bind(params).await?)
    }

    pub async fn create<T>(&self, table: &str, data: T) -> Result<T>
    where
        T: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + Debug + 'static,
    {
        let results: Vec<T> = self.client.create(table).content(data).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::AppError::Internal("Failed to create record".to_string()))
    }

}
