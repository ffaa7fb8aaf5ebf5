// src/db.rs

use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::AppConfig;
use crate::repositories::StorageError;

/// Connects to MongoDB and pings the target database so a bad URI fails at
/// startup rather than on the first request.
pub async fn connect(config: &AppConfig) -> Result<Database, StorageError> {
  let client = Client::with_uri_str(&config.mongodb_uri).await?;
  let database = client.database(&config.mongodb_database);
  database.run_command(doc! { "ping": 1 }).await?;
  Ok(database)
}
