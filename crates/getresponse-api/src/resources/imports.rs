// Contact import jobs

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET imports/`
    pub async fn get_imports(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("imports", query).await
    }

    /// `GET imports/{importId}/?fields=...`
    pub async fn get_import(&self, import_id: &str, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get(&format!("imports/{import_id}"), fields(field_names))
            .await
    }
}
