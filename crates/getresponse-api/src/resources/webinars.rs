// Webinar endpoints (read-only)

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET webinars/`
    pub async fn get_webinars(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("webinars", query).await
    }

    /// `GET webinars/{webinarId}/?fields=...`
    pub async fn get_webinar(
        &self,
        webinar_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("webinars/{webinar_id}"), fields(field_names))
            .await
    }
}
