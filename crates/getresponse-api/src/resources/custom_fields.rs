// Custom field definitions

use serde::Serialize;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET custom-fields/`
    pub async fn get_custom_fields(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("custom-fields", query).await
    }

    /// `GET custom-fields/{customFieldId}/?fields=...`
    pub async fn get_custom_field(
        &self,
        custom_field_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("custom-fields/{custom_field_id}"),
            fields(field_names),
        )
        .await
    }

    /// `POST custom-fields`
    pub async fn create_custom_field(
        &self,
        custom_field: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post("custom-fields", custom_field).await
    }

    /// `POST custom-fields/{customFieldId}`
    pub async fn update_custom_field(
        &self,
        custom_field_id: &str,
        custom_field: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("custom-fields/{custom_field_id}"), custom_field)
            .await
    }

    /// `DELETE custom-fields/{customFieldId}/`
    pub async fn delete_custom_field(&self, custom_field_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("custom-fields/{custom_field_id}"), Query::None)
            .await
    }
}
