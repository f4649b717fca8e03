// From-field (sender address) endpoints

use serde_json::json;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::{Query, QueryParams};
use crate::response::ApiResponse;

impl Client {
    /// `GET from-fields/`
    pub async fn get_from_fields(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("from-fields", query).await
    }

    /// `GET from-fields/{fromFieldId}/?fields=...`
    pub async fn get_from_field(
        &self,
        from_field_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("from-fields/{from_field_id}"), fields(field_names))
            .await
    }

    /// Register a new sender address. The API sends a confirmation email
    /// to it before it can be used.
    ///
    /// `POST from-fields` with `{"email": ..., "name": ...}`
    pub async fn create_from_field(&self, email: &str, name: &str) -> Result<ApiResponse, Error> {
        self.post("from-fields", &json!({ "email": email, "name": name }))
            .await
    }

    /// `POST from-fields/{fromFieldId}/default` (empty body)
    pub async fn set_from_field_as_default(
        &self,
        from_field_id: &str,
    ) -> Result<ApiResponse, Error> {
        self.post_empty(&format!("from-fields/{from_field_id}/default"))
            .await
    }

    /// Delete a from-field, optionally naming the one that takes its place
    /// in newsletters and autoresponders still using it.
    ///
    /// `DELETE from-fields/{fromFieldId}/?fromFieldIdToReplaceWith=...`
    pub async fn delete_from_field(
        &self,
        from_field_id: &str,
        replace_with: Option<&str>,
    ) -> Result<ApiResponse, Error> {
        self.remove(
            &format!("from-fields/{from_field_id}"),
            QueryParams::new().param("fromFieldIdToReplaceWith", replace_with),
        )
        .await
    }
}
