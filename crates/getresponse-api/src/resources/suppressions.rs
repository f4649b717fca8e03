// Suppression lists

use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET suppressions/`
    pub async fn get_suppressions(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("suppressions", query).await
    }

    /// `GET suppressions/{suppressionId}/`
    pub async fn get_suppression(&self, suppression_id: &str) -> Result<ApiResponse, Error> {
        self.get(&format!("suppressions/{suppression_id}"), Query::None)
            .await
    }

    /// `POST suppressions` with `{"name": ..., "masks": [...]}`
    pub async fn create_suppression(&self, name: &str, masks: &[&str]) -> Result<ApiResponse, Error> {
        self.post("suppressions", &json!({ "name": name, "masks": masks }))
            .await
    }

    /// Replace a suppression list's name and masks.
    ///
    /// `POST suppressions/{suppressionId}` with `{"name": ..., "masks": [...]}`
    pub async fn update_suppression(
        &self,
        suppression_id: &str,
        name: &str,
        masks: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("suppressions/{suppression_id}"),
            &json!({ "name": name, "masks": masks }),
        )
        .await
    }

    /// `DELETE suppressions/{suppressionId}/`
    pub async fn delete_suppression(&self, suppression_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("suppressions/{suppression_id}"), Query::None)
            .await
    }
}
