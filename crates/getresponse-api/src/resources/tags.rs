// Tag endpoints

use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET tags/`
    pub async fn get_tags(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("tags", query).await
    }

    /// `GET tags/{tagId}/`
    pub async fn get_tag(&self, tag_id: &str, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get(&format!("tags/{tag_id}"), query).await
    }

    /// `POST tags` with `{"name": ...}`
    pub async fn create_tag(&self, name: &str) -> Result<ApiResponse, Error> {
        self.post("tags", &json!({ "name": name })).await
    }

    /// Rename a tag.
    ///
    /// `POST tags/{tagId}` with `{"name": ...}`
    pub async fn update_tag(&self, tag_id: &str, name: &str) -> Result<ApiResponse, Error> {
        self.post(&format!("tags/{tag_id}"), &json!({ "name": name }))
            .await
    }

    /// `DELETE tags/{tagId}/`
    pub async fn delete_tag(&self, tag_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("tags/{tag_id}"), Query::None).await
    }
}
