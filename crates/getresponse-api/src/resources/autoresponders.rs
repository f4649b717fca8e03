// Autoresponder endpoints

use serde::Serialize;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::{Query, QueryParams};
use crate::response::ApiResponse;

impl Client {
    /// `GET autoresponders/`
    pub async fn get_autoresponders(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("autoresponders", query).await
    }

    /// `GET autoresponders/{autoresponderId}/?fields=...`
    pub async fn get_autoresponder(
        &self,
        autoresponder_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("autoresponders/{autoresponder_id}"),
            fields(field_names),
        )
        .await
    }

    /// Statistics across all autoresponders.
    ///
    /// `GET autoresponders/statistics/`
    pub async fn get_autoresponders_statistics(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("autoresponders/statistics", query).await
    }

    /// `GET autoresponders/{autoresponderId}/statistics/`
    pub async fn get_autoresponder_statistics(
        &self,
        autoresponder_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("autoresponders/{autoresponder_id}/statistics"),
            query,
        )
        .await
    }

    /// Rendered thumbnail of the message body. `size` is e.g. `"small"`.
    ///
    /// `GET autoresponders/{autoresponderId}/thumbnail/?size=...`
    pub async fn get_autoresponder_thumbnail(
        &self,
        autoresponder_id: &str,
        size: &str,
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("autoresponders/{autoresponder_id}/thumbnail"),
            QueryParams::new().param("size", size),
        )
        .await
    }

    /// `POST autoresponders`
    pub async fn create_autoresponder(
        &self,
        autoresponder: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post("autoresponders", autoresponder).await
    }

    /// `POST autoresponders/{autoresponderId}`
    pub async fn update_autoresponder(
        &self,
        autoresponder_id: &str,
        autoresponder: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("autoresponders/{autoresponder_id}"), autoresponder)
            .await
    }

    /// `DELETE autoresponders/{autoresponderId}/`
    pub async fn delete_autoresponder(&self, autoresponder_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("autoresponders/{autoresponder_id}"), Query::None)
            .await
    }
}
