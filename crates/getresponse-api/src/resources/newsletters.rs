// Newsletter endpoints

use serde::Serialize;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET newsletters/`
    pub async fn get_newsletters(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("newsletters", query).await
    }

    /// `GET newsletters/{newsletterId}/?fields=...`
    pub async fn get_newsletter(
        &self,
        newsletter_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("newsletters/{newsletter_id}"), fields(field_names))
            .await
    }

    /// Aggregated statistics across newsletters.
    ///
    /// `GET newsletters/statistics/`
    pub async fn get_newsletters_stats(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("newsletters/statistics", query).await
    }

    /// `GET newsletters/{newsletterId}/statistics/`
    pub async fn get_newsletter_stats(
        &self,
        newsletter_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("newsletters/{newsletter_id}/statistics"), query)
            .await
    }

    /// `POST newsletters`
    pub async fn create_newsletter(&self, newsletter: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post("newsletters", newsletter).await
    }

    /// Send a draft newsletter.
    ///
    /// `POST newsletters/send-draft`
    pub async fn send_draft(&self, draft: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post("newsletters/send-draft", draft).await
    }

    /// Cancel a scheduled newsletter.
    ///
    /// `POST newsletters/{newsletterId}` (empty body)
    pub async fn cancel_newsletter(&self, newsletter_id: &str) -> Result<ApiResponse, Error> {
        self.post_empty(&format!("newsletters/{newsletter_id}"))
            .await
    }

    /// `DELETE newsletters/{newsletterId}/`
    pub async fn delete_newsletter(&self, newsletter_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("newsletters/{newsletter_id}"), Query::None)
            .await
    }
}
