// RSS newsletter endpoints

use serde::Serialize;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET rss-newsletters/`
    pub async fn get_rss_newsletters(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("rss-newsletters", query).await
    }

    /// `GET rss-newsletters/{rssNewsletterId}/?fields=...`
    pub async fn get_rss_newsletter(
        &self,
        rss_newsletter_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("rss-newsletters/{rss_newsletter_id}"),
            fields(field_names),
        )
        .await
    }

    /// `GET rss-newsletters/statistics/`
    pub async fn get_rss_newsletters_statistics(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("rss-newsletters/statistics", query).await
    }

    /// `GET rss-newsletters/{rssNewsletterId}/statistics/`
    pub async fn get_rss_newsletter_statistics(
        &self,
        rss_newsletter_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("rss-newsletters/{rss_newsletter_id}/statistics"),
            query,
        )
        .await
    }

    /// `POST rss-newsletters`
    pub async fn create_rss_newsletter(
        &self,
        rss_newsletter: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post("rss-newsletters", rss_newsletter).await
    }

    /// `POST rss-newsletters/{rssNewsletterId}`
    pub async fn update_rss_newsletter(
        &self,
        rss_newsletter_id: &str,
        rss_newsletter: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("rss-newsletters/{rss_newsletter_id}"),
            rss_newsletter,
        )
        .await
    }

    /// `DELETE rss-newsletters/{rssNewsletterId}/`
    pub async fn delete_rss_newsletter(&self, rss_newsletter_id: &str) -> Result<ApiResponse, Error> {
        self.remove(
            &format!("rss-newsletters/{rss_newsletter_id}"),
            Query::None,
        )
        .await
    }
}
