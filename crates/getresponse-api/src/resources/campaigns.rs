// Campaign (contact list) endpoints
//
// A "campaign" in the API is a contact list. Statistics endpoints are
// account-wide and filtered through `query[campaignId]` plus date ranges.

use serde::Serialize;
use serde_json::json;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET campaigns/`
    pub async fn get_campaigns(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("campaigns", query).await
    }

    /// `GET campaigns/{campaignId}/?fields=...`
    pub async fn get_campaign(
        &self,
        campaign_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("campaigns/{campaign_id}"), fields(field_names))
            .await
    }

    /// `GET campaigns/{campaignId}/contacts/`
    pub async fn get_campaign_contacts(
        &self,
        campaign_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("campaigns/{campaign_id}/contacts"), query)
            .await
    }

    /// `GET campaigns/{campaignId}/blacklists/`
    pub async fn get_campaign_blacklist(
        &self,
        campaign_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("campaigns/{campaign_id}/blacklists"), query)
            .await
    }

    // ── Statistics ───────────────────────────────────────────────────

    /// `GET campaigns/statistics/list-size/`
    pub async fn get_campaign_statistics_list_size(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("campaigns/statistics/list-size", query).await
    }

    /// `GET campaigns/statistics/locations/`
    pub async fn get_campaign_statistics_locations(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("campaigns/statistics/locations", query).await
    }

    /// `GET campaigns/statistics/origins/`
    pub async fn get_campaign_statistics_origins(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("campaigns/statistics/origins", query).await
    }

    /// `GET campaigns/statistics/removals/`
    pub async fn get_campaign_statistics_removals(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("campaigns/statistics/removals", query).await
    }

    /// `GET campaigns/statistics/subscriptions/`
    pub async fn get_campaign_statistics_subscriptions(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("campaigns/statistics/subscriptions", query).await
    }

    /// `GET campaigns/statistics/balance/`
    pub async fn get_campaign_statistics_balance(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("campaigns/statistics/balance", query).await
    }

    /// `GET campaigns/statistics/summary/`
    pub async fn get_campaign_statistics_summary(
        &self,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get("campaigns/statistics/summary", query).await
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// `POST campaigns`
    pub async fn create_campaign(&self, campaign: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post("campaigns", campaign).await
    }

    /// `POST campaigns/{campaignId}`
    pub async fn update_campaign(
        &self,
        campaign_id: &str,
        campaign: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("campaigns/{campaign_id}"), campaign).await
    }

    /// Replace the list-level blacklist.
    ///
    /// `POST campaigns/{campaignId}/blacklists` with `{"masks": [...]}`
    pub async fn update_campaign_blacklist(
        &self,
        campaign_id: &str,
        masks: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("campaigns/{campaign_id}/blacklists"),
            &json!({ "masks": masks }),
        )
        .await
    }
}
