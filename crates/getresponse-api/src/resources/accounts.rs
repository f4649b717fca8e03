// Account-level settings, history and blacklist

use serde::Serialize;
use serde_json::json;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::{Query, QueryParams};
use crate::response::ApiResponse;

impl Client {
    /// `GET accounts/?fields=...`
    pub async fn get_account(&self, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get("accounts", fields(field_names)).await
    }

    /// `GET accounts/billing/?fields=...`
    pub async fn get_account_billing(&self, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get("accounts/billing", fields(field_names)).await
    }

    /// `GET accounts/login-history/?fields=...&perPage=...&page=...`
    pub async fn get_account_login_history(
        &self,
        field_names: &[&str],
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<ApiResponse, Error> {
        self.get(
            "accounts/login-history",
            fields(field_names)
                .param("perPage", per_page)
                .param("page", page),
        )
        .await
    }

    /// `GET accounts/badge/`
    pub async fn get_account_badge(&self) -> Result<ApiResponse, Error> {
        self.get("accounts/badge", Query::None).await
    }

    /// `GET accounts/industries/?fields=...`
    pub async fn get_account_industries(&self, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get("accounts/industries", fields(field_names)).await
    }

    /// `GET accounts/time-zones/?fields=...`
    pub async fn get_account_time_zones(&self, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get("accounts/time-zones", fields(field_names)).await
    }

    /// Blacklisted masks matching `mask`.
    ///
    /// `GET accounts/blacklists/?query[mask]=...`
    pub async fn get_account_blacklist(&self, mask: &str) -> Result<ApiResponse, Error> {
        self.get(
            "accounts/blacklists",
            QueryParams::new().query("mask", mask),
        )
        .await
    }

    /// Replace the account-wide blacklist.
    ///
    /// `POST accounts/blacklists` with `{"masks": [...]}`
    pub async fn update_account_blacklist(&self, masks: &[&str]) -> Result<ApiResponse, Error> {
        self.post("accounts/blacklists", &json!({ "masks": masks }))
            .await
    }

    /// Show or hide the GetResponse badge in emails.
    ///
    /// `POST accounts/badge` with `{"status": "enabled"|"disabled"}`
    pub async fn update_account_badge_status(&self, status: &str) -> Result<ApiResponse, Error> {
        self.post("accounts/badge", &json!({ "status": status }))
            .await
    }

    /// `POST accounts`
    pub async fn update_account_information(
        &self,
        information: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post("accounts", information).await
    }
}
