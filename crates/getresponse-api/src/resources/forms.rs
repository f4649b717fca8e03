// Forms, legacy web forms and landing pages
//
// All three are read-only through the API.

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    // ── Forms ────────────────────────────────────────────────────────

    /// `GET forms/`
    pub async fn get_forms(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("forms", query).await
    }

    /// `GET forms/{formId}/?fields=...`
    pub async fn get_form(&self, form_id: &str, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get(&format!("forms/{form_id}"), fields(field_names))
            .await
    }

    /// A/B test variants of a form.
    ///
    /// `GET forms/{formId}/variants/?fields=...`
    pub async fn get_form_variants(
        &self,
        form_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("forms/{form_id}/variants"), fields(field_names))
            .await
    }

    // ── Web forms ────────────────────────────────────────────────────

    /// `GET web-forms/`
    pub async fn get_web_forms(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("web-forms", query).await
    }

    /// `GET web-forms/{webFormId}/?fields=...`
    pub async fn get_web_form(
        &self,
        web_form_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("web-forms/{web_form_id}"), fields(field_names))
            .await
    }

    // ── Landing pages ────────────────────────────────────────────────

    /// `GET landing-pages/`
    pub async fn get_landing_pages(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("landing-pages", query).await
    }

    /// `GET landing-pages/{landingPageId}/?fields=...`
    pub async fn get_landing_page(
        &self,
        landing_page_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("landing-pages/{landing_page_id}"),
            fields(field_names),
        )
        .await
    }
}
