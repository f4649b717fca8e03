// Double opt-in confirmation message templates

use crate::client::Client;
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// Confirmation email bodies available for a language code (e.g. `"EN"`).
    ///
    /// `GET subscription-confirmations/body/{languageCode}/`
    pub async fn get_subscription_confirmation_body(
        &self,
        language_code: &str,
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("subscription-confirmations/body/{language_code}"),
            Query::None,
        )
        .await
    }

    /// `GET subscription-confirmations/subject/{languageCode}/`
    pub async fn get_subscription_confirmation_subject(
        &self,
        language_code: &str,
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("subscription-confirmations/subject/{language_code}"),
            Query::None,
        )
        .await
    }
}
