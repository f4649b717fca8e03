// Saved contact searches ("search-contacts")

use serde::Serialize;
use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET search-contacts/`
    pub async fn get_saved_searches(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("search-contacts", query).await
    }

    /// `GET search-contacts/{searchContactId}/`
    pub async fn get_saved_search(&self, saved_search_id: &str) -> Result<ApiResponse, Error> {
        self.get(&format!("search-contacts/{saved_search_id}"), Query::None)
            .await
    }

    /// Contacts currently matching a saved search.
    ///
    /// `GET search-contacts/{searchContactId}/contacts/`
    pub async fn get_saved_search_contacts(
        &self,
        saved_search_id: &str,
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("search-contacts/{saved_search_id}/contacts"),
            Query::None,
        )
        .await
    }

    /// `POST search-contacts`
    pub async fn create_saved_search(&self, conditions: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post("search-contacts", conditions).await
    }

    /// `POST search-contacts/{searchContactId}`
    pub async fn update_saved_search(
        &self,
        saved_search_id: &str,
        conditions: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("search-contacts/{saved_search_id}"), conditions)
            .await
    }

    /// Set custom field values on every contact matching a saved search.
    ///
    /// `POST search-contacts/{searchContactId}/custom-fields` with
    /// `{"customFieldValues": [...]}`
    pub async fn update_saved_search_customs(
        &self,
        saved_search_id: &str,
        customs: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("search-contacts/{saved_search_id}/custom-fields"),
            &json!({ "customFieldValues": customs }),
        )
        .await
    }

    /// Run an ad-hoc search without saving it.
    ///
    /// `POST search-contacts/contacts`
    pub async fn search_contacts(&self, conditions: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post("search-contacts/contacts", conditions).await
    }

    /// `DELETE search-contacts/{searchContactId}/`
    pub async fn delete_saved_search(&self, saved_search_id: &str) -> Result<ApiResponse, Error> {
        self.remove(&format!("search-contacts/{saved_search_id}"), Query::None)
            .await
    }
}
