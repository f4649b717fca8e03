// Contact endpoints
//
// Listing, CRUD, custom-field and tag upserts, and activity history.

use serde::Serialize;
use serde_json::json;

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// List contacts matching the given filters.
    ///
    /// `GET contacts/`
    pub async fn get_contacts(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("contacts", query).await
    }

    /// `GET contacts/{contactId}/?fields=...`
    pub async fn get_contact(&self, contact_id: &str, field_names: &[&str]) -> Result<ApiResponse, Error> {
        self.get(&format!("contacts/{contact_id}"), fields(field_names))
            .await
    }

    /// `POST contacts`
    pub async fn create_contact(&self, contact: &impl Serialize) -> Result<ApiResponse, Error> {
        self.post("contacts", contact).await
    }

    /// `POST contacts/{contactId}`
    pub async fn update_contact(
        &self,
        contact_id: &str,
        contact: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(&format!("contacts/{contact_id}"), contact).await
    }

    /// Upsert custom field values on a contact.
    ///
    /// `POST contacts/{contactId}/custom-fields` with `{"customFieldValues": [...]}`
    pub async fn update_contact_customs(
        &self,
        contact_id: &str,
        customs: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("contacts/{contact_id}/custom-fields"),
            &json!({ "customFieldValues": customs }),
        )
        .await
    }

    /// Upsert tags on a contact.
    ///
    /// `POST contacts/{contactId}/tags` with `{"tags": [...]}`
    pub async fn update_contact_tags(
        &self,
        contact_id: &str,
        tags: &impl Serialize,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("contacts/{contact_id}/tags"),
            &json!({ "tags": tags }),
        )
        .await
    }

    /// `GET contacts/{contactId}/activities/`
    pub async fn get_contact_activities(
        &self,
        contact_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("contacts/{contact_id}/activities"), query)
            .await
    }

    /// `DELETE contacts/{contactId}/` (accepts `messageId`/`ipAddress` params)
    pub async fn delete_contact(
        &self,
        contact_id: &str,
        query: impl Into<Query>,
    ) -> Result<ApiResponse, Error> {
        self.remove(&format!("contacts/{contact_id}"), query).await
    }
}
