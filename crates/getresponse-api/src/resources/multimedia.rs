// Multimedia (image) library

use crate::client::Client;
use crate::error::Error;
use crate::multipart::Blob;
use crate::query::QueryParams;
use crate::response::ApiResponse;

impl Client {
    /// One page of uploaded files. `None` leaves the API default.
    ///
    /// `GET multimedia/?perPage=...&page=...`
    pub async fn get_files(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<ApiResponse, Error> {
        self.get(
            "multimedia",
            QueryParams::new()
                .param("perPage", per_page)
                .param("page", page),
        )
        .await
    }

    /// Upload an image.
    ///
    /// `POST multimedia/` (multipart/form-data)
    pub async fn upload_file(&self, blob: &Blob) -> Result<ApiResponse, Error> {
        self.upload(blob).await
    }
}
