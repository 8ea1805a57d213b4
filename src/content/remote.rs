use gloo_net::http::Request;

use super::catalog::{self, Collection};
use super::error::ContentError;
use super::store::ContentStore;
use crate::config;

/// Fetches a collection from the content server. Same JSON shape and the
/// same checks as the embedded catalog.
pub async fn fetch(collection: Collection) -> Result<ContentStore, ContentError> {
    let url = config::get_content_url(collection.file_name());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ContentError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(ContentError::Fetch(format!(
            "{} returned status {}",
            url,
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ContentError::Fetch(e.to_string()))?;
    catalog::parse(collection, &body)
}
