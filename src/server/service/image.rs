//! Vehicle image lookup.
//!
//! Searches the Unsplash photo API for a picture of the vehicle model. Without an access
//! key, or when the search fails or finds nothing, a generated placeholder image is used.

use serde::Deserialize;

const PLACEHOLDER_BASE_URL: &str = "https://dummyimage.com/600x400/000/fff&text=";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

/// Resolves image URLs for vehicle models.
#[derive(Clone)]
pub struct VehicleImageService {
    http_client: reqwest::Client,
    api_url: String,
    access_key: Option<String>,
}

impl VehicleImageService {
    /// Creates a new VehicleImageService instance.
    ///
    /// # Arguments
    /// - `http_client` - Client used for the photo search
    /// - `api_url` - Base URL of the photo API, without trailing path
    /// - `access_key` - API access key; `None` disables the search
    pub fn new(http_client: reqwest::Client, api_url: String, access_key: Option<String>) -> Self {
        Self {
            http_client,
            api_url,
            access_key,
        }
    }

    /// Returns an image URL for `model`, never failing.
    ///
    /// Search errors are logged and answered with the placeholder image.
    pub async fn resolve(&self, model: &str) -> String {
        match self.search(model).await {
            Ok(Some(url)) => url,
            Ok(None) => placeholder_image(model),
            Err(err) => {
                tracing::warn!("Image search for '{}' failed: {}", model, err);
                placeholder_image(model)
            }
        }
    }

    async fn search(&self, model: &str) -> Result<Option<String>, reqwest::Error> {
        let Some(access_key) = self.access_key.as_deref() else {
            return Ok(None);
        };

        let url = format!("{}/search/photos", self.api_url.trim_end_matches('/'));
        let query = format!("car {}", model);

        let response: SearchResponse = self
            .http_client
            .get(url)
            .query(&[
                ("query", query.as_str()),
                ("per_page", "1"),
                ("orientation", "landscape"),
                ("client_id", access_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.results.into_iter().next().map(|photo| photo.urls.regular))
    }
}

/// Placeholder image showing the model name as text.
pub fn placeholder_image(model: &str) -> String {
    let text: String = url::form_urlencoded::byte_serialize(model.as_bytes()).collect();
    format!("{}{}", PLACEHOLDER_BASE_URL, text)
}
