use lightbox_common::{decode_metadata, FetchError, GalleryIndex, LightboxConfig, PhotoId};
use serde_json::Value;
use tracing::{error, warn};

const CONFIG_URL: &str = "/data/lightbox.json";

/// Fetch a photo metadata document.
///
/// Status and body are classified by [`decode_metadata`]; the viewer decides
/// whether the document is a usable record.
pub async fn fetch_photo_document(url: &str) -> Result<Value, FetchError> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode_metadata(status, &body)
}

/// Download an image so it is in the browser cache before we report it
/// loaded. Any HTTP status counts as loaded.
pub async fn preload_image(url: &str) -> Result<(), FetchError> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    resp.bytes()
        .await
        .map(|_| ())
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Load lightbox settings, falling back to defaults on any failure
pub async fn fetch_config() -> LightboxConfig {
    let text = match reqwest::get(CONFIG_URL).await {
        Ok(resp) if resp.status().is_success() => resp.text().await.map_err(|e| e.to_string()),
        Ok(resp) => Err(format!("status {}", resp.status())),
        Err(e) => Err(e.to_string()),
    };

    match text.and_then(|t| LightboxConfig::from_json(&t).map_err(|e| e.to_string())) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default lightbox config ({CONFIG_URL}: {e})");
            LightboxConfig::default()
        }
    }
}

/// Load the gallery's photo ids. An unreachable index yields an empty gallery.
pub async fn fetch_index(url: &str) -> GalleryIndex {
    let result = async {
        let resp = reqwest::get(url)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }
        resp.json::<Vec<PhotoId>>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }
    .await;

    match result {
        Ok(ids) => GalleryIndex::new(ids),
        Err(e) => {
            error!("Failed to load gallery index {url}: {e}");
            GalleryIndex::default()
        }
    }
}
