//! Responsive image source resolution
//!
//! Maps a photo record plus a target viewport to the URL of an image sized
//! for it, using image-CDN query parameters (`w`, `h`, `fm`, `q`).

use serde_json::Value;

use crate::{PhotoRecord, Viewport};

/// Paths searched, in order, for the record's original image URL.
const URL_PATHS: &[&[&str]] = &[&["file", "url"], &["fields", "file", "url"], &["url"]];

/// Pure mapping from a record and target size to an image URL.
pub trait SourceResolver {
    fn resolve(&self, record: &PhotoRecord, viewport: Viewport) -> Option<String>;
}

impl<F> SourceResolver for F
where
    F: Fn(&PhotoRecord, Viewport) -> Option<String>,
{
    fn resolve(&self, record: &PhotoRecord, viewport: Viewport) -> Option<String> {
        self(record, viewport)
    }
}

/// Resolver that asks the image CDN for a rendition bounded by the viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedImage {
    pub max_dimension: u32,
    pub format: Option<String>,
    pub quality: Option<u8>,
}

impl Default for SizedImage {
    fn default() -> Self {
        Self {
            max_dimension: 4000,
            format: None,
            quality: None,
        }
    }
}

impl SizedImage {
    fn clamp(&self, value: u32) -> u32 {
        value.clamp(1, self.max_dimension.max(1))
    }
}

impl SourceResolver for SizedImage {
    fn resolve(&self, record: &PhotoRecord, viewport: Viewport) -> Option<String> {
        let base = URL_PATHS
            .iter()
            .find_map(|path| record.lookup(path).and_then(Value::as_str))
            .filter(|url| !url.is_empty())?;

        let mut url = if base.starts_with("//") {
            format!("https:{base}")
        } else {
            base.to_string()
        };

        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&format!(
            "w={}&h={}",
            self.clamp(viewport.width),
            self.clamp(viewport.height)
        ));
        if let Some(format) = &self.format {
            url.push_str(&format!("&fm={format}"));
        }
        if let Some(quality) = self.quality {
            url.push_str(&format!("&q={quality}"));
        }

        Some(url)
    }
}
