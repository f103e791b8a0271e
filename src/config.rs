use crate::browser::log_warning;
use serde::Deserialize;

/// The album shipped with the site, embedded at compile time.
const EMBEDDED_ALBUM: &str = include_str!("../album.json");

/// Conventional location photos are served from, relative to the site root.
const IMAGE_PATH_PREFIX: &str = "/images/";

/// How long the last spread is shown before navigating away.
pub const REDIRECT_DELAY_MS: u32 = 3000;

/// How often the countdown readout is refreshed from the wall clock.
pub const COUNTDOWN_TICK_MS: u32 = 200;

/// Whole seconds the countdown starts from, derived from the delay so the
/// readout can never disagree with the actual navigation time.
pub const REDIRECT_DELAY_SECONDS: u32 = REDIRECT_DELAY_MS.div_ceil(1000);

/// Static album configuration: the photo catalog, the captions cycled across
/// it, the cover copy, and where to send the visitor after the last spread.
///
/// Fixed at build time and immutable afterwards. The caption list may be
/// shorter than the image list; captions repeat cyclically.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub cover_date: String,
    #[serde(default)]
    pub date_stamp: String,
    pub images: Vec<String>,
    #[serde(default)]
    pub captions: Vec<String>,
    pub redirect_url: String,
    #[serde(default)]
    pub redirect_label: String,
}

impl Album {
    /// Parse an album from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the embedded album.
    ///
    /// Falls back to an empty album (closed cover, nothing to show, no
    /// redirect) if the embedded JSON does not parse, so a bad edit to
    /// `album.json` degrades the page instead of breaking it.
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_ALBUM).unwrap_or_else(|e| {
            log_warning(&format!(
                "Keepsake: failed to parse embedded album.json (showing an empty book): {}",
                e
            ));
            Self::default()
        })
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Resolve the image at `index` to its served path, or `None` past the
    /// end of the catalog.
    pub fn image_src(&self, index: usize) -> Option<String> {
        self.images
            .get(index)
            .map(|file| format!("{IMAGE_PATH_PREFIX}{file}"))
    }

    /// Caption for image `index`, cycling through the caption list.
    /// An empty caption list yields an empty caption.
    pub fn caption_for(&self, index: usize) -> &str {
        if self.captions.is_empty() {
            return "";
        }
        &self.captions[index % self.captions.len()]
    }
}
