//! Picks the hero image for a procedure from its navigation payload.
//!
//! Resolution is total: every payload yields something displayable. A wrong
//! or placeholder image is preferred over a broken screen.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::assets::{AssetRegistry, LocalAssetRef, FACE_COVERS};
use crate::navigation::NavigationPayload;
use crate::normalize::normalize_key;
use crate::FALLBACK_IMAGE_URL;

/// Normalised procedure names that do not normalise onto a registry key on
/// their own, mapped to the key they should display.
pub const PROCEDURE_ALIASES: &[(&str, &str)] = &[
    ("burunestetigi", "burun_estetigi"),
    ("sacekimi", "sac_ekimi"),
    ("ceneestetigi", "cene_estetigi"),
    ("yuzgerme", "yuz_germe"),
    ("gozkapagiestetigi", "goz_kapagi"),
    ("kaskaldirma", "kas_kaldirma"),
    ("elmacikkemigi", "elmacik_kemigi"),
    ("dudakestetigi", "dudak_estetigi"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedImage {
    Local {
        key: &'static str,
        asset: LocalAssetRef,
    },
    Remote {
        uri: String,
    },
}

impl ResolvedImage {
    #[must_use]
    pub const fn local_asset(&self) -> Option<LocalAssetRef> {
        match self {
            Self::Local { asset, .. } => Some(*asset),
            Self::Remote { .. } => None,
        }
    }

    #[must_use]
    pub fn remote_uri(&self) -> Option<&str> {
        match self {
            Self::Local { .. } => None,
            Self::Remote { uri } => Some(uri),
        }
    }
}

/// Serialisable form handed to the shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageView {
    Bundled { key: String, asset: String },
    Remote { uri: String },
}

impl From<&ResolvedImage> for ImageView {
    fn from(image: &ResolvedImage) -> Self {
        match image {
            ResolvedImage::Local { key, asset } => Self::Bundled {
                key: (*key).to_string(),
                asset: asset.path().to_string(),
            },
            ResolvedImage::Remote { uri } => Self::Remote { uri: uri.clone() },
        }
    }
}

#[must_use]
pub fn is_http_url(candidate: &str) -> bool {
    Url::parse(candidate.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false)
}

#[derive(Debug, Clone)]
pub struct ImageResolver<'a> {
    registry: &'a AssetRegistry,
    aliases: &'a [(&'a str, &'a str)],
    fallback_url: &'a str,
}

impl Default for ImageResolver<'static> {
    fn default() -> Self {
        Self::new(FALLBACK_IMAGE_URL)
    }
}

impl<'a> ImageResolver<'a> {
    /// Resolver over the bundled face covers and the built-in alias table.
    #[must_use]
    pub fn new(fallback_url: &'a str) -> Self {
        Self {
            registry: &FACE_COVERS,
            aliases: PROCEDURE_ALIASES,
            fallback_url,
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: &'a AssetRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: &'a [(&'a str, &'a str)]) -> Self {
        self.aliases = aliases;
        self
    }

    fn fallback(&self) -> ResolvedImage {
        ResolvedImage::Remote {
            uri: self.fallback_url.to_string(),
        }
    }

    /// Any non-blank URI is handed to the image loader as given; only a
    /// blank one falls back.
    fn remote_or_fallback(&self, uri: &str) -> ResolvedImage {
        if uri.trim().is_empty() {
            return self.fallback();
        }
        if !is_http_url(uri) {
            debug!(uri, "procedure image is not an http(s) url, passing through");
        }
        ResolvedImage::Remote {
            uri: uri.to_string(),
        }
    }

    /// First rule that matches wins:
    /// 1. not a local image, or no key: the payload's URL (or the fallback)
    /// 2. exact registry key
    /// 3. registry key equal after normalisation
    /// 4. alias table on the normalised key
    /// 5. the fallback URL
    #[must_use]
    pub fn resolve(&self, payload: &NavigationPayload) -> ResolvedImage {
        let key = payload.local_image_key.as_str();

        if !payload.is_local_image || key.is_empty() {
            return self.remote_or_fallback(&payload.procedure_image);
        }

        if let Some((registry_key, asset)) = self.registry.entry(key) {
            debug!(key, "exact registry match");
            return ResolvedImage::Local {
                key: registry_key,
                asset,
            };
        }

        let normalized = normalize_key(key);
        debug!(key, normalized = %normalized, "no exact match, trying normalised key");

        if let Some((registry_key, asset)) = self.registry.lookup_by_normalized_key(&normalized) {
            debug!(key = registry_key, "normalised registry match");
            return ResolvedImage::Local {
                key: registry_key,
                asset,
            };
        }

        let aliased = self
            .aliases
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .and_then(|(_, target)| self.registry.entry(target));

        if let Some((registry_key, asset)) = aliased {
            debug!(alias = %normalized, key = registry_key, "alias table match");
            return ResolvedImage::Local {
                key: registry_key,
                asset,
            };
        }

        warn!(key, normalized = %normalized, "no local image for key, using fallback");
        self.fallback()
    }
}

/// Resolves `payload` against the bundled covers and the default fallback URL.
#[must_use]
pub fn resolve_image(payload: &NavigationPayload) -> ResolvedImage {
    ImageResolver::default().resolve(payload)
}
