//! Routes and the parameters carried between screens.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use crate::assets::{AssetRegistry, FACE_COVERS};
use crate::catalog::{CategoryKey, ImageRef, ProcedureEntry};
use crate::normalize::slug_key;

/// Flat string-keyed parameter set exchanged with the shell's router.
pub type Params = BTreeMap<String, String>;

pub const PARAM_PROCEDURE_TITLE: &str = "procedureTitle";
pub const PARAM_PROCEDURE_SUBTITLE: &str = "procedureSubtitle";
pub const PARAM_PROCEDURE_IMAGE: &str = "procedureImage";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_IS_LOCAL_IMAGE: &str = "isLocalImage";
pub const PARAM_LOCAL_IMAGE_KEY: &str = "localImageKey";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    Gallery,
    Pro,
    Profile,
    Upload,
    Generate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route: {0:?}")]
pub struct ParseRouteError(pub String);

impl Route {
    /// Routes reachable from the bottom tab bar, in display order.
    pub const TABS: [Self; 4] = [Self::Home, Self::Gallery, Self::Pro, Self::Profile];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "index",
            Self::Gallery => "gallery",
            Self::Pro => "pro",
            Self::Profile => "profile",
            Self::Upload => "upload",
            Self::Generate => "generate",
        }
    }

    #[must_use]
    pub const fn is_tab(self) -> bool {
        matches!(self, Self::Home | Self::Gallery | Self::Pro | Self::Profile)
    }

    /// The paywall and the procedure flow take the full screen.
    #[must_use]
    pub const fn shows_tab_bar(self) -> bool {
        !matches!(self, Self::Pro | Self::Upload | Self::Generate)
    }

    #[must_use]
    pub const fn tab_icon(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("home"),
            Self::Gallery => Some("grid-outline"),
            Self::Pro => Some("sparkles-outline"),
            Self::Profile => Some("person-outline"),
            Self::Upload | Self::Generate => None,
        }
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches("/(tabs)").trim_start_matches('/') {
            "" | "index" | "home" => Ok(Self::Home),
            "gallery" => Ok(Self::Gallery),
            "pro" => Ok(Self::Pro),
            "profile" => Ok(Self::Profile),
            "upload" => Ok(Self::Upload),
            "generate" => Ok(Self::Generate),
            _ => Err(ParseRouteError(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the catalogue hands to the upload screen when a card is tapped.
///
/// When `is_local_image` is set, `local_image_key` should name an
/// [`AssetRegistry`] entry, but consumers must cope with keys that do not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPayload {
    pub procedure_title: String,
    pub procedure_subtitle: String,
    pub procedure_image: String,
    pub category: CategoryKey,
    pub is_local_image: bool,
    pub local_image_key: String,
}

impl NavigationPayload {
    /// Builds the payload for `entry`. Local covers are addressed by their
    /// registry key; a cover missing from `registry` gets a key synthesised
    /// from the title instead. Never fails.
    #[must_use]
    pub fn from_entry(entry: &ProcedureEntry, category: CategoryKey, registry: &AssetRegistry) -> Self {
        let (procedure_image, is_local_image, local_image_key) = match entry.image {
            ImageRef::Remote(url) => (url.to_string(), false, String::new()),
            ImageRef::Local(asset) => {
                let key = match registry.reverse_lookup(asset) {
                    Some(key) => {
                        debug!(key, title = entry.title, "local cover found in registry");
                        key.to_string()
                    }
                    None => {
                        let key = slug_key(entry.title);
                        warn!(
                            asset = %asset,
                            key = %key,
                            title = entry.title,
                            "cover not registered, synthesising key from title"
                        );
                        key
                    }
                };
                (String::new(), true, key)
            }
        };

        Self {
            procedure_title: entry.title.to_string(),
            procedure_subtitle: entry.subtitle.to_string(),
            procedure_image,
            category,
            is_local_image,
            local_image_key,
        }
    }

    #[must_use]
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert(PARAM_PROCEDURE_TITLE.into(), self.procedure_title.clone());
        params.insert(PARAM_PROCEDURE_SUBTITLE.into(), self.procedure_subtitle.clone());
        params.insert(PARAM_PROCEDURE_IMAGE.into(), self.procedure_image.clone());
        params.insert(PARAM_CATEGORY.into(), self.category.as_str().into());
        params.insert(
            PARAM_IS_LOCAL_IMAGE.into(),
            if self.is_local_image { "true" } else { "false" }.into(),
        );
        params.insert(PARAM_LOCAL_IMAGE_KEY.into(), self.local_image_key.clone());
        params
    }

    /// Lenient decoding: missing values are empty, only the exact string
    /// `"true"` marks a local image, and a missing or unknown category falls
    /// back to the face category.
    #[must_use]
    pub fn from_params(params: &Params) -> Self {
        let category = match params.get(PARAM_CATEGORY).map(|c| c.parse::<CategoryKey>()) {
            Some(Ok(category)) => category,
            Some(Err(e)) => {
                warn!(error = %e, "falling back to default category");
                CategoryKey::default()
            }
            None => CategoryKey::default(),
        };

        Self {
            procedure_title: param(params, PARAM_PROCEDURE_TITLE),
            procedure_subtitle: param(params, PARAM_PROCEDURE_SUBTITLE),
            procedure_image: param(params, PARAM_PROCEDURE_IMAGE),
            category,
            is_local_image: params.get(PARAM_IS_LOCAL_IMAGE).map(String::as_str) == Some("true"),
            local_image_key: param(params, PARAM_LOCAL_IMAGE_KEY),
        }
    }
}

/// [`NavigationPayload::from_entry`] against the bundled face covers.
#[must_use]
pub fn build_payload(entry: &ProcedureEntry, category: CategoryKey) -> NavigationPayload {
    NavigationPayload::from_entry(entry, category, &FACE_COVERS)
}

/// Parameters carried from the upload screen to the simulation screen.
///
/// `category` is `None` when the sender passed a category this build does
/// not know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateParams {
    pub procedure_title: String,
    pub procedure_subtitle: String,
    pub category: Option<CategoryKey>,
}

impl GenerateParams {
    #[must_use]
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert(PARAM_PROCEDURE_TITLE.into(), self.procedure_title.clone());
        params.insert(PARAM_PROCEDURE_SUBTITLE.into(), self.procedure_subtitle.clone());
        if let Some(category) = self.category {
            params.insert(PARAM_CATEGORY.into(), category.as_str().into());
        }
        params
    }

    #[must_use]
    pub fn from_params(params: &Params) -> Self {
        let category = match params.get(PARAM_CATEGORY) {
            None => Some(CategoryKey::default()),
            Some(raw) => raw.parse::<CategoryKey>().ok(),
        };

        Self {
            procedure_title: param(params, PARAM_PROCEDURE_TITLE),
            procedure_subtitle: param(params, PARAM_PROCEDURE_SUBTITLE),
            category,
        }
    }
}

fn param(params: &Params, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{LocalAssetRef, GOZ_KAPAGI};
    use crate::catalog::procedures;

    #[test]
    fn remote_entry_carries_url() {
        let entry = &procedures(CategoryKey::Medikal)[0];
        let payload = build_payload(entry, CategoryKey::Medikal);

        assert!(!payload.is_local_image);
        assert!(payload.local_image_key.is_empty());
        assert_eq!(payload.procedure_title, "Dolgu");
        assert!(payload.procedure_image.starts_with("https://"));
    }

    #[test]
    fn local_entry_uses_registry_key() {
        let entry = &procedures(CategoryKey::Yuz)[4];
        let payload = build_payload(entry, CategoryKey::Yuz);

        assert!(payload.is_local_image);
        assert!(payload.procedure_image.is_empty());
        assert_eq!(payload.local_image_key, "goz_kapagi");
        assert_eq!(payload.procedure_subtitle, "Blefaroplasti");
    }

    #[test]
    fn unregistered_cover_gets_title_slug() {
        let entry = ProcedureEntry {
            title: "Göz Kapağı Estetiği",
            subtitle: "Blefaroplasti",
            image: ImageRef::Local(LocalAssetRef::new("face_covers/missing.png")),
        };
        let payload = build_payload(&entry, CategoryKey::Yuz);

        assert!(payload.is_local_image);
        assert_eq!(payload.local_image_key, "goz_kapagi_estetigi");
    }

    #[test]
    fn empty_registry_still_builds_payload() {
        static EMPTY: AssetRegistry = AssetRegistry::new(&[]);
        let entry = ProcedureEntry {
            title: "Kaş Kaldırma",
            subtitle: "",
            image: ImageRef::Local(GOZ_KAPAGI),
        };
        let payload = NavigationPayload::from_entry(&entry, CategoryKey::Yuz, &EMPTY);
        assert_eq!(payload.local_image_key, "kas_kaldirma");
    }

    #[test]
    fn params_use_router_wire_format() {
        let payload = build_payload(&procedures(CategoryKey::Yuz)[0], CategoryKey::Yuz);
        let params = payload.to_params();

        assert_eq!(params[PARAM_IS_LOCAL_IMAGE], "true");
        assert_eq!(params[PARAM_LOCAL_IMAGE_KEY], "burun_estetigi");
        assert_eq!(params[PARAM_CATEGORY], "yuz");
        assert_eq!(params[PARAM_PROCEDURE_IMAGE], "");
        assert_eq!(NavigationPayload::from_params(&params), payload);
    }

    #[test]
    fn from_params_is_lenient() {
        let mut params = Params::new();
        params.insert(PARAM_IS_LOCAL_IMAGE.into(), "TRUE".into());
        params.insert(PARAM_CATEGORY.into(), "ayak".into());

        let payload = NavigationPayload::from_params(&params);
        assert!(!payload.is_local_image);
        assert_eq!(payload.category, CategoryKey::Yuz);
        assert!(payload.procedure_title.is_empty());
    }

    #[test]
    fn serde_field_names_match_params() {
        let json = serde_json::to_value(NavigationPayload::default()).unwrap();
        for key in [
            PARAM_PROCEDURE_TITLE,
            PARAM_PROCEDURE_SUBTITLE,
            PARAM_PROCEDURE_IMAGE,
            PARAM_CATEGORY,
            PARAM_IS_LOCAL_IMAGE,
            PARAM_LOCAL_IMAGE_KEY,
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn generate_params_keep_unknown_category_as_none() {
        let mut params = Params::new();
        params.insert(PARAM_PROCEDURE_TITLE.into(), "Dolgu".into());
        params.insert(PARAM_CATEGORY.into(), "bilinmeyen".into());

        let parsed = GenerateParams::from_params(&params);
        assert_eq!(parsed.category, None);
        assert_eq!(parsed.procedure_title, "Dolgu");

        let round = GenerateParams {
            procedure_title: "PRP".into(),
            procedure_subtitle: "Platelet Rich Plasma".into(),
            category: Some(CategoryKey::Medikal),
        };
        assert_eq!(GenerateParams::from_params(&round.to_params()), round);
    }

    #[test]
    fn routes_parse_router_paths() {
        assert_eq!("/(tabs)/upload".parse::<Route>(), Ok(Route::Upload));
        assert_eq!("/pro".parse::<Route>(), Ok(Route::Pro));
        assert_eq!("/(tabs)".parse::<Route>(), Ok(Route::Home));
        assert!("settings".parse::<Route>().is_err());
    }

    #[test]
    fn tab_bar_hidden_on_full_screen_routes() {
        assert!(Route::Home.shows_tab_bar());
        assert!(Route::Profile.shows_tab_bar());
        assert!(!Route::Pro.shows_tab_bar());
        assert!(!Route::Upload.shows_tab_bar());
        assert!(!Route::Generate.shows_tab_bar());
        assert!(Route::TABS.iter().all(|r| r.is_tab() && r.tab_icon().is_some()));
    }
}
