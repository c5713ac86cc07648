//! Bundled image assets addressed by symbolic key.

use serde::Serialize;
use std::fmt;

use crate::normalize::normalize_key;

/// Handle to an image shipped inside the app bundle.
///
/// Two refs are the same asset when they name the same bundle path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LocalAssetRef(&'static str);

impl LocalAssetRef {
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LocalAssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Read-only, insertion-ordered mapping from symbolic key to bundled asset.
#[derive(Debug)]
pub struct AssetRegistry {
    entries: &'static [(&'static str, LocalAssetRef)],
}

impl AssetRegistry {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, LocalAssetRef)]) -> Self {
        Self { entries }
    }

    /// Exact key match.
    #[must_use]
    pub fn lookup_by_key(&self, key: &str) -> Option<LocalAssetRef> {
        self.entry(key).map(|(_, asset)| asset)
    }

    /// Exact key match, returning the registry's own `'static` key.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<(&'static str, LocalAssetRef)> {
        self.entries.iter().find(|(k, _)| *k == key).copied()
    }

    /// First entry (in insertion order) whose key normalises to the same form
    /// as `key`. Returns the registry's own key alongside the asset.
    #[must_use]
    pub fn lookup_by_normalized_key(&self, key: &str) -> Option<(&'static str, LocalAssetRef)> {
        let wanted = normalize_key(key);
        if wanted.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(k, _)| normalize_key(k) == wanted)
            .copied()
    }

    /// Key under which `asset` is registered.
    #[must_use]
    pub fn reverse_lookup(&self, asset: LocalAssetRef) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, a)| *a == asset)
            .map(|(k, _)| *k)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, LocalAssetRef)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const BURUN_ESTETIGI: LocalAssetRef = LocalAssetRef::new("face_covers/burun_estetigi.png");
pub const SAC_EKIMI: LocalAssetRef = LocalAssetRef::new("face_covers/sac_ekimi.png");
pub const CENE_ESTETIGI: LocalAssetRef = LocalAssetRef::new("face_covers/cene_estetigi.png");
pub const YUZ_GERME: LocalAssetRef = LocalAssetRef::new("face_covers/yuz_germe.png");
pub const GOZ_KAPAGI: LocalAssetRef = LocalAssetRef::new("face_covers/goz_kapagi.png");
pub const KAS_KALDIRMA: LocalAssetRef = LocalAssetRef::new("face_covers/kas_kaldirma.png");
pub const ELMACIK_KEMIGI: LocalAssetRef = LocalAssetRef::new("face_covers/elmacik_kemigi.png");
pub const DUDAK_ESTETIGI: LocalAssetRef = LocalAssetRef::new("face_covers/dudak_estetigi.png");

/// Face procedure cover images.
pub static FACE_COVERS: AssetRegistry = AssetRegistry::new(&[
    ("burun_estetigi", BURUN_ESTETIGI),
    ("sac_ekimi", SAC_EKIMI),
    ("cene_estetigi", CENE_ESTETIGI),
    ("yuz_germe", YUZ_GERME),
    ("goz_kapagi", GOZ_KAPAGI),
    ("kas_kaldirma", KAS_KALDIRMA),
    ("elmacik_kemigi", ELMACIK_KEMIGI),
    ("dudak_estetigi", DUDAK_ESTETIGI),
]);
