//! Procedure categories and the compiled-in procedure catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::assets::{
    LocalAssetRef, BURUN_ESTETIGI, CENE_ESTETIGI, DUDAK_ESTETIGI, ELMACIK_KEMIGI, GOZ_KAPAGI,
    KAS_KALDIRMA, SAC_EKIMI, YUZ_GERME,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Icon {
    pub family: &'static str,
    pub name: &'static str,
}

impl Icon {
    #[must_use]
    pub const fn new(family: &'static str, name: &'static str) -> Self {
        Self { family, name }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub display_name: &'static str,
    pub icon: Icon,
    pub tab_order: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    #[default]
    Yuz,
    Kulak,
    Medikal,
    Vucut,
    Gogus,
    Popo,
    KolBacak,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown procedure category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl CategoryKey {
    /// Every category in the order the home screen shows its tabs.
    pub const TAB_ORDER: [Self; 7] = [
        Self::Yuz,
        Self::Medikal,
        Self::Vucut,
        Self::Kulak,
        Self::Gogus,
        Self::Popo,
        Self::KolBacak,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yuz => "yuz",
            Self::Kulak => "kulak",
            Self::Medikal => "medikal",
            Self::Vucut => "vucut",
            Self::Gogus => "gogus",
            Self::Popo => "popo",
            Self::KolBacak => "kolbacak",
        }
    }

    #[must_use]
    pub const fn info(self) -> CategoryInfo {
        match self {
            Self::Yuz => CategoryInfo {
                display_name: "Yüz",
                icon: Icon::new("MaterialIcons", "face"),
                tab_order: 0,
            },
            Self::Medikal => CategoryInfo {
                display_name: "Medikal",
                icon: Icon::new("Fontisto", "injection-syringe"),
                tab_order: 1,
            },
            Self::Vucut => CategoryInfo {
                display_name: "Vücut",
                icon: Icon::new("MaterialCommunityIcons", "human"),
                tab_order: 2,
            },
            Self::Kulak => CategoryInfo {
                display_name: "Kulak",
                icon: Icon::new("MaterialCommunityIcons", "ear-hearing"),
                tab_order: 3,
            },
            Self::Gogus => CategoryInfo {
                display_name: "Göğüs",
                icon: Icon::new("MaterialCommunityIcons", "human-female"),
                tab_order: 4,
            },
            Self::Popo => CategoryInfo {
                display_name: "Popo",
                icon: Icon::new("MaterialCommunityIcons", "fruit-watermelon"),
                tab_order: 5,
            },
            Self::KolBacak => CategoryInfo {
                display_name: "Kol ve Bacak",
                icon: Icon::new("MaterialCommunityIcons", "arm-flex"),
                tab_order: 6,
            },
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.info().display_name
    }
}

impl FromStr for CategoryKey {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "yuz" => Ok(Self::Yuz),
            "kulak" => Ok(Self::Kulak),
            "medikal" => Ok(Self::Medikal),
            "vucut" => Ok(Self::Vucut),
            "gogus" => Ok(Self::Gogus),
            "popo" => Ok(Self::Popo),
            "kolbacak" => Ok(Self::KolBacak),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a catalogue entry's cover image comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRef {
    Local(LocalAssetRef),
    Remote(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcedureEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: ImageRef,
}

const fn local(title: &'static str, subtitle: &'static str, asset: LocalAssetRef) -> ProcedureEntry {
    ProcedureEntry {
        title,
        subtitle,
        image: ImageRef::Local(asset),
    }
}

const fn remote(title: &'static str, subtitle: &'static str, url: &'static str) -> ProcedureEntry {
    ProcedureEntry {
        title,
        subtitle,
        image: ImageRef::Remote(url),
    }
}

const ABSTRACT_0: &str = "https://images.unsplash.com/photo-1557682250-33bd709cbe85?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_1: &str = "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_2: &str = "https://images.unsplash.com/photo-1550859492-d5da9d8e45f3?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_3: &str = "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_4: &str = "https://images.unsplash.com/photo-1549490349-8643362247b5?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_5: &str = "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_6: &str = "https://images.unsplash.com/photo-1614849963640-9cc74b2a385b?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_7: &str = "https://images.unsplash.com/photo-1586672806791-3a67d24186c0?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_8: &str = "https://images.unsplash.com/photo-1541701494587-cb58502866ab?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_9: &str = "https://images.unsplash.com/photo-1578255321055-68b5bc99052b?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_10: &str = "https://images.unsplash.com/photo-1617791160588-241658c0f566?w=500&auto=format&fit=crop&q=60";
const ABSTRACT_11: &str = "https://images.unsplash.com/photo-1507908708918-778587c9e563?w=500&auto=format&fit=crop&q=60";

static YUZ: [ProcedureEntry; 8] = [
    local("Burun Estetiği", "Rinoplasti", BURUN_ESTETIGI),
    local("Saç Ekimi", "Hair Transplantation", SAC_EKIMI),
    local("Çene Estetiği", "Genioplasti", CENE_ESTETIGI),
    local("Yüz Germe", "Ritidektomi", YUZ_GERME),
    local("Göz Kapağı Estetiği", "Blefaroplasti", GOZ_KAPAGI),
    local("Kaş Kaldırma", "Frontal Lift", KAS_KALDIRMA),
    local("Elmacık Kemiği", "Malar Augmentasyon", ELMACIK_KEMIGI),
    local("Dudak Estetiği", "Lip Enhancement", DUDAK_ESTETIGI),
];

static KULAK: [ProcedureEntry; 1] = [remote("Kepçe Kulak Ameliyatı", "Otoplasti", ABSTRACT_7)];

static MEDIKAL: [ProcedureEntry; 6] = [
    remote("Dolgu", "Dermal Filler", ABSTRACT_8),
    remote("Botoks", "Nörotoksin Enjeksiyonu", ABSTRACT_9),
    remote("Mezoterapi", "Biorevitalizasyon", ABSTRACT_10),
    remote("PRP", "Platelet Rich Plasma", ABSTRACT_11),
    remote("Leke Tedavileri", "Hiperpigmentasyon Terapisi", ABSTRACT_5),
    remote("Cilt Gençleştirme", "Rejuvenasyon", ABSTRACT_6),
];

static VUCUT: [ProcedureEntry; 4] = [
    remote("Karın Germe", "Abdominoplasti", ABSTRACT_0),
    remote("Liposuction", "Liposculpture", ABSTRACT_1),
    remote("Yağ Enjeksiyonu", "Lipotransfer", ABSTRACT_2),
    remote("Bel İncelme", "Waist Contouring", ABSTRACT_3),
];

static GOGUS: [ProcedureEntry; 3] = [
    remote("Göğüs Büyütme", "Augmentasyon Mammoplasti", ABSTRACT_4),
    remote("Göğüs Küçültme", "Redüksiyon Mammoplasti", ABSTRACT_5),
    remote("Göğüs Dikleştirme", "Mastopeksi", ABSTRACT_6),
];

static POPO: [ProcedureEntry; 2] = [
    remote("Popo Büyütme", "Gluteal Augmentasyon", ABSTRACT_7),
    remote("Popo Şekillendirme", "Gluteoplasti", ABSTRACT_8),
];

static KOL_BACAK: [ProcedureEntry; 3] = [
    remote("Kol Germe", "Brachioplasti", ABSTRACT_9),
    remote("Bacak Germe", "Kruoplasti", ABSTRACT_10),
    remote("Baldır Estetiği", "Gastrocnemius Augmentasyon", ABSTRACT_11),
];

#[must_use]
pub fn procedures(category: CategoryKey) -> &'static [ProcedureEntry] {
    match category {
        CategoryKey::Yuz => &YUZ,
        CategoryKey::Kulak => &KULAK,
        CategoryKey::Medikal => &MEDIKAL,
        CategoryKey::Vucut => &VUCUT,
        CategoryKey::Gogus => &GOGUS,
        CategoryKey::Popo => &POPO,
        CategoryKey::KolBacak => &KOL_BACAK,
    }
}

#[must_use]
pub fn procedure(category: CategoryKey, index: usize) -> Option<&'static ProcedureEntry> {
    procedures(category).get(index)
}
