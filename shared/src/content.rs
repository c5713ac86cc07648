//! Static copy and imagery for the non-catalogue screens.

use serde::{Deserialize, Serialize};

pub const APP_TITLE: &str = "Simu.ai";

pub struct Banner {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image_url: &'static str,
}

pub const ANNOUNCEMENT: Banner = Banner {
    title: "New Collection",
    subtitle: "Discover our latest abstract art series",
    image_url: "https://images.unsplash.com/photo-1579548122080-c35fd6820ecb?w=800&auto=format&fit=crop",
};

pub const FEATURES_HEADING: &str = "# Estetik İşlemler";

// --- Gallery ---

pub const GALLERY_TITLE: &str = "Gallery";
pub const GALLERY_COLUMNS: u8 = 3;

pub const GALLERY_IMAGES: [&str; 15] = [
    "https://images.unsplash.com/photo-1557682250-33bd709cbe85?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1550859492-d5da9d8e45f3?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1549490349-8643362247b5?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1614849963640-9cc74b2a385b?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1586672806791-3a67d24186c0?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1541701494587-cb58502866ab?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1578255321055-68b5bc99052b?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1617791160588-241658c0f566?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1507908708918-778587c9e563?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1518640467707-6811f4a6ab73?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?w=500&auto=format&fit=crop&q=60",
    "https://images.unsplash.com/photo-1547333101-6bb18e609b2f?w=500&auto=format&fit=crop&q=60",
];

// --- Pro paywall ---

pub const PRO_SLIDES: [&str; 7] = [
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=2864&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1601412436009-d964bd02edbc?q=80&w=2864&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=2961&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=2787&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=2787&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=2940&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=2888&auto=format&fit=crop",
];

pub const PRO_SLIDE_BADGE: &str = "NO WATERMARK";
pub const PRO_TRIAL_TEXT: &str = "3 Days Free Trial";
pub const PRO_FOOTER_LINKS: [&str; 3] = ["Terms of Use", "Privacy Policy", "Restore Purchase"];
pub const PLAN_SHEET_TITLE: &str = "Choose Your Plan";
pub const PLAN_SHEET_TERMS: &str = "Cancel anytime. Subscription auto-renews until cancelled.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanId {
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

pub struct Plan {
    pub id: PlanId,
    pub title: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub popular: bool,
    pub discount: Option<&'static str>,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        id: PlanId::Weekly,
        title: "Weekly",
        price: "$4.99",
        period: "week",
        popular: true,
        discount: None,
    },
    Plan {
        id: PlanId::Monthly,
        title: "Monthly",
        price: "$12.99",
        period: "month",
        popular: false,
        discount: None,
    },
    Plan {
        id: PlanId::Yearly,
        title: "Yearly",
        price: "$54.99",
        period: "year",
        popular: false,
        discount: Some("Save 54%"),
    },
];

impl PlanId {
    #[must_use]
    pub fn plan(self) -> &'static Plan {
        match self {
            Self::Weekly => &PLANS[0],
            Self::Monthly => &PLANS[1],
            Self::Yearly => &PLANS[2],
        }
    }
}

// --- Profile ---

pub const PROFILE_TITLE: &str = "Profile";

pub struct UserCard {
    pub name: &'static str,
    pub email: &'static str,
    pub avatar_url: &'static str,
}

pub const PROFILE_USER: UserCard = UserCard {
    name: "Alex Johnson",
    email: "alex.johnson@example.com",
    avatar_url: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=500&auto=format&fit=crop&q=60",
};

/// Settings rows that carry a switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingToggle {
    Notifications,
    DarkMode,
}

pub enum SettingAccessory {
    Chevron,
    Switch(SettingToggle),
    Badge(&'static str),
}

pub struct SettingItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub accessory: SettingAccessory,
}

pub struct SettingSection {
    pub title: &'static str,
    pub items: &'static [SettingItem],
}

const fn row(icon: &'static str, title: &'static str, description: Option<&'static str>) -> SettingItem {
    SettingItem {
        icon,
        title,
        description,
        accessory: SettingAccessory::Chevron,
    }
}

pub const SETTING_SECTIONS: [SettingSection; 3] = [
    SettingSection {
        title: "Account Settings",
        items: &[
            row("person-outline", "Personal Information", Some("Update your personal details")),
            row("card-outline", "Payment Methods", Some("Manage your payment options")),
            SettingItem {
                icon: "notifications-outline",
                title: "Notifications",
                description: None,
                accessory: SettingAccessory::Switch(SettingToggle::Notifications),
            },
            row("lock-closed-outline", "Privacy", None),
        ],
    },
    SettingSection {
        title: "App Settings",
        items: &[
            SettingItem {
                icon: "moon-outline",
                title: "Dark Mode",
                description: None,
                accessory: SettingAccessory::Switch(SettingToggle::DarkMode),
            },
            row("language-outline", "Language", Some("English (US)")),
            SettingItem {
                icon: "cloud-download-outline",
                title: "Storage",
                description: None,
                accessory: SettingAccessory::Badge("1.2 GB"),
            },
        ],
    },
    SettingSection {
        title: "More",
        items: &[
            row("help-circle-outline", "Help & Support", None),
            row("information-circle-outline", "About", None),
        ],
    },
];

// --- Upload ---

pub const UPLOAD_DEFAULT_TITLE: &str = "İşlem Detayı";
pub const UPLOAD_PICKER_TITLE: &str = "Görsel Seç";
pub const UPLOAD_PICKER_FORMATS: &str = "JPEG, PNG veya HEIC formatında";
pub const UPLOAD_GUIDANCE: &str =
    "Yüz bölgenizin net göründüğü, doğal ışıklı bir fotoğraf yükleyin.";
pub const UPLOAD_TIPS_LINK: &str = "Öneriler →";
pub const GENERATE_BUTTON: &str = "Generate";
pub const TIPS_TITLE: &str = "Fotoğraf Çekim Önerileri";

pub struct PhotoTip {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PHOTO_TIPS: [PhotoTip; 3] = [
    PhotoTip {
        icon: "camera",
        title: "Doğru Açı",
        description: "Yüzünüzün önden, net bir şekilde göründüğü fotoğraf çekin. Göz seviyesinde, dengeli ve düz bir açı kullanın.",
    },
    PhotoTip {
        icon: "sunny",
        title: "Doğru Işık",
        description: "Doğal ışığı tercih edin, pencere kenarında veya açık havada yumuşak ışık altında fotoğraf çekin.",
    },
    PhotoTip {
        icon: "image-outline",
        title: "Uygun Arka Plan",
        description: "Sade, tek renkli ve dağınık olmayan bir arka plan önünde poz verin. Dikkat dağıtıcı unsurlar olmamalı.",
    },
];

pub const PHOTO_CHECKLIST: [&str; 4] = [
    "Yüz önden ve net bir şekilde görünmeli",
    "Doğal ışık tercih edilmeli",
    "Sade bir arka plan kullanılmalı",
    "Filtre veya düzenleme olmadan gerçek görüntü",
];

pub const TIPS_DISCLAIMER: &str =
    "Not: Bu öneriler daha iyi sonuçlar elde etmenize yardımcı olacaktır.";

// --- Generate ---

pub const GENERATE_DEFAULT_TITLE: &str = "İşlem Simülasyonu";
pub const GENERATE_UNKNOWN_CATEGORY: &str = "Kategori";
pub const GENERATE_LABEL: &str = "Simülasyon";
pub const GENERATE_SECTION_TITLE: &str = "İyileşme Süreci";
pub const GENERATE_INFO_NOTE: &str = "Gerçek sonuçlar kişiden kişiye farklılık gösterebilir. Bu görseller yalnızca bilgilendirme amaçlıdır.";

pub struct SimulationStage {
    pub id: &'static str,
    pub title: &'static str,
    pub day: &'static str,
}

pub const SIMULATION_STAGES: [SimulationStage; 6] = [
    SimulationStage { id: "1", title: "Estetik Öncesi", day: "Başlangıç" },
    SimulationStage { id: "2", title: "Ameliyat Sonrası", day: "İlk Gün" },
    SimulationStage { id: "3", title: "İyileşme Süreci", day: "3. Gün" },
    SimulationStage { id: "4", title: "İyileşme Süreci", day: "7. Gün" },
    SimulationStage { id: "5", title: "İyileşme Süreci", day: "14. Gün" },
    SimulationStage { id: "6", title: "Final Sonuç", day: "1-2 Ay Sonrası" },
];

#[must_use]
pub fn simulation_description(procedure_title: &str) -> String {
    format!(
        "Bu simülasyon, {procedure_title} işleminin farklı aşamalarını göstermektedir. \
         İyileşme süreci kişiden kişiye değişiklik gösterebilir."
    )
}
