//! What the shell renders. Everything here is plain serialisable data built
//! from the [`Model`] on every `view` call.

use serde::{Deserialize, Serialize};

use crate::catalog::{procedures, CategoryKey, Icon};
use crate::content::{
    self, PlanId, SettingAccessory, SettingToggle, APP_TITLE, PLANS, PRO_SLIDES,
};
use crate::model::{Model, UploadState};
use crate::navigation::{build_payload, GenerateParams, Route};
use crate::resolver::ImageView;
use crate::UserFacingError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconView {
    pub family: String,
    pub name: String,
}

impl From<Icon> for IconView {
    fn from(icon: Icon) -> Self {
        Self {
            family: icon.family.into(),
            name: icon.name.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabView {
    pub route: Route,
    pub icon: String,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub show_pro_button: bool,
    pub show_back_button: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BannerView {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTabView {
    pub key: CategoryKey,
    pub label: String,
    pub icon: IconView,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcedureCardView {
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    pub image: ImageView,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeView {
    pub header: HeaderView,
    pub banner: BannerView,
    pub heading: String,
    pub categories: Vec<CategoryTabView>,
    pub procedures: Vec<ProcedureCardView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBadgeView {
    pub icon: IconView,
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoTipView {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TipsModalView {
    pub title: String,
    pub tips: Vec<PhotoTipView>,
    pub checklist: Vec<String>,
    pub disclaimer: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadView {
    pub title: String,
    pub edited_title: String,
    pub description: String,
    pub hero_image: ImageView,
    pub badge: CategoryBadgeView,
    pub picked_category: CategoryKey,
    pub category_options: Vec<CategoryTabView>,
    pub picker_title: String,
    pub picker_formats: String,
    pub guidance: String,
    pub tips_link: String,
    pub uploading: bool,
    pub generating: bool,
    pub generate_label: String,
    pub generate_enabled: bool,
    pub tips: Option<TipsModalView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageView {
    pub id: String,
    pub title: String,
    pub day: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateView {
    pub title: String,
    pub category_label: String,
    pub label: String,
    pub section_title: String,
    pub description: String,
    pub stages: Vec<StageView>,
    pub info_note: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryView {
    pub title: String,
    pub columns: u8,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingAccessoryView {
    Chevron,
    Switch { setting: SettingToggle, enabled: bool },
    Badge { text: String },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingRowView {
    pub icon: String,
    pub title: String,
    pub description: Option<String>,
    pub accessory: SettingAccessoryView,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingSectionView {
    pub title: String,
    pub rows: Vec<SettingRowView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileView {
    pub title: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub sections: Vec<SettingSectionView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanView {
    pub id: PlanId,
    pub title: String,
    pub price: String,
    pub period: String,
    pub popular: bool,
    pub discount: Option<String>,
    pub selected: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSheetView {
    pub title: String,
    pub plans: Vec<PlanView>,
    pub terms: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProView {
    pub header: HeaderView,
    pub slides: Vec<String>,
    pub active_slide: usize,
    pub badge: String,
    pub trial: String,
    pub pricing: String,
    pub footer_links: Vec<String>,
    pub plan_sheet: Option<PlanSheetView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Home(HomeView),
    Gallery(GalleryView),
    Pro(ProView),
    Profile(ProfileView),
    Upload(UploadView),
    Generate(GenerateView),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub route: Route,
    pub tab_bar: Option<Vec<TabView>>,
    pub screen: ScreenView,
    pub error: Option<UserFacingError>,
}

impl ViewModel {
    #[must_use]
    pub fn build(model: &Model) -> Self {
        let screen = match model.route {
            Route::Home => ScreenView::Home(home(model)),
            Route::Gallery => ScreenView::Gallery(gallery()),
            Route::Pro => ScreenView::Pro(pro(model)),
            Route::Profile => ScreenView::Profile(profile(model)),
            // Opened without a payload: fall back to an empty procedure.
            Route::Upload => ScreenView::Upload(match &model.upload {
                Some(state) => upload(model, state),
                None => upload(model, &UploadState::new(Default::default())),
            }),
            Route::Generate => ScreenView::Generate(generate(
                model.generate.as_ref().unwrap_or(&GenerateParams::default()),
            )),
        };

        Self {
            route: model.route,
            tab_bar: model.route.shows_tab_bar().then(|| tab_bar(model.route)),
            screen,
            error: model.active_error.as_ref().map(UserFacingError::from),
        }
    }
}

fn tab_bar(active: Route) -> Vec<TabView> {
    Route::TABS
        .iter()
        .filter_map(|&route| {
            route.tab_icon().map(|icon| TabView {
                route,
                icon: icon.into(),
                active: route == active,
            })
        })
        .collect()
}

fn category_tabs(active: CategoryKey) -> Vec<CategoryTabView> {
    CategoryKey::TAB_ORDER
        .iter()
        .map(|&key| CategoryTabView {
            key,
            label: key.display_name().into(),
            icon: key.info().icon.into(),
            active: key == active,
        })
        .collect()
}

fn home(model: &Model) -> HomeView {
    let category = model.home.active_category;
    let resolver = model.resolver();

    HomeView {
        header: HeaderView {
            title: APP_TITLE.into(),
            show_pro_button: true,
            show_back_button: false,
        },
        banner: BannerView {
            title: content::ANNOUNCEMENT.title.into(),
            subtitle: content::ANNOUNCEMENT.subtitle.into(),
            image_url: content::ANNOUNCEMENT.image_url.into(),
        },
        heading: content::FEATURES_HEADING.into(),
        categories: category_tabs(category),
        // Cards show exactly what the upload screen will show after a tap.
        procedures: procedures(category)
            .iter()
            .enumerate()
            .map(|(index, entry)| ProcedureCardView {
                index,
                title: entry.title.into(),
                subtitle: entry.subtitle.into(),
                image: ImageView::from(&resolver.resolve(&build_payload(entry, category))),
            })
            .collect(),
    }
}

fn upload(model: &Model, state: &UploadState) -> UploadView {
    let payload = &state.payload;
    let title = if state.title.trim().is_empty() {
        content::UPLOAD_DEFAULT_TITLE.to_string()
    } else {
        state.title.clone()
    };

    UploadView {
        edited_title: state.title.clone(),
        description: state.description.clone(),
        hero_image: ImageView::from(&model.resolver().resolve(payload)),
        badge: CategoryBadgeView {
            icon: state.picked_category.info().icon.into(),
            title: state.effective_title().into(),
            subtitle: payload.procedure_subtitle.clone(),
        },
        picked_category: state.picked_category,
        category_options: category_tabs(state.picked_category),
        picker_title: content::UPLOAD_PICKER_TITLE.into(),
        picker_formats: content::UPLOAD_PICKER_FORMATS.into(),
        guidance: content::UPLOAD_GUIDANCE.into(),
        tips_link: content::UPLOAD_TIPS_LINK.into(),
        uploading: state.uploading,
        generating: state.generating,
        generate_label: content::GENERATE_BUTTON.into(),
        generate_enabled: !state.generating,
        tips: state.show_tips.then(tips_modal),
        title,
    }
}

fn tips_modal() -> TipsModalView {
    TipsModalView {
        title: content::TIPS_TITLE.into(),
        tips: content::PHOTO_TIPS
            .iter()
            .map(|tip| PhotoTipView {
                icon: tip.icon.into(),
                title: tip.title.into(),
                description: tip.description.into(),
            })
            .collect(),
        checklist: content::PHOTO_CHECKLIST.iter().map(|s| (*s).into()).collect(),
        disclaimer: content::TIPS_DISCLAIMER.into(),
    }
}

fn generate(params: &GenerateParams) -> GenerateView {
    let title = if params.procedure_title.trim().is_empty() {
        content::GENERATE_DEFAULT_TITLE
    } else {
        params.procedure_title.as_str()
    };

    GenerateView {
        title: title.into(),
        category_label: params
            .category
            .map_or(content::GENERATE_UNKNOWN_CATEGORY, CategoryKey::display_name)
            .into(),
        label: content::GENERATE_LABEL.into(),
        section_title: content::GENERATE_SECTION_TITLE.into(),
        description: content::simulation_description(title),
        stages: content::SIMULATION_STAGES
            .iter()
            .map(|stage| StageView {
                id: stage.id.into(),
                title: stage.title.into(),
                day: stage.day.into(),
            })
            .collect(),
        info_note: content::GENERATE_INFO_NOTE.into(),
    }
}

fn gallery() -> GalleryView {
    GalleryView {
        title: content::GALLERY_TITLE.into(),
        columns: content::GALLERY_COLUMNS,
        images: content::GALLERY_IMAGES.iter().map(|s| (*s).into()).collect(),
    }
}

fn profile(model: &Model) -> ProfileView {
    let user = &content::PROFILE_USER;

    ProfileView {
        title: content::PROFILE_TITLE.into(),
        name: user.name.into(),
        email: user.email.into(),
        avatar_url: user.avatar_url.into(),
        sections: content::SETTING_SECTIONS
            .iter()
            .map(|section| SettingSectionView {
                title: section.title.into(),
                rows: section
                    .items
                    .iter()
                    .map(|item| SettingRowView {
                        icon: item.icon.into(),
                        title: item.title.into(),
                        description: item.description.map(Into::into),
                        accessory: match item.accessory {
                            SettingAccessory::Chevron => SettingAccessoryView::Chevron,
                            SettingAccessory::Switch(setting) => SettingAccessoryView::Switch {
                                setting,
                                enabled: model.profile.is_enabled(setting),
                            },
                            SettingAccessory::Badge(text) => {
                                SettingAccessoryView::Badge { text: text.into() }
                            }
                        },
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn pro(model: &Model) -> ProView {
    let selected = model.pro.selected_plan;
    let plan = selected.plan();

    ProView {
        header: HeaderView {
            title: APP_TITLE.into(),
            show_pro_button: false,
            show_back_button: true,
        },
        slides: PRO_SLIDES.iter().map(|s| (*s).into()).collect(),
        active_slide: model.pro.slide_index,
        badge: content::PRO_SLIDE_BADGE.into(),
        trial: content::PRO_TRIAL_TEXT.into(),
        pricing: format!("Then {} {}", plan.title, plan.price),
        footer_links: content::PRO_FOOTER_LINKS.iter().map(|s| (*s).into()).collect(),
        plan_sheet: model.pro.plan_sheet_open.then(|| PlanSheetView {
            title: content::PLAN_SHEET_TITLE.into(),
            plans: PLANS
                .iter()
                .map(|p| PlanView {
                    id: p.id,
                    title: p.title.into(),
                    price: p.price.into(),
                    period: p.period.into(),
                    popular: p.popular,
                    discount: p.discount.map(Into::into),
                    selected: p.id == selected,
                })
                .collect(),
            terms: content::PLAN_SHEET_TERMS.into(),
        }),
    }
}
