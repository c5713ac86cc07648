use std::collections::HashSet;

use crate::capabilities::TimerId;
use crate::catalog::CategoryKey;
use crate::config::AppConfig;
use crate::content::{PlanId, SettingToggle, PRO_SLIDES};
use crate::navigation::{GenerateParams, NavigationPayload, Route};
use crate::resolver::ImageResolver;
use crate::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub active_category: CategoryKey,
}

/// The procedure detail screen, built from the payload of the card that
/// opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadState {
    pub payload: NavigationPayload,
    pub title: String,
    pub description: String,
    pub picked_category: CategoryKey,
    pub show_tips: bool,
    pub uploading: bool,
    pub generating: bool,
    pub upload_timer: Option<TimerId>,
    pub generate_timer: Option<TimerId>,
}

impl UploadState {
    #[must_use]
    pub fn new(payload: NavigationPayload) -> Self {
        Self {
            title: payload.procedure_title.clone(),
            description: String::new(),
            picked_category: payload.category,
            show_tips: false,
            uploading: false,
            generating: false,
            upload_timer: None,
            generate_timer: None,
            payload,
        }
    }

    /// Title carried forward to the simulation: the edited title, or the
    /// procedure title when the field was cleared.
    #[must_use]
    pub fn effective_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.payload.procedure_title
        } else {
            &self.title
        }
    }

    #[must_use]
    pub fn generate_params(&self) -> GenerateParams {
        GenerateParams {
            procedure_title: self.effective_title().to_string(),
            procedure_subtitle: self.payload.procedure_subtitle.clone(),
            category: Some(self.picked_category),
        }
    }

    /// Drops both simulated tasks. Returns the ids that were still armed.
    pub fn stop_tasks(&mut self) -> Vec<TimerId> {
        self.uploading = false;
        self.generating = false;
        self.upload_timer
            .take()
            .into_iter()
            .chain(self.generate_timer.take())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProState {
    pub slide_index: usize,
    pub selected_plan: PlanId,
    pub plan_sheet_open: bool,
    pub carousel_timer: Option<TimerId>,
}

impl ProState {
    pub fn advance(&mut self) {
        self.slide_index = (self.slide_index + 1) % PRO_SLIDES.len();
    }

    pub fn scroll_to(&mut self, index: usize) {
        self.slide_index = index.min(PRO_SLIDES.len() - 1);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub enabled: HashSet<SettingToggle>,
}

impl ProfileState {
    #[must_use]
    pub fn is_enabled(&self, setting: SettingToggle) -> bool {
        self.enabled.contains(&setting)
    }

    pub fn set(&mut self, setting: SettingToggle, enabled: bool) {
        if enabled {
            self.enabled.insert(setting);
        } else {
            self.enabled.remove(&setting);
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub route: Route,
    pub back_stack: Vec<Route>,
    pub config: AppConfig,
    pub home: HomeState,
    pub upload: Option<UploadState>,
    pub generate: Option<GenerateParams>,
    pub pro: ProState,
    pub profile: ProfileState,
    pub active_error: Option<AppError>,
    next_timer_id: u64,
}

impl Model {
    pub fn next_timer_id(&mut self) -> TimerId {
        self.next_timer_id += 1;
        TimerId(self.next_timer_id)
    }

    #[must_use]
    pub fn resolver(&self) -> ImageResolver<'_> {
        ImageResolver::new(&self.config.fallback_image_url)
    }

    /// Clears every timer slot owned by `route` and returns the ids the shell
    /// should cancel.
    pub fn release_timers(&mut self, route: Route) -> Vec<TimerId> {
        match route {
            Route::Upload => self
                .upload
                .as_mut()
                .map(UploadState::stop_tasks)
                .unwrap_or_default(),
            Route::Pro => {
                self.pro.plan_sheet_open = false;
                self.pro.carousel_timer.take().into_iter().collect()
            }
            Route::Home | Route::Gallery | Route::Profile | Route::Generate => Vec::new(),
        }
    }

    pub fn set_error(&mut self, error: AppError) {
        self.active_error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.active_error = None;
    }
}
