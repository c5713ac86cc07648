use serde::{Deserialize, Serialize};

use crate::capabilities::TimerId;
use crate::catalog::CategoryKey;
use crate::content::{PlanId, SettingToggle};
use crate::navigation::{Params, Route};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Noop,

    AppStarted,
    ConfigReceived {
        json: String,
    },
    DismissError,

    // --- Navigation ---
    TabPressed {
        route: Route,
    },
    ProButtonPressed,
    BackPressed,
    /// Deep link from the shell's router, e.g. `/(tabs)/upload`.
    RouteOpened {
        path: String,
        params: Params,
    },

    // --- Home ---
    CategorySelected {
        category: CategoryKey,
    },
    ProcedureSelected {
        category: CategoryKey,
        index: usize,
    },

    // --- Upload ---
    UploadPhotoPressed,
    UploadFinished {
        timer: TimerId,
    },
    GeneratePressed,
    GenerationFinished {
        timer: TimerId,
    },
    TitleChanged {
        title: String,
    },
    DescriptionChanged {
        description: String,
    },
    UploadCategoryPicked {
        category: CategoryKey,
    },
    TipsOpened,
    TipsClosed,

    // --- Pro ---
    CarouselTick {
        timer: TimerId,
    },
    CarouselScrolled {
        index: usize,
    },
    PlanSheetOpened,
    PlanSheetClosed,
    PlanSelected {
        plan: PlanId,
    },
    PlanConfirmed,
    ContinuePressed,

    // --- Profile ---
    SettingToggled {
        setting: SettingToggle,
        enabled: bool,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AppStarted => "app_started",
            Self::ConfigReceived { .. } => "config_received",
            Self::DismissError => "dismiss_error",
            Self::TabPressed { .. } => "tab_pressed",
            Self::ProButtonPressed => "pro_button_pressed",
            Self::BackPressed => "back_pressed",
            Self::RouteOpened { .. } => "route_opened",
            Self::CategorySelected { .. } => "category_selected",
            Self::ProcedureSelected { .. } => "procedure_selected",
            Self::UploadPhotoPressed => "upload_photo_pressed",
            Self::UploadFinished { .. } => "upload_finished",
            Self::GeneratePressed => "generate_pressed",
            Self::GenerationFinished { .. } => "generation_finished",
            Self::TitleChanged { .. } => "title_changed",
            Self::DescriptionChanged { .. } => "description_changed",
            Self::UploadCategoryPicked { .. } => "upload_category_picked",
            Self::TipsOpened => "tips_opened",
            Self::TipsClosed => "tips_closed",
            Self::CarouselTick { .. } => "carousel_tick",
            Self::CarouselScrolled { .. } => "carousel_scrolled",
            Self::PlanSheetOpened => "plan_sheet_opened",
            Self::PlanSheetClosed => "plan_sheet_closed",
            Self::PlanSelected { .. } => "plan_selected",
            Self::PlanConfirmed => "plan_confirmed",
            Self::ContinuePressed => "continue_pressed",
            Self::SettingToggled { .. } => "setting_toggled",
        }
    }

    /// Events raised by the core itself rather than by a tap.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Noop
                | Self::UploadFinished { .. }
                | Self::GenerationFinished { .. }
                | Self::CarouselTick { .. }
        )
    }
}
