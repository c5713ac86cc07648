#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod assets;
pub mod capabilities;
pub mod catalog;
pub mod config;
pub mod content;
pub mod event;
pub mod model;
pub mod navigation;
pub mod normalize;
pub mod resolver;
pub mod view;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ParseCategoryError;
use crate::config::ConfigError;
use crate::navigation::ParseRouteError;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use event::Event;
pub use model::Model;
pub use view::ViewModel;

pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 3_000;
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 2_000;
pub const DEFAULT_GENERATE_DELAY_MS: u64 = 1_000;

/// Shown whenever a procedure image cannot be resolved.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=2070&auto=format&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{code}] {message}", code = .kind.code())]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub fn user_facing_message(&self) -> String {
        match self.kind {
            ErrorKind::Validation => self.message.clone(),
            ErrorKind::NotFound => "This page could not be found.".into(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::new(ErrorKind::Validation, e.to_string())
    }
}

impl From<ParseRouteError> for AppError {
    fn from(e: ParseRouteError) -> Self {
        AppError::new(ErrorKind::NotFound, e.to_string())
    }
}

impl From<ParseCategoryError> for AppError {
    fn from(e: ParseCategoryError) -> Self {
        AppError::new(ErrorKind::Validation, e.to_string())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserFacingError {
    pub message: String,
    pub error_code: String,
}

impl From<&AppError> for UserFacingError {
    fn from(e: &AppError) -> Self {
        Self {
            message: e.user_facing_message(),
            error_code: e.code().to_string(),
        }
    }
}

pub mod app {
    use tracing::{debug, info, warn};

    use super::*;
    use crate::capabilities::TimerOutput;
    use crate::catalog::procedure;
    use crate::config::AppConfig;
    use crate::model::UploadState;
    use crate::navigation::{build_payload, GenerateParams, NavigationPayload, Route};

    /// What happens to the back stack on a route change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum History {
        Push,
        Pop,
        Reset,
    }

    #[derive(Default)]
    pub struct App;

    impl App {
        /// Leaves the current screen, cancelling the timers it owns, then
        /// enters `to`.
        fn navigate(model: &mut Model, caps: &Capabilities, to: Route, history: History) {
            let from = model.route;

            for id in model.release_timers(from) {
                debug!(%id, route = %from, "cancelling timer on screen exit");
                caps.timer.cancel(id);
            }

            match history {
                History::Push => model.back_stack.push(from),
                History::Pop => {}
                History::Reset => model.back_stack.clear(),
            }

            model.route = to;
            info!(from = %from, to = %to, depth = model.back_stack.len(), "navigated");

            if to == Route::Pro {
                Self::arm_carousel(model, caps);
            }
        }

        fn arm_carousel(model: &mut Model, caps: &Capabilities) {
            if let Some(previous) = model.pro.carousel_timer.take() {
                caps.timer.cancel(previous);
            }

            let id = model.next_timer_id();
            model.pro.carousel_timer = Some(id);
            caps.timer
                .start(id, model.config.carousel_interval_ms, |output| match output {
                    TimerOutput::Fired { id } => Event::CarouselTick { timer: id },
                    TimerOutput::Cancelled { .. } => Event::Noop,
                });
        }

        fn open_upload(model: &mut Model, caps: &Capabilities, payload: NavigationPayload) {
            Self::navigate(model, caps, Route::Upload, History::Push);
            model.upload = Some(UploadState::new(payload));
        }

        fn open_generate(model: &mut Model, caps: &Capabilities, params: GenerateParams) {
            Self::navigate(model, caps, Route::Generate, History::Push);
            model.generate = Some(params);
        }

        fn active_upload(model: &mut Model) -> Option<&mut UploadState> {
            if model.route == Route::Upload {
                model.upload.as_mut()
            } else {
                None
            }
        }

        fn apply_config(model: &mut Model, json: &str) -> AppResult<()> {
            let config = AppConfig::from_json(json)?;
            info!(
                carousel_interval_ms = config.carousel_interval_ms,
                upload_delay_ms = config.upload_delay_ms,
                generate_delay_ms = config.generate_delay_ms,
                "config applied"
            );
            model.config = config;
            Ok(())
        }

        fn open_path(
            model: &mut Model,
            caps: &Capabilities,
            path: &str,
            params: &navigation::Params,
        ) -> AppResult<()> {
            match path.parse::<Route>()? {
                Route::Upload => {
                    Self::open_upload(model, caps, NavigationPayload::from_params(params));
                }
                Route::Generate => {
                    Self::open_generate(model, caps, GenerateParams::from_params(params));
                }
                route => Self::navigate(model, caps, route, History::Reset),
            }
            Ok(())
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            let event_name = event.name();
            if event.is_internal() {
                debug!(event = event_name, route = %model.route, "update");
            } else {
                info!(event = event_name, route = %model.route, "update");
            }

            match event {
                Event::Noop => {}

                Event::AppStarted => {
                    caps.render.render();
                }

                Event::ConfigReceived { json } => {
                    if let Err(e) = Self::apply_config(model, &json) {
                        warn!(error = %e, "config rejected, keeping previous");
                        model.set_error(e);
                    }
                    caps.render.render();
                }

                Event::DismissError => {
                    model.clear_error();
                    caps.render.render();
                }

                Event::TabPressed { route } => {
                    if !route.is_tab() {
                        warn!(%route, "not a tab route");
                        return;
                    }
                    if route != model.route {
                        Self::navigate(model, caps, route, History::Reset);
                    }
                    caps.render.render();
                }

                Event::ProButtonPressed => {
                    if model.route != Route::Pro {
                        Self::navigate(model, caps, Route::Pro, History::Push);
                    }
                    caps.render.render();
                }

                Event::BackPressed => {
                    // The paywall header always leads home.
                    let (to, history) = if model.route == Route::Pro {
                        (Route::Home, History::Reset)
                    } else {
                        (model.back_stack.pop().unwrap_or(Route::Home), History::Pop)
                    };
                    if to != model.route {
                        Self::navigate(model, caps, to, history);
                    }
                    caps.render.render();
                }

                Event::RouteOpened { path, params } => {
                    if let Err(e) = Self::open_path(model, caps, &path, &params) {
                        warn!(path = %path, error = %e, "cannot open route");
                        model.set_error(e);
                    }
                    caps.render.render();
                }

                Event::CategorySelected { category } => {
                    model.home.active_category = category;
                    caps.render.render();
                }

                Event::ProcedureSelected { category, index } => {
                    let Some(entry) = procedure(category, index) else {
                        warn!(%category, index, "no procedure at index");
                        return;
                    };
                    Self::open_upload(model, caps, build_payload(entry, category));
                    caps.render.render();
                }

                Event::UploadPhotoPressed => {
                    let id = model.next_timer_id();
                    let millis = model.config.upload_delay_ms;
                    let Some(upload) = Self::active_upload(model) else {
                        return;
                    };
                    if upload.uploading {
                        debug!("upload already in progress");
                        return;
                    }
                    upload.uploading = true;
                    upload.upload_timer = Some(id);
                    caps.timer.start(id, millis, |output| match output {
                        TimerOutput::Fired { id } => Event::UploadFinished { timer: id },
                        TimerOutput::Cancelled { .. } => Event::Noop,
                    });
                    caps.render.render();
                }

                Event::UploadFinished { timer } => {
                    let Some(upload) = model
                        .upload
                        .as_mut()
                        .filter(|u| u.upload_timer == Some(timer))
                    else {
                        debug!(%timer, "stale upload timer ignored");
                        return;
                    };
                    upload.upload_timer = None;
                    upload.uploading = false;
                    caps.render.render();
                }

                Event::GeneratePressed => {
                    let id = model.next_timer_id();
                    let millis = model.config.generate_delay_ms;
                    let Some(upload) = Self::active_upload(model) else {
                        return;
                    };
                    if upload.generating {
                        debug!("generation already in progress");
                        return;
                    }
                    upload.generating = true;
                    upload.generate_timer = Some(id);
                    caps.timer.start(id, millis, |output| match output {
                        TimerOutput::Fired { id } => Event::GenerationFinished { timer: id },
                        TimerOutput::Cancelled { .. } => Event::Noop,
                    });
                    caps.render.render();
                }

                Event::GenerationFinished { timer } => {
                    let Some(upload) = model
                        .upload
                        .as_mut()
                        .filter(|u| u.generate_timer == Some(timer))
                    else {
                        debug!(%timer, "stale generate timer ignored");
                        return;
                    };
                    upload.generate_timer = None;
                    upload.generating = false;
                    let params = upload.generate_params();
                    Self::open_generate(model, caps, params);
                    caps.render.render();
                }

                Event::TitleChanged { title } => {
                    if let Some(upload) = Self::active_upload(model) {
                        upload.title = title;
                        caps.render.render();
                    }
                }

                Event::DescriptionChanged { description } => {
                    if let Some(upload) = Self::active_upload(model) {
                        upload.description = description;
                        caps.render.render();
                    }
                }

                Event::UploadCategoryPicked { category } => {
                    if let Some(upload) = Self::active_upload(model) {
                        upload.picked_category = category;
                        caps.render.render();
                    }
                }

                Event::TipsOpened => {
                    if let Some(upload) = Self::active_upload(model) {
                        upload.show_tips = true;
                        caps.render.render();
                    }
                }

                Event::TipsClosed => {
                    if let Some(upload) = Self::active_upload(model) {
                        upload.show_tips = false;
                        caps.render.render();
                    }
                }

                Event::CarouselTick { timer } => {
                    if model.route != Route::Pro || model.pro.carousel_timer != Some(timer) {
                        debug!(%timer, "stale carousel tick ignored");
                        return;
                    }
                    model.pro.carousel_timer = None;
                    model.pro.advance();
                    Self::arm_carousel(model, caps);
                    caps.render.render();
                }

                Event::CarouselScrolled { index } => {
                    if model.route != Route::Pro {
                        return;
                    }
                    model.pro.scroll_to(index);
                    Self::arm_carousel(model, caps);
                    caps.render.render();
                }

                Event::PlanSheetOpened
                | Event::PlanSheetClosed
                | Event::PlanConfirmed
                | Event::PlanSelected { .. }
                | Event::ContinuePressed
                    if model.route != Route::Pro =>
                {
                    debug!(route = %model.route, "paywall event outside the paywall ignored");
                }

                Event::PlanSheetOpened => {
                    model.pro.plan_sheet_open = true;
                    caps.render.render();
                }

                Event::PlanSheetClosed | Event::PlanConfirmed => {
                    model.pro.plan_sheet_open = false;
                    caps.render.render();
                }

                Event::PlanSelected { plan } => {
                    model.pro.selected_plan = plan;
                    caps.render.render();
                }

                Event::ContinuePressed => {
                    info!(plan = ?model.pro.selected_plan, "purchase requested");
                    caps.render.render();
                }

                Event::SettingToggled { setting, enabled } => {
                    model.profile.set(setting, enabled);
                    caps.render.render();
                }
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            ViewModel::build(model)
        }
    }
}
