use crux_core::testing::AppTester;
use crux_core::Request;
use simu_shared::capabilities::{TimerId, TimerOperation, TimerOutput};
use simu_shared::catalog::CategoryKey;
use simu_shared::content::SettingToggle;
use simu_shared::navigation::{Params, Route};
use simu_shared::resolver::ImageView;
use simu_shared::view::{IconView, ScreenView, SettingAccessoryView};
use simu_shared::{App, Effect, Event, Model};

fn started(effects: &[Effect]) -> Vec<(TimerId, u64)> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Timer(req) => match &req.operation {
                TimerOperation::Start { id, millis } => Some((*id, *millis)),
                TimerOperation::Cancel { .. } => None,
            },
            Effect::Render(_) => None,
        })
        .collect()
}

fn cancelled(effects: &[Effect]) -> Vec<TimerId> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Timer(req) => match &req.operation {
                TimerOperation::Cancel { id } => Some(*id),
                TimerOperation::Start { .. } => None,
            },
            Effect::Render(_) => None,
        })
        .collect()
}

fn timer_start(effects: Vec<Effect>) -> Request<TimerOperation> {
    effects
        .into_iter()
        .find_map(|e| match e {
            Effect::Timer(req) if matches!(req.operation, TimerOperation::Start { .. }) => {
                Some(req)
            }
            _ => None,
        })
        .expect("a timer start")
}

fn renders(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::Render(_)))
}

fn open_eyelid_procedure(app: &AppTester<App, Effect>, model: &mut Model) {
    let update = app.update(
        Event::ProcedureSelected {
            category: CategoryKey::Yuz,
            index: 4,
        },
        model,
    );
    assert!(renders(&update.effects));
    assert_eq!(model.route, Route::Upload);
}

#[test]
fn test_select_generate_and_come_back() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    open_eyelid_procedure(&app, &mut model);

    let ScreenView::Upload(view) = app.view(&model).screen else {
        panic!("expected upload screen");
    };
    assert_eq!(view.title, "Göz Kapağı Estetiği");
    assert_eq!(view.badge.subtitle, "Blefaroplasti");
    assert_eq!(
        view.hero_image,
        ImageView::Bundled {
            key: "goz_kapagi".into(),
            asset: "face_covers/goz_kapagi.png".into()
        }
    );
    assert!(app.view(&model).tab_bar.is_none());

    let update = app.update(Event::GeneratePressed, &mut model);
    let timers = started(&update.effects);
    assert_eq!(timers.len(), 1);
    let (generate_timer, millis) = timers[0];
    assert_eq!(millis, 1_000);

    // Button is disabled while generating.
    let update = app.update(Event::GeneratePressed, &mut model);
    assert!(update.effects.is_empty());

    let update = app.update(Event::GenerationFinished { timer: generate_timer }, &mut model);
    assert!(renders(&update.effects));
    assert_eq!(model.route, Route::Generate);

    let ScreenView::Generate(view) = app.view(&model).screen else {
        panic!("expected generate screen");
    };
    assert_eq!(view.title, "Göz Kapağı Estetiği");
    assert_eq!(view.category_label, "Yüz");
    assert_eq!(view.stages.len(), 6);

    app.update(Event::BackPressed, &mut model);
    assert_eq!(model.route, Route::Upload);
    assert!(!model.upload.as_ref().unwrap().generating);

    app.update(Event::BackPressed, &mut model);
    assert_eq!(model.route, Route::Home);
    assert!(model.back_stack.is_empty());
}

#[test]
fn test_edited_title_is_carried_to_simulation() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    open_eyelid_procedure(&app, &mut model);
    app.update(
        Event::TitleChanged {
            title: "Üst Göz Kapağı".into(),
        },
        &mut model,
    );

    let update = app.update(Event::GeneratePressed, &mut model);
    let (timer, _) = started(&update.effects)[0];
    app.update(Event::GenerationFinished { timer }, &mut model);

    let ScreenView::Generate(view) = app.view(&model).screen else {
        panic!("expected generate screen");
    };
    assert_eq!(view.title, "Üst Göz Kapağı");
    assert!(view.description.contains("Üst Göz Kapağı işleminin"));
}

#[test]
fn test_upload_ignores_second_press() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_eyelid_procedure(&app, &mut model);

    let update = app.update(Event::UploadPhotoPressed, &mut model);
    let (timer, millis) = started(&update.effects)[0];
    assert_eq!(millis, 2_000);
    assert!(model.upload.as_ref().unwrap().uploading);

    let update = app.update(Event::UploadPhotoPressed, &mut model);
    assert!(started(&update.effects).is_empty());

    app.update(Event::UploadFinished { timer }, &mut model);
    assert!(!model.upload.as_ref().unwrap().uploading);

    let update = app.update(Event::UploadPhotoPressed, &mut model);
    assert_eq!(started(&update.effects).len(), 1);
}

#[test]
fn test_leaving_upload_abandons_generation() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_eyelid_procedure(&app, &mut model);

    let update = app.update(Event::GeneratePressed, &mut model);
    let (timer, _) = started(&update.effects)[0];

    let update = app.update(Event::BackPressed, &mut model);
    assert_eq!(cancelled(&update.effects), vec![timer]);
    assert_eq!(model.route, Route::Home);

    // A late fire from the shell must not navigate anywhere.
    let update = app.update(Event::GenerationFinished { timer }, &mut model);
    assert!(update.effects.is_empty());
    assert_eq!(model.route, Route::Home);
}

#[test]
fn test_out_of_range_procedure_is_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let update = app.update(
        Event::ProcedureSelected {
            category: CategoryKey::Kulak,
            index: 5,
        },
        &mut model,
    );
    assert!(update.effects.is_empty());
    assert_eq!(model.route, Route::Home);
}

#[test]
fn test_category_tabs_switch_cards() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::CategorySelected {
            category: CategoryKey::Medikal,
        },
        &mut model,
    );
    let ScreenView::Home(view) = app.view(&model).screen else {
        panic!("expected home screen");
    };
    assert_eq!(view.procedures[0].title, "Dolgu");
    assert!(matches!(view.procedures[0].image, ImageView::Remote { .. }));
}

#[test]
fn test_deep_link_into_upload_resolves_by_title() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let mut params = Params::new();
    params.insert("procedureTitle".into(), "Göz Kapağı Estetiği".into());
    params.insert("isLocalImage".into(), "true".into());
    params.insert("localImageKey".into(), "  Göz Kapağı Estetiği ".into());
    params.insert("category".into(), "yuz".into());

    app.update(
        Event::RouteOpened {
            path: "/(tabs)/upload".into(),
            params,
        },
        &mut model,
    );

    let ScreenView::Upload(view) = app.view(&model).screen else {
        panic!("expected upload screen");
    };
    assert!(matches!(
        view.hero_image,
        ImageView::Bundled { ref key, .. } if key == "goz_kapagi"
    ));
}

#[test]
fn test_unknown_deep_link_surfaces_error() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::RouteOpened {
            path: "/settings".into(),
            params: Params::new(),
        },
        &mut model,
    );
    assert_eq!(model.route, Route::Home);

    let error = app.view(&model).error.expect("error shown");
    assert_eq!(error.error_code, "NOT_FOUND");

    app.update(Event::DismissError, &mut model);
    assert!(app.view(&model).error.is_none());
}

#[test]
fn test_generate_deep_link_with_unknown_category() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    let mut params = Params::new();
    params.insert("category".into(), "ayak".into());

    app.update(
        Event::RouteOpened {
            path: "/(tabs)/generate".into(),
            params,
        },
        &mut model,
    );

    let ScreenView::Generate(view) = app.view(&model).screen else {
        panic!("expected generate screen");
    };
    assert_eq!(view.title, "İşlem Simülasyonu");
    assert_eq!(view.category_label, "Kategori");
}

#[test]
fn test_shell_timers_drive_upload_and_generation() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_eyelid_procedure(&app, &mut model);

    let update = app.update(Event::UploadPhotoPressed, &mut model);
    let (id, _) = started(&update.effects)[0];
    let mut request = timer_start(update.effects);

    let update = app
        .resolve(&mut request, TimerOutput::Fired { id })
        .expect("an update");
    assert_eq!(update.events, vec![Event::UploadFinished { timer: id }]);
    for event in update.events {
        app.update(event, &mut model);
    }
    assert!(!model.upload.as_ref().unwrap().uploading);

    let update = app.update(Event::GeneratePressed, &mut model);
    let (id, _) = started(&update.effects)[0];
    let mut request = timer_start(update.effects);

    let update = app
        .resolve(&mut request, TimerOutput::Fired { id })
        .expect("an update");
    assert_eq!(update.events, vec![Event::GenerationFinished { timer: id }]);
    for event in update.events {
        app.update(event, &mut model);
    }
    assert_eq!(model.route, Route::Generate);
}

#[test]
fn test_cancelled_timer_is_a_no_op() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_eyelid_procedure(&app, &mut model);

    let update = app.update(Event::GeneratePressed, &mut model);
    let (id, _) = started(&update.effects)[0];
    let mut request = timer_start(update.effects);
    app.update(Event::BackPressed, &mut model);

    let update = app
        .resolve(&mut request, TimerOutput::Cancelled { id })
        .expect("an update");
    assert_eq!(update.events, vec![Event::Noop]);
    for event in update.events {
        let update = app.update(event, &mut model);
        assert!(update.effects.is_empty());
    }
    assert_eq!(model.route, Route::Home);
}

#[test]
fn test_upload_form_edits() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_eyelid_procedure(&app, &mut model);

    app.update(Event::TipsOpened, &mut model);
    let ScreenView::Upload(view) = app.view(&model).screen else {
        panic!("expected upload screen");
    };
    assert_eq!(view.tips.expect("tips modal").tips.len(), 3);

    app.update(Event::TipsClosed, &mut model);
    app.update(
        Event::DescriptionChanged {
            description: "Sadece üst kapak".into(),
        },
        &mut model,
    );
    let ScreenView::Upload(view) = app.view(&model).screen else {
        panic!("expected upload screen");
    };
    assert!(view.tips.is_none());
    assert_eq!(view.description, "Sadece üst kapak");
}

#[test]
fn test_picked_category_reaches_badge_and_simulation() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    open_eyelid_procedure(&app, &mut model);

    app.update(
        Event::UploadCategoryPicked {
            category: CategoryKey::Medikal,
        },
        &mut model,
    );
    let ScreenView::Upload(view) = app.view(&model).screen else {
        panic!("expected upload screen");
    };
    assert_eq!(view.picked_category, CategoryKey::Medikal);
    assert_eq!(view.badge.icon, IconView::from(CategoryKey::Medikal.info().icon));
    assert!(view
        .category_options
        .iter()
        .all(|tab| tab.active == (tab.key == CategoryKey::Medikal)));
    // The hero image still belongs to the procedure that was opened.
    assert!(matches!(
        view.hero_image,
        ImageView::Bundled { ref key, .. } if key == "goz_kapagi"
    ));

    let update = app.update(Event::GeneratePressed, &mut model);
    let (timer, _) = started(&update.effects)[0];
    app.update(Event::GenerationFinished { timer }, &mut model);

    let ScreenView::Generate(view) = app.view(&model).screen else {
        panic!("expected generate screen");
    };
    assert_eq!(view.category_label, "Medikal");
}

#[test]
fn test_upload_events_off_screen_are_ignored() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    for event in [
        Event::TipsOpened,
        Event::UploadCategoryPicked {
            category: CategoryKey::Kulak,
        },
        Event::DescriptionChanged {
            description: "x".into(),
        },
    ] {
        let update = app.update(event, &mut model);
        assert!(update.effects.is_empty());
    }
    assert!(model.upload.is_none());
}

#[test]
fn test_profile_switch_toggles() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::TabPressed {
            route: Route::Profile,
        },
        &mut model,
    );

    let dark_mode = |app: &AppTester<App, Effect>, model: &Model| {
        let ScreenView::Profile(view) = app.view(model).screen else {
            panic!("expected profile screen");
        };
        view.sections
            .iter()
            .flat_map(|section| &section.rows)
            .find_map(|row| match row.accessory {
                SettingAccessoryView::Switch {
                    setting: SettingToggle::DarkMode,
                    enabled,
                } => Some(enabled),
                _ => None,
            })
            .expect("dark mode switch")
    };
    assert!(!dark_mode(&app, &model));

    let update = app.update(
        Event::SettingToggled {
            setting: SettingToggle::DarkMode,
            enabled: true,
        },
        &mut model,
    );
    assert!(renders(&update.effects));
    assert!(dark_mode(&app, &model));
}
