mod timer;

pub use self::timer::{Timer, TimerId, TimerOperation, TimerOutput};

/// Render capability re-export.
///
/// We use Crux's built-in Render capability directly because it provides
/// all necessary functionality for triggering view updates.
pub use crux_core::render::Render;

use crate::event::Event;

// Effect variants are named after the capability type: keep the generic form.
#[derive(crux_core::macros::Effect)]
#[effect(app = "crate::App")]
pub struct Capabilities {
    pub render: Render<Event>,
    pub timer: Timer<Event>,
}
