//! AppEntities - Global Entity Handles
//!
//! The view-state entity is constructed once at startup and handed to every
//! component by clone; components subscribe with `cx.observe`.

use gpui::{App, AppContext, Entity, Global};

use crate::state::ViewState;

/// Collection of global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Active page and theme mode
    pub view: Entity<ViewState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            view: cx.new(|_| ViewState::default()),
        }
    }
}
