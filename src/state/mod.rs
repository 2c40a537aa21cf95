//! State Management Layer
//!
//! UI state lives in GPUI entities; views subscribe with `cx.observe` and
//! re-render on notify. Mutators here are pure so callers decide when to
//! publish a notification.

pub mod view_state;

pub use view_state::ViewState;
