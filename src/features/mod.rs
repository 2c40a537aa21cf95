//! Feature Pages
//!
//! One module per top-level content view.

pub mod about;
pub mod projects;
