//! Layout Components
//!
//! The persistent chrome around the page body.

pub mod footer;
pub mod nav_bar;
