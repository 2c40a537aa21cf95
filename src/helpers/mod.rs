//! Helper Utilities

pub mod links;
