//! Shared UI crate for Labourscope: the dashboard core, its data provider and
//! the Dioxus components every platform renders.

pub mod components;
pub mod config;
pub mod core;
pub mod data;
pub mod export;
pub mod i18n;
pub mod views;

use dioxus::prelude::*;

/// Shared theme stylesheet, served as an asset on the web.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
