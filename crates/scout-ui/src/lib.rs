//! Terminal UI layer for Job Scout.
//!
//! Provides colour themes, the interactive category bar-chart view built on
//! top of [`ratatui`], and PNG chart export via `plotters`.

pub mod chart_export;
pub mod chart_view;
pub mod themes;

pub use scout_core as core;
