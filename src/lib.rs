//! fixture_sandbox: a rapier playground for the fixture dialogs.
//!
//! A single dynamic body sits above the ground; the toolbar opens the
//! add / edit dialogs from `fixture_editor` and [`scene`] applies their results.

pub mod app;
pub mod config;
pub mod scene;
pub mod toolbar;

pub use app::SandboxPlugin;
pub use config::SandboxConfig;
