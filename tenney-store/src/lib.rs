// tenney-store/src/lib.rs

//! File-backed persistence for the Tenney settings and custom themes.
//! Both stores keep their data as pretty-printed JSON so users can back up
//! or hand-edit them. The core crate only sees the store traits.

pub mod settings_file;
pub mod theme_file;

pub use settings_file::JsonSettingsStore;
pub use theme_file::JsonCustomThemeStore;
