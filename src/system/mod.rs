// System Layer
pub mod settings;

pub use settings::SettingsStore;
