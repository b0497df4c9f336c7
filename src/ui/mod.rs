// UI Layer
pub mod animation;
pub mod components;
pub mod i18n;
pub mod layout;
pub mod paint;
pub mod scene;
pub mod theme;

// Re-export for convenience
pub use i18n::{I18n, Language, Localizer, TextDirection, TextKey};
pub use layout::LayoutManager;
pub use scene::{HoverTarget, Scene};
pub use theme::Theme;
