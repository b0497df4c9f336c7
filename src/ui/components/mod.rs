// UI Components
pub mod backdrop;
pub mod command_bar;
pub mod confetti;
pub mod glyph;
pub mod greeting;
pub mod icon_row;
pub mod language_switcher;
pub mod value_card;
pub mod warning;

// Re-export components for convenience
pub use backdrop::{FloatingShapes, GradientBackground};
pub use command_bar::{CommandBar, CommandItem};
pub use confetti::ConfettiLayer;
pub use greeting::{Header, Message, Title};
pub use icon_row::{AnimatedIcon, ROW_ICONS};
pub use language_switcher::LanguageSwitcher;
pub use value_card::{CardKind, ValueCard};
pub use warning::WarningScreen;
