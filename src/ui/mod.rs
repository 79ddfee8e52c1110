pub mod components;
pub mod report;
pub mod screens;
pub mod theme;

pub use theme::Theme;
