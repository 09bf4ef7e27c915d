//! UI layer for desktop GUI: app shell and the surface the widget renders into.

pub mod app;
pub mod surface;

pub use app::ShortenerApp;
pub use surface::GuiSurface;
