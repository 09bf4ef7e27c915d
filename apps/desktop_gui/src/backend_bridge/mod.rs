//! Bridge between the UI thread and the backend worker that owns the widget.

pub mod commands;
pub mod runtime;
