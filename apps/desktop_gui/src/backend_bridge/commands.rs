//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    ToggleOptions,
    /// Submit whatever the form currently holds.
    Submit,
    Copy,
}

impl BackendCommand {
    pub fn name(self) -> &'static str {
        match self {
            Self::ToggleOptions => "toggle_options",
            Self::Submit => "submit",
            Self::Copy => "copy",
        }
    }
}
