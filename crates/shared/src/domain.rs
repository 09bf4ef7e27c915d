use serde::{Deserialize, Serialize};

/// Stable anchors the core uses to address the widget's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Form,
    UrlInput,
    OptionsToggle,
    AdvancedOptions,
    CustomAliasInput,
    PasswordInput,
    MaxClicksInput,
    SubmitButton,
    ResultSection,
    ShortUrlOutput,
    CopyButton,
}

impl ElementId {
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Form => "shorten-form",
            Self::UrlInput => "url-input",
            Self::OptionsToggle => "options-toggle",
            Self::AdvancedOptions => "advanced-options",
            Self::CustomAliasInput => "custom-alias",
            Self::PasswordInput => "password",
            Self::MaxClicksInput => "max-clicks",
            Self::SubmitButton => "submit-button",
            Self::ResultSection => "result-section",
            Self::ShortUrlOutput => "short-url-output",
            Self::CopyButton => "copy-button",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancedOptionsVisibility {
    #[default]
    Hidden,
    Visible,
}

impl AdvancedOptionsVisibility {
    pub fn flipped(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Hidden => "Advanced Options ↓",
            Self::Visible => "Advanced Options ↑",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyButtonState {
    #[default]
    Idle,
    Confirmed,
}

impl CopyButtonState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy",
            Self::Confirmed => "Copied!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique() {
        let all = [
            ElementId::Form,
            ElementId::UrlInput,
            ElementId::OptionsToggle,
            ElementId::AdvancedOptions,
            ElementId::CustomAliasInput,
            ElementId::PasswordInput,
            ElementId::MaxClicksInput,
            ElementId::SubmitButton,
            ElementId::ResultSection,
            ElementId::ShortUrlOutput,
            ElementId::CopyButton,
        ];
        let anchors: std::collections::HashSet<_> = all.iter().map(|id| id.anchor()).collect();
        assert_eq!(anchors.len(), all.len());
    }

    #[test]
    fn visibility_flips_back_after_two_toggles() {
        let start = AdvancedOptionsVisibility::default();
        assert_eq!(start.flipped().flipped(), start);
        assert_ne!(start.toggle_label(), start.flipped().toggle_label());
    }
}
