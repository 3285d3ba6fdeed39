//! State for the detail overlay.

use crate::ui::mvi::UiState;
use crate::view::BookDetail;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailDialogState {
    #[default]
    Hidden,
    Visible {
        detail: BookDetail,
        /// First description line shown.
        scroll: u16,
    },
}

impl UiState for DetailDialogState {}

impl DetailDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn detail(&self) -> Option<&BookDetail> {
        match self {
            Self::Visible { detail, .. } => Some(detail),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(DetailDialogState::default(), DetailDialogState::Hidden);
        assert!(!DetailDialogState::Hidden.is_visible());
        assert!(DetailDialogState::Hidden.detail().is_none());
    }
}
