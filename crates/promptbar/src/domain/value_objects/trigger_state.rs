//! TriggerState - Whether the buffer ends in a slash-command token

use serde::{Deserialize, Serialize};

/// Result of trigger detection, re-derived after every buffer change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerState {
    pub is_active: bool,
    /// Characters typed after the `/`, empty when just `/` was typed
    pub filter_text: String,
}

impl TriggerState {
    pub fn active(filter_text: impl Into<String>) -> Self {
        Self {
            is_active: true,
            filter_text: filter_text.into(),
        }
    }

    pub fn inactive() -> Self {
        Self::default()
    }
}
