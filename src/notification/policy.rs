// SPDX-License-Identifier: MPL-2.0
//! Ordering rules for the action list of an expanded banner.

use super::action::{ActionStyle, NotifyAction};

/// Result of [`sort_actions`].
#[derive(Debug, Default)]
pub struct SortedActions {
    /// Rows to render: regular actions in insertion order, then one Cancel.
    pub rows: Vec<NotifyAction>,
    /// The first `OnlyTextInput` action, which replaces the rows with a text field.
    pub text_entry: Option<NotifyAction>,
}

impl SortedActions {
    /// Whether the expanded card shows a text field instead of rows.
    #[must_use]
    pub fn shows_text_entry(&self) -> bool {
        self.text_entry.is_some()
    }
}

/// Sorts actions for display.
///
/// - `Default`, `Destructive` and `TextInput` keep their relative order.
/// - Only the first `Cancel` is kept, and it goes last.
/// - `OnlyTextInput` actions never become rows. The first one is returned as
///   `text_entry`; later ones are dropped.
///
/// The function is pure: the same input order always yields the same output.
#[must_use]
pub fn sort_actions(actions: Vec<NotifyAction>) -> SortedActions {
    let mut rows = Vec::with_capacity(actions.len());
    let mut cancel = None;
    let mut text_entry = None;

    for action in actions {
        match action.style() {
            ActionStyle::Cancel => {
                if cancel.is_none() {
                    cancel = Some(action);
                } else {
                    tracing::debug!(title = action.title(), "dropping extra cancel action");
                }
            }
            ActionStyle::OnlyTextInput => {
                if text_entry.is_none() {
                    text_entry = Some(action);
                } else {
                    tracing::debug!(title = action.title(), "dropping extra text-only action");
                }
            }
            ActionStyle::Default | ActionStyle::Destructive | ActionStyle::TextInput => {
                rows.push(action);
            }
        }
    }

    rows.extend(cancel);
    SortedActions { rows, text_entry }
}
