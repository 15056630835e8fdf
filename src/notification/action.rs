// SPDX-License-Identifier: MPL-2.0
//! Response actions attached to a notification.
//!
//! A `NotifyAction` is a button (or a text field) shown when a detailed banner
//! is expanded. Its handler runs at most once, with the action itself as
//! argument so that text replies can be read back from `text_response()`.

use std::fmt;

/// Visual and behavioral style of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionStyle {
    /// Plain button.
    #[default]
    Default,
    /// Button signalling that the action may change or delete data.
    Destructive,
    /// Row that opens a text field; the handler receives the typed reply.
    TextInput,
    /// Replaces the whole action list with a text field.
    OnlyTextInput,
    /// Leaves things unchanged. At most one is kept, always last.
    Cancel,
}

impl ActionStyle {
    /// Returns true for the styles whose handler receives a text reply.
    #[must_use]
    pub fn is_text_input(self) -> bool {
        matches!(self, ActionStyle::TextInput | ActionStyle::OnlyTextInput)
    }

    #[must_use]
    pub fn is_cancel(self) -> bool {
        self == ActionStyle::Cancel
    }
}

/// Callback run when the user activates an action.
pub type ActionHandler = Box<dyn FnOnce(&NotifyAction)>;

/// One response action of a notification.
pub struct NotifyAction {
    title: String,
    style: ActionStyle,
    handler: Option<ActionHandler>,
    text_response: Option<String>,
}

impl NotifyAction {
    /// Creates an action with an optional response handler.
    pub fn new(
        title: impl Into<String>,
        style: ActionStyle,
        handler: Option<ActionHandler>,
    ) -> Self {
        Self {
            title: title.into(),
            style,
            handler,
            text_response: None,
        }
    }

    pub fn plain(title: impl Into<String>, handler: impl FnOnce(&NotifyAction) + 'static) -> Self {
        Self::new(title, ActionStyle::Default, Some(Box::new(handler)))
    }

    pub fn destructive(
        title: impl Into<String>,
        handler: impl FnOnce(&NotifyAction) + 'static,
    ) -> Self {
        Self::new(title, ActionStyle::Destructive, Some(Box::new(handler)))
    }

    pub fn cancel(title: impl Into<String>, handler: impl FnOnce(&NotifyAction) + 'static) -> Self {
        Self::new(title, ActionStyle::Cancel, Some(Box::new(handler)))
    }

    pub fn text_input(
        title: impl Into<String>,
        handler: impl FnOnce(&NotifyAction) + 'static,
    ) -> Self {
        Self::new(title, ActionStyle::TextInput, Some(Box::new(handler)))
    }

    pub fn only_text_input(
        title: impl Into<String>,
        handler: impl FnOnce(&NotifyAction) + 'static,
    ) -> Self {
        Self::new(title, ActionStyle::OnlyTextInput, Some(Box::new(handler)))
    }

    /// Creates an action that only dismisses the banner.
    pub fn without_handler(title: impl Into<String>, style: ActionStyle) -> Self {
        Self::new(title, style, None)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn style(&self) -> ActionStyle {
        self.style
    }

    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// The reply typed by the user, for text-input styles.
    #[must_use]
    pub fn text_response(&self) -> Option<&str> {
        self.text_response.as_deref()
    }

    /// Attaches the user's reply. Ignored for styles without a text field.
    pub fn set_text_response(&mut self, text: impl Into<String>) {
        if self.style.is_text_input() {
            self.text_response = Some(text.into());
        } else {
            tracing::debug!(
                title = %self.title,
                style = ?self.style,
                "ignoring text reply for non-text action"
            );
        }
    }

    /// Runs the handler, consuming the action.
    ///
    /// Returns `true` if a handler was present.
    pub fn respond(mut self) -> bool {
        match self.handler.take() {
            Some(handler) => {
                handler(&self);
                true
            }
            None => false,
        }
    }

    /// The renderable part of this action.
    #[must_use]
    pub fn row(&self) -> ActionRow {
        ActionRow {
            title: self.title.clone(),
            style: self.style,
        }
    }
}

impl fmt::Debug for NotifyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("has_handler", &self.handler.is_some())
            .field("text_response", &self.text_response)
            .finish()
    }
}

/// Title and style of an action, as handed to presenters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRow {
    pub title: String,
    pub style: ActionStyle,
}
