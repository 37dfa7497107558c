//! Per-user interaction state machine over the shared list.
//!
//! Each inbound event (start command, button click, free text) is resolved
//! against the sender's current state and produces a [`Reply`] describing
//! what to render. Transmission and edit-vs-send choices live in `bot.rs`,
//! which keeps this module testable without a live bot.

use crate::error::ListError;
use crate::list::SharedList;
use crate::render::{self, Menu};
use std::collections::HashMap;
use teloxide::types::UserId;

/// What the next free-text message from a user will be interpreted as.
///
/// Created lazily per user, defaults to `Idle`, never persisted: a restart
/// drops every pending interaction back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserState {
    #[default]
    Idle,
    AwaitingItemText,
    AwaitingDeleteIndex,
    AwaitingClearConfirm,
}

/// A menu action requested via inline keyboard callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    Show,
    Clear,
    ConfirmClear,
    CancelClear,
}

impl Action {
    /// Parse callback data from a button press.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "add" => Some(Action::Add),
            "delete" => Some(Action::Delete),
            "show" => Some(Action::Show),
            "clear" => Some(Action::Clear),
            "confirm_clear" => Some(Action::ConfirmClear),
            "cancel_clear" => Some(Action::CancelClear),
            _ => None,
        }
    }
}

/// A rendered response: MarkdownV2 text plus an optional menu keyboard.
#[derive(Debug)]
pub struct Reply {
    pub text: String,
    pub menu: Option<Menu>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: None,
        }
    }

    fn with_menu(text: impl Into<String>, menu: Menu) -> Self {
        Self {
            text: text.into(),
            menu: Some(menu),
        }
    }
}

/// The interaction core: the shared list plus every user's pending state.
///
/// Constructed once and locked as a whole by the dispatcher, so a mutation
/// and its write-through save form a single critical section.
#[derive(Debug)]
pub struct App {
    list: SharedList,
    states: HashMap<UserId, UserState>,
}

impl App {
    pub fn new(list: SharedList) -> Self {
        Self {
            list,
            states: HashMap::new(),
        }
    }

    /// Current state for a user, defaulting to `Idle`.
    pub fn state(&self, user: UserId) -> UserState {
        self.states.get(&user).copied().unwrap_or_default()
    }

    pub fn list(&self) -> &SharedList {
        &self.list
    }

    /// Handle the /start command: greeting, current list, action menu.
    pub fn handle_start(&self) -> Reply {
        let body = if self.list.is_empty() {
            "📝 The shared list is empty\\.".to_string()
        } else {
            format!(
                "📝 The shared list has {} items:\n{}",
                self.list.len(),
                render::format_list(&self.list.snapshot())
            )
        };

        Reply::with_menu(
            format!(
                "🤖 *Welcome to the shared list bot\\!*\n\n{body}\n\n*What do you want to do?*"
            ),
            Menu::Actions,
        )
    }

    /// Handle a button click.
    pub fn handle_action(&mut self, user: UserId, action: Action) -> Reply {
        match action {
            Action::Add => {
                self.states.insert(user, UserState::AwaitingItemText);
                Reply::text("✏️ *Add item*\n\nSend the text of the item to add:")
            }
            Action::Delete => {
                if self.list.is_empty() {
                    self.states.insert(user, UserState::Idle);
                    Reply::with_menu(
                        "❌ The list is empty\\. There is nothing to delete\\.",
                        Menu::Actions,
                    )
                } else {
                    self.states.insert(user, UserState::AwaitingDeleteIndex);
                    Reply::text(format!(
                        "🗑 *Delete item*\n\n{}\n\n*Send the number of the item to delete:*",
                        render::format_list(&self.list.snapshot())
                    ))
                }
            }
            Action::Show => Reply::with_menu(self.list_message(), Menu::Actions),
            Action::Clear => {
                if self.list.is_empty() {
                    self.states.insert(user, UserState::Idle);
                    Reply::with_menu("📋 The list is already empty\\.", Menu::Actions)
                } else {
                    self.states.insert(user, UserState::AwaitingClearConfirm);
                    Reply::with_menu(
                        format!(
                            "🧹 *Clear list*\n\nThis removes all {} items\\. Are you sure?",
                            self.list.len()
                        ),
                        Menu::ConfirmClear,
                    )
                }
            }
            Action::ConfirmClear => {
                if self.state(user) != UserState::AwaitingClearConfirm {
                    // Stale button on an old confirmation message.
                    return Reply::with_menu(self.list_message(), Menu::Actions);
                }
                self.states.insert(user, UserState::Idle);
                match self.list.clear() {
                    Ok(removed) => Reply::with_menu(
                        format!("🧹 Cleared {removed} items from the list\\."),
                        Menu::Actions,
                    ),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to save list after clear");
                        Reply::with_menu("🧹 List cleared\\.", Menu::Actions)
                    }
                }
            }
            Action::CancelClear => {
                if self.state(user) != UserState::AwaitingClearConfirm {
                    return Reply::with_menu(self.list_message(), Menu::Actions);
                }
                self.states.insert(user, UserState::Idle);
                Reply::with_menu("↩️ Cancelled\\. The list is unchanged\\.", Menu::Actions)
            }
        }
    }

    /// Handle a free-text message, resolving the sender's pending state.
    pub fn handle_text(&mut self, user: UserId, body: &str) -> Reply {
        match self.state(user) {
            UserState::AwaitingItemText => {
                let item = body.to_string();
                self.states.insert(user, UserState::Idle);
                if let Err(e) = self.list.append(item.clone()) {
                    tracing::error!(error = %e, "failed to save list after append");
                }
                Reply::with_menu(
                    format!(
                        "✅ Added *{}* to the list\\!",
                        render::escape_markdown(&item)
                    ),
                    Menu::Actions,
                )
            }
            UserState::AwaitingDeleteIndex => match body.trim().parse::<i64>() {
                Err(_) => Reply::text(
                    "❌ That is not a number\\. Send the number of the item to delete:",
                ),
                Ok(index) => match self.list.remove_at(index) {
                    Ok(item) => {
                        self.states.insert(user, UserState::Idle);
                        Reply::with_menu(
                            format!("🗑 Deleted *{}*\\!", render::escape_markdown(&item)),
                            Menu::Actions,
                        )
                    }
                    Err(ListError::IndexOutOfRange { len, .. }) => Reply::text(format!(
                        "❌ Invalid number\\. Send a number between 1 and {len}:"
                    )),
                    Err(ListError::SaveFailed { item, source }) => {
                        tracing::error!(error = %source, "failed to save list after delete");
                        self.states.insert(user, UserState::Idle);
                        Reply::with_menu(
                            format!("🗑 Deleted *{}*\\!", render::escape_markdown(&item)),
                            Menu::Actions,
                        )
                    }
                },
            },
            UserState::AwaitingClearConfirm => Reply::with_menu(
                "🧹 *Clear list*\n\nUse the buttons to confirm or cancel\\.",
                Menu::ConfirmClear,
            ),
            // No pending action: treat any text as an implicit "show".
            UserState::Idle => Reply::with_menu(self.list_message(), Menu::Actions),
        }
    }

    fn list_message(&self) -> String {
        format!(
            "📋 *The shared list:*\n\n{}\n\n*Pick an action:*",
            render::format_list(&self.list.snapshot())
        )
    }
}
