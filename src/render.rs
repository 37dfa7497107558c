//! Rendering of the list and action menus.
//!
//! Pure formatting: turns list snapshots into MarkdownV2 text and the fixed
//! action menus into inline keyboards. Transmission is up to `bot.rs`.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Which inline keyboard to attach to a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    /// The main Add / Delete / Show / Clear menu.
    Actions,
    /// The clear-list confirmation pair.
    ConfirmClear,
}

impl Menu {
    /// Build the inline keyboard for this menu.
    pub fn keyboard(self) -> InlineKeyboardMarkup {
        match self {
            Menu::Actions => main_keyboard(),
            Menu::ConfirmClear => confirm_clear_keyboard(),
        }
    }
}

/// Create the main action menu keyboard.
fn main_keyboard() -> InlineKeyboardMarkup {
    let buttons = vec![
        vec![InlineKeyboardButton::callback("➕ Add item", "add")],
        vec![InlineKeyboardButton::callback("❌ Delete item", "delete")],
        vec![InlineKeyboardButton::callback("📋 Show list", "show")],
        vec![InlineKeyboardButton::callback("🧹 Clear list", "clear")],
    ];

    InlineKeyboardMarkup::new(buttons)
}

/// Create the clear-list confirmation keyboard.
fn confirm_clear_keyboard() -> InlineKeyboardMarkup {
    let buttons = vec![vec![
        InlineKeyboardButton::callback("✅ Yes, clear it", "confirm_clear"),
        InlineKeyboardButton::callback("↩️ Cancel", "cancel_clear"),
    ]];

    InlineKeyboardMarkup::new(buttons)
}

/// Format the list as numbered MarkdownV2 lines, 1-based.
///
/// The empty list renders as a distinct italic marker.
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        return "_The list is empty_".to_string();
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}\\. {}", i + 1, escape_markdown(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape special characters for Telegram MarkdownV2 format.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list_empty() {
        assert_eq!(format_list(&[]), "_The list is empty_");
    }

    #[test]
    fn test_format_list_numbers_from_one() {
        let items = vec!["milk".to_string(), "eggs".to_string()];
        assert_eq!(format_list(&items), "1\\. milk\n2\\. eggs");
    }

    #[test]
    fn test_format_list_escapes_items() {
        let items = vec!["semi-skimmed milk".to_string()];
        assert_eq!(format_list(&items), "1\\. semi\\-skimmed milk");
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("hello"), "hello");
        assert_eq!(escape_markdown("hello_world"), "hello\\_world");
        assert_eq!(escape_markdown("1.5l"), "1\\.5l");
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
    }

    #[test]
    fn test_main_keyboard_shape() {
        let keyboard = Menu::Actions.keyboard();
        assert_eq!(keyboard.inline_keyboard.len(), 4); // Add, Delete, Show, Clear
        assert!(keyboard.inline_keyboard.iter().all(|row| row.len() == 1));
    }

    #[test]
    fn test_confirm_clear_keyboard_shape() {
        let keyboard = Menu::ConfirmClear.keyboard();
        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(keyboard.inline_keyboard[0].len(), 2); // Confirm, Cancel
    }
}
