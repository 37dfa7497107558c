//! Long-running Telegram bot wiring the dispatcher to the interaction core.
//!
//! Three update branches: commands, inline keyboard callbacks, and free-text
//! messages. All of them resolve against one `Arc<Mutex<App>>`, so every
//! list mutation and its write-through save happen inside a single critical
//! section. The lock is always released before talking to Telegram.

use crate::app::{Action, App, Reply};
use crate::config::Config;
use crate::list::SharedList;
use crate::store::ListStore;
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};
use teloxide::utils::command::BotCommands;
use tokio::sync::Mutex;

type SharedApp = Arc<Mutex<App>>;

/// Available bot commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Show the list and the action menu")]
    Start,
    #[command(description = "Show help")]
    Help,
    #[command(description = "Check bot status")]
    Status,
}

/// Handle the /start, /help, and /status commands.
async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    app: SharedApp,
    config: Arc<Config>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            let reply = app.lock().await.handle_start();
            send_reply(&bot, msg.chat.id, reply).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, HELP_TEXT)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Command::Status => {
            let items = app.lock().await.list().len();
            let text = format!(
                "✅ *Bot Status: Online*\n\n\
                🖥️ *Host:* `{}`\n\
                🗂 *Snapshot:* `{}`\n\
                📋 *Items:* {}",
                config.hostname,
                config.list_path.display(),
                items
            );
            bot.send_message(msg.chat.id, text)
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
    }

    Ok(())
}

/// Handle a button press: resolve the action, then edit the message that
/// carried the keyboard.
async fn callback_handler(bot: Bot, query: CallbackQuery, app: SharedApp) -> ResponseResult<()> {
    // Answer immediately to clear the button loading state.
    let _ = bot.answer_callback_query(&query.id).await;

    let Some(action) = query.data.as_deref().and_then(Action::parse) else {
        tracing::warn!(data = ?query.data, "unrecognized callback data");
        return Ok(());
    };

    let reply = {
        let mut app = app.lock().await;
        app.handle_action(query.from.id, action)
    };

    match &query.message {
        Some(msg) => {
            let mut request = bot
                .edit_message_text(msg.chat().id, msg.id(), reply.text)
                .parse_mode(ParseMode::MarkdownV2);
            if let Some(menu) = reply.menu {
                request = request.reply_markup(menu.keyboard());
            }
            // Telegram rejects edits that change nothing (e.g. Show pressed
            // twice); that is not worth failing the handler over.
            if let Err(e) = request.await {
                tracing::debug!(error = %e, "edit after callback failed");
            }
        }
        None => {
            // The keyboard message is no longer accessible; fall back to a
            // fresh message in the user's private chat.
            let chat_id = ChatId(query.from.id.0 as i64);
            send_reply(&bot, chat_id, reply).await?;
        }
    }

    Ok(())
}

/// Handle a free-text message.
async fn message_handler(bot: Bot, msg: Message, app: SharedApp) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(()); // Stickers, photos, etc.
    };
    let Some(user) = &msg.from else {
        return Ok(());
    };

    let reply = {
        let mut app = app.lock().await;
        app.handle_text(user.id, text)
    };

    send_reply(&bot, msg.chat.id, reply).await
}

/// Send a reply, attaching its menu keyboard if it has one.
async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
    let mut request = bot
        .send_message(chat_id, reply.text)
        .parse_mode(ParseMode::MarkdownV2);
    if let Some(menu) = reply.menu {
        request = request.reply_markup(menu.keyboard());
    }
    request.await?;
    Ok(())
}

const HELP_TEXT: &str = "📖 *Shared list bot help*\n\n\
    Everyone talking to this bot shares a single list\\.\n\n\
    *Buttons:*\n\
    ➕ Add item \\- the next message you send becomes a new item\n\
    ❌ Delete item \\- send the number of the item to remove\n\
    📋 Show list \\- display the current list\n\
    🧹 Clear list \\- empty the list \\(asks for confirmation\\)\n\n\
    *Commands:*\n\
    /start \\- show the list and the menu\n\
    /help \\- show this help\n\
    /status \\- check bot status";

/// Main entry point for the bot.
pub async fn run(config: Config) -> Result<()> {
    let store = ListStore::new(config.list_path.clone());
    let list = SharedList::load(store);
    tracing::info!(
        items = list.len(),
        path = %config.list_path.display(),
        "loaded shared list"
    );

    let app: SharedApp = Arc::new(Mutex::new(App::new(list)));
    let bot = Bot::new(&config.bot_token);

    tracing::info!("Starting shared list bot...");

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(Update::filter_message().endpoint(message_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![app, Arc::new(config)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
