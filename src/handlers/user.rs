//! User command handlers

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, error};
use crate::utils::errors::Result;
use crate::utils::logging;
use super::{user_router_admits_callback, user_router_admits_message, HandlerError, HandlerResult};

/// Reply to `/start`
pub const START_REPLY: &str = "ะบั";

/// Commands understood by the user router
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "User commands:")]
pub enum UserCommand {
    #[command(description = "Start the bot")]
    Start,
}

/// User router; restricted to admins unless the router is made public
pub fn router() -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter(user_router_admits_message)
                .filter_command::<UserCommand>()
                .endpoint(handle_user_command),
        )
        .branch(Update::filter_callback_query().filter(user_router_admits_callback))
}

async fn handle_user_command(bot: Bot, msg: Message, cmd: UserCommand) -> HandlerResult {
    let result = match cmd {
        UserCommand::Start => handle_start(bot, msg).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Error handling user command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message) -> Result<()> {
    let user_id = msg.from.as_ref().map(|user| user.id.0 as i64);

    debug!(user_id = ?user_id, chat_id = ?msg.chat.id, "Processing /start command");

    bot.send_message(msg.chat.id, START_REPLY).await?;

    if let Some(user_id) = user_id {
        logging::log_user_action(user_id, "start");
    }
    Ok(())
}
