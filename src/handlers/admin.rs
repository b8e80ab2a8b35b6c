//! Admin command handlers

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, error};
use crate::utils::errors::{BotError, Result};
use crate::utils::logging;
use super::{is_admin_callback, is_admin_message, HandlerError, HandlerResult};

/// Reply to `/admin`
pub const ADMIN_REPLY: &str = "Ты админ";

/// Commands understood by the admin router
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Admin commands:")]
pub enum AdminCommand {
    #[command(description = "Check admin access")]
    Admin,
}

/// Admin router: every branch is restricted to admins
pub fn router() -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter(is_admin_message)
                .filter_command::<AdminCommand>()
                .endpoint(handle_admin_command),
        )
        .branch(Update::filter_callback_query().filter(is_admin_callback))
}

async fn handle_admin_command(bot: Bot, msg: Message, cmd: AdminCommand) -> HandlerResult {
    let result = match cmd {
        AdminCommand::Admin => handle_admin(bot, msg).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Error handling admin command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle /admin command
pub async fn handle_admin(bot: Bot, msg: Message) -> Result<()> {
    let user = msg
        .from
        .as_ref()
        .ok_or_else(|| BotError::InvalidInput("No user in message".to_string()))?;
    let user_id = user.id.0 as i64;

    debug!(user_id = user_id, chat_id = ?msg.chat.id, "Processing /admin command");

    bot.send_message(msg.chat.id, ADMIN_REPLY).await?;

    logging::log_admin_action(user_id, "admin");
    Ok(())
}
