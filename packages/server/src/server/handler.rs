//! Gateway event handler: presence on ready, prefix commands on messages.

use serenity::all::{ActivityData, Context, EventHandler, Message, Ready};
use serenity::async_trait;
use tracing::{debug, info, warn};

use crate::common::{Actor, MemberId, ServerId};
use crate::kernel::ServerDeps;
use crate::server::commands::CommandRouter;

pub struct Handler {
    deps: ServerDeps,
    router: CommandRouter,
    presence: String,
}

impl Handler {
    pub fn new(deps: ServerDeps, router: CommandRouter, presence: impl Into<String>) -> Self {
        Self {
            deps,
            router,
            presence: presence.into(),
        }
    }
}

/// Whether the message author holds Administrator in the message's server
#[allow(deprecated)]
async fn is_admin(ctx: &Context, msg: &Message) -> bool {
    let Some(guild_id) = msg.guild_id else {
        return false;
    };

    let member = match msg.member(ctx).await {
        Ok(member) => member,
        Err(e) => {
            warn!(guild_id = %guild_id, error = %e, "Could not resolve command author");
            return false;
        }
    };

    match guild_id.to_partial_guild(&ctx.http).await {
        Ok(guild) => guild.member_permissions(&member).administrator(),
        Err(e) => {
            warn!(guild_id = %guild_id, error = %e, "Could not resolve guild permissions");
            false
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        ctx.set_activity(Some(ActivityData::playing(self.presence.clone())));
        info!("Logged in as {} ({})", ready.user.name, ready.user.id);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(command) = self.router.parse(&msg.content) else {
            return;
        };
        debug!(command = ?command, author = %msg.author.id, "Command received");

        let is_admin = is_admin(&ctx, &msg).await;
        let actor = Actor::new(
            MemberId::new(msg.author.id.get()),
            msg.guild_id.map(|id| ServerId::new(id.get())),
            is_admin,
        );

        if let Some(reply) = self.router.dispatch(command, actor, &self.deps).await {
            if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
                warn!(channel_id = %msg.channel_id, error = %e, "Failed to send reply");
            }
        }
    }
}
