use std::env;

use embed_menu::{nay, say, yay};
use embed_menu::{EmbedMenu, MenuAction, MenuOptions, PageSpec, ReplyMethod};
use serenity::all::{
    ButtonStyle, Colour, Command, CommandInteraction, Context, CreateButton, CreateCommand,
    CreateEmbed, EventHandler, GatewayIntents, Interaction, ReactionType, Ready,
};
use serenity::{async_trait, Client};

struct Handler;

fn unicode(emoji: &str) -> ReactionType {
    ReactionType::Unicode(emoji.to_string())
}

fn manual_pages() -> Vec<PageSpec> {
    vec![
        PageSpec::new(
            "overview",
            CreateEmbed::new()
                .title("📖 Manual — Overview")
                .description("React ➡️ to read on, or ⏹️ to put the manual away.")
                .color(Colour::GOLD),
        )
        .reaction(unicode("➡️"), MenuAction::Next)
        .reaction(unicode("⏹️"), MenuAction::Stop),
        PageSpec::new(
            "navigation",
            CreateEmbed::new()
                .title("📖 Manual — Navigation")
                .description("Reactions flip pages one at a time; buttons can jump anywhere.")
                .color(Colour::GOLD),
        )
        .reaction(unicode("⬅️"), MenuAction::Previous)
        .reaction(unicode("➡️"), MenuAction::Next)
        .reaction(unicode("⏹️"), MenuAction::Stop),
        PageSpec::new(
            "about",
            CreateEmbed::new()
                .title("📖 Manual — About")
                .description("That's the whole tour. Jump back or close the manual below.")
                .color(Colour::GOLD),
        )
        .button(
            "back_to_start",
            CreateButton::new("back_to_start")
                .label("Back to start")
                .style(ButtonStyle::Primary),
            MenuAction::Page("overview".to_string()),
        )
        .button(
            "previous",
            CreateButton::new("previous")
                .label("Previous")
                .style(ButtonStyle::Secondary),
            MenuAction::Previous,
        )
        .button(
            "close",
            CreateButton::new("close")
                .label("Close")
                .style(ButtonStyle::Danger),
            MenuAction::Delete,
        ),
    ]
}

async fn run_manual(ctx: &Context, cmd: &CommandInteraction) {
    let mut menu = match EmbedMenu::new(ctx, cmd, manual_pages(), MenuOptions::default()) {
        Ok(menu) => menu,
        Err(e) => {
            nay!("Failed to build the manual menu: {}", e);
            return;
        }
    };
    if let Err(e) = menu.start(ReplyMethod::Reply).await {
        nay!("Manual menu ended with an error: {}", e);
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let cmd = CreateCommand::new("manual")
            .description("Browse the bot manual")
            .dm_permission(true);
        if let Err(e) = Command::create_global_command(&ctx.http, cmd).await {
            nay!("Failed to register the manual command: {}", e);
        }

        yay!("{} is connected!", ready.user.name);
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            match command.data.name.as_str() {
                "manual" => run_manual(&ctx, &command).await,
                other => nay!("Unknown command: {}", other),
            }
        }
    }
}

#[tokio::main]
async fn main() {
    say!("Embed menu demo is starting up!");

    dotenv::dotenv().ok();

    let Ok(token) = env::var("DISCORD_TOKEN") else {
        nay!("DISCORD_TOKEN not found in environment");
        return;
    };

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

    let Ok(mut client) = Client::builder(token, intents).event_handler(Handler).await else {
        nay!("Error creating client");
        return;
    };

    if let Err(err) = client.start().await {
        nay!("Client error: {}", err);
    }
}
