use std::sync::Arc;
use std::time::Duration;

use serenity::all::{
    ChannelId, CommandInteraction, ComponentInteraction, Context, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
    CreateMessage, EditMessage, Message, Reaction, ReactionType, User, UserId,
};
use serenity::collector::{ComponentInteractionCollector, ReactionCollector};
use serenity::futures::stream::{self, BoxStream};
use serenity::futures::StreamExt;
use serenity::gateway::ShardMessenger;
use serenity::http::Http;

use crate::error::{MenuError, Result};
use crate::events::{MenuEventHandler, PageChange};
use crate::nay;
use crate::page::{self, MenuAction, MenuPage, PageSpec};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
const LOADING_MESSAGE: &str = "Loading, please be patient...";

/// How the very first render of a menu is delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyMethod {
    /// Plain message in the conversation channel.
    Send,
    /// Response to the originating command interaction.
    Reply,
    /// Follow-up to an already-acknowledged command interaction.
    FollowUp,
}

/// A page to navigate to: a zero-based index or a page name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageTarget {
    Index(usize),
    Name(String),
}

impl From<usize> for PageTarget {
    fn from(index: usize) -> Self {
        PageTarget::Index(index)
    }
}

impl From<&str> for PageTarget {
    fn from(name: &str) -> Self {
        PageTarget::Name(name.to_string())
    }
}

impl From<String> for PageTarget {
    fn from(name: String) -> Self {
        PageTarget::Name(name)
    }
}

/// Lifecycle configuration, fixed at construction.
#[derive(Clone)]
pub struct MenuOptions {
    /// Window for each render cycle's input collectors.
    pub timeout: Duration,
    /// Delete the whole menu when the window elapses with no recorded input
    /// (guild channels only).
    pub delete_on_timeout: bool,
    /// Prefix the rendered content with the authorized user's mention
    /// (guild channels only).
    pub mention: bool,
    /// On [`EmbedMenu::stop`], remove only the bot's own reactions and leave
    /// the user's in place instead of clearing everything.
    pub keep_user_reaction_on_stop: bool,
    /// Description of the transient embed shown while a page is prepared.
    pub loading_message: Option<String>,
    /// Observer for `page-changing` / `page-changed` notifications.
    pub event_handler: Option<Arc<dyn MenuEventHandler>>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            delete_on_timeout: true,
            mention: false,
            keep_user_reaction_on_stop: true,
            loading_message: None,
            event_handler: None,
        }
    }
}

/// Where a dispatched directive sends the menu next.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Step {
    Goto(usize),
    Stay,
    Stop,
    Delete,
}

fn resolve_target(pages: &[MenuPage], target: &PageTarget) -> Result<usize> {
    match target {
        PageTarget::Index(index) => {
            if *index < pages.len() {
                Ok(*index)
            } else {
                Err(MenuError::PageIndexOutOfRange {
                    index: *index,
                    len: pages.len(),
                })
            }
        }
        PageTarget::Name(name) => pages
            .iter()
            .position(|p| p.name == *name)
            .ok_or_else(|| MenuError::PageNotFound(name.clone())),
    }
}

/// The shared directive table for reactions and buttons. `Previous`/`Next`
/// are silent no-ops at the page-list boundary; callbacks are handled by the
/// caller before dispatch ever reaches this table.
fn directive_step(pages: &[MenuPage], current: usize, action: &MenuAction) -> Result<Step> {
    Ok(match action {
        MenuAction::First => Step::Goto(0),
        MenuAction::Last => Step::Goto(pages.len() - 1),
        MenuAction::Previous => {
            if current > 0 {
                Step::Goto(current - 1)
            } else {
                Step::Stay
            }
        }
        MenuAction::Next => {
            if current + 1 < pages.len() {
                Step::Goto(current + 1)
            } else {
                Step::Stay
            }
        }
        MenuAction::Stop => Step::Stop,
        MenuAction::Delete => Step::Delete,
        MenuAction::Page(name) => Step::Goto(resolve_target(pages, &PageTarget::Name(name.clone()))?),
        MenuAction::Callback(_) => Step::Stay,
    })
}

/// An interactive multi-page embed menu bound to one authorized user.
///
/// The menu renders one page at a time, attaches that page's reaction emojis,
/// lays out its buttons, and then collects input for up to the configured
/// timeout. Valid input from the authorized user drives the menu to another
/// page (a fresh render cycle), ends it, or runs a caller-supplied callback;
/// everything else is swept off the message.
///
/// All transitions run on the caller's task through `&mut self`, so two page
/// transitions can never be in flight at once. A cycle's collectors are plain
/// locals of that cycle: starting the next render drops them, which is the
/// silent teardown — their timeout cleanup only runs when the window
/// genuinely elapses.
///
/// Guild channels re-render by editing the message in place. DMs cannot be
/// relied on for edits across the menu's lifetime and a bot cannot remove
/// other users' reactions there, so DM menus re-render by delete-and-resend
/// and skip every reaction/component sweep.
pub struct EmbedMenu {
    http: Arc<Http>,
    shard: ShardMessenger,
    bot_id: UserId,

    interaction: Option<CommandInteraction>,
    channel: Option<ChannelId>,
    user: User,
    is_dm: bool,

    pages: Vec<MenuPage>,
    page_index: usize,
    message: Option<Message>,

    /// Emoji keys the bot has attached since the last full clear. Serenity
    /// keeps no reaction cache on the message handle, so the menu tracks its
    /// own affordances to know what cleanup is owed.
    attached: Vec<ReactionType>,
    /// Set once the message carries reaction groups that no longer match the
    /// current page's mapping; a full clear is owed at end of life.
    reactions_dirty: bool,
    ended: bool,

    timeout: Duration,
    delete_on_timeout: bool,
    mention: bool,
    keep_user_reaction_on_stop: bool,
    loading_message: String,
    events: Option<Arc<dyn MenuEventHandler>>,
}

impl EmbedMenu {
    /// Build a menu from a command interaction. The interaction's user is the
    /// only one whose input is honored.
    ///
    /// Fails with [`MenuError::EmptyPageList`] when `pages` is empty, since
    /// page 0 is rendered immediately on [`start`](Self::start).
    pub fn new(
        ctx: &Context,
        interaction: &CommandInteraction,
        pages: Vec<PageSpec>,
        options: MenuOptions,
    ) -> Result<Self> {
        let pages = page::build_pages(pages)?;
        Ok(Self {
            http: ctx.http.clone(),
            shard: ctx.shard.clone(),
            bot_id: ctx.cache.current_user().id,
            channel: Some(interaction.channel_id),
            user: interaction.user.clone(),
            is_dm: interaction.guild_id.is_none(),
            interaction: Some(interaction.clone()),
            pages,
            page_index: 0,
            message: None,
            attached: Vec::new(),
            reactions_dirty: false,
            ended: false,
            timeout: options.timeout,
            delete_on_timeout: options.delete_on_timeout,
            mention: options.mention,
            keep_user_reaction_on_stop: options.keep_user_reaction_on_stop,
            loading_message: options
                .loading_message
                .unwrap_or_else(|| LOADING_MESSAGE.to_string()),
            events: options.event_handler,
        })
    }

    /// Build a DM menu addressed straight to a user, with no originating
    /// interaction. The first render opens the DM channel and keeps it for
    /// subsequent sends. `ReplyMethod::Reply`/`FollowUp` are unavailable.
    pub fn direct(
        ctx: &Context,
        user: User,
        pages: Vec<PageSpec>,
        options: MenuOptions,
    ) -> Result<Self> {
        let pages = page::build_pages(pages)?;
        Ok(Self {
            http: ctx.http.clone(),
            shard: ctx.shard.clone(),
            bot_id: ctx.cache.current_user().id,
            channel: None,
            user,
            is_dm: true,
            interaction: None,
            pages,
            page_index: 0,
            message: None,
            attached: Vec::new(),
            reactions_dirty: false,
            ended: false,
            timeout: options.timeout,
            delete_on_timeout: options.delete_on_timeout,
            mention: options.mention,
            keep_user_reaction_on_stop: options.keep_user_reaction_on_stop,
            loading_message: options
                .loading_message
                .unwrap_or_else(|| LOADING_MESSAGE.to_string()),
            events: options.event_handler,
        })
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn current_page(&self) -> &MenuPage {
        &self.pages[self.page_index]
    }

    pub fn pages(&self) -> &[MenuPage] {
        &self.pages
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_dm(&self) -> bool {
        self.is_dm
    }

    /// Render page 0 and drive the menu until it ends (stop, delete, timeout,
    /// or a page with nothing left to collect). Calling it again after the
    /// menu ended re-renders as a fresh page-0 cycle.
    pub async fn start(&mut self, method: ReplyMethod) -> Result<()> {
        self.set_page(0usize, Some(method)).await
    }

    /// Navigate to a page by index or name, then keep driving the menu until
    /// it ends. `options` only matters before the first render, when there is
    /// no message to edit yet; it defaults to [`ReplyMethod::Send`].
    ///
    /// Unknown names fail with [`MenuError::PageNotFound`] and out-of-range
    /// indices with [`MenuError::PageIndexOutOfRange`], in both cases before
    /// any render side effect.
    pub async fn set_page(
        &mut self,
        target: impl Into<PageTarget>,
        options: Option<ReplyMethod>,
    ) -> Result<()> {
        self.ended = false;
        let mut pending = Some((target.into(), options));
        while let Some((target, options)) = pending.take() {
            self.render_page(&target, options).await?;
            if self.ended {
                break;
            }
            pending = self
                .collect_input()
                .await?
                .map(|index| (PageTarget::Index(index), None));
        }
        Ok(())
    }

    /// End the menu, leaving the message in place. Guild channels get their
    /// reaction affordances swept according to `keep_user_reaction_on_stop`;
    /// DMs are left untouched. Idempotent.
    pub async fn stop(&mut self) -> Result<()> {
        if self.ended {
            return Ok(());
        }
        self.ended = true;
        if self.is_dm {
            return Ok(());
        }
        if self.message.is_some() && self.keep_user_reaction_on_stop {
            let http = Arc::clone(&self.http);
            let attached = std::mem::take(&mut self.attached);
            if let Some(msg) = &self.message {
                for emoji in attached {
                    // only the bot's own reaction; the user's stays visible
                    if let Err(e) = msg.delete_reaction(&http, None, emoji).await {
                        nay!("Failed to remove an own reaction on stop: {}", e);
                    }
                }
            }
        } else {
            self.clear_reactions().await;
        }
        Ok(())
    }

    /// End the menu and delete the rendered message, if any. Idempotent.
    pub async fn delete(&mut self) -> Result<()> {
        self.ended = true;
        if let Some(msg) = self.message.take() {
            msg.delete(&self.http).await?;
        }
        self.attached.clear();
        self.reactions_dirty = false;
        Ok(())
    }

    /// Steps 1-8 of a page transition: resolve, notify, two-phase render,
    /// attach reactions, lay out buttons, notify again.
    async fn render_page(&mut self, target: &PageTarget, options: Option<ReplyMethod>) -> Result<()> {
        let new_index = resolve_target(&self.pages, target)?;
        let old_index = self.page_index;

        if let Some(events) = self.events.clone() {
            events
                .page_changing(PageChange {
                    old_index,
                    old_page: &self.pages[old_index],
                    new_index,
                    new_page: &self.pages[new_index],
                })
                .await;
        }

        self.page_index = new_index;
        let page = self.pages[new_index].clone();
        let http = Arc::clone(&self.http);

        let content = if !self.is_dm && self.mention {
            format!("<@{}>", self.user.id)
        } else {
            String::new()
        };
        let loading = CreateEmbed::new()
            .title(page.loading_title())
            .description(self.loading_message.clone());

        // Loading render. DMs always resend; guild channels edit in place once
        // a message exists, otherwise the first render goes out per `options`.
        if self.is_dm {
            if let Some(old) = self.message.take() {
                old.delete(&http).await?;
            }
            self.attached.clear();
            self.reactions_dirty = false;
            let builder = CreateMessage::new().content(content.clone()).embed(loading);
            let msg = match self.channel {
                Some(channel) => channel.send_message(&http, builder).await?,
                None => {
                    let msg = self.user.direct_message(&http, builder).await?;
                    self.channel = Some(msg.channel_id);
                    msg
                }
            };
            self.message = Some(msg);
        } else if let Some(msg) = self.message.as_mut() {
            msg.edit(
                &http,
                EditMessage::new()
                    .content(content.clone())
                    .embed(loading)
                    .components(Vec::new()),
            )
            .await?;
        } else {
            let msg = match options.unwrap_or(ReplyMethod::Send) {
                ReplyMethod::Send => {
                    let channel = self.channel.ok_or(MenuError::MissingChannel)?;
                    channel
                        .send_message(
                            &http,
                            CreateMessage::new().content(content.clone()).embed(loading),
                        )
                        .await?
                }
                ReplyMethod::Reply => {
                    let interaction =
                        self.interaction.as_ref().ok_or(MenuError::MissingInteraction)?;
                    interaction
                        .create_response(
                            &http,
                            CreateInteractionResponse::Message(
                                CreateInteractionResponseMessage::new()
                                    .content(content.clone())
                                    .embed(loading),
                            ),
                        )
                        .await?;
                    interaction.get_response(&http).await?
                }
                ReplyMethod::FollowUp => {
                    let interaction =
                        self.interaction.as_ref().ok_or(MenuError::MissingInteraction)?;
                    interaction
                        .create_followup(
                            &http,
                            CreateInteractionResponseFollowup::new()
                                .content(content.clone())
                                .embed(loading),
                        )
                        .await?
                }
            };
            self.message = Some(msg);
        }

        // Attach the page's emojis in mapping order. Stale groups from earlier
        // pages stay on the message until an end-of-life sweep clears them.
        if !page.reactions.is_empty() {
            if let Some(msg) = &self.message {
                for (emoji, _) in &page.reactions {
                    msg.react(&http, emoji.clone()).await?;
                    if !self.attached.iter().any(|a| page::reaction_matches(a, emoji)) {
                        self.attached.push(emoji.clone());
                    }
                }
            }
        }

        // Final render: real content replaces the loading embed.
        let rows = page.button_rows();
        if let Some(msg) = self.message.as_mut() {
            msg.edit(
                &http,
                EditMessage::new()
                    .content(content)
                    .embed(page.content.clone())
                    .components(rows),
            )
            .await?;
        }

        if let Some(events) = self.events.clone() {
            events.page_changed(new_index, &self.pages[new_index]).await;
        }
        Ok(())
    }

    /// One render cycle's input collection: a reaction stream (if the page
    /// declares reactions) and a single bounded button wait (if it declares
    /// buttons), multiplexed under one timeout window.
    ///
    /// Returns the next page index when input demands a transition, or `None`
    /// when the menu is over for this entry point.
    async fn collect_input(&mut self) -> Result<Option<usize>> {
        let page = self.pages[self.page_index].clone();
        let has_reactions = !page.reactions.is_empty();
        let mut buttons_armed = page.buttons.is_some();
        if !has_reactions && !buttons_armed {
            // nothing is awaiting, so no timeout cleanup ever fires
            return Ok(None);
        }
        let Some(message_id) = self.message.as_ref().map(|m| m.id) else {
            return Ok(None);
        };
        let http = Arc::clone(&self.http);

        let mut reaction_stream: BoxStream<'static, Reaction> = if has_reactions {
            let bot_id = self.bot_id;
            ReactionCollector::new(self.shard.clone())
                .message_id(message_id)
                .timeout(self.timeout)
                .filter(move |r| r.user_id != Some(bot_id))
                .stream()
                .boxed()
        } else {
            stream::pending().boxed()
        };
        let mut button_stream: BoxStream<'static, ComponentInteraction> = if buttons_armed {
            let user_id = self.user.id;
            ComponentInteractionCollector::new(self.shard.clone())
                .message_id(message_id)
                .timeout(self.timeout)
                .filter(move |i| i.user.id == user_id)
                .stream()
                .boxed()
        } else {
            stream::pending().boxed()
        };

        // Everything passing the bot-filter counts as recorded input, even if
        // it is rejected below; the timeout sweep distinguishes "somebody
        // touched this" from a menu nobody interacted with.
        let mut collected_any = false;
        let mut first_collected: Option<ReactionType> = None;

        loop {
            tokio::select! {
                reaction = reaction_stream.next(), if has_reactions => {
                    let Some(reaction) = reaction else {
                        self.end_of_window_cleanup(true, collected_any, first_collected).await?;
                        return Ok(None);
                    };
                    collected_any = true;
                    if first_collected.is_none() {
                        first_collected = Some(reaction.emoji.clone());
                    }
                    let Some(user_id) = reaction.user_id else {
                        continue;
                    };
                    let action = page
                        .reactions
                        .iter()
                        .find(|(key, _)| page::reaction_matches(key, &reaction.emoji))
                        .map(|(_, action)| action.clone());
                    let Some(action) = action.filter(|_| user_id == self.user.id) else {
                        // unauthorized user or stray emoji: sweep it and keep collecting
                        if let Some(msg) = &self.message {
                            if let Err(e) = msg
                                .delete_reaction(&http, Some(user_id), reaction.emoji.clone())
                                .await
                            {
                                nay!("Failed to remove a stray reaction: {}", e);
                            }
                        }
                        continue;
                    };
                    match action {
                        MenuAction::Callback(callback) => {
                            self.reactions_dirty = true;
                            callback(self).await;
                            if self.ended {
                                return Ok(None);
                            }
                        }
                        action => match directive_step(&self.pages, self.page_index, &action)? {
                            Step::Stay => {}
                            Step::Stop => {
                                self.stop().await?;
                                return Ok(None);
                            }
                            Step::Delete => {
                                self.delete().await?;
                                return Ok(None);
                            }
                            Step::Goto(next) => {
                                let target_keys: Vec<ReactionType> = self.pages[next]
                                    .reactions
                                    .iter()
                                    .map(|(key, _)| key.clone())
                                    .collect();
                                if !page::same_reaction_keys(&target_keys, &self.attached) {
                                    self.reactions_dirty = true;
                                }
                                return Ok(Some(next));
                            }
                        },
                    }
                }
                press = button_stream.next(), if buttons_armed => {
                    let Some(press) = press else {
                        self.end_of_window_cleanup(has_reactions, collected_any, first_collected)
                            .await?;
                        return Ok(None);
                    };
                    press
                        .create_response(&http, CreateInteractionResponse::Acknowledge)
                        .await?;
                    if press.user.id != self.user.id {
                        // the filter already guarantees this; re-checked anyway
                        continue;
                    }
                    // the single bounded wait is consumed by this press
                    buttons_armed = false;
                    let action = page
                        .buttons
                        .as_ref()
                        .and_then(|buttons| {
                            buttons.iter().find(|(key, _)| *key == press.data.custom_id)
                        })
                        .map(|(_, button)| button.action.clone());
                    let Some(action) = action else {
                        if has_reactions {
                            continue;
                        }
                        return Ok(None);
                    };
                    match action {
                        MenuAction::Callback(callback) => {
                            callback(self).await;
                            if self.ended || !has_reactions {
                                return Ok(None);
                            }
                        }
                        action => match directive_step(&self.pages, self.page_index, &action)? {
                            Step::Stay => {
                                if !has_reactions {
                                    return Ok(None);
                                }
                            }
                            Step::Stop => {
                                self.stop().await?;
                                return Ok(None);
                            }
                            Step::Delete => {
                                self.delete().await?;
                                return Ok(None);
                            }
                            Step::Goto(next) => return Ok(Some(next)),
                        },
                    }
                }
            }
        }
    }

    /// Cleanup owed when a cycle's window elapses with the menu still live.
    /// DMs are exempt: nothing can be stripped there.
    async fn end_of_window_cleanup(
        &mut self,
        page_had_reactions: bool,
        collected_any: bool,
        first_collected: Option<ReactionType>,
    ) -> Result<()> {
        self.ended = true;
        if self.is_dm {
            return Ok(());
        }
        let http = Arc::clone(&self.http);
        if page_had_reactions {
            if collected_any {
                if self.reactions_dirty {
                    self.clear_reactions().await;
                } else if let (Some(msg), Some(emoji)) = (&self.message, first_collected) {
                    // leave the bot's affordances intact, drop the user's mark
                    if let Err(e) = msg.delete_reaction(&http, Some(self.user.id), emoji).await {
                        nay!("Failed to remove the user's reaction: {}", e);
                    }
                }
            } else if self.delete_on_timeout {
                self.delete().await?;
            } else {
                self.clear_reactions().await;
            }
        } else if self.delete_on_timeout {
            self.delete().await?;
        } else if let Some(msg) = self.message.as_mut() {
            if let Err(e) = msg.edit(&http, EditMessage::new().components(Vec::new())).await {
                nay!("Failed to strip components after timeout: {}", e);
            }
        }
        Ok(())
    }

    /// Best-effort full reaction clear; failures are logged, not fatal.
    async fn clear_reactions(&mut self) {
        if self.is_dm {
            return;
        }
        if let Some(msg) = &self.message {
            if let Err(e) = msg.delete_reactions(&self.http).await {
                nay!("Failed to clear reactions: {}", e);
            }
        }
        self.attached.clear();
        self.reactions_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::build_pages;
    use serenity::all::CreateButton;

    fn three_pages() -> Vec<MenuPage> {
        build_pages(vec![
            PageSpec::new("a", CreateEmbed::new())
                .reaction(ReactionType::Unicode("➡️".to_string()), MenuAction::Next),
            PageSpec::new("b", CreateEmbed::new())
                .reaction(ReactionType::Unicode("⬅️".to_string()), MenuAction::Previous),
            PageSpec::new("c", CreateEmbed::new()).button(
                "del",
                CreateButton::new("del").label("Delete"),
                MenuAction::Delete,
            ),
        ])
        .unwrap()
    }

    #[test]
    fn options_default_to_the_documented_values() {
        let options = MenuOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(300));
        assert!(options.delete_on_timeout);
        assert!(!options.mention);
        assert!(options.keep_user_reaction_on_stop);
        assert!(options.loading_message.is_none());
    }

    #[test]
    fn targets_resolve_by_index_and_name() {
        let pages = three_pages();
        assert_eq!(resolve_target(&pages, &PageTarget::Index(2)).unwrap(), 2);
        assert_eq!(resolve_target(&pages, &"b".into()).unwrap(), 1);
    }

    #[test]
    fn unknown_names_fail_before_any_side_effect() {
        let pages = three_pages();
        match resolve_target(&pages, &"missing-name".into()) {
            Err(MenuError::PageNotFound(name)) => assert_eq!(name, "missing-name"),
            other => panic!("expected PageNotFound, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let pages = three_pages();
        match resolve_target(&pages, &PageTarget::Index(3)) {
            Err(MenuError::PageIndexOutOfRange { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 3);
            }
            other => panic!("expected PageIndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn first_and_last_jump_to_the_ends() {
        let pages = three_pages();
        assert_eq!(
            directive_step(&pages, 1, &MenuAction::First).unwrap(),
            Step::Goto(0)
        );
        assert_eq!(
            directive_step(&pages, 1, &MenuAction::Last).unwrap(),
            Step::Goto(2)
        );
    }

    #[test]
    fn adjacent_navigation_is_a_noop_at_the_boundary() {
        let pages = three_pages();
        assert_eq!(
            directive_step(&pages, 0, &MenuAction::Previous).unwrap(),
            Step::Stay
        );
        assert_eq!(
            directive_step(&pages, 0, &MenuAction::Next).unwrap(),
            Step::Goto(1)
        );
        assert_eq!(
            directive_step(&pages, 2, &MenuAction::Next).unwrap(),
            Step::Stay
        );
        assert_eq!(
            directive_step(&pages, 2, &MenuAction::Previous).unwrap(),
            Step::Goto(1)
        );
    }

    #[test]
    fn reaction_navigation_walks_forward_and_back() {
        // page "a" binds ➡️ to Next, page "b" binds ⬅️ to Previous
        let pages = three_pages();
        let (_, forward) = &pages[0].reactions()[0];
        assert_eq!(directive_step(&pages, 0, forward).unwrap(), Step::Goto(1));
        let (_, back) = &pages[1].reactions()[0];
        assert_eq!(directive_step(&pages, 1, back).unwrap(), Step::Goto(0));
    }

    #[test]
    fn named_jumps_resolve_through_the_page_list() {
        let pages = three_pages();
        assert_eq!(
            directive_step(&pages, 0, &MenuAction::Page("c".to_string())).unwrap(),
            Step::Goto(2)
        );
        assert!(matches!(
            directive_step(&pages, 0, &MenuAction::Page("nope".to_string())),
            Err(MenuError::PageNotFound(_))
        ));
    }

    #[test]
    fn stop_and_delete_dispatch_to_lifecycle_steps() {
        let pages = three_pages();
        assert_eq!(directive_step(&pages, 0, &MenuAction::Stop).unwrap(), Step::Stop);
        assert_eq!(
            directive_step(&pages, 0, &MenuAction::Delete).unwrap(),
            Step::Delete
        );
        let (_, delete_button) = &pages[2].buttons().unwrap()[0];
        assert_eq!(
            directive_step(&pages, 2, &delete_button.action).unwrap(),
            Step::Delete
        );
    }

    #[test]
    fn page_targets_convert_from_indices_and_names() {
        assert_eq!(PageTarget::from(4usize), PageTarget::Index(4));
        assert_eq!(PageTarget::from("home"), PageTarget::Name("home".to_string()));
        assert_eq!(
            PageTarget::from("home".to_string()),
            PageTarget::Name("home".to_string())
        );
    }
}
