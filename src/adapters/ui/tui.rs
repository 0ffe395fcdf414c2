//! Implements InputPort. Inquire-based interactive screens.
//!
//! Drill-down keeps every opened screen on a stack, so going back redraws the
//! parent without a fetch. Search publishes each keystroke typed since the last
//! query as a query change.

use crate::adapters::ui::progress::while_loading;
use crate::adapters::ui::render;
use crate::domain::{DomainError, Post, User};
use crate::ports::{CollectionGateway, InputPort};
use crate::usecases::drill_down::{DrillDown, Screen};
use crate::usecases::navigator::Route;
use crate::usecases::search::{SearchPolicy, SearchScreen};
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Select, Text};
use std::sync::Arc;
use tracing::info;

const MENU_BROWSE: &str = "Browse users";
const MENU_SEARCH: &str = "Search users";
const MENU_EXIT: &str = "Exit";
const BACK: &str = "<- Back";

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let blue = Color::Rgb {
        r: 0x34,
        g: 0x98,
        b: 0xdb,
    };
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new(">").with_fg(blue))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(blue))
        .with_selected_option(Some(StyleSheet::new().with_fg(blue)));
    inquire::set_global_render_config(config);
}

/// Esc / Ctrl-C on a prompt means "go back", not a failure.
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Show `options` plus a back entry. Returns the chosen index, or `None` for back.
fn pick(
    title: &str,
    options: Vec<String>,
    back_label: &str,
) -> Result<Option<usize>, DomainError> {
    let count = options.len();
    let mut all = options;
    all.push(back_label.to_string());
    match Select::new(title, all).with_page_size(12).raw_prompt() {
        Ok(choice) if choice.index < count => Ok(Some(choice.index)),
        Ok(_) => Ok(None),
        Err(e) if is_cancel(&e) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn print_section(title: &str, body: &str) {
    println!("\n== {} ==\n{}\n", title, body);
}

/// What the user picked on a drill-down screen.
enum Action {
    OpenUser(User),
    OpenPost(Post, String),
    Back,
    Exit,
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    gateway: Arc<dyn CollectionGateway>,
    policy: SearchPolicy,
}

impl TuiInputPort {
    pub fn new(gateway: Arc<dyn CollectionGateway>, policy: SearchPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Render the top screen and ask where to go next.
    fn show_screen(&self, route: &Route, screen: &Screen) -> Result<Action, DomainError> {
        let title = route.title();
        let action = match screen {
            Screen::UsersList(s) => {
                let state = s.snapshot();
                let body = render::list_body(
                    &state,
                    route.loading_text(),
                    render::NO_USERS,
                    render::user_card,
                );
                print_section(&title, &body);
                let labels = state
                    .items
                    .iter()
                    .map(|u| render::option_label(u, &format!("{} (@{})", u.name, u.username)))
                    .collect();
                match pick("Open a user's posts", labels, MENU_EXIT)? {
                    Some(i) => state
                        .items
                        .into_iter()
                        .nth(i)
                        .map_or(Action::Exit, Action::OpenUser),
                    None => Action::Exit,
                }
            }
            Screen::UserPosts(s) => {
                let state = s.snapshot();
                let body = render::list_body(
                    &state,
                    route.loading_text(),
                    render::NO_POSTS,
                    render::post_card,
                );
                print_section(&title, &body);
                let labels = state
                    .items
                    .iter()
                    .map(|p| render::option_label(p, &p.title))
                    .collect();
                match pick("Open a post's comments", labels, BACK)? {
                    Some(i) => match state.items.into_iter().nth(i) {
                        Some(post) => Action::OpenPost(post, s.params.user.name.clone()),
                        None => Action::Back,
                    },
                    None => Action::Back,
                }
            }
            Screen::PostComments(s) => {
                let state = s.snapshot();
                print_section(&title, &render::post_detail(&s.params.post, &s.params.user_name));
                print_section(
                    &render::comments_title(state.items.len()),
                    &render::list_body(
                        &state,
                        route.loading_text(),
                        render::NO_COMMENTS,
                        render::comment_card,
                    ),
                );
                pick("", Vec::new(), BACK)?;
                Action::Back
            }
        };
        Ok(action)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice =
                Select::new("Main menu", vec![MENU_BROWSE, MENU_SEARCH, MENU_EXIT]).prompt();
            match choice {
                Ok(MENU_BROWSE) => self.run_drill_down().await?,
                Ok(MENU_SEARCH) => self.run_search().await?,
                Ok(_) => break,
                Err(e) if is_cancel(&e) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            }
        }
        info!("bye");
        Ok(())
    }

    async fn run_drill_down(&self) -> Result<(), DomainError> {
        let mut session = DrillDown::new(Arc::clone(&self.gateway));
        // No handling here: a failed fetch abandons the whole drill-down.
        while_loading(session.route().loading_text(), session.load_current()).await?;
        loop {
            match self.show_screen(session.route(), session.current())? {
                Action::OpenUser(user) => {
                    while_loading("Loading posts...", session.open_user(user)).await?
                }
                Action::OpenPost(post, user_name) => {
                    while_loading("Loading comments...", session.open_post(post, user_name))
                        .await?
                }
                Action::Back => {
                    session.back();
                }
                Action::Exit => return Ok(()),
            }
        }
    }

    async fn run_search(&self) -> Result<(), DomainError> {
        let screen = SearchScreen::new(Arc::clone(&self.gateway), self.policy);
        info!(policy = screen.policy().as_str(), "search screen opened");
        screen.mount().await;

        loop {
            while_loading("Loading users...", screen.settle()).await;
            let state = screen.snapshot();
            let heading = match state.query.as_deref() {
                Some(q) => format!("Search users: \"{}\"", q),
                None => "Search users".to_string(),
            };
            let body =
                render::list_body(&state, "Loading users...", render::NO_USERS, render::user_card);
            print_section(&heading, &body);

            let input = Text::new("Search:")
                .with_initial_value(state.query.as_deref().unwrap_or(""))
                .with_help_message("Enter to search, Esc to leave")
                .prompt();
            match input {
                Ok(text) => screen.type_text(&text).await,
                Err(e) if is_cancel(&e) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            }
        }

        screen.settle().await;
        Ok(())
    }
}
