//! Text rendering of screens: cards, headers, loading and empty placeholders.
//!
//! Pure functions returning `String`; the TUI prints them.

use crate::domain::{Comment, Keyed, Post, User};
use crate::usecases::screen_state::{ListView, ScreenState};

/// Post bodies are clamped to this many lines in list cards.
pub const POST_PREVIEW_LINES: usize = 3;

pub const NO_USERS: &str = "No users found";
pub const NO_POSTS: &str = "No posts found";
pub const NO_COMMENTS: &str = "No comments found";

pub fn user_card(user: &User) -> String {
    format!(
        "{}\n  {}\n  @{}\n  {}",
        user.name, user.email, user.username, user.company.name
    )
}

pub fn post_card(post: &Post) -> String {
    format!(
        "{}\n  {}\n  Post #{}",
        post.title,
        clamp_lines(&post.body, POST_PREVIEW_LINES).replace('\n', "\n  "),
        post.id
    )
}

pub fn comment_card(comment: &Comment) -> String {
    format!(
        "{} <{}>\n  {}",
        comment.name,
        comment.email,
        comment.body.replace('\n', "\n  ")
    )
}

/// Header of the comments screen: the post in full plus its author.
pub fn post_detail(post: &Post, user_name: &str) -> String {
    format!("{}\n\n{}\n\nBy: {}", post.title, post.body, user_name)
}

pub fn comments_title(count: usize) -> String {
    format!("Comments ({})", count)
}

/// One-line label used as a selectable option, keyed by record id.
pub fn option_label<T: Keyed>(item: &T, text: &str) -> String {
    format!("#{} {}", item.key(), text)
}

/// Render a list screen body. Loading and empty states are distinct.
pub fn list_body<T>(
    state: &ScreenState<T>,
    loading_text: &str,
    empty_text: &str,
    card: impl Fn(&T) -> String,
) -> String {
    match state.view() {
        ListView::Loading => loading_text.to_string(),
        ListView::Empty => empty_text.to_string(),
        ListView::Items => state
            .items
            .iter()
            .map(card)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// First `max` lines of `text`, with an ellipsis when anything was cut.
pub fn clamp_lines(text: &str, max: usize) -> String {
    let mut lines = text.lines();
    let kept: Vec<&str> = lines.by_ref().take(max).collect();
    let mut out = kept.join("\n");
    if lines.next().is_some() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixture::{fixture_comment, fixture_post, fixture_user};

    #[test]
    fn test_user_card_fields() {
        let user = fixture_user(1, "Leanne Graham", "Bret", "Sincere@april.biz", "Romaguera-Crona");
        let card = user_card(&user);
        assert!(card.starts_with("Leanne Graham"));
        assert!(card.contains("@Bret"));
        assert!(card.contains("Sincere@april.biz"));
        assert!(card.ends_with("Romaguera-Crona"));
    }

    #[test]
    fn test_post_card_clamps_body() {
        let post = fixture_post(7, 1, "title", "l1\nl2\nl3\nl4\nl5");
        let card = post_card(&post);
        assert!(card.contains("l3..."));
        assert!(!card.contains("l4"));
        assert!(card.ends_with("Post #7"));
    }

    #[test]
    fn test_clamp_lines_short_text_untouched() {
        assert_eq!(clamp_lines("a\nb", 3), "a\nb");
        assert_eq!(clamp_lines("", 3), "");
    }

    #[test]
    fn test_post_detail_and_comments_title() {
        let post = fixture_post(1, 1, "sunt aut facere", "quia et suscipit");
        let header = post_detail(&post, "Leanne Graham");
        assert!(header.ends_with("By: Leanne Graham"));
        assert_eq!(comments_title(5), "Comments (5)");
    }

    #[test]
    fn test_list_body_states() {
        let mut state: ScreenState<Comment> = ScreenState::default();
        state.begin_fetch();
        assert_eq!(
            list_body(&state, "Loading comments...", NO_COMMENTS, comment_card),
            "Loading comments..."
        );

        state.finish(vec![]);
        assert_eq!(
            list_body(&state, "Loading comments...", NO_COMMENTS, comment_card),
            NO_COMMENTS
        );

        state.finish(vec![
            fixture_comment(1, 1, "first", "a@b.c", "x"),
            fixture_comment(2, 1, "second", "d@e.f", "y"),
        ]);
        let body = list_body(&state, "Loading comments...", NO_COMMENTS, comment_card);
        assert!(body.starts_with("first <a@b.c>"));
        assert!(body.contains("\n\nsecond <d@e.f>"));
    }

    #[test]
    fn test_option_label_uses_key() {
        let user = fixture_user(9, "Glenna Reichert", "Delphine", "c@d.e", "Yost");
        assert_eq!(option_label(&user, &user.name), "#9 Glenna Reichert");
    }
}
