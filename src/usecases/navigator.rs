//! Drill-down routes and the route stack.
//!
//! Parent records travel forward by value inside typed params; child screens
//! never refetch them by id.

use crate::domain::{Post, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPostsParams {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCommentsParams {
    pub post: Post,
    /// Author name for the post header.
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    UsersList,
    UserPosts(UserPostsParams),
    PostComments(PostCommentsParams),
}

impl Route {
    pub fn title(&self) -> String {
        match self {
            Route::UsersList => "Users".to_string(),
            Route::UserPosts(params) => format!("{}'s Posts", params.user.name),
            Route::PostComments(_) => "Comments".to_string(),
        }
    }

    pub fn loading_text(&self) -> &'static str {
        match self {
            Route::UsersList => "Loading users...",
            Route::UserPosts(_) => "Loading posts...",
            Route::PostComments(_) => "Loading comments...",
        }
    }
}

static ROOT: Route = Route::UsersList;

/// Route stack rooted at `UsersList`.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::UsersList],
        }
    }

    pub fn current(&self) -> &Route {
        // The root is never popped.
        self.stack.last().unwrap_or(&ROOT)
    }

    /// Open the posts of `user`.
    pub fn open_user(&mut self, user: User) {
        self.push(Route::UserPosts(UserPostsParams { user }));
    }

    /// Open the comments of `post`, carrying the author's display name.
    pub fn open_post(&mut self, post: Post, user_name: impl Into<String>) {
        self.push(Route::PostComments(PostCommentsParams {
            post,
            user_name: user_name.into(),
        }));
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Go back one screen. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixture::{fixture_post, fixture_user};

    #[test]
    fn test_drill_down_and_back() {
        let user = fixture_user(3, "Clementine Bauch", "Samantha", "n@y.net", "RJ");
        let post = fixture_post(4, 3, "eum et est", "ullam");
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), &Route::UsersList);

        nav.open_user(user.clone());
        assert_eq!(nav.current().title(), "Clementine Bauch's Posts");

        nav.open_post(post.clone(), &user.name);
        assert_eq!(nav.depth(), 3);
        match nav.current() {
            Route::PostComments(params) => {
                assert_eq!(params.post, post);
                assert_eq!(params.user_name, "Clementine Bauch");
            }
            other => panic!("unexpected route {:?}", other),
        }

        assert!(nav.pop().is_some());
        assert!(nav.pop().is_some());
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.current(), &Route::UsersList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_loading_text_per_route() {
        assert_eq!(Route::UsersList.loading_text(), "Loading users...");
        assert_eq!(Route::UsersList.title(), "Users");
    }
}
