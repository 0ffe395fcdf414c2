//! Drill-down screens: users -> posts of user -> comments of post.
//!
//! Each screen downloads its whole collection on load and joins it locally on
//! the parent id. Fetch failures are not handled here: they clear the loading
//! flag and propagate, abandoning the screen.
//!
//! Mounted screens stay on the `DrillDown` stack under their children, so going
//! back shows the parent's list as it was without fetching it again.

use crate::domain::{Comment, DomainError, Post, User, join_on_parent};
use crate::ports::CollectionGateway;
use crate::usecases::navigator::{Navigator, PostCommentsParams, Route, UserPostsParams};
use crate::usecases::screen_state::{ScreenState, fetch_into};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

pub struct UsersListScreen {
    gateway: Arc<dyn CollectionGateway>,
    state: watch::Sender<ScreenState<User>>,
}

impl UsersListScreen {
    pub fn new(gateway: Arc<dyn CollectionGateway>) -> Self {
        Self {
            gateway,
            state: watch::Sender::new(ScreenState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState<User>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ScreenState<User> {
        self.state.borrow().clone()
    }

    pub async fn load(&self) -> Result<(), DomainError> {
        fetch_into(&self.state, self.gateway.fetch_users(None)).await?;
        info!(count = self.state.borrow().items.len(), "users loaded");
        Ok(())
    }
}

pub struct UserPostsScreen {
    gateway: Arc<dyn CollectionGateway>,
    pub params: UserPostsParams,
    state: watch::Sender<ScreenState<Post>>,
}

impl UserPostsScreen {
    pub fn new(gateway: Arc<dyn CollectionGateway>, params: UserPostsParams) -> Self {
        Self {
            gateway,
            params,
            state: watch::Sender::new(ScreenState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Post>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ScreenState<Post> {
        self.state.borrow().clone()
    }

    /// Fetch every post, keep the ones written by `params.user`.
    pub async fn load(&self) -> Result<(), DomainError> {
        let user_id = self.params.user.id;
        fetch_into(&self.state, async {
            let posts = self.gateway.fetch_posts().await?;
            Ok(join_on_parent(posts, user_id))
        })
        .await?;
        info!(user_id, count = self.state.borrow().items.len(), "posts loaded");
        Ok(())
    }
}

pub struct PostCommentsScreen {
    gateway: Arc<dyn CollectionGateway>,
    pub params: PostCommentsParams,
    state: watch::Sender<ScreenState<Comment>>,
}

impl PostCommentsScreen {
    pub fn new(gateway: Arc<dyn CollectionGateway>, params: PostCommentsParams) -> Self {
        Self {
            gateway,
            params,
            state: watch::Sender::new(ScreenState::default()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Comment>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ScreenState<Comment> {
        self.state.borrow().clone()
    }

    /// Fetch every comment, keep the ones on `params.post`.
    pub async fn load(&self) -> Result<(), DomainError> {
        let post_id = self.params.post.id;
        fetch_into(&self.state, async {
            let comments = self.gateway.fetch_comments().await?;
            Ok(join_on_parent(comments, post_id))
        })
        .await?;
        info!(post_id, count = self.state.borrow().items.len(), "comments loaded");
        Ok(())
    }
}

/// A mounted drill-down screen.
pub enum Screen {
    UsersList(UsersListScreen),
    UserPosts(UserPostsScreen),
    PostComments(PostCommentsScreen),
}

impl Screen {
    /// Mount a fresh screen for `route`. Nothing is carried over from earlier mounts.
    pub fn mount(route: &Route, gateway: Arc<dyn CollectionGateway>) -> Self {
        match route {
            Route::UsersList => Screen::UsersList(UsersListScreen::new(gateway)),
            Route::UserPosts(params) => {
                Screen::UserPosts(UserPostsScreen::new(gateway, params.clone()))
            }
            Route::PostComments(params) => {
                Screen::PostComments(PostCommentsScreen::new(gateway, params.clone()))
            }
        }
    }

    pub async fn load(&self) -> Result<(), DomainError> {
        match self {
            Screen::UsersList(s) => s.load().await,
            Screen::UserPosts(s) => s.load().await,
            Screen::PostComments(s) => s.load().await,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Screen::UsersList(s) => s.state.borrow().loading,
            Screen::UserPosts(s) => s.state.borrow().loading,
            Screen::PostComments(s) => s.state.borrow().loading,
        }
    }
}

/// A drill-down session: the route stack plus the screen mounted for each route.
pub struct DrillDown {
    gateway: Arc<dyn CollectionGateway>,
    nav: Navigator,
    screens: Vec<Screen>,
}

impl DrillDown {
    /// Mount the users list. Call `load_current` to fetch it.
    pub fn new(gateway: Arc<dyn CollectionGateway>) -> Self {
        let nav = Navigator::new();
        let root = Screen::mount(nav.current(), Arc::clone(&gateway));
        Self {
            gateway,
            nav,
            screens: vec![root],
        }
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }

    /// Top of the stack. Never empty: the root screen is never popped.
    pub fn current(&self) -> &Screen {
        // Stack and route stack move together; `new` seeds both.
        &self.screens[self.screens.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Fetch the collection of the top screen.
    pub async fn load_current(&self) -> Result<(), DomainError> {
        self.current().load().await
    }

    /// Push the posts screen of `user` and load it.
    pub async fn open_user(&mut self, user: User) -> Result<(), DomainError> {
        self.nav.open_user(user);
        self.mount_current();
        self.load_current().await
    }

    /// Push the comments screen of `post` and load it.
    pub async fn open_post(&mut self, post: Post, user_name: String) -> Result<(), DomainError> {
        self.nav.open_post(post, user_name);
        self.mount_current();
        self.load_current().await
    }

    /// Unmount the top screen; the parent keeps its list. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.nav.pop().is_none() {
            return false;
        }
        self.screens.pop();
        debug!(depth = self.screens.len(), "back to parent screen");
        true
    }

    fn mount_current(&mut self) {
        let screen = Screen::mount(self.nav.current(), Arc::clone(&self.gateway));
        self.screens.push(screen);
    }
}
