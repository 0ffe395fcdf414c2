//! Application use cases. Orchestrate screens via ports.

pub mod drill_down;
pub mod navigator;
pub mod screen_state;
pub mod search;

pub use drill_down::{DrillDown, PostCommentsScreen, Screen, UserPostsScreen, UsersListScreen};
pub use navigator::{Navigator, PostCommentsParams, Route, UserPostsParams};
pub use screen_state::{ListView, ScreenState, fetch_into};
pub use search::{SearchPolicy, SearchScreen};
