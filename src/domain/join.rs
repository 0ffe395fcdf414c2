//! Relational filter: client-side join of a child collection on its parent id.

use crate::domain::entities::{Comment, Post};

/// A record that belongs to a parent entity through a foreign key.
pub trait ChildRecord {
    fn parent_id(&self) -> i64;
}

impl ChildRecord for Post {
    fn parent_id(&self) -> i64 {
        self.user_id
    }
}

impl ChildRecord for Comment {
    fn parent_id(&self) -> i64 {
        self.post_id
    }
}

/// Keep exactly the children whose foreign key equals `parent_id`.
///
/// Stable: the fetch order is preserved. Returns an empty vec when nothing matches.
pub fn join_on_parent<T, I>(children: I, parent_id: i64) -> Vec<T>
where
    T: ChildRecord,
    I: IntoIterator<Item = T>,
{
    children
        .into_iter()
        .filter(|child| child.parent_id() == parent_id)
        .collect()
}
