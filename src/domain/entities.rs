//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/UI types here; records are deserialized straight from the API body
//! and treated as immutable values once fetched.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type UserId = i64;
pub type PostId = i64;
pub type CommentId = i64;

/// A user of the demo API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// A post. `user_id` references `User::id` (not enforced locally).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// A comment. `post_id` references `Post::id` (not enforced locally).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Remote collections exposed by the API. One endpoint each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Posts,
    Comments,
}

impl Collection {
    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Posts => "posts",
            Collection::Comments => "comments",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Records that carry a unique id, used as list keys.
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for User {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Post {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Comment {
    fn key(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_reads_camel_case_foreign_key() {
        let json = r#"{"userId": 5, "id": 12, "title": "t", "body": "b"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 5);
        assert_eq!(post.id, 12);
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "address": {"city": "Gwenborough"},
            "company": {"name": "Romaguera-Crona", "bs": "harness real-time e-markets"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "Bret");
        assert_eq!(user.company.name, "Romaguera-Crona");
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(Collection::Users.path(), "users");
        assert_eq!(Collection::Posts.to_string(), "posts");
        assert_eq!(Collection::Comments.path(), "comments");
    }
}
