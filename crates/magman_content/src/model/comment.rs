//! Comment domain model.
//!
//! A comment is a reader's response attached to an article. Core only needs
//! it to be comparable, hashable and printable; richer comment behavior lives
//! outside this crate.

use crate::model::OptionalText;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Persistence identifier assigned to a stored comment.
pub type CommentId = i64;

/// Reader comment owned by an [`Article`](crate::Article).
///
/// Equality and hashing cover `author` and `content` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    id: Option<CommentId>,
    author: Option<String>,
    content: Option<String>,
}

impl Comment {
    /// Creates an unsaved comment.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            author: Some(author.into()),
            content: Some(content.into()),
        }
    }

    /// Creates a comment with a known identifier, e.g. when loading from storage.
    pub fn with_id(id: CommentId, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(author, content)
        }
    }

    pub fn id(&self) -> Option<CommentId> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<CommentId>) {
        self.id = id;
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = Some(author.into());
    }

    pub fn clear_author(&mut self) {
        self.author = None;
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }

    pub fn clear_content(&mut self) {
        self.content = None;
    }
}

impl PartialEq for Comment {
    fn eq(&self, other: &Self) -> bool {
        self.author == other.author && self.content == other.content
    }
}

impl Eq for Comment {}

impl Hash for Comment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.author.hash(state);
        self.content.hash(state);
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Comment{{author={}, content={}}}",
            OptionalText(self.author()),
            OptionalText(self.content()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Comment;

    #[test]
    fn equality_ignores_id() {
        let saved = Comment::with_id(7, "bob", "nice");
        let draft = Comment::new("bob", "nice");
        assert_eq!(saved, draft);
        assert_ne!(saved, Comment::new("bob", "meh"));
    }

    #[test]
    fn display_omits_id() {
        let comment = Comment::with_id(7, "bob", "nice");
        assert_eq!(comment.to_string(), "Comment{author='bob', content='nice'}");
    }

    #[test]
    fn cleared_fields_render_as_null() {
        let mut comment = Comment::new("bob", "nice");
        comment.clear_author();
        assert_eq!(comment.author(), None);
        assert_eq!(comment.to_string(), "Comment{author=null, content='nice'}");
    }
}
