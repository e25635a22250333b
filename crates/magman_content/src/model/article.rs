//! Article domain model.
//!
//! # Responsibility
//! - Hold article metadata, body and the ordered comment thread.
//! - Compare, hash and render articles by content rather than identity.
//!
//! # Invariants
//! - `comments` is always present; it defaults to an empty list.
//! - `id` is excluded from `PartialEq`, `Hash` and `Display`, so a draft and
//!   its persisted copy compare equal.
//! - The comment list is owned exclusively; constructors and setters take it
//!   by value.

use crate::model::comment::Comment;
use crate::model::OptionalText;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Persistence identifier assigned once an article is stored.
///
/// `None` on an [`Article`] means "not yet persisted", which stays distinct
/// from any stored value including `0`.
pub type ArticleId = i64;

/// Canonical article record.
///
/// No field is validated here; absent text fields are allowed at all times
/// and callers that need stricter rules enforce them at their own boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    id: Option<ArticleId>,
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
    /// Display order. Missing on the wire means no comments.
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Article {
    /// Creates an article with every field absent and no comments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an unsaved article without comments.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self::with_comments(title, content, author, Vec::new())
    }

    /// Creates an unsaved article that takes ownership of `comments`.
    pub fn with_comments(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        comments: Vec<Comment>,
    ) -> Self {
        Self::with_id(
            None,
            Some(title.into()),
            Some(content.into()),
            Some(author.into()),
            comments,
        )
    }

    /// Creates an article with every field given explicitly.
    ///
    /// Used by mapping layers that rebuild stored records, where any field
    /// may legitimately be missing.
    pub fn with_id(
        id: Option<ArticleId>,
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
        comments: Vec<Comment>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author,
            comments,
        }
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    /// Assigns or clears the persistence identifier.
    pub fn set_id(&mut self, id: Option<ArticleId>) {
        self.id = id;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn clear_title(&mut self) {
        self.title = None;
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

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = Some(author.into());
    }

    pub fn clear_author(&mut self) {
        self.author = None;
    }

    /// Returns comments in display order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut Vec<Comment> {
        &mut self.comments
    }

    /// Replaces the comment thread, returning the previous one.
    pub fn set_comments(&mut self, comments: Vec<Comment>) -> Vec<Comment> {
        std::mem::replace(&mut self.comments, comments)
    }

    /// Appends a comment at the end of the thread.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Consumes the article and returns its comment thread.
    pub fn into_comments(self) -> Vec<Comment> {
        self.comments
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.content == other.content
            && self.author == other.author
            && self.comments == other.comments
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.content.hash(state);
        self.author.hash(state);
        self.comments.hash(state);
    }
}

impl Display for Article {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Article{{title={}, content={}, author={}, comments=[",
            OptionalText(self.title()),
            OptionalText(self.content()),
            OptionalText(self.author()),
        )?;
        for (index, comment) in self.comments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{comment}")?;
        }
        f.write_str("]}")
    }
}

#[cfg(test)]
mod tests {
    use super::Article;
    use crate::model::comment::Comment;

    #[test]
    fn set_comments_returns_previous_thread() {
        let mut article =
            Article::with_comments("T", "Body", "Alice", vec![Comment::new("a", "1")]);

        let previous = article.set_comments(vec![Comment::new("b", "2")]);

        assert_eq!(previous, vec![Comment::new("a", "1")]);
        assert_eq!(article.comments(), &[Comment::new("b", "2")]);
    }

    #[test]
    fn display_lists_comments_in_order() {
        let article = Article::with_comments(
            "T",
            "Body",
            "Alice",
            vec![Comment::new("a", "1"), Comment::new("b", "2")],
        );

        assert_eq!(
            article.to_string(),
            "Article{title='T', content='Body', author='Alice', comments=[\
             Comment{author='a', content='1'}, Comment{author='b', content='2'}]}"
        );
    }

    #[test]
    fn id_zero_is_distinct_from_absent() {
        let mut article = Article::empty();
        assert_eq!(article.id(), None);

        article.set_id(Some(0));
        assert_eq!(article.id(), Some(0));
    }
}
