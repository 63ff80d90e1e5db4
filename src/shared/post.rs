//! Post, Like and Comment documents
//!
//! A post is a single document: its likes and comments are embedded lists,
//! not separate records. Author name and avatar are copied into the post and
//! into each comment when they are created and are never re-read from the
//! user record afterwards.
//!
//! Both lists are kept most-recent-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::user::UserProfile;

/// A like, identified only by the user who gave it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
}

/// A comment with its author snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &UserProfile, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text: text.into(),
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        }
    }
}

/// A post document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Author
    pub user: Uuid,
    pub text: String,
    /// Author name at creation time
    pub name: String,
    /// Author avatar at creation time
    pub avatar: String,
    pub likes: Vec<Like>,
    #[serde(rename = "comment")]
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a post authored by `author`, with empty like and comment lists
    pub fn new(author: &UserProfile, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text: text.into(),
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn is_authored_by(&self, user: Uuid) -> bool {
        self.user == user
    }

    pub fn is_liked_by(&self, user: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }

    /// Prepend a like from `user`
    ///
    /// # Errors
    ///
    /// `SharedError::AlreadyLiked` if `user` already likes the post; the list
    /// is left untouched.
    pub fn like(&mut self, user: Uuid) -> Result<(), SharedError> {
        if self.is_liked_by(user) {
            return Err(SharedError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user });
        Ok(())
    }

    /// Remove the first like given by `user`
    ///
    /// # Errors
    ///
    /// `SharedError::NotLiked` if `user` does not like the post.
    pub fn unlike(&mut self, user: Uuid) -> Result<(), SharedError> {
        let index = self
            .likes
            .iter()
            .position(|like| like.user == user)
            .ok_or(SharedError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    /// Prepend a comment by `author` and return it
    pub fn add_comment(&mut self, author: &UserProfile, text: impl Into<String>) -> &Comment {
        self.comments.insert(0, Comment::new(author, text));
        &self.comments[0]
    }

    /// Remove the comment `comment_id`, which must have been written by `user`
    ///
    /// The comment is located by its own id, so a user with several comments
    /// on the same post only loses the one asked for.
    ///
    /// # Errors
    ///
    /// - `SharedError::CommentNotFound` if no comment has that id
    /// - `SharedError::NotCommentAuthor` if it belongs to another user
    pub fn remove_comment(&mut self, comment_id: Uuid, user: Uuid) -> Result<Comment, SharedError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or(SharedError::CommentNotFound)?;

        if self.comments[index].user != user {
            return Err(SharedError::NotCommentAuthor);
        }

        Ok(self.comments.remove(index))
    }
}
