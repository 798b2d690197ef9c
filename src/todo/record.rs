// Todo record types.
// Defines identifiers, image references, and validated todo drafts.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Stable identifier assigned to a record when it is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque reference (URI) to a picked media asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Build a `file://` URI for a local path.
    pub fn from_path(path: &Path) -> Self {
        Self(format!("file://{}", path.display()))
    }

    /// Interpret picker output: URIs pass through, anything else is a path.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else if raw.contains("://") {
            Some(Self::new(raw))
        } else {
            Some(Self::from_path(Path::new(raw)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reason a draft cannot become a todo.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("title is empty")]
    EmptyTitle,

    #[error("description is empty")]
    EmptyDescription,
}

/// A validated todo that has not been added to a collection yet.
///
/// Only constructible through [`NewTodo::new`], so every record in a
/// collection has a non-empty title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
    description: String,
    image: Option<ImageRef>,
}

impl NewTodo {
    /// Validate the fields. Whitespace counts as content.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: Option<ImageRef>,
    ) -> Result<Self, DraftError> {
        let title = title.into();
        let description = description.into();

        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if description.is_empty() {
            return Err(DraftError::EmptyDescription);
        }

        Ok(Self {
            title,
            description,
            image,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}

/// One entry in the todo collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub image: Option<ImageRef>,
    pub created_at: DateTime<Utc>,
}

impl TodoRecord {
    pub(super) fn from_new(id: TodoId, new: NewTodo) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            image: new.image,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_requires_title_and_description() {
        assert_eq!(NewTodo::new("", "2%", None), Err(DraftError::EmptyTitle));
        assert_eq!(
            NewTodo::new("Buy milk", "", None),
            Err(DraftError::EmptyDescription)
        );

        let todo = NewTodo::new("Buy milk", "2%", None).unwrap();
        assert_eq!(todo.title(), "Buy milk");
        assert_eq!(todo.description(), "2%");
        assert!(todo.image().is_none());
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        assert!(NewTodo::new(" ", " ", None).is_ok());
    }

    #[test]
    fn test_image_ref_parse() {
        assert_eq!(ImageRef::parse("  \n"), None);
        assert_eq!(
            ImageRef::parse("file://x.png\n").unwrap().as_str(),
            "file://x.png"
        );
        assert_eq!(
            ImageRef::parse("/home/me/cat.jpg").unwrap().as_str(),
            "file:///home/me/cat.jpg"
        );
    }

    #[test]
    fn test_todo_id_display() {
        assert_eq!(TodoId(7).to_string(), "#7");
    }
}
