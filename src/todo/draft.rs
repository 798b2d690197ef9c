// Create-form draft.
// Holds the in-progress title, description and image until submit.

use tracing::debug;

use super::record::{DraftError, ImageRef, NewTodo};

/// Uncommitted state of the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub image: Option<ImageRef>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all three fields together.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.is_empty() {
            Err(DraftError::EmptyTitle)
        } else if self.description.is_empty() {
            Err(DraftError::EmptyDescription)
        } else {
            Ok(())
        }
    }

    /// Turn the draft into a todo and clear it.
    ///
    /// An invalid draft is left untouched and `None` is returned; nothing is
    /// reported to the user.
    pub fn submit(&mut self) -> Option<NewTodo> {
        if let Err(e) = self.validate() {
            debug!(reason = %e, "draft not submitted");
            return None;
        }

        let draft = std::mem::take(self);
        NewTodo::new(draft.title, draft.description, draft.image).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str) -> Draft {
        Draft {
            title: title.to_string(),
            description: description.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_submit_clears_all_fields() {
        let mut d = draft("Call Bob", "re: taxes");
        d.image = Some(ImageRef::new("file://x.png"));

        let todo = d.submit().unwrap();
        assert_eq!(todo.title(), "Call Bob");
        assert_eq!(todo.image(), Some(&ImageRef::new("file://x.png")));
        assert_eq!(d, Draft::default());
    }

    #[test]
    fn test_submit_without_image() {
        let mut d = draft("Buy milk", "2%");
        let todo = d.submit().unwrap();
        assert!(todo.image().is_none());
    }

    #[test]
    fn test_invalid_submit_keeps_draft() {
        let mut d = draft("", "2%");
        d.image = Some(ImageRef::new("file://x.png"));
        let before = d.clone();

        assert!(d.submit().is_none());
        assert_eq!(d, before);

        let mut d = draft("Buy milk", "");
        assert!(d.submit().is_none());
        assert_eq!(d.title, "Buy milk");
    }

    #[test]
    fn test_validate() {
        assert_eq!(draft("", "").validate(), Err(DraftError::EmptyTitle));
        assert_eq!(draft("a", "").validate(), Err(DraftError::EmptyDescription));
        assert_eq!(draft("a", "b").validate(), Ok(()));
    }

    #[test]
    fn test_clear() {
        let mut d = draft("a", "b");
        d.image = Some(ImageRef::new("file://x.png"));
        d.clear();
        assert_eq!(d, Draft::new());
    }
}
