// Todo module.
// Records, the ordered collection, and the create-form draft.

#![allow(dead_code, unused_imports)]

pub mod collection;
pub mod draft;
pub mod record;

pub use collection::TodoCollection;
pub use draft::Draft;
pub use record::{ImageRef, NewTodo, TodoId, TodoRecord};
