// State management module.
// View state for the list and create tabs.

pub mod form;
pub mod list;

pub use form::{FormFocus, FormState};
pub use list::TodoListState;
