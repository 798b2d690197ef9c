// Todo collection.
// Ordered in-memory list of records; insertion order is display order.

use tracing::info;

use super::record::{NewTodo, TodoId, TodoRecord};

/// The ordered list of todos owned by the app.
#[derive(Debug, Clone, Default)]
pub struct TodoCollection {
    records: Vec<TodoRecord>,
    next_id: u64,
}

impl TodoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated todo and return its identifier.
    pub fn add(&mut self, new: NewTodo) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;

        let record = TodoRecord::from_new(id, new);
        info!(%id, title = %record.title, has_image = record.image.is_some(), "todo added");
        self.records.push(record);
        id
    }

    /// Remove the record at `index`, shifting later records down.
    /// An out-of-range index leaves the collection unchanged.
    pub fn remove_at(&mut self, index: usize) -> Option<TodoRecord> {
        if index >= self.records.len() {
            return None;
        }
        let removed = self.records.remove(index);
        info!(id = %removed.id, index, "todo deleted");
        Some(removed)
    }

    /// Remove the record with the given identifier, if present.
    pub fn remove(&mut self, id: TodoId) -> Option<TodoRecord> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Current position of a record.
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&TodoRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[TodoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
