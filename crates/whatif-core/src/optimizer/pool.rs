//! Task pool fed to the optimizer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Something the student could do with spare hours.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    /// Hours required
    pub cost: u32,
    /// Productivity points
    pub value: u32,
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32, value: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            value,
        }
    }
}

/// Ordered, caller-owned collection of tasks.
///
/// The pool may change between optimizer runs; a run only ever sees a
/// borrowed slice of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskPool {
    tasks: Vec<Task>,
}

impl TaskPool {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The stock list of student tasks.
    pub fn default_pool() -> Self {
        let stock = [
            ("1", "Review DSA Notes", 3, 15),
            ("2", "Write Lab Report", 2, 10),
            ("3", "Group Project Meeting", 2, 8),
            ("4", "Self Care", 1, 6),
            ("5", "Read a book", 4, 12),
            ("6", "Power Nap", 1, 5),
            ("7", "Watch a movie", 2, 3),
            ("8", "IS Assignment", 5, 25),
        ];
        Self {
            tasks: stock
                .into_iter()
                .map(|(id, name, cost, value)| Task::new(id, name, cost, value))
                .collect(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is blank or `cost`/`value` is zero.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        cost: u32,
        value: u32,
    ) -> Result<&Task, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".into(),
                message: "task name must not be empty".into(),
            });
        }
        if cost == 0 {
            return Err(ValidationError::InvalidValue {
                field: "cost".into(),
                message: "task cost must be at least one hour".into(),
            });
        }
        if value == 0 {
            return Err(ValidationError::InvalidValue {
                field: "value".into(),
                message: "task value must be positive".into(),
            });
        }

        let id = Uuid::new_v4().to_string();
        self.tasks.push(Task::new(id, name, cost, value));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Remove the task with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_has_stock_tasks() {
        let pool = TaskPool::default_pool();
        assert_eq!(pool.len(), 8);
        assert_eq!(pool.get("8").map(|t| t.name.as_str()), Some("IS Assignment"));
        assert!(pool.tasks().iter().all(|t| t.cost > 0 && t.value > 0));
    }

    #[test]
    fn add_generates_unique_ids() {
        let mut pool = TaskPool::new();
        let first = pool.add("Gym", 1, 4).unwrap().id.clone();
        let second = pool.add("Gym", 1, 4).unwrap().id.clone();
        assert_ne!(first, second);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn add_rejects_degenerate_tasks() {
        let mut pool = TaskPool::new();
        assert!(matches!(
            pool.add("Nothing", 0, 4),
            Err(ValidationError::InvalidValue { ref field, .. }) if field == "cost"
        ));
        assert!(pool.add("Pointless", 2, 0).is_err());
        assert!(pool.add("   ", 2, 3).is_err());
        assert!(pool.is_empty());
    }

    #[test]
    fn remove_keeps_order() {
        let mut pool = TaskPool::default_pool();
        let removed = pool.remove("3").unwrap();
        assert_eq!(removed.name, "Group Project Meeting");
        let ids: Vec<&str> = pool.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5", "6", "7", "8"]);
        assert!(pool.remove("3").is_none());
    }

    #[test]
    fn serializes_as_plain_list() {
        let pool = TaskPool::from_tasks(vec![Task::new("a", "A", 1, 2)]);
        let json = serde_json::to_value(&pool).unwrap();
        assert!(json.is_array());
    }
}
