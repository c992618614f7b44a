// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use super::traits;
use crate::{TaskError, mvc};

/// Keeps the tasks in memory, in insertion order.
#[derive(Clone)]
pub struct MemoryTaskRepository {
    tasks: Rc<RefCell<Vec<mvc::TaskModel>>>,
}

impl MemoryTaskRepository {
    pub fn new(tasks: Vec<mvc::TaskModel>) -> Result<Self, TaskError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(task) = tasks.iter().find(|task| !seen.insert(task.id())) {
            return Err(TaskError::DuplicateId(task.id()));
        }

        Ok(Self { tasks: Rc::new(RefCell::new(tasks)) })
    }
}

impl traits::TaskRepository for MemoryTaskRepository {
    fn task_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    fn get_task(&self, index: usize) -> Option<mvc::TaskModel> {
        self.tasks.borrow().get(index).cloned()
    }

    fn position(&self, id: mvc::TaskId) -> Option<usize> {
        self.tasks.borrow().iter().position(|task| task.id() == id)
    }

    fn set_completed(&self, index: usize, completed: bool) -> bool {
        if let Some(task) = self.tasks.borrow_mut().get_mut(index) {
            task.set_completed(completed);
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvc::{TaskId, TaskModel, traits::TaskRepository};

    #[test]
    fn test_duplicate_id() {
        let id = TaskId::new();
        let tasks = vec![
            TaskModel::with_id(id, "Item 1", "4 Oct", false).unwrap(),
            TaskModel::new("Item 2", "4 Oct", false).unwrap(),
            TaskModel::with_id(id, "Item 3", "5 Oct", true).unwrap(),
        ];

        assert!(matches!(MemoryTaskRepository::new(tasks), Err(TaskError::DuplicateId(d)) if d == id));
    }

    #[test]
    fn test_position_and_update() {
        let tasks = vec![
            TaskModel::new("Item 1", "4 Oct", false).unwrap(),
            TaskModel::new("Item 2", "5 Oct", false).unwrap(),
        ];
        let second = tasks[1].id();
        let repo = MemoryTaskRepository::new(tasks).unwrap();

        assert_eq!(repo.task_count(), 2);
        assert_eq!(repo.position(second), Some(1));
        assert_eq!(repo.position(TaskId::new()), None);

        assert!(repo.set_completed(1, true));
        assert!(repo.get_task(1).unwrap().is_completed());
        assert!(!repo.set_completed(2, true));
        assert_eq!(repo.get_task(2), None);
    }

    #[test]
    fn test_clones_share_tasks() {
        let repo = MemoryTaskRepository::new(vec![TaskModel::new("Item", "4 Oct", false).unwrap()])
            .unwrap();
        let other = repo.clone();

        repo.set_completed(0, true);
        assert!(other.get_task(0).unwrap().is_completed());
    }
}
