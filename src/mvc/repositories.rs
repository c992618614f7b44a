// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod memory_task_repository;
pub use memory_task_repository::*;

use crate::{TaskError, mvc::models::TaskModel};

pub mod traits;

/// The tasks the screen starts with.
pub fn seed_tasks() -> Result<Vec<TaskModel>, TaskError> {
    [
        ("Mobile App Research", "4 Oct", false),
        ("Prepare Wireframe for Main Flow", "4 Oct", true),
        ("Prepare Screens", "4 Oct", true),
        ("Website Research", "5 Oct", true),
        ("Prepare Wireframe for Main Flow", "5 Oct", true),
        ("Prepare Screens", "5 Oct", true),
    ]
    .into_iter()
    .map(|(title, date, completed)| TaskModel::new(title, date, completed))
    .collect()
}

pub fn task_repo() -> Result<impl traits::TaskRepository + Clone, TaskError> {
    MemoryTaskRepository::new(seed_tasks()?)
}
