// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::mvc::{TaskId, TaskModel};

pub trait TaskRepository {
    fn task_count(&self) -> usize;
    fn get_task(&self, index: usize) -> Option<TaskModel>;
    fn position(&self, id: TaskId) -> Option<usize>;
    fn set_completed(&self, index: usize, completed: bool) -> bool;
}
