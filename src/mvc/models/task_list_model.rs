// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::{Model, ModelNotify, ModelTracker};

use super::{TaskId, TaskModel, TaskSummary};
use crate::{TaskError, mvc::traits::TaskRepository};

/// The ordered task collection and everything derived from it.
///
/// Counts and filtered views are computed on every read, nothing derived is
/// cached. Mutations report the affected rows through the [`ModelTracker`], so
/// views built on top of this model (for example a [`slint::FilterModel`])
/// follow along.
#[derive(Clone)]
pub struct TaskListModel {
    repo: Rc<dyn TaskRepository>,
    notify: Rc<ModelNotify>,
}

impl TaskListModel {
    pub fn new(repo: impl TaskRepository + 'static) -> Self {
        Self { repo: Rc::new(repo), notify: Rc::new(Default::default()) }
    }

    /// Flips the completion flag of the task `id` and returns the new value.
    ///
    /// An unknown id leaves the list untouched.
    pub fn toggle(&self, id: TaskId) -> Result<bool, TaskError> {
        let (index, task) = self.find(id).ok_or(TaskError::NotFound(id))?;
        let completed = !task.is_completed();

        if !self.repo.set_completed(index, completed) {
            return Err(TaskError::NotFound(id));
        }

        self.notify.row_changed(index);
        Ok(completed)
    }

    /// Marks every task as completed and returns how many tasks changed.
    pub fn complete_all(&self) -> usize {
        let mut changed = 0;

        for index in 0..self.repo.task_count() {
            let Some(task) = self.repo.get_task(index) else { continue };
            if task.is_completed() || !self.repo.set_completed(index, true) {
                continue;
            }

            self.notify.row_changed(index);
            changed += 1;
        }

        changed
    }

    pub fn total_count(&self) -> usize {
        self.repo.task_count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks().filter(TaskModel::is_completed).count()
    }

    pub fn uncompleted_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    pub fn progress_fraction(&self) -> f32 {
        self.summary().progress_fraction()
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary::new(self.total_count(), self.completed_count())
    }

    pub fn completed_tasks(&self) -> Vec<TaskModel> {
        self.tasks().filter(TaskModel::is_completed).collect()
    }

    pub fn uncompleted_tasks(&self) -> Vec<TaskModel> {
        self.tasks().filter(|task| !task.is_completed()).collect()
    }

    fn tasks(&self) -> impl Iterator<Item = TaskModel> + '_ {
        (0..self.repo.task_count()).filter_map(|index| self.repo.get_task(index))
    }

    fn find(&self, id: TaskId) -> Option<(usize, TaskModel)> {
        let index = self.repo.position(id)?;
        Some((index, self.repo.get_task(index)?))
    }
}

impl Model for TaskListModel {
    type Data = TaskModel;

    fn row_count(&self) -> usize {
        self.repo.task_count()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.repo.get_task(row)
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        self.notify.as_ref()
    }
}
