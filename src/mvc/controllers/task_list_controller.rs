// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::{FilterModel, ModelRc};

use crate::{
    Signal, TaskError,
    mvc::{TaskId, TaskListModel, TaskModel, TaskSummary, traits::TaskRepository},
};

/// Entry point for the two user intents of the task screen.
///
/// Every successful mutation is followed by a `changed` emission carrying the
/// fresh summary.
#[derive(Clone)]
pub struct TaskListController {
    model: TaskListModel,
    changed: Rc<Signal<TaskSummary>>,
}

impl TaskListController {
    pub fn new(repo: impl TaskRepository + 'static) -> Self {
        Self { model: TaskListModel::new(repo), changed: Rc::new(Signal::default()) }
    }

    pub fn toggle(&self, id: TaskId) -> Result<(), TaskError> {
        let completed = self.model.toggle(id)?;
        log::debug!("task {id} is now {}", if completed { "completed" } else { "open" });

        self.refresh();
        Ok(())
    }

    /// Same as [`Self::toggle`] for an id coming from the view as text.
    pub fn toggle_by_key(&self, key: &str) -> Result<(), TaskError> {
        self.toggle(key.parse()?)
    }

    pub fn complete_all(&self) {
        let changed = self.model.complete_all();
        log::info!("completed all tasks ({changed} changed)");

        self.refresh();
    }

    pub fn summary(&self) -> TaskSummary {
        self.model.summary()
    }

    pub fn model(&self) -> TaskListModel {
        self.model.clone()
    }

    pub fn completed_tasks(&self) -> ModelRc<TaskModel> {
        ModelRc::new(FilterModel::new(self.model.clone(), |task: &TaskModel| task.is_completed()))
    }

    pub fn uncompleted_tasks(&self) -> ModelRc<TaskModel> {
        ModelRc::new(FilterModel::new(self.model.clone(), |task: &TaskModel| !task.is_completed()))
    }

    pub fn on_changed(&self, mut callback: impl FnMut(TaskSummary) + 'static) {
        self.changed.connect(move |summary| callback(*summary));
    }

    fn refresh(&self) {
        self.changed.emit(&self.model.summary());
    }
}
