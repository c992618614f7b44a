// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::TaskId;
use crate::TaskError;

/// A single entry of the task list.
///
/// Everything but the completion flag is fixed at creation, and only the
/// repository may change that flag.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskModel {
    id: TaskId,
    title: String,
    // already formatted for display, e.g. "4 Oct"
    date: String,
    completed: bool,
}

impl TaskModel {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        completed: bool,
    ) -> Result<Self, TaskError> {
        Self::with_id(TaskId::new(), title, date, completed)
    }

    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        date: impl Into<String>,
        completed: bool,
    ) -> Result<Self, TaskError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        Ok(Self { id, title, date: date.into(), completed })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
