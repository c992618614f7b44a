// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::mvc::TaskId;

/// Errors raised by the task model and its repository.
///
/// None of these are fatal: the view drops a rejected toggle after logging it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("no task with id {0}")]
    NotFound(TaskId),
    #[error("`{0}` is not a valid task id")]
    InvalidId(String),
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("task id {0} is used more than once")]
    DuplicateId(TaskId),
}

/// Errors that can end the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    Platform(#[from] slint::PlatformError),
}
