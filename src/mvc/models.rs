// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod task_id;
pub use task_id::TaskId;

mod task_model;
pub use task_model::TaskModel;

mod task_summary;
pub use task_summary::TaskSummary;

mod task_list_model;
pub use task_list_model::TaskListModel;
