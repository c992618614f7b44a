// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::{Color, ComponentHandle, MapModel, ModelRc};

use crate::{
    mvc::{TaskListController, TaskModel, TaskSummary},
    ui,
};

// row stripe colors, one is picked per task id
const ACCENT_PALETTE: [(u8, u8, u8); 6] = [
    (0x5a, 0xc8, 0xfa),
    (0xff, 0x95, 0x00),
    (0x34, 0xc7, 0x59),
    (0xaf, 0x52, 0xde),
    (0xff, 0x2d, 0x55),
    (0xff, 0xcc, 0x00),
];

// one place to implement connection between adapter (view) and controller
pub fn connect(view_handle: &ui::MainWindow, controller: TaskListController) {
    let adapter = view_handle.global::<ui::TaskListAdapter>();

    adapter.set_completed_tasks(ModelRc::new(MapModel::new(
        controller.completed_tasks(),
        map_task_to_item,
    )));
    adapter.set_uncompleted_tasks(ModelRc::new(MapModel::new(
        controller.uncompleted_tasks(),
        map_task_to_item,
    )));
    apply_summary(&adapter, controller.summary());

    controller.on_changed({
        let view_handle = view_handle.as_weak();

        move |summary| {
            if let Some(view_handle) = view_handle.upgrade() {
                apply_summary(&view_handle.global::<ui::TaskListAdapter>(), summary);
            }
        }
    });

    adapter.on_toggle_task({
        let controller = controller.clone();

        move |id| {
            if let Err(e) = controller.toggle_by_key(&id) {
                log::warn!("ignoring toggle request: {e}");
            }
        }
    });

    adapter.on_complete_all(move || controller.complete_all());
}

fn apply_summary(adapter: &ui::TaskListAdapter<'_>, summary: TaskSummary) {
    adapter.set_total_count(summary.total as i32);
    adapter.set_completed_count(summary.completed as i32);
    adapter.set_uncompleted_count(summary.uncompleted as i32);
    adapter.set_progress(summary.progress_fraction());
    adapter.set_percent(summary.percent());
    adapter.set_headline(summary.headline().into());
}

// maps a TaskModel (data) to a TaskItem (ui)
fn map_task_to_item(task: TaskModel) -> ui::TaskItem {
    ui::TaskItem {
        id: task.id().to_string().into(),
        title: task.title().into(),
        date: task.date().into(),
        completed: task.is_completed(),
        accent: accent_color(&task),
    }
}

fn accent_color(task: &TaskModel) -> Color {
    let (red, green, blue) =
        ACCENT_PALETTE[(task.id().as_u128() % ACCENT_PALETTE.len() as u128) as usize];
    Color::from_rgb_u8(red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_task_to_item() {
        let task = TaskModel::new("Website Research", "5 Oct", true).unwrap();
        let item = map_task_to_item(task.clone());

        assert_eq!(item.id.as_str(), task.id().to_string());
        assert_eq!(item.title.as_str(), "Website Research");
        assert_eq!(item.date.as_str(), "5 Oct");
        assert!(item.completed);
    }

    #[test]
    fn test_accent_color_is_stable() {
        let task = TaskModel::new("Prepare Screens", "4 Oct", false).unwrap();
        let palette: Vec<Color> =
            ACCENT_PALETTE.iter().map(|&(r, g, b)| Color::from_rgb_u8(r, g, b)).collect();

        assert_eq!(accent_color(&task), accent_color(&task.clone()));
        assert!(palette.contains(&accent_color(&task)));
    }
}
