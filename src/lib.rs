// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! A single screen listing the day's tasks, split into completed and open
//! ones, with a progress summary on top.

use slint::ComponentHandle;

pub mod ui;

mod error;
pub use error::{AppError, TaskError};

mod signal;
pub use signal::Signal;

pub mod mvc;

/// Creates the main window with the seeded task list bound to it.
pub fn init() -> Result<ui::MainWindow, AppError> {
    let view_handle = ui::MainWindow::new()?;

    let task_list_controller = mvc::TaskListController::new(mvc::task_repo()?);
    log::debug!("starting with {:?}", task_list_controller.summary());
    ui::task_list_adapter::connect(&view_handle, task_list_controller);

    Ok(view_handle)
}

/// Shows the main window and runs the event loop until it is closed.
pub fn run() -> Result<(), AppError> {
    init()?.run()?;
    Ok(())
}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(android_app: slint::android::AndroidApp) {
    android_logger::init_once(android_logger::Config::default().with_max_level(
        if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info },
    ));

    let res = slint::android::init(android_app).map_err(AppError::from).and_then(|()| run());
    if let Err(e) = res {
        log::error!("Runtime error: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    if let Err(e) = run() {
        log::error!("Runtime error: {e}");
    }
}
