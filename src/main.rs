// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

fn main() -> Result<(), daily_tasks::AppError> {
    #[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    daily_tasks::run()
}
