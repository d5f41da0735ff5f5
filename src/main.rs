// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};

fn main() -> iced::Result {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_level(log::LevelFilter::Info)
        .init()
        .expect("failed to build logger instance");

    let mut args = pico_args::Arguments::from_env();
    let duration_ms = args
        .opt_value_from_str("--duration-ms")
        .unwrap_or_else(|err| {
            log::warn!("ignoring --duration-ms: {err}");
            None
        });

    app::run(Flags { duration_ms })
}
