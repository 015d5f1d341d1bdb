// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use iced_toaster::logging;

fn main() -> iced::Result {
    logging::init();

    let flags = Flags::from_env().unwrap_or_else(|err| {
        tracing::error!(%err, "invalid arguments");
        std::process::exit(2);
    });

    app::run(flags)
}
