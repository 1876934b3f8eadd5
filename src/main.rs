// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        duration: args.opt_value_from_str("--duration").unwrap_or(None),
        position: args.opt_value_from_str("--position").unwrap_or(None),
    };

    app::run(flags)
}
