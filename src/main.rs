// SPDX-License-Identifier: MPL-2.0
use skybook::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
        url: args
            .opt_value_from_str("--url")
            .unwrap_or(None)
            .or_else(|| {
                args.finish()
                    .into_iter()
                    .next()
                    .and_then(|s| s.into_string().ok())
            }),
    };

    app::run(flags)
}
