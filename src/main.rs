use pico_args;
use society_hub::app::{self, Flags};
use society_hub::config;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap();
    let config_dir = args.opt_value_from_str("--config-dir").unwrap();
    config::init_cli_override(config_dir);

    app::run(Flags { lang })
}
