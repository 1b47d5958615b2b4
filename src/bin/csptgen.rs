use clap::{CommandFactory, Parser};
use csptgen::config::Config;
use csptgen::reporting::logging;
use csptgen::runner;
use csptgen::ui::{Cli, cli_to_config, normalize_args};

fn main() {
    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let cli = Cli::parse_from(normalize_args(args));

    let Some(mode) = cli.mode() else {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    };

    let mut config = Config::default();
    config.merge_with_cli(&cli_to_config(&cli));

    logging::init_logger(config.verbose, config.quiet);
    logging::log_config_info(&config);

    if let Err(e) = runner::run(&mode, &config) {
        logging::log_error("Run failed", Some(&e));
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
