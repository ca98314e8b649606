use dirpath::{
    cli::{get_log_level_from_verbose, parse_cli, run},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    let lvl = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    if let Err(err) = run(cli.command) {
        default_error_handler(err);
    }
}
