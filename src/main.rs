use stackrules::cli::{handle_generate, CliArgs};
use stackrules::util::logging::{init_logging, parse_level, LoggingConfig};
use stackrules::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("stackrules v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_generate(&args);

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let mut config = LoggingConfig::from_env();

    if let Some(level_str) = &args.log_level {
        config.level = parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    init_logging(config);
}
