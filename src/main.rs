use bitwise_add::cli::CliConfig;
use bitwise_add::logger;
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match config.run() {
        Ok(output) => println!("{}", output),
        Err(e) => {
            // The subscriber writes to stderr, so this is the only error report.
            tracing::error!("bitadd failed: {}", e);
            std::process::exit(1);
        }
    }
}
