use clap::Parser;

use crate::cli::messages::system_message;
use crate::cli::parsers::{CliMode, CliParser};

mod cli;

fn main() {
    let args = CliParser::parse();

    let result = match args.mode {
        Some(CliMode::Demo) => cli::run_demo(args.rows, args.workers),
        Some(CliMode::Describe) => cli::run_describe(&args.schema, args.json),
        None => Ok(()),
    };

    if let Err(message) = result {
        log::error!("{}", message);
        eprintln!("{}", system_message("error", message));
        std::process::exit(1);
    }
}
