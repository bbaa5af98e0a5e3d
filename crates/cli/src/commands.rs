//! Argument definitions.

use clap::{Arg, ArgAction, Command, value_parser};

use cashpoint_observability::LogFormat;

pub fn build_cli() -> Command {
    Command::new("cashpoint")
        .about("Dispense cash from an in-memory note inventory")
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(
            "Without a subcommand, operations are read from stdin, one per line:\n  \
             withdraw AMOUNT | load VALUE COUNT | stock | reset VALUE:COUNT...",
        )
        .arg(
            Arg::new("stock")
                .long("stock")
                .value_name("VALUE:COUNT")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .help("Initial notes, e.g. --stock 2000:10 --stock 500:20"),
        )
        .arg(
            Arg::new("stock-file")
                .long("stock-file")
                .value_name("PATH")
                .help("JSON file with initial notes: {\"notes\": {\"2000\": 10}}"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .value_parser(value_parser!(LogFormat))
                .help("Log output on stderr: json (default) or pretty"),
        )
        .subcommand(
            Command::new("withdraw")
                .about("Withdraw one or more amounts in order")
                .arg(
                    Arg::new("amount")
                        .required(true)
                        .num_args(1..)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64)),
                ),
        )
        .subcommand(Command::new("stock").about("Show the configured stock"))
        .subcommand(
            Command::new("simulate")
                .about("Withdraw concurrently from many threads and report the outcome")
                .arg(
                    Arg::new("clients")
                        .long("clients")
                        .value_parser(value_parser!(usize))
                        .default_value("8"),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64)),
                ),
        )
}
