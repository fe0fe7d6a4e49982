use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, value_parser};

use args::{
    handle_arguments, ARG_INPUT, ARG_OUTPUT_DIR, ARG_PRETTY, ARG_PROTOCOL,
    ARG_SCAN, ARG_STATUS_ONLY, ARG_VERBOSE
};


mod args;


pub fn cli() -> ExitCode {
    handle_arguments(&command().get_matches())
}

#[must_use]
pub fn command() -> Command {
    Command::new("radar_targeting")
        .version("0.1.0")
        .about("Chooses the next coordinate to engage from a radar scan.")
        .args([
            arg_input(),
            arg_protocol(),
            arg_scan(),
            arg_output_directory(),
            arg_pretty(),
            arg_status_only(),
            arg_verbose(),
        ])
}

fn arg_input() -> Arg {
    Arg::new(ARG_INPUT)
        .short('i')
        .long("input")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with_all([ARG_PROTOCOL, ARG_SCAN])
        .help(
            "Read the request body (`{\"protocols\": [..], \"scan\": [..]}`) \
            from `.json` file instead of stdin"
        )
}

fn arg_protocol() -> Arg {
    Arg::new(ARG_PROTOCOL)
        .short('p')
        .long("protocol")
        .action(ArgAction::Append)
        .requires(ARG_SCAN)
        .help(
            "Add a protocol to the request, may be repeated \
            (closest-enemies, furthest-enemies, assist-allies, \
            avoid-crossfire, prioritize-mech, avoid-mech)"
        )
}

fn arg_scan() -> Arg {
    Arg::new(ARG_SCAN)
        .short('s')
        .long("scan")
        .value_parser(value_parser!(PathBuf))
        .requires(ARG_PROTOCOL)
        .help("Read the scan point list from `.json` file")
}

fn arg_output_directory() -> Arg {
    Arg::new(ARG_OUTPUT_DIR)
        .short('o')
        .long("output")
        .value_parser(value_parser!(PathBuf))
        .help(
            "Write the response to a timestamped `.json` file in specified \
            directory instead of stdout"
        )
}

fn arg_pretty() -> Arg {
    Arg::new(ARG_PRETTY)
        .long("pretty")
        .action(ArgAction::SetTrue)
        .conflicts_with(ARG_STATUS_ONLY)
        .help("Pretty-print the response")
}

fn arg_status_only() -> Arg {
    Arg::new(ARG_STATUS_ONLY)
        .long("status-only")
        .action(ArgAction::SetTrue)
        .help("Print only the response status code")
}

fn arg_verbose() -> Arg {
    Arg::new(ARG_VERBOSE)
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Show full log output")
}
