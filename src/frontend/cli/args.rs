use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgMatches;
use log::{error, info, LevelFilter};

use crate::frontend::config::{GeneralConfig, InputConfig, OutputConfig};
use crate::frontend::output::{read_request_body, write_response};
use crate::frontend::response::{RadarResponse, StatusCode};


pub const ARG_INPUT: &str       = "request body path";
pub const ARG_OUTPUT_DIR: &str  = "output directory path";
pub const ARG_PRETTY: &str      = "pretty output";
pub const ARG_PROTOCOL: &str    = "protocol";
pub const ARG_SCAN: &str        = "scan path";
pub const ARG_STATUS_ONLY: &str = "status only";
pub const ARG_VERBOSE: &str     = "verbose";

pub const EXIT_FOUND: u8       = 0;
pub const EXIT_NOT_FOUND: u8   = 1;
pub const EXIT_BAD_REQUEST: u8 = 2;
pub const EXIT_IO_FAILURE: u8  = 3;


pub fn handle_arguments(matches: &ArgMatches) -> ExitCode {
    init_logger(verbose(matches));

    let general_config = GeneralConfig::new(
        input_config(matches),
        output_config(matches),
    );

    let body = match read_request_body(general_config.input_config()) {
        Ok(body)   => body,
        Err(error) => {
            error!("Failed to read request: {error}");

            return ExitCode::from(EXIT_IO_FAILURE);
        },
    };

    let response = RadarResponse::from_body(&body);

    info!("Responding {} \"{}\"", response.status(), response.message());

    match write_response(general_config.output_config(), &response) {
        Ok(Some(file_path)) =>
            info!("Response written to {}", file_path.display()),
        Ok(None)            => (),
        Err(error)          => {
            error!("Failed to write response: {error}");

            return ExitCode::from(EXIT_IO_FAILURE);
        },
    }

    ExitCode::from(exit_code(response.status()))
}

fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn exit_code(status: StatusCode) -> u8 {
    match status {
        StatusCode::Success    => EXIT_FOUND,
        StatusCode::NotFound   => EXIT_NOT_FOUND,
        StatusCode::BadRequest => EXIT_BAD_REQUEST,
    }
}

fn input_config(matches: &ArgMatches) -> InputConfig {
    let protocols: Vec<String> = matches
        .get_many::<String>(ARG_PROTOCOL)
        .map(|protocols| protocols.cloned().collect())
        .unwrap_or_default();

    match matches.get_one::<PathBuf>(ARG_SCAN) {
        Some(scan_path) => InputConfig::Assembled {
            protocols,
            scan_path: scan_path.clone(),
        },
        None => InputConfig::Body(input_path(matches)),
    }
}

fn output_config(matches: &ArgMatches) -> OutputConfig {
    OutputConfig::new(
        matches
            .get_one::<PathBuf>(ARG_OUTPUT_DIR)
            .map(PathBuf::as_path),
        matches.get_flag(ARG_PRETTY),
        matches.get_flag(ARG_STATUS_ONLY),
    )
}

fn input_path(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<PathBuf>(ARG_INPUT)
        .cloned()
}

fn verbose(matches: &ArgMatches) -> bool {
    matches.get_flag(ARG_VERBOSE)
}
