use std::process::ExitCode;

use radar_targeting::frontend::cli::cli;


fn main() -> ExitCode {
    cli()
}
