use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::backend::engine::{KEY_PROTOCOLS, KEY_SCAN};

use super::config::{InputConfig, OutputConfig};
use super::response::RadarResponse;


#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O failed with error `{0}`")]
    Io(#[from] io::Error),
    #[error("Serialization failed with error `{0}`")]
    Serialization(#[from] serde_json::Error),
}


fn read_stdin() -> io::Result<String> {
    let mut body = String::new();

    io::stdin().read_to_string(&mut body)?;

    Ok(body)
}

// The scan text is spliced in as is, so a malformed scan file yields a
// malformed body and is reported the same way.
fn assemble_body(
    protocols: &[String],
    scan_path: &Path
) -> Result<String, OutputError> {
    let scan_text      = fs::read_to_string(scan_path)?;
    let protocols_text = serde_json::to_string(protocols)?;

    Ok(format!(
        "{{\"{KEY_PROTOCOLS}\": {protocols_text}, \"{KEY_SCAN}\": {scan_text}}}"
    ))
}

/// # Errors
///
/// Will return `Err` if the request body or the scan file cannot be read.
pub fn read_request_body(
    input_config: &InputConfig
) -> Result<String, OutputError> {
    match input_config {
        InputConfig::Body(Some(body_path)) =>
            Ok(fs::read_to_string(body_path)?),
        InputConfig::Body(None) => Ok(read_stdin()?),
        InputConfig::Assembled { protocols, scan_path } =>
            assemble_body(protocols, scan_path),
    }
}

fn response_file_path(
    output_directory: &Path,
    response: &RadarResponse
) -> PathBuf {
    let local_time = chrono::Local::now()
        .format("%YY-%mm-%dd_%HH-%MM-%SS-%3ff");

    output_directory.join(format!("{local_time}_{}.json", response.status()))
}

/// Writes the response to stdout, or to a timestamped file when an output
/// directory is configured. Returns the path of the written file.
///
/// # Errors
///
/// Will return `Err` if serialization or writing fails.
pub fn write_response(
    output_config: &OutputConfig,
    response: &RadarResponse,
) -> Result<Option<PathBuf>, OutputError> {
    let text = if output_config.status_only() {
        response.status().to_string()
    } else {
        response.to_json(output_config.pretty())?
    };

    let Some(output_directory) = output_config.output_directory() else {
        let mut stdout = io::stdout().lock();

        writeln!(stdout, "{text}")?;

        return Ok(None);
    };

    fs::create_dir_all(output_directory)?;

    let file_path = response_file_path(output_directory, response);

    fs::write(&file_path, text)?;

    Ok(Some(file_path))
}
