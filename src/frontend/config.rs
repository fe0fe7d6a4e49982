use std::path::{Path, PathBuf};


pub struct GeneralConfig {
    input: InputConfig,
    output: OutputConfig,
}

impl GeneralConfig {
    #[must_use]
    pub fn new(input: InputConfig, output: OutputConfig) -> Self {
        Self { input, output }
    }

    #[must_use]
    pub fn input_config(&self) -> &InputConfig {
        &self.input
    }

    #[must_use]
    pub fn output_config(&self) -> &OutputConfig {
        &self.output
    }
}


#[derive(Clone, Debug, PartialEq)]
pub enum InputConfig {
    // Whole request body. If `None`, the body is read from stdin.
    Body(Option<PathBuf>),
    // Body assembled from protocol names and a file holding the scan list.
    Assembled {
        protocols: Vec<String>,
        scan_path: PathBuf,
    },
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::Body(None)
    }
}


#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutputConfig {
    // If `None`, the response is printed to stdout.
    output_directory: Option<PathBuf>,
    pretty: bool,
    status_only: bool,
}

impl OutputConfig {
    #[must_use]
    pub fn new(
        output_directory: Option<&Path>,
        pretty: bool,
        status_only: bool,
    ) -> Self {
        Self {
            output_directory: output_directory.map(Path::to_path_buf),
            pretty,
            status_only,
        }
    }

    #[must_use]
    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }

    #[must_use]
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    #[must_use]
    pub fn status_only(&self) -> bool {
        self.status_only
    }
}
