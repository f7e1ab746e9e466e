use std::path::PathBuf;

use jiff::civil::Time;

use crate::{arrival::DEFAULT_DEPARTURE, file_utils::default_output_path, parsers};

pub const INPUT_FILE_ENV_VAR: &str = "COURIER_INPUT_FILE";
pub const OUTPUT_FILE_ENV_VAR: &str = "COURIER_OUTPUT_FILE";
pub const DEPARTURE_ENV_VAR: &str = "COURIER_DEPARTURE";

pub const DEFAULT_INPUT_FILE: &str = "inputPS3.txt";

/// Settings of a single route run. Each value comes from the command line,
/// then the environment (`.env.local` included), then the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub departure: Time,
}

impl RouteSettings {
    pub fn resolve(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        departure: Option<Time>,
    ) -> anyhow::Result<RouteSettings> {
        Self::resolve_with(input, output, departure, |key| std::env::var(key).ok())
    }

    pub fn resolve_with<F>(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        departure: Option<Time>,
        env: F,
    ) -> anyhow::Result<RouteSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = input
            .or_else(|| env(INPUT_FILE_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));

        let output = output
            .or_else(|| env(OUTPUT_FILE_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| default_output_path(&input));

        let departure = match departure {
            Some(departure) => departure,
            None => match env(DEPARTURE_ENV_VAR) {
                Some(value) => parsers::parse_departure(&value).map_err(|error| {
                    anyhow::anyhow!("Invalid {DEPARTURE_ENV_VAR}: {error}")
                })?,
                None => DEFAULT_DEPARTURE,
            },
        };

        Ok(RouteSettings {
            input,
            output,
            departure,
        })
    }
}
