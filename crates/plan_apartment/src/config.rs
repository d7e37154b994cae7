use floorplan::{FloorPlanError, Result};
use std::{env, path::PathBuf};

const ENV_OUTPUT_DIR: &str = "PLAN_APARTMENT_OUTPUT_DIR";
const DEFAULT_OUTPUT_DIR: &str = "reports";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where CSV reports go
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(output_dir) = env::var(ENV_OUTPUT_DIR)
            && !output_dir.trim().is_empty()
        {
            let path = PathBuf::from(output_dir);

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(FloorPlanError::InvalidConfiguration(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            config.output_dir = Some(path);
        } else {
            config.output_dir = Some(PathBuf::from(DEFAULT_OUTPUT_DIR));
        }
        Ok(config)
    }
}
