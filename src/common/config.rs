//! # Configuration
//!
//! TOML configuration for the demonstration pipeline. Every field has a
//! default, so an empty file (or no file at all) yields a usable config.
//!
//! ```toml
//! [input]
//! path = "TUX.png"
//!
//! [output]
//! dir = "out"
//!
//! [message]
//! text = "HACK"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::error::{PixelError, Result};

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Errors
/// - `Config` if the file cannot be read or does not parse as `T`
///
/// # Example
/// ```ignore
/// let config: PipelineConfig = load_config("config/demo.toml")?;
/// ```
pub fn load_config<T>(path: impl AsRef<Path>) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| PixelError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let config: T = toml::from_str(&content)
        .map_err(|e| PixelError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
    Ok(config)
}

/// Full configuration of the demonstration pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub message: MessageConfig,
}

/// Source image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("TUX.png"),
        }
    }
}

/// Where the pipeline writes its results.
///
/// File names are joined onto `dir`. The hidden image should keep a lossless
/// extension; JPEG output destroys the embedded letters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub gray_name: String,
    pub rotated_cw_name: String,
    pub rotated_ccw_name: String,
    pub hidden_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            gray_name: "gray.png".to_string(),
            rotated_cw_name: "rotated_90.png".to_string(),
            rotated_ccw_name: "rotated_-90.png".to_string(),
            hidden_name: "hidden.png".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn gray_path(&self) -> PathBuf {
        self.dir.join(&self.gray_name)
    }

    pub fn rotated_cw_path(&self) -> PathBuf {
        self.dir.join(&self.rotated_cw_name)
    }

    pub fn rotated_ccw_path(&self) -> PathBuf {
        self.dir.join(&self.rotated_ccw_name)
    }

    pub fn hidden_path(&self) -> PathBuf {
        self.dir.join(&self.hidden_name)
    }
}

/// The text hidden in the red channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub text: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            text: "HACK".to_string(),
        }
    }
}
