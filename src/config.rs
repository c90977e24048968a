//! JSON configuration for the `convolve_tool` binary.
use crate::kernel::Kernel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct ConvolveToolConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub kernel: KernelConfig,
}

/// Kernel selection: a named preset, or explicit weight rows.
///
/// Explicit `rows` win over `preset`; with neither set the 3x3 Gaussian blur
/// is used.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KernelConfig {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub rows: Option<Vec<Vec<f32>>>,
}

impl KernelConfig {
    pub fn build(&self) -> Result<Kernel, String> {
        if let Some(rows) = &self.rows {
            let borrowed: Vec<&[f32]> = rows.iter().map(|r| r.as_slice()).collect();
            return Kernel::from_rows(&borrowed).map_err(|e| format!("Invalid kernel rows: {e}"));
        }
        match self.preset.as_deref() {
            None | Some("gaussian3") => Ok(Kernel::gaussian_3x3()),
            Some("identity") => Ok(Kernel::identity()),
            Some("box3") => Kernel::box_blur(3).map_err(|e| e.to_string()),
            Some("box5") => Kernel::box_blur(5).map_err(|e| e.to_string()),
            Some("sharpen3") => Ok(Kernel::sharpen_3x3()),
            Some(other) => Err(format!("Unknown kernel preset '{other}'")),
        }
    }
}

pub fn load_config(path: &Path) -> Result<ConvolveToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
