//! Configuration types deserialized from `iogen.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `iogen.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata.
    pub project: ProjectMeta,
    /// Input table locations.
    #[serde(default)]
    pub tables: TableConfig,
    /// Output file locations.
    #[serde(default)]
    pub outputs: OutputConfig,
}

/// Core project metadata required in every `iogen.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
}

/// Paths to the JSON signal and pin tables.
///
/// When only `signals` is given, the pin table is derived by flattening it.
#[derive(Debug, Default, Deserialize)]
pub struct TableConfig {
    /// Path to the signal table.
    pub signals: Option<String>,
    /// Path to an already-flattened pin table.
    pub pins: Option<String>,
}

/// Paths of the generated files.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// XDC pin constraint file.
    #[serde(default = "default_xdc")]
    pub xdc: String,
    /// VHDL signal declaration file.
    #[serde(default = "default_vhdl")]
    pub vhdl: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            xdc: default_xdc(),
            vhdl: default_vhdl(),
        }
    }
}

fn default_xdc() -> String {
    "top.xdc".to_string()
}

fn default_vhdl() -> String {
    "signals.vhd".to_string()
}
