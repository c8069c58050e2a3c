//! Presentation mode shared by all exporters.

use crate::utils::config::DEFAULT_PARAMETER_LABEL;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which buckets an exporter writes
///
/// Has no effect on aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Omit buckets labelled "default"
    #[default]
    #[value(alias = "0")]
    Simple,

    /// Export every bucket
    #[value(alias = "1")]
    Complete,
}

impl ExportMode {
    /// Whether a bucket with this label is exported
    pub fn includes(&self, label: &str) -> bool {
        match self {
            ExportMode::Simple => label != DEFAULT_PARAMETER_LABEL,
            ExportMode::Complete => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportMode::Simple => "simple",
            ExportMode::Complete => "complete",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
