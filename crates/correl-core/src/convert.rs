//! End-to-end conversion: read table, reduce, write document.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{CliOverrides, CorrelConfig};
use crate::document::Document;
use crate::errors::ConvertError;
use crate::reduce::{reduce_with_stats, ReduceStats};
use crate::table::Table;

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub nodes: Vec<String>,
    pub stats: ReduceStats,
}

impl ConversionSummary {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The two human-readable lines printed after a run.
    pub fn console_lines(&self) -> [String; 2] {
        [
            format!(
                "Converted {} nodes to {}",
                self.node_count(),
                self.output_path.display()
            ),
            format!("Nodes: {}", self.nodes.join(", ")),
        ]
    }
}

/// Resolve configuration rooted at `root`, then convert.
///
/// `explicit_config` replaces the `correl.toml` lookup; configuration
/// failures surface as `ConvertError::Config` before any file is read.
pub fn load_and_convert(
    root: &Path,
    explicit_config: Option<&Path>,
    cli_overrides: Option<&CliOverrides>,
) -> Result<ConversionSummary, ConvertError> {
    let config = CorrelConfig::load(root, explicit_config, cli_overrides)?;
    convert(&config)
}

/// Run a conversion with the paths resolved from `config`.
pub fn convert(config: &CorrelConfig) -> Result<ConversionSummary, ConvertError> {
    convert_paths(&config.effective_input_path(), &config.effective_output_path())
}

/// Convert the table at `input` into a document at `output`.
///
/// The output file is only created once the whole document has been built
/// and serialized; any earlier failure leaves `output` untouched.
pub fn convert_paths(input: &Path, output: &Path) -> Result<ConversionSummary, ConvertError> {
    let span = tracing::info_span!(
        "convert",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let started = Instant::now();

    let table = Table::from_path(input)?;
    tracing::debug!(
        rows = table.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "read complete"
    );

    let (document, stats) = reduce_with_stats(&table)?;
    tracing::debug!(
        entries = stats.entries,
        skipped_non_numeric = stats.skipped_non_numeric,
        discarded_lower = stats.discarded_lower,
        "reduce complete"
    );

    document.write_to_path(output)?;
    tracing::info!(
        nodes = document.nodes.len(),
        rows = stats.data_rows,
        entries = stats.entries,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "conversion complete"
    );

    let Document { nodes, .. } = document;
    Ok(ConversionSummary {
        input_path: input.to_path_buf(),
        output_path: output.to_path_buf(),
        nodes,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_lines() {
        let summary = ConversionSummary {
            input_path: "correl.csv".into(),
            output_path: "correl_data.json".into(),
            nodes: vec!["A".into(), "B".into(), "C".into()],
            stats: ReduceStats::default(),
        };
        let [first, second] = summary.console_lines();
        assert_eq!(first, "Converted 3 nodes to correl_data.json");
        assert_eq!(second, "Nodes: A, B, C");
    }

    #[test]
    fn test_console_lines_no_nodes() {
        let summary = ConversionSummary {
            input_path: "in.csv".into(),
            output_path: "out.json".into(),
            nodes: Vec::new(),
            stats: ReduceStats::default(),
        };
        assert_eq!(summary.console_lines()[1], "Nodes: ");
    }
}
