use std::path::{Path, PathBuf};

use anyhow::Context;
use simplicial::Hypergraph;

use crate::homology::HomologyOptions;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The settings of a run of the `homology` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the JSON description of the hypergraph
    pub input: PathBuf,
    /// The dimensions to compute. If empty, every dimension in which homology can be computed.
    pub dimensions: Vec<usize>,
    pub options: HomologyOptions,
    pub format: OutputFormat,
    /// The number of `-v` flags
    pub verbosity: u64,
}

/// Installs a `tracing` subscriber writing to stderr. `RUST_LOG` takes precedence over
/// `verbosity`.
pub fn init_logging(verbosity: u64) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn load_hypergraph(path: &Path) -> anyhow::Result<Hypergraph> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hypergraph from {}", path.display()))?;
    let hypergraph = Hypergraph::from_json_str(&json)
        .with_context(|| format!("Invalid hypergraph in {}", path.display()))?;
    tracing::info!(
        edges = hypergraph.num_edges(),
        vertices = hypergraph.vertices().len(),
        "loaded hypergraph"
    );
    Ok(hypergraph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors() {
        let dir = std::env::temp_dir().join(format!("homology-utils-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        let err = load_hypergraph(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read hypergraph from"));

        let invalid = dir.join("invalid.json");
        std::fs::write(&invalid, r#"{"edges": "none"}"#).unwrap();
        let err = load_hypergraph(&invalid).unwrap_err();
        assert!(err.to_string().starts_with("Invalid hypergraph in"));
        assert!(format!("{err:#}").contains(": invalid hypergraph: "));

        let valid = dir.join("valid.json");
        std::fs::write(&valid, r#"[[1, 2], [2, 3, "x"]]"#).unwrap();
        let hypergraph = load_hypergraph(&valid).unwrap();
        assert_eq!(hypergraph.max_edge_size(), 3);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
