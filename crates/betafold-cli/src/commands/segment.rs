use crate::cli::{OutputFormat, SegmentArgs};
use crate::error::Result;
use crate::utils::report;
use betafold::engine::error::EngineError;
use betafold::engine::segmenter;
use std::io::{self, Write};
use tracing::debug;

pub fn run(args: SegmentArgs) -> Result<()> {
    let segments = segmenter::segment(args.labels.trim()).map_err(EngineError::from)?;
    debug!("Encoded {} segment(s).", segments.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &segments).map_err(anyhow::Error::from)?;
            writeln!(out)?;
        }
        OutputFormat::Text => report::write_segments(&segments, &mut out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn valid_labels_succeed() {
        let args = SegmentArgs {
            labels: "HHHEEECCCHH".to_string(),
            format: OutputFormat::Json,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn unknown_symbol_is_a_core_error() {
        let args = SegmentArgs {
            labels: "HHQ".to_string(),
            format: OutputFormat::Text,
        };
        assert!(matches!(run(args), Err(CliError::BetaFoldCore(_))));
    }
}
