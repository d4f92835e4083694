use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::report;
use betafold::core::io::fasta::{SequenceRecord, read_records_from_path};
use betafold::core::models::analysis::{AnalysisSummary, DataQualityWarning};
use betafold::engine::analyzer::DynSequenceAnalyzer;
use betafold::engine::config::AnalysisConfig;
use rayon::prelude::*;
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordAnalysis {
    protein_name: String,
    residues: usize,
    analysis: AnalysisSummary,
    warnings: Vec<DataQualityWarning>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let config = build_config(&args.overrides, args.config.as_deref(), &args.set_values)?;

    info!("Loading sequences from {:?}", &args.input);
    let records = read_records_from_path(&args.input)
        .map_err(|e| CliError::sequence_file(args.input.clone(), e))?;
    if records.is_empty() {
        return Err(CliError::Argument(format!(
            "No sequences found in '{}'",
            args.input.display()
        )));
    }

    let results = analyze_records(&records, &config.pipeline.analysis);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &results).map_err(anyhow::Error::from)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (index, result) in results.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                report::write_summary(
                    &result.protein_name,
                    result.residues,
                    &result.analysis,
                    &result.warnings,
                    &mut out,
                )?;
            }
        }
    }
    Ok(())
}

fn analyze_records(records: &[SequenceRecord], config: &AnalysisConfig) -> Vec<RecordAnalysis> {
    info!("Analyzing {} record(s).", records.len());
    records
        .par_iter()
        .enumerate()
        .map(|(index, record)| {
            let mut analyzer = DynSequenceAnalyzer::from_config(config, index as u64);
            let analysis = analyzer.analyze(&record.sequence);
            RecordAnalysis {
                protein_name: record.name.clone(),
                residues: record.sequence.len(),
                analysis: analysis.summary,
                warnings: analysis.warnings,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use betafold::core::models::sequence::Sequence;
    use betafold::engine::config::IsoelectricModel;

    fn record(name: &str, raw: &str) -> SequenceRecord {
        SequenceRecord {
            name: name.to_string(),
            sequence: Sequence::clean(raw),
        }
    }

    #[test]
    fn results_keep_record_order_and_names() {
        let records = vec![record("a", "MKTAY"), record("b", "GGG"), record("c", "")];
        let config = AnalysisConfig {
            seed: Some(5),
            ..AnalysisConfig::default()
        };
        let results = analyze_records(&records, &config);
        let names: Vec<_> = results.iter().map(|r| r.protein_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(results[0].residues, 5);
        assert!((results[2].analysis.molecular_weight_kda - 0.018015).abs() < 1e-9);
        assert!(results[2].analysis.domains.is_empty());
    }

    #[test]
    fn titration_model_is_deterministic_without_a_seed() {
        let records = vec![record("a", "MKTAYIAKQRQISFVKSHFSRQ")];
        let config = AnalysisConfig {
            isoelectric_model: IsoelectricModel::Titration,
            seed: None,
        };
        let first = analyze_records(&records, &config);
        let second = analyze_records(&records, &config);
        assert_eq!(
            first[0].analysis.isoelectric_point,
            second[0].analysis.isoelectric_point
        );
    }

    #[test]
    fn unknown_residues_surface_as_warnings() {
        let results = analyze_records(&[record("x", "MBX")], &AnalysisConfig::default());
        assert_eq!(results[0].warnings.len(), 2);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let results = analyze_records(&[record("x", "GG")], &AnalysisConfig::default());
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json[0]["proteinName"], "x");
        assert_eq!(json[0]["residues"], 2);
        assert!(json[0]["analysis"]["isoelectricPoint"].is_number());
    }
}
