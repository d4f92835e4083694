use crate::cli::{OutputFormat, PredictArgs};
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::utils::parser::slugify;
use crate::utils::progress::CliProgressHandler;
use crate::utils::report;
use betafold::core::io::contacts::{read_contact_matrix_from_path, write_contact_matrix};
use betafold::core::io::fasta::{SequenceRecord, read_records_from_path};
use betafold::core::io::svg::{self, TopologyStyle};
use betafold::core::models::contact::ContactMatrix;
use betafold::engine::analyzer::DynSequenceAnalyzer;
use betafold::engine::generator::{PredictionSource, RandomPredictor};
use betafold::engine::progress::ProgressReporter;
use betafold::workflows::predict::{self, PredictionInput, PredictionReport};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Externally supplied labels and contacts that replace the generator's output.
#[derive(Debug, Default)]
struct ManualPrediction {
    structure: Option<String>,
    contacts: Option<ContactMatrix>,
}

struct RecordOutcome {
    report: PredictionReport,
    contacts: ContactMatrix,
}

pub fn run(args: PredictArgs, quiet: bool) -> Result<()> {
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

    let manual = load_manual_prediction(&args, records.len())?;
    let outcomes = predict_records(&records, &config, &manual, quiet)?;

    let reports: Vec<&PredictionReport> = outcomes.iter().map(|o| &o.report).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &reports).map_err(anyhow::Error::from)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (index, report) in reports.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                report::write_report(report, &mut out)?;
            }
        }
    }

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)?;
        let numbered = outcomes.len() > 1;
        for (index, outcome) in outcomes.iter().enumerate() {
            let stem = output_stem(&outcome.report.protein_name, index, numbered);
            write_record_files(dir, &stem, outcome, &config)?;
        }
        info!("Wrote {} report(s) to {:?}", outcomes.len(), dir);
    }

    Ok(())
}

fn load_manual_prediction(args: &PredictArgs, record_count: usize) -> Result<ManualPrediction> {
    if args.structure.is_none() && args.contacts.is_none() {
        return Ok(ManualPrediction::default());
    }
    if record_count != 1 {
        return Err(CliError::Argument(format!(
            "--structure and --contacts require a single-record input, found {} records",
            record_count
        )));
    }

    let contacts = match &args.contacts {
        Some(path) => {
            info!("Loading contact matrix from {:?}", path);
            Some(
                read_contact_matrix_from_path(path)
                    .map_err(|e| CliError::contact_file(path.clone(), e))?,
            )
        }
        None => None,
    };

    Ok(ManualPrediction {
        structure: args.structure.as_ref().map(|s| s.trim().to_string()),
        contacts,
    })
}

fn predict_records(
    records: &[SequenceRecord],
    config: &AppConfig,
    manual: &ManualPrediction,
    quiet: bool,
) -> Result<Vec<RecordOutcome>> {
    let progress = CliProgressHandler::new(records.len() as u64, quiet);
    info!("Building prediction reports for {} record(s).", records.len());

    let outcomes = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| {
            let outcome = predict_record(index as u64, record, config, manual, &progress);
            progress.record_finished();
            outcome
        })
        .collect::<Result<Vec<_>>>();

    progress.finish();
    outcomes
}

fn predict_record(
    index: u64,
    record: &SequenceRecord,
    config: &AppConfig,
    manual: &ManualPrediction,
    progress: &CliProgressHandler,
) -> Result<RecordOutcome> {
    let mut source = RandomPredictor::from_config(&config.pipeline.generator, index);
    let mut generated = source.predict(&record.sequence);
    debug!(record = %record.name, source = source.name(), "Prediction generated.");

    if let Some(structure) = &manual.structure {
        generated.structure = structure.clone();
    }
    if let Some(contacts) = &manual.contacts {
        generated.contacts = contacts.clone();
    }
    let contacts = generated.contacts.clone();

    let input = PredictionInput::from_generated(
        Some(record.name.clone()),
        record.sequence.as_str(),
        generated,
    );
    let mut analyzer = DynSequenceAnalyzer::from_config(&config.pipeline.analysis, index);
    let reporter = ProgressReporter::with_callback(progress.callback_for(&record.name));

    let report = predict::run(input, &config.pipeline, &mut analyzer, &reporter)?;
    Ok(RecordOutcome { report, contacts })
}

fn output_stem(name: &str, index: usize, numbered: bool) -> String {
    let slug = slugify(name);
    if numbered {
        format!("{:03}-{}", index + 1, slug)
    } else {
        slug
    }
}

fn create(path: PathBuf) -> Result<BufWriter<File>> {
    debug!("Writing {:?}", path);
    Ok(BufWriter::new(File::create(path)?))
}

fn write_record_files(
    dir: &Path,
    stem: &str,
    outcome: &RecordOutcome,
    config: &AppConfig,
) -> Result<()> {
    let report = &outcome.report;

    let mut json = create(dir.join(format!("{stem}.json")))?;
    serde_json::to_writer_pretty(&mut json, report).map_err(anyhow::Error::from)?;
    json.flush()?;

    let mut topology = create(dir.join(format!("{stem}-topology.svg")))?;
    svg::write_topology(&report.layout, &TopologyStyle::default(), &mut topology)?;
    topology.flush()?;

    let mut ribbon = create(dir.join(format!("{stem}-ribbon.svg")))?;
    svg::write_ribbon(
        &report.ribbon,
        config.ribbon_width,
        config.ribbon_height,
        &mut ribbon,
    )?;
    ribbon.flush()?;

    let mut contact_map = create(dir.join(format!("{stem}-contacts.svg")))?;
    svg::write_contact_map(
        &report.contact_map,
        config.pipeline.raster.canvas_size,
        &mut contact_map,
    )?;
    contact_map.flush()?;

    let csv = create(dir.join(format!("{stem}-contacts.csv")))?;
    write_contact_matrix(&outcome.contacts, csv).map_err(anyhow::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PipelineOverrides;
    use tempfile::tempdir;

    fn args(input: PathBuf) -> PredictArgs {
        PredictArgs {
            input,
            output: None,
            config: None,
            structure: None,
            contacts: None,
            format: OutputFormat::Json,
            overrides: PipelineOverrides {
                seed: Some(42),
                ..Default::default()
            },
            set_values: Vec::new(),
        }
    }

    #[test]
    fn writes_every_artifact_per_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.fasta");
        fs::write(&input, ">alpha\nMKTAYIAKQR\n>beta\nGGSGG\n").unwrap();
        let out_dir = dir.path().join("out");

        let mut predict_args = args(input);
        predict_args.output = Some(out_dir.clone());
        run(predict_args, true).unwrap();

        for stem in ["001-alpha", "002-beta"] {
            for suffix in [".json", "-topology.svg", "-ribbon.svg", "-contacts.svg", "-contacts.csv"] {
                let path = out_dir.join(format!("{stem}{suffix}"));
                assert!(path.exists(), "missing {:?}", path);
            }
        }
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out_dir.join("001-alpha.json")).unwrap())
                .unwrap();
        assert_eq!(json["proteinName"], "alpha");
        assert_eq!(json["sequence"], "MKTAYIAKQR");
        assert_eq!(json["structure"].as_str().unwrap().len(), 10);
    }

    #[test]
    fn manual_structure_and_contacts_replace_generated_ones() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("one.fasta");
        fs::write(&input, ">demo\nMKTA\n").unwrap();
        let contacts = dir.path().join("contacts.csv");
        fs::write(&contacts, "0,0,0,1\n0,0,0,0\n0,0,0,0\n1,0,0,0\n").unwrap();
        let out_dir = dir.path().join("out");

        let mut predict_args = args(input);
        predict_args.structure = Some("HHEE".to_string());
        predict_args.contacts = Some(contacts);
        predict_args.output = Some(out_dir.clone());
        run(predict_args, true).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out_dir.join("demo.json")).unwrap()).unwrap();
        assert_eq!(json["structure"], "HHEE");
        assert_eq!(json["segments"][0]["label"], "H1");
        assert_eq!(
            fs::read_to_string(out_dir.join("demo-contacts.csv")).unwrap(),
            "0,0,0,1\n0,0,0,0\n0,0,0,0\n1,0,0,0\n"
        );
    }

    #[test]
    fn manual_structure_with_wrong_length_fails_validation() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("one.fasta");
        fs::write(&input, ">demo\nMKTA\n").unwrap();

        let mut predict_args = args(input);
        predict_args.structure = Some("HH".to_string());
        assert!(matches!(
            run(predict_args, true),
            Err(CliError::BetaFoldCore(_))
        ));
    }

    #[test]
    fn manual_structure_requires_a_single_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("two.fasta");
        fs::write(&input, ">a\nMK\n>b\nTA\n").unwrap();

        let mut predict_args = args(input);
        predict_args.structure = Some("HH".to_string());
        assert!(matches!(run(predict_args, true), Err(CliError::Argument(_))));
    }

    #[test]
    fn empty_input_is_an_argument_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.fasta");
        fs::write(&input, "\n").unwrap();
        assert!(matches!(run(args(input), true), Err(CliError::Argument(_))));
    }

    #[test]
    fn same_seed_gives_identical_reports() {
        let record = SequenceRecord {
            name: "demo".to_string(),
            sequence: betafold::core::models::sequence::Sequence::clean("MKTAYIAKQRQISFVKSHFSRQ"),
        };
        let config = build_config(
            &PipelineOverrides {
                seed: Some(3),
                ..Default::default()
            },
            None,
            &[],
        )
        .unwrap();
        let progress = CliProgressHandler::new(2, true);
        let first =
            predict_record(0, &record, &config, &ManualPrediction::default(), &progress).unwrap();
        let second =
            predict_record(0, &record, &config, &ManualPrediction::default(), &progress).unwrap();
        assert_eq!(first.report, second.report);
        assert_eq!(first.contacts, second.contacts);
    }

    #[test]
    fn output_stems_are_numbered_only_for_multiple_records() {
        assert_eq!(output_stem("Demo Protein", 0, false), "demo-protein");
        assert_eq!(output_stem("Demo Protein", 4, true), "005-demo-protein");
    }
}
