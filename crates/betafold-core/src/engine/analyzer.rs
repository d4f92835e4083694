use super::config::{AnalysisConfig, IsoelectricModel};
use crate::core::models::analysis::{
    Analysis, AnalysisSummary, DataQualityWarning, DomainAnnotation,
};
use crate::core::models::sequence::Sequence;
use crate::core::utils::residues::{
    PKA_C_TERMINUS, PKA_N_TERMINUS, WATER_MASS, acidic_pka, average_mass, basic_pka,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::{debug, instrument, warn};

/// Strategy producing an isoelectric point estimate for a sequence.
pub trait IsoelectricPointEstimator {
    fn name(&self) -> &str {
        "custom"
    }

    fn estimate(&mut self, sequence: &Sequence) -> f64;
}

/// Strategy producing domain annotations for a sequence.
///
/// [`SequenceAnalyzer`] only consults it for non-empty sequences.
pub trait DomainAnnotator {
    fn name(&self) -> &str {
        "custom"
    }

    fn annotate(&mut self, sequence: &Sequence) -> Vec<DomainAnnotation>;
}

impl<T: IsoelectricPointEstimator + ?Sized> IsoelectricPointEstimator for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn estimate(&mut self, sequence: &Sequence) -> f64 {
        (**self).estimate(sequence)
    }
}

impl<T: DomainAnnotator + ?Sized> DomainAnnotator for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn annotate(&mut self, sequence: &Sequence) -> Vec<DomainAnnotation> {
        (**self).annotate(sequence)
    }
}

struct FnEstimator<F>(F);

impl<F: FnMut(&Sequence) -> f64> IsoelectricPointEstimator for FnEstimator<F> {
    fn estimate(&mut self, sequence: &Sequence) -> f64 {
        (self.0)(sequence)
    }
}

struct FnAnnotator<F>(F);

impl<F: FnMut(&Sequence) -> Vec<DomainAnnotation>> DomainAnnotator for FnAnnotator<F> {
    fn annotate(&mut self, sequence: &Sequence) -> Vec<DomainAnnotation> {
        (self.0)(sequence)
    }
}

/// Wraps a closure as an [`IsoelectricPointEstimator`].
pub fn estimator_fn<F>(f: F) -> impl IsoelectricPointEstimator
where
    F: FnMut(&Sequence) -> f64,
{
    FnEstimator(f)
}

/// Wraps a closure as a [`DomainAnnotator`].
pub fn annotator_fn<F>(f: F) -> impl DomainAnnotator
where
    F: FnMut(&Sequence) -> Vec<DomainAnnotation>,
{
    FnAnnotator(f)
}

/// Placeholder estimator drawing the isoelectric point uniformly from a bounded range.
#[derive(Debug, Clone)]
pub struct RandomIsoelectricPoint<R> {
    rng: R,
    range: Range<f64>,
}

impl<R: Rng> RandomIsoelectricPoint<R> {
    pub fn new(rng: R, range: Range<f64>) -> Self {
        Self { rng, range }
    }
}

impl<R: Rng> IsoelectricPointEstimator for RandomIsoelectricPoint<R> {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn estimate(&mut self, _sequence: &Sequence) -> f64 {
        self.rng.gen_range(self.range.clone())
    }
}

/// Isoelectric point from Henderson-Hasselbalch net charge, found by bisection over pH 0-14.
///
/// Symbols without an ionizable side chain (including unrecognized ones) only contribute
/// through the termini.
#[derive(Debug, Clone, Copy, Default)]
pub struct HendersonHasselbalch;

impl HendersonHasselbalch {
    const MAX_ITERATIONS: usize = 100;
    const CHARGE_TOLERANCE: f64 = 0.001;

    pub fn net_charge(sequence: &Sequence, ph: f64) -> f64 {
        let positive = |pka: f64| 1.0 / (1.0 + 10_f64.powf(ph - pka));
        let negative = |pka: f64| 1.0 / (1.0 + 10_f64.powf(pka - ph));

        let mut charge = positive(PKA_N_TERMINUS) - negative(PKA_C_TERMINUS);
        for symbol in sequence.residues() {
            if let Some(pka) = acidic_pka(symbol) {
                charge -= negative(pka);
            } else if let Some(pka) = basic_pka(symbol) {
                charge += positive(pka);
            }
        }
        charge
    }
}

impl IsoelectricPointEstimator for HendersonHasselbalch {
    fn name(&self) -> &str {
        "titration"
    }

    fn estimate(&mut self, sequence: &Sequence) -> f64 {
        let (mut lo, mut hi) = (0.0_f64, 14.0_f64);
        for _ in 0..Self::MAX_ITERATIONS {
            let mid = (lo + hi) / 2.0;
            let charge = Self::net_charge(sequence, mid);
            if charge.abs() < Self::CHARGE_TOLERANCE {
                return mid;
            }
            if charge > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }
}

/// A domain placed at fixed fractions of the sequence length.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainWindow {
    pub label: String,
    pub start_fraction: f64,
    pub end_fraction: f64,
    pub confidence: Range<f64>,
}

/// Placeholder annotator: fixed-fraction domain spans with random confidences.
#[derive(Debug, Clone)]
pub struct FractionalDomains<R> {
    rng: R,
    windows: Vec<DomainWindow>,
}

impl<R: Rng> FractionalDomains<R> {
    pub fn new(rng: R) -> Self {
        Self::with_windows(rng, Self::default_windows())
    }

    pub fn with_windows(rng: R, windows: Vec<DomainWindow>) -> Self {
        Self { rng, windows }
    }

    pub fn default_windows() -> Vec<DomainWindow> {
        vec![
            DomainWindow {
                label: "Domain 1".to_string(),
                start_fraction: 0.10,
                end_fraction: 0.40,
                confidence: 80.0..100.0,
            },
            DomainWindow {
                label: "Domain 2".to_string(),
                start_fraction: 0.55,
                end_fraction: 0.72,
                confidence: 95.0..100.0,
            },
        ]
    }
}

impl<R: Rng> DomainAnnotator for FractionalDomains<R> {
    fn name(&self) -> &str {
        "fractional"
    }

    fn annotate(&mut self, sequence: &Sequence) -> Vec<DomainAnnotation> {
        let len = sequence.len();
        if len == 0 {
            return Vec::new();
        }
        let at = |fraction: f64| (len as f64 * fraction).floor() as usize;
        self.windows
            .iter()
            .map(|window| {
                let start_residue = (at(window.start_fraction) + 1).min(len);
                let end_residue = at(window.end_fraction).clamp(start_residue, len);
                DomainAnnotation {
                    label: window.label.clone(),
                    start_residue,
                    end_residue,
                    confidence_percent: sample_open(&mut self.rng, &window.confidence),
                }
            })
            .collect()
    }
}

/// Draws from the open interval `(start, end)`; an empty range yields `start`.
fn sample_open(rng: &mut impl Rng, range: &Range<f64>) -> f64 {
    if !(range.start < range.end) {
        return range.start;
    }
    loop {
        let value = rng.gen_range(range.clone());
        if value > range.start {
            return value;
        }
    }
}

/// Sums average residue masses plus one water, in kilodaltons.
///
/// Unrecognized symbols add no mass and are returned as warnings with 1-based positions.
pub fn molecular_weight(sequence: &Sequence) -> (f64, Vec<DataQualityWarning>) {
    let mut daltons = WATER_MASS;
    let mut warnings = Vec::new();
    for (index, symbol) in sequence.residues().enumerate() {
        match average_mass(symbol) {
            Some(mass) => daltons += mass,
            None => warnings.push(DataQualityWarning::UnrecognizedResidue {
                symbol,
                position: index + 1,
            }),
        }
    }
    (daltons / 1000.0, warnings)
}

pub type DynSequenceAnalyzer =
    SequenceAnalyzer<Box<dyn IsoelectricPointEstimator + Send>, Box<dyn DomainAnnotator + Send>>;

/// Computes [`AnalysisSummary`] values with swappable estimation strategies.
pub struct SequenceAnalyzer<I, D> {
    isoelectric: I,
    domains: D,
}

impl<I: IsoelectricPointEstimator, D: DomainAnnotator> SequenceAnalyzer<I, D> {
    pub fn new(isoelectric: I, domains: D) -> Self {
        Self {
            isoelectric,
            domains,
        }
    }

    #[instrument(skip_all, name = "sequence_analysis", fields(len = sequence.len()))]
    pub fn analyze(&mut self, sequence: &Sequence) -> Analysis {
        let (molecular_weight_kda, warnings) = molecular_weight(sequence);
        for warning in &warnings {
            warn!("{}", warning);
        }

        let isoelectric_point = self.isoelectric.estimate(sequence);
        let domains = if sequence.is_empty() {
            Vec::new()
        } else {
            self.domains.annotate(sequence)
        };
        debug!(
            estimator = self.isoelectric.name(),
            annotator = self.domains.name(),
            molecular_weight_kda,
            isoelectric_point,
            domains = domains.len(),
            "Sequence analysis complete."
        );

        Analysis {
            summary: AnalysisSummary {
                molecular_weight_kda,
                isoelectric_point,
                domains,
            },
            warnings,
        }
    }
}

impl DynSequenceAnalyzer {
    /// Builds the analyzer selected by `config`.
    ///
    /// `stream` is mixed into the seed so independent inputs get independent random streams.
    pub fn from_config(config: &AnalysisConfig, stream: u64) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_entropy(),
        };
        let domain_rng = StdRng::seed_from_u64(rng.gen_range(0..u64::MAX));

        let isoelectric: Box<dyn IsoelectricPointEstimator + Send> =
            match config.isoelectric_model {
                IsoelectricModel::Heuristic { min, max } => {
                    Box::new(RandomIsoelectricPoint::new(rng, min..max))
                }
                IsoelectricModel::Titration => Box::new(HendersonHasselbalch),
            };
        SequenceAnalyzer::new(isoelectric, Box::new(FractionalDomains::new(domain_rng)))
    }
}
