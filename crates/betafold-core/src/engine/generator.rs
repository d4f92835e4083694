use super::config::GeneratorConfig;
use crate::core::models::contact::ContactMatrix;
use crate::core::models::sequence::Sequence;
use crate::core::models::structure::SecondaryStructure;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Labels, contacts and an overall confidence produced for one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPrediction {
    pub structure: String,
    pub contacts: ContactMatrix,
    pub confidence: f64,
}

/// Anything that can supply a structure prediction for a cleaned sequence.
pub trait PredictionSource {
    fn name(&self) -> &str;

    fn predict(&mut self, sequence: &Sequence) -> GeneratedPrediction;
}

impl<T: PredictionSource + ?Sized> PredictionSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn predict(&mut self, sequence: &Sequence) -> GeneratedPrediction {
        (**self).predict(sequence)
    }
}

/// Placeholder source: uniform labels, a symmetric random contact matrix and a uniform confidence.
#[derive(Debug, Clone)]
pub struct RandomPredictor<R> {
    rng: R,
    contact_density: f64,
    min_confidence: f64,
    max_confidence: f64,
}

impl<R: Rng> RandomPredictor<R> {
    pub fn new(rng: R, config: &GeneratorConfig) -> Self {
        Self {
            rng,
            contact_density: config.contact_density.clamp(0.0, 1.0),
            min_confidence: config.min_confidence,
            max_confidence: config.max_confidence,
        }
    }

    fn structure(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| SecondaryStructure::ALL[self.rng.gen_range(0..3)].code())
            .collect()
    }

    fn contacts(&mut self, len: usize) -> ContactMatrix {
        let mut matrix = ContactMatrix::new(len);
        for row in 0..len {
            for col in (row + 1)..len {
                if self.rng.gen_bool(self.contact_density) {
                    matrix.set(row, col, true);
                    matrix.set(col, row, true);
                }
            }
        }
        matrix
    }

    fn confidence(&mut self) -> f64 {
        let raw = if self.min_confidence < self.max_confidence {
            self.rng.gen_range(self.min_confidence..self.max_confidence)
        } else {
            self.min_confidence
        };
        (raw * 10.0).round() / 10.0
    }
}

impl RandomPredictor<StdRng> {
    /// Seeds from `config.seed` offset by `stream`, or from entropy when no seed is set.
    pub fn from_config(config: &GeneratorConfig, stream: u64) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, config)
    }
}

impl<R: Rng> PredictionSource for RandomPredictor<R> {
    fn name(&self) -> &str {
        "random"
    }

    fn predict(&mut self, sequence: &Sequence) -> GeneratedPrediction {
        let len = sequence.len();
        let structure = self.structure(len);
        let contacts = self.contacts(len);
        let confidence = self.confidence();
        debug!(
            len,
            contacts = contacts.contact_count(),
            confidence,
            "Generated placeholder prediction."
        );
        GeneratedPrediction {
            structure,
            contacts,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> RandomPredictor<StdRng> {
        RandomPredictor::from_config(
            &GeneratorConfig {
                seed: Some(seed),
                ..GeneratorConfig::default()
            },
            0,
        )
    }

    #[test]
    fn structure_matches_sequence_length_and_alphabet() {
        let sequence = Sequence::clean("MKTAYIAKQRQISFVKSHFSRQ");
        let prediction = seeded(1).predict(&sequence);
        assert_eq!(prediction.structure.len(), sequence.len());
        assert!(prediction.structure.chars().all(|c| "HEC".contains(c)));
        assert_eq!(prediction.contacts.size(), sequence.len());
    }

    #[test]
    fn contacts_are_symmetric_with_an_empty_diagonal() {
        let mut predictor = RandomPredictor::new(
            StdRng::seed_from_u64(4),
            &GeneratorConfig {
                contact_density: 0.5,
                ..GeneratorConfig::default()
            },
        );
        let contacts = predictor.predict(&Sequence::clean(&"A".repeat(25))).contacts;
        assert!(contacts.contact_count() > 0);
        for (row, col) in contacts.contacts() {
            assert_ne!(row, col);
            assert_eq!(contacts.get(col, row), Some(true));
        }
    }

    #[test]
    fn confidence_is_in_range_with_one_decimal() {
        let mut predictor = seeded(7);
        let sequence = Sequence::clean("ACDE");
        for _ in 0..100 {
            let confidence = predictor.predict(&sequence).confidence;
            assert!((60.0..=99.9).contains(&confidence));
            assert!(((confidence * 10.0).round() - confidence * 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn same_seed_and_stream_reproduce_the_prediction() {
        let sequence = Sequence::clean("MKWVTFISLL");
        assert_eq!(seeded(42).predict(&sequence), seeded(42).predict(&sequence));
    }

    #[test]
    fn zero_density_produces_no_contacts() {
        let mut predictor = RandomPredictor::new(
            StdRng::seed_from_u64(0),
            &GeneratorConfig {
                contact_density: 0.0,
                ..GeneratorConfig::default()
            },
        );
        let prediction = predictor.predict(&Sequence::clean(&"G".repeat(40)));
        assert_eq!(prediction.contacts.contact_count(), 0);
    }

    #[test]
    fn empty_sequence_yields_empty_prediction() {
        let prediction = seeded(3).predict(&Sequence::default());
        assert!(prediction.structure.is_empty());
        assert!(prediction.contacts.is_empty());
    }
}
