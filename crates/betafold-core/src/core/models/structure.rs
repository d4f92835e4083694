use super::validation::ValidationError;
use serde::Serialize;
use std::fmt;

/// Per-residue secondary structure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SecondaryStructure {
    #[serde(rename = "H")]
    Helix,
    #[serde(rename = "E")]
    Sheet,
    #[serde(rename = "C")]
    Coil,
}

impl SecondaryStructure {
    pub const ALL: [Self; 3] = [Self::Helix, Self::Sheet, Self::Coil];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(Self::Helix),
            'E' => Some(Self::Sheet),
            'C' => Some(Self::Coil),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Helix => 'H',
            Self::Sheet => 'E',
            Self::Coil => 'C',
        }
    }

    /// Letter used when naming segments of this kind.
    ///
    /// Coil segments are named with `L` (loop) while their code stays `C`.
    pub fn label_prefix(self) -> char {
        match self {
            Self::Helix => 'H',
            Self::Sheet => 'E',
            Self::Coil => 'L',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Helix => 0,
            Self::Sheet => 1,
            Self::Coil => 2,
        }
    }
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parses a label string over the closed H/E/C alphabet.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownStructureSymbol`] for the first symbol outside the alphabet.
pub fn parse_labels(labels: &str) -> Result<Vec<SecondaryStructure>, ValidationError> {
    labels
        .chars()
        .enumerate()
        .map(|(index, symbol)| {
            SecondaryStructure::from_code(symbol).ok_or(ValidationError::UnknownStructureSymbol {
                symbol,
                position: index + 1,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_closed_alphabet() {
        assert_eq!(
            SecondaryStructure::from_code('H'),
            Some(SecondaryStructure::Helix)
        );
        assert_eq!(
            SecondaryStructure::from_code('E'),
            Some(SecondaryStructure::Sheet)
        );
        assert_eq!(
            SecondaryStructure::from_code('C'),
            Some(SecondaryStructure::Coil)
        );
    }

    #[test]
    fn from_code_rejects_other_symbols() {
        assert!(SecondaryStructure::from_code('h').is_none());
        assert!(SecondaryStructure::from_code('L').is_none());
        assert!(SecondaryStructure::from_code('-').is_none());
        assert!(SecondaryStructure::from_code(' ').is_none());
    }

    #[test]
    fn code_round_trips_for_every_kind() {
        for kind in SecondaryStructure::ALL {
            assert_eq!(SecondaryStructure::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn coil_uses_loop_prefix_but_keeps_coil_code() {
        assert_eq!(SecondaryStructure::Coil.label_prefix(), 'L');
        assert_eq!(SecondaryStructure::Coil.code(), 'C');
        assert_eq!(SecondaryStructure::Coil.to_string(), "C");
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen = [false; 3];
        for kind in SecondaryStructure::ALL {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
    }

    #[test]
    fn parse_labels_reports_first_unknown_symbol_with_one_based_position() {
        let err = parse_labels("HHEXC?").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownStructureSymbol {
                symbol: 'X',
                position: 4
            }
        );
    }

    #[test]
    fn parse_labels_of_empty_string_is_empty() {
        assert!(parse_labels("").unwrap().is_empty());
    }
}
