use serde::Serialize;
use std::fmt;

/// A cleaned residue sequence.
///
/// Produced from raw FASTA-like text by dropping header lines and header tokens (anything
/// starting with `>`), removing all whitespace, and upper-casing ASCII letters. Symbols outside
/// the standard amino acid alphabet are kept so the analyzer can flag them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    residues: String,
}

impl Sequence {
    pub fn clean(raw: &str) -> Self {
        let mut residues = String::with_capacity(raw.len());
        for line in raw.lines() {
            if line.trim_start().starts_with('>') {
                continue;
            }
            for token in line.split_whitespace() {
                if token.starts_with('>') {
                    continue;
                }
                residues.extend(token.chars().map(|c| c.to_ascii_uppercase()));
            }
        }
        Self { residues }
    }

    pub fn as_str(&self) -> &str {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> impl Iterator<Item = char> + '_ {
        self.residues.chars()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.residues)
    }
}
