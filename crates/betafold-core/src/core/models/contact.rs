use super::validation::ValidationError;
use serde::Serialize;

/// A square boolean grid of predicted residue-residue contacts, stored row-major.
///
/// Symmetry is not enforced: `get(i, j)` and `get(j, i)` are independent cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl ContactMatrix {
    /// Creates an `size`×`size` matrix with no contacts.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonSquareMatrix`] if any row length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ValidationError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ValidationError::NonSquareMatrix {
                    row: index + 1,
                    expected: size,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: bool) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = value;
        }
    }

    /// Iterates `(row, col)` of every true cell in row-major order.
    pub fn contacts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, is_contact)| **is_contact)
            .map(|(index, _)| (index / self.size, index % self.size))
    }

    pub fn contact_count(&self) -> usize {
        self.cells.iter().filter(|is_contact| **is_contact).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size.max(1))
    }
}
