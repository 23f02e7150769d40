use rand::Rng;

use crate::error::GenomeError;
use crate::game::{COLS, ROWS};

/// Number of genes in a strategy: one scripted drop per board row.
pub const GENOME_LEN: usize = ROWS;

/// A scripted sequence of intended drops.
///
/// Genes are column indices in `0..COLS`. The value is `Copy`, so crossover
/// and mutation always hand back a fresh genome instead of editing one that
/// another population still holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Genome {
    genes: [usize; GENOME_LEN],
}

impl Genome {
    /// Build a genome from explicit genes, rejecting columns off the board.
    pub fn new(genes: [usize; GENOME_LEN]) -> Result<Self, GenomeError> {
        if let Some((index, &column)) = genes.iter().enumerate().find(|&(_, &c)| c >= COLS) {
            return Err(GenomeError::GeneOutOfRange { index, column });
        }
        Ok(Genome { genes })
    }

    /// Every gene drawn uniformly from `0..COLS`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut genes = [0; GENOME_LEN];
        for gene in &mut genes {
            *gene = rng.random_range(0..COLS);
        }
        Genome { genes }
    }

    pub fn genes(&self) -> &[usize; GENOME_LEN] {
        &self.genes
    }

    /// Column at `index`. Panics if `index >= GENOME_LEN`.
    pub fn gene(&self, index: usize) -> usize {
        self.genes[index]
    }

    /// Copy of this genome with one gene replaced.
    pub(crate) fn with_gene(mut self, index: usize, column: usize) -> Self {
        debug_assert!(column < COLS);
        self.genes[index] = column;
        self
    }

    /// Child with `self` before `point` and `other` from `point` on.
    pub(crate) fn splice(&self, other: &Genome, point: usize) -> Self {
        let point = point.min(GENOME_LEN);
        let mut genes = self.genes;
        genes[point..].copy_from_slice(&other.genes[point..]);
        Genome { genes }
    }
}

impl TryFrom<&[usize]> for Genome {
    type Error = GenomeError;

    fn try_from(genes: &[usize]) -> Result<Self, Self::Error> {
        let genes: [usize; GENOME_LEN] =
            genes.try_into().map_err(|_| GenomeError::WrongLength {
                expected: GENOME_LEN,
                actual: genes.len(),
            })?;
        Genome::new(genes)
    }
}
