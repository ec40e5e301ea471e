//! Pivot of grid records into leg-length × frequency matrices.

use std::cmp::Ordering;

use crate::{GridRecord, ResultsError, ResultsResult, same_axis_value};

/// Metrics of one populated cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCell {
    pub speed:    f64,
    pub cot:      f64,
    pub distance: f64,
}

/// Sweep results pivoted onto a grid.
///
/// `cells[row][col]` holds leg length `leg_lengths[row]` at frequency
/// `frequencies[col]`.  Both axes are ascending, so the first row is the
/// shortest leg.  Combinations missing from the input are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub leg_lengths: Vec<f64>,
    pub frequencies: Vec<f64>,
    pub cells:       Vec<Vec<Option<HeatCell>>>,
}

impl Heatmap {
    /// Pivot `records`.  Two records for the same (leg length, frequency)
    /// are an error.
    pub fn from_records(records: &[GridRecord]) -> ResultsResult<Self> {
        if records.is_empty() {
            return Err(ResultsError::Empty);
        }

        let leg_lengths = axis(records.iter().map(|r| r.leg_length));
        let frequencies = axis(records.iter().map(|r| r.frequency));
        let mut cells = vec![vec![None; frequencies.len()]; leg_lengths.len()];

        for r in records {
            // Both lookups succeed: the axes were built from these records.
            let (Some(row), Some(col)) = (index_of(&leg_lengths, r.leg_length), index_of(&frequencies, r.frequency))
            else {
                continue;
            };
            let slot = &mut cells[row][col];
            if slot.is_some() {
                return Err(ResultsError::DuplicateCell { leg_length: r.leg_length, frequency: r.frequency });
            }
            *slot = Some(HeatCell { speed: r.speed, cot: r.cot, distance: r.distance });
        }

        Ok(Self { leg_lengths, frequencies, cells })
    }

    pub fn rows(&self) -> usize {
        self.leg_lengths.len()
    }

    pub fn cols(&self) -> usize {
        self.frequencies.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<HeatCell> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Cell at the given axis values, if present.
    pub fn lookup(&self, leg_length: f64, frequency: f64) -> Option<HeatCell> {
        self.get(index_of(&self.leg_lengths, leg_length)?, index_of(&self.frequencies, frequency)?)
    }

    /// Speed matrix, row-major; the matrix plotted on the heatmap.
    pub fn speed_matrix(&self) -> Vec<Vec<Option<f64>>> {
        self.project(|c| c.speed)
    }

    pub fn cot_matrix(&self) -> Vec<Vec<Option<f64>>> {
        self.project(|c| c.cot)
    }

    pub fn distance_matrix(&self) -> Vec<Vec<Option<f64>>> {
        self.project(|c| c.distance)
    }

    /// Fastest populated cell as `(leg_length, frequency, cell)`.
    pub fn fastest(&self) -> Option<(f64, f64, HeatCell)> {
        let mut best: Option<(f64, f64, HeatCell)> = None;
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(cell) = *cell else { continue };
                if best.is_none_or(|(_, _, b)| cell.speed > b.speed) {
                    best = Some((self.leg_lengths[row], self.frequencies[col], cell));
                }
            }
        }
        best
    }

    fn project(&self, f: impl Fn(&HeatCell) -> f64) -> Vec<Vec<Option<f64>>> {
        self.cells.iter().map(|row| row.iter().map(|c| c.as_ref().map(&f)).collect()).collect()
    }
}

/// Sorted, deduplicated axis values.
fn axis(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    v.dedup_by(|a, b| same_axis_value(*a, *b));
    v
}

fn index_of(axis: &[f64], value: f64) -> Option<usize> {
    axis.iter().position(|&a| same_axis_value(a, value))
}
