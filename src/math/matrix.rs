use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};

/// Row-major dense matrix. Used for weight matrices handed to
/// `NeuralNetwork::add_layer`, one row per neuron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples every entry independently from U[-1, 1).
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    /// Wraps nested rows, rejecting ragged input.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, Vec::len);
        for (i, row) in data.iter().enumerate() {
            NetError::check_len(&format!("matrix row {i}"), cols, row.len())?;
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = NetError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Matrix> {
        Matrix::from_data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_entries_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(4, 3, &mut rng);
        assert_eq!(m.shape(), (4, 3));
        assert!(m.data.iter().flatten().all(|&w| (-1.0..1.0).contains(&w)));
    }

    #[test]
    fn same_seed_same_matrix() {
        let a = Matrix::random(2, 5, &mut StdRng::seed_from_u64(42));
        let b = Matrix::random(2, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, NetError::dimension("matrix row 1", 2, 1));
    }

    #[test]
    fn empty_matrix_has_no_columns() {
        let m = Matrix::from_data(vec![]).unwrap();
        assert_eq!(m.shape(), (0, 0));
    }
}
