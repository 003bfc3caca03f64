use rand::Rng;

use crate::error::{Error, Result};

/// Row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
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

    /// Uniform samples in [-1, 1).
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for row in res.data.iter_mut() {
            for value in row.iter_mut() {
                *value = rng.gen_range(-1.0..1.0);
            }
        }

        res
    }

    /// Builds a matrix from rows. All rows must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(Error::shape("matrix row", cols, bad.len()));
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// Checks that `data` really is `rows` rows of `cols` values each.
    pub fn check_shape(&self) -> Result<()> {
        if self.data.len() != self.rows {
            return Err(Error::shape("matrix rows", self.rows, self.data.len()));
        }
        if let Some(bad) = self.data.iter().find(|row| row.len() != self.cols) {
            return Err(Error::shape("matrix row", self.cols, bad.len()));
        }
        Ok(())
    }

    /// `self * v`, where `v` has `cols` entries.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        if v.len() != self.cols {
            return Err(Error::shape("matrix-vector product", self.cols, v.len()));
        }

        Ok(self.data.iter()
            .map(|row| row.iter().zip(v).map(|(w, x)| w * x).sum())
            .collect())
    }

    /// `selfᵀ * v`, where `v` has `rows` entries.
    pub fn transpose_mul_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        if v.len() != self.rows {
            return Err(Error::shape("transposed matrix-vector product", self.rows, v.len()));
        }

        let mut res = vec![0.0; self.cols];
        for (row, &scale) in self.data.iter().zip(v) {
            for (acc, w) in res.iter_mut().zip(row) {
                *acc += scale * w;
            }
        }

        Ok(res)
    }

    /// In-place rank-1 update: `self[j][i] -= rate * col[j] * row[i]`.
    pub fn sub_scaled_outer(&mut self, rate: f64, col: &[f64], row: &[f64]) -> Result<()> {
        if col.len() != self.rows {
            return Err(Error::shape("outer product column", self.rows, col.len()));
        }
        if row.len() != self.cols {
            return Err(Error::shape("outer product row", self.cols, row.len()));
        }

        for (weights, &c) in self.data.iter_mut().zip(col) {
            for (w, &r) in weights.iter_mut().zip(row) {
                *w -= rate * c * r;
            }
        }

        Ok(())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
