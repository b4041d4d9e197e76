use rand::Rng;
use rand_distr::StandardNormal;
use std::ops::{Add, Mul, Sub};

/// Dense row-major matrix. Column vectors are `n × 1` matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills a `rows × cols` matrix with independent draws from N(0, 1).
    pub fn standard_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.sample(StandardNormal);
            }
        }

        res
    }

    /// Builds an `n × 1` column vector.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix {
            rows: values.len(),
            cols: 1,
            data: values.iter().map(|&v| vec![v]).collect(),
        }
    }

    /// Stacks equally long slices as the columns of a `len × count` matrix.
    /// Callers are expected to have checked the lengths.
    pub fn from_columns<'a, I>(rows: usize, columns: I) -> Matrix
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let columns: Vec<&[f64]> = columns.into_iter().collect();
        let mut res = Matrix::zeros(rows, columns.len());

        for (j, col) in columns.iter().enumerate() {
            assert_eq!(col.len(), rows, "column {} has length {}, expected {}", j, col.len(), rows);
            for i in 0..rows {
                res.data[i][j] = col[i];
            }
        }

        res
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Copies column `j` out as a plain vector.
    pub fn col(&self, j: usize) -> Vec<f64> {
        self.data.iter().map(|row| row[j]).collect()
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.shape(), rhs.shape(), "Matrices are of incorrect sizes");
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect())
                .collect(),
        }
    }

    /// Adds the `rows × 1` vector `column` to every column of `self`.
    pub fn add_broadcast(&self, column: &Matrix) -> Matrix {
        assert!(
            column.cols == 1 && column.rows == self.rows,
            "Matrices are of incorrect sizes"
        );
        let mut res = self.clone();

        for i in 0..res.rows {
            let b = column.data[i][0];
            for x in res.data[i].iter_mut() {
                *x += b;
            }
        }

        res
    }

    /// Sums each row, collapsing a `rows × m` matrix into a `rows × 1` column.
    pub fn sum_columns(&self) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: 1,
            data: self.data.iter().map(|row| vec![row.iter().sum::<f64>()]).collect(),
        }
    }

    /// In-place `self -= factor * rhs`.
    pub fn sub_scaled(&mut self, rhs: &Matrix, factor: f64) {
        assert_eq!(self.shape(), rhs.shape(), "Matrices are of incorrect sizes");

        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, r) in row.iter_mut().zip(rhs_row.iter()) {
                *x -= factor * r;
            }
        }
    }

    /// In-place element-wise `self += rhs`.
    pub fn add_assign(&mut self, rhs: &Matrix) {
        assert_eq!(self.shape(), rhs.shape(), "Matrices are of incorrect sizes");

        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data.iter()) {
            for (x, r) in row.iter_mut().zip(rhs_row.iter()) {
                *x += r;
            }
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}
