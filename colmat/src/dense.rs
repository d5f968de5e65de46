use alloc::vec;
use alloc::vec::Vec;
use core::mem;
use core::ops::{AddAssign, Index, IndexMut, Mul, MulAssign, SubAssign};

use num_traits::AsPrimitive;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use tracing::instrument;

/// A dense matrix stored in column-major form.
///
/// The buffer holds exactly `rows * cols` elements; element `(row, col)`
/// lives at linear offset `row + col * rows`. Both dimensions are stored
/// explicitly so that zero-dimension matrices still report their nominal
/// shape.
///
/// `Clone` produces an independent deep copy of the buffer. The default
/// value is the 0x0 matrix, which owns no allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColMajorMatrix<T> {
    /// All values, stored in column-major order.
    values: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> ColMajorMatrix<T> {
    /// Constructs a `rows` x `cols` matrix with every element set to `T::default()`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Clone + Default,
    {
        Self {
            values: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Constructs a `rows` x `cols` matrix with every element set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            values: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Adopts an existing column-major buffer without copying it.
    ///
    /// `values.len()` must equal `rows * cols`.
    #[must_use]
    pub fn from_values(values: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self { values, rows, cols }
    }

    /// Constructs a matrix from a column-major slice of another element type.
    ///
    /// Exactly the first `rows * cols` source elements are read, each
    /// converted with `as`-cast semantics; the source must be at least that
    /// long.
    #[must_use]
    pub fn from_column_major_slice<OT>(rows: usize, cols: usize, data: &[OT]) -> Self
    where
        OT: AsPrimitive<T>,
        T: Copy + 'static,
    {
        debug_assert!(data.len() >= rows * cols);
        Self {
            values: data[..rows * cols].iter().map(|v| v.as_()).collect(),
            rows,
            cols,
        }
    }

    /// Constructs a matrix of random elements.
    pub fn rand<R: Rng>(rng: &mut R, rows: usize, cols: usize) -> Self
    where
        StandardUniform: Distribution<T>,
    {
        let values = rng.sample_iter(StandardUniform).take(rows * cols).collect();
        Self { values, rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The raw column-major buffer, of length `rows() * cols()`.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Returns the element at `(row, col)` by value.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T
    where
        T: Clone,
    {
        self[(row, col)].clone()
    }

    /// One column as a contiguous slice.
    pub fn column(&self, c: usize) -> &[T] {
        debug_assert!(c < self.cols);
        &self.values[c * self.rows..(c + 1) * self.rows]
    }

    pub fn column_mut(&mut self, c: usize) -> &mut [T] {
        debug_assert!(c < self.cols);
        &mut self.values[c * self.rows..(c + 1) * self.rows]
    }

    pub fn columns(&self) -> impl Iterator<Item = &[T]> {
        // Not chunks_exact: a zero-row matrix still has `cols` (empty) columns.
        (0..self.cols).map(|c| &self.values[c * self.rows..(c + 1) * self.rows])
    }

    pub fn columns_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        let rows = self.rows;
        let mut rest = self.values.as_mut_slice();
        (0..self.cols).map(move |_| {
            let (head, tail) = mem::take(&mut rest).split_at_mut(rows);
            rest = tail;
            head
        })
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.values.fill(value);
    }

    /// Exchanges dimensions and buffer ownership with `other` in O(1).
    ///
    /// No element is copied or converted.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> ColMajorMatrix<U>
    where
        T: Clone,
    {
        ColMajorMatrix {
            values: self.values.iter().map(|v| f(v.clone())).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Converting copy: every element cast to `U` with `as`-cast semantics.
    #[instrument(level = "debug", skip_all, fields(rows = self.rows, cols = self.cols))]
    pub fn cast<U>(&self) -> ColMajorMatrix<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|v| v.as_())
    }
}

impl<T> Index<(usize, usize)> for ColMajorMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.values[row + col * self.rows]
    }
}

impl<T> IndexMut<(usize, usize)> for ColMajorMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.values[row + col * self.rows]
    }
}

impl<T: Clone + AddAssign> AddAssign<&ColMajorMatrix<T>> for ColMajorMatrix<T> {
    fn add_assign(&mut self, rhs: &ColMajorMatrix<T>) {
        debug_assert_eq!((self.rows, self.cols), (rhs.rows, rhs.cols));
        for (a, b) in self.values.iter_mut().zip(&rhs.values) {
            *a += b.clone();
        }
    }
}

impl<T: AddAssign> AddAssign for ColMajorMatrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        debug_assert_eq!((self.rows, self.cols), (rhs.rows, rhs.cols));
        for (a, b) in self.values.iter_mut().zip(rhs.values) {
            *a += b;
        }
    }
}

impl<T: Clone + SubAssign> SubAssign<&ColMajorMatrix<T>> for ColMajorMatrix<T> {
    fn sub_assign(&mut self, rhs: &ColMajorMatrix<T>) {
        debug_assert_eq!((self.rows, self.cols), (rhs.rows, rhs.cols));
        for (a, b) in self.values.iter_mut().zip(&rhs.values) {
            *a -= b.clone();
        }
    }
}

impl<T: SubAssign> SubAssign for ColMajorMatrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        debug_assert_eq!((self.rows, self.cols), (rhs.rows, rhs.cols));
        for (a, b) in self.values.iter_mut().zip(rhs.values) {
            *a -= b;
        }
    }
}

impl<T: Clone + MulAssign> MulAssign<T> for ColMajorMatrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        for a in &mut self.values {
            *a *= scalar.clone();
        }
    }
}

impl<T: Clone + MulAssign> Mul<T> for ColMajorMatrix<T> {
    type Output = Self;

    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Clone + MulAssign> Mul<T> for &ColMajorMatrix<T> {
    type Output = ColMajorMatrix<T>;

    fn mul(self, scalar: T) -> ColMajorMatrix<T> {
        self.clone() * scalar
    }
}

// `scalar * matrix` cannot be written generically (the scalar is the
// receiver), so it is implemented per primitive numeric type.
macro_rules! left_scalar_mul_impl {
    ($($t:ty),* $(,)?) => {$(
        impl Mul<ColMajorMatrix<$t>> for $t {
            type Output = ColMajorMatrix<$t>;

            fn mul(self, mat: ColMajorMatrix<$t>) -> ColMajorMatrix<$t> {
                mat * self
            }
        }

        impl Mul<&ColMajorMatrix<$t>> for $t {
            type Output = ColMajorMatrix<$t>;

            fn mul(self, mat: &ColMajorMatrix<$t>) -> ColMajorMatrix<$t> {
                mat * self
            }
        }
    )*};
}

left_scalar_mul_impl!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
