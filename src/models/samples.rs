//! Random-access views over sampled data.
//!
//! The discrete quadrature rules only need two things from their inputs: a
//! length and indexed element access. [`Samples`] captures that for 1D data
//! and [`Grid`] for 2D data, so vectors, slices, arrays and index closures
//! can all be integrated without copying.

use std::marker::PhantomData;

/// A finite sequence of values that can be read by index
pub trait Samples<T> {
    /// Number of samples
    fn len(&self) -> usize;

    /// Sample at index `i`; `i` must be less than `len()`
    fn at(&self, i: usize) -> T;

    /// True if there are no samples
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy> Samples<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy> Samples<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy, const N: usize> Samples<T> for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T, S: Samples<T> + ?Sized> Samples<T> for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, i: usize) -> T {
        (**self).at(i)
    }
}

/// A closure paired with a length, usable anywhere a sample sequence is
///
/// ```
/// use integrate::models::samples::{IndexFn, Samples};
///
/// let x = IndexFn::new(100, |i| 0.1 * i as f64);
/// assert_eq!(x.len(), 100);
/// assert!((x.at(99) - 9.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IndexFn<F> {
    len: usize,
    f: F,
}

impl<F> IndexFn<F> {
    pub fn new<T>(len: usize, f: F) -> Self
    where
        F: Fn(usize) -> T,
    {
        Self { len, f }
    }
}

impl<T, F: Fn(usize) -> T> Samples<T> for IndexFn<F> {
    fn len(&self) -> usize {
        self.len
    }

    fn at(&self, i: usize) -> T {
        (self.f)(i)
    }
}

/// A rectangular 2D array of values indexed as `(i, j)`, `i` along x and `j` along y
pub trait Grid<T> {
    /// Size along the first (x) index
    fn rows(&self) -> usize;

    /// Size along the second (y) index
    fn cols(&self) -> usize;

    /// Value at `(i, j)`
    fn at(&self, i: usize, j: usize) -> T;

    /// Length of row `i`, for containers that can be ragged
    fn row_len(&self, _i: usize) -> usize {
        self.cols()
    }

    /// Row `i` viewed as a 1D sample sequence along y
    fn row(&self, i: usize) -> Row<'_, T, Self> {
        Row::new(self, i)
    }
}

impl<T: Copy> Grid<T> for [Vec<T>] {
    fn rows(&self) -> usize {
        self.len()
    }

    fn cols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn at(&self, i: usize, j: usize) -> T {
        self[i][j]
    }

    fn row_len(&self, i: usize) -> usize {
        self[i].len()
    }
}

impl<T: Copy> Grid<T> for Vec<Vec<T>> {
    fn rows(&self) -> usize {
        self.as_slice().rows()
    }

    fn cols(&self) -> usize {
        self.as_slice().cols()
    }

    fn at(&self, i: usize, j: usize) -> T {
        self[i][j]
    }

    fn row_len(&self, i: usize) -> usize {
        self[i].len()
    }
}

/// One row of a [`Grid`]
#[derive(Debug)]
pub struct Row<'a, T, G: ?Sized> {
    grid: &'a G,
    i: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T, G: ?Sized> Row<'a, T, G> {
    pub const fn new(grid: &'a G, i: usize) -> Self {
        Self {
            grid,
            i,
            _marker: PhantomData,
        }
    }
}

impl<T, G: Grid<T> + ?Sized> Samples<T> for Row<'_, T, G> {
    fn len(&self) -> usize {
        self.grid.row_len(self.i)
    }

    fn at(&self, j: usize) -> T {
        self.grid.at(self.i, j)
    }
}

/// A closure of two indices with explicit dimensions
#[derive(Debug, Clone, Copy)]
pub struct GridFn<F> {
    rows: usize,
    cols: usize,
    f: F,
}

impl<F> GridFn<F> {
    pub fn new<T>(rows: usize, cols: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> T,
    {
        Self { rows, cols, f }
    }
}

impl<T, F: Fn(usize, usize) -> T> Grid<T> for GridFn<F> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn at(&self, i: usize, j: usize) -> T {
        (self.f)(i, j)
    }
}
