//! Dense scalar storage over the `(N+1) x (N+1)` lattice.

use crate::math::Real;

/// One scalar attribute of every cell, boundary ring included.
///
/// Cell `(i, j)` lives at `j * (N + 1) + i`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    size: usize,
    data: Vec<Real>,
}

impl ScalarField {
    pub fn new(size: usize, fill: Real) -> Self {
        assert!(size > 0, "size must be > 0");
        let side = size + 1;
        Self {
            size,
            data: vec![fill; side * side],
        }
    }

    pub fn zeros(size: usize) -> Self {
        Self::new(size, 0.0)
    }

    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> Real) -> Self {
        let mut field = Self::zeros(size);
        field.fill_with_index(f);
        field
    }

    /// N: the largest valid index on either axis.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn side(&self) -> usize {
        self.size + 1
    }

    #[inline(always)]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        assert!(
            i <= self.size,
            "i = {i} is outside the 0..={} lattice",
            self.size
        );
        assert!(
            j <= self.size,
            "j = {j} is outside the 0..={} lattice",
            self.size
        );
        j * (self.size + 1) + i
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> Real {
        self.data[self.idx(i, j)]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: Real) {
        let idx = self.idx(i, j);
        self.data[idx] = value;
    }

    #[inline(always)]
    pub fn add(&mut self, i: usize, j: usize, value: Real) {
        let idx = self.idx(i, j);
        self.data[idx] += value;
    }

    /// Sum of the four orthogonal neighbours of an interior cell.
    #[inline(always)]
    pub fn neighbor_sum(&self, i: usize, j: usize) -> Real {
        self.get(i - 1, j) + self.get(i + 1, j) + self.get(i, j - 1) + self.get(i, j + 1)
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.data
    }

    pub fn fill(&mut self, value: Real) {
        self.data.fill(value);
    }

    pub fn fill_with_index(&mut self, f: impl Fn(usize, usize) -> Real) {
        let side = self.side();
        for (index, value) in self.data.iter_mut().enumerate() {
            *value = f(index % side, index / side);
        }
    }

    pub fn copy_from(&mut self, other: &Self) {
        self.assert_same_size(other);
        self.data.copy_from_slice(&other.data);
    }

    pub fn scale_in_place(&mut self, scale: Real) {
        for value in &mut self.data {
            *value *= scale;
        }
    }

    pub fn sum(&self) -> Real {
        self.data.iter().sum()
    }

    pub fn max_abs(&self) -> Real {
        self.data.iter().fold(0.0, |acc, value| acc.max(value.abs()))
    }

    pub fn min_max(&self) -> (Real, Real) {
        let mut iter = self.data.iter().filter(|value| value.is_finite());
        let Some(first) = iter.next() else {
            return (0.0, 0.0);
        };
        iter.fold((*first, *first), |(lo, hi), value| (lo.min(*value), hi.max(*value)))
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|value| value.is_finite())
    }

    pub(crate) fn assert_same_size(&self, other: &Self) {
        assert_eq!(self.size, other.size, "field size mismatch");
    }
}
