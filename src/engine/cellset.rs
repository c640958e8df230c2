//! A fixed-size set of grid cells packed into a single unsigned integer.
//!
//! The set is `no_std` friendly and never allocates. An `N×N` grid maps
//! cell `(row, col)` to bit `row * N + col` of the backing integer `T`.
//! Coordinates outside `[0, N)×[0, N)` are never members.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr};
use num_traits::{PrimInt, Unsigned, Zero};

use super::coordinate::Coordinate;

/// A set of cells of an `N×N` grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const FITS: () = assert!(
        N * N <= mem::size_of::<T>() * 8,
        "an N×N grid does not fit in the backing integer"
    );

    /// An empty set. Fails to compile when `N * N` exceeds the bit width of `T`.
    #[inline]
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        CellSet { bits: T::zero() }
    }

    /// Bit index of `cell`, or `None` when it lies outside the grid.
    #[inline]
    fn index(cell: Coordinate) -> Option<usize> {
        let n = N as i32;
        if (0..n).contains(&cell.row) && (0..n).contains(&cell.col) {
            Some(cell.row as usize * N + cell.col as usize)
        } else {
            None
        }
    }

    /// `true` if `cell` lies inside the `N×N` grid.
    #[inline]
    pub fn in_bounds(cell: Coordinate) -> bool {
        Self::index(cell).is_some()
    }

    /// Membership test; out-of-grid cells are never members.
    pub fn contains(&self, cell: Coordinate) -> bool {
        match Self::index(cell) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `cell`. Returns `false` if it was already present or lies outside
    /// the grid.
    pub fn insert(&mut self, cell: Coordinate) -> bool {
        match Self::index(cell) {
            Some(idx) => {
                let bit = T::one() << idx;
                let fresh = (self.bits & bit).is_zero();
                self.bits = self.bits | bit;
                fresh
            }
            None => false,
        }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> Cells<'_, T, N> {
        Cells { set: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Out-of-grid coordinates are skipped.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.set.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

/// Intersection.
impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Union.
impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}
