//! Regular grid of object positions.
//!
//! A lattice walks integer indices `(xi, yi, zi)` in nested order, x outermost
//! and z innermost, and maps each index to a world position:
//!
//! ```text
//! position = (xi * spacing, yi * spacing + y_offset, zi * spacing)
//! ```
//!
//! A [`Dimensionality::Plane`] lattice pins `yi` to zero, giving `dim²` cells
//! instead of `dim³`.

use serde::{Deserialize, Serialize};

/// Number of axes the lattice spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimensionality {
    /// Single horizontal layer (`yi` fixed at 0).
    Plane,
    /// Full cube of cells.
    #[default]
    Volume,
}

/// Grid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// Cells per axis.
    pub dim: u32,
    /// Distance between neighbouring cells, shared by all axes.
    pub spacing: f64,
    /// Constant added to every y coordinate.
    #[serde(default)]
    pub y_offset: f64,
    /// Plane or volume.
    #[serde(default)]
    pub dimensionality: Dimensionality,
}

/// One lattice cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    /// Integer index `(xi, yi, zi)`.
    pub index: [u32; 3],
    /// World position.
    pub position: [f64; 3],
}

impl Lattice {
    /// Create a volume lattice with no vertical offset.
    #[must_use]
    pub const fn new(dim: u32, spacing: f64) -> Self {
        Self {
            dim,
            spacing,
            y_offset: 0.0,
            dimensionality: Dimensionality::Volume,
        }
    }

    /// Set the vertical offset.
    #[must_use]
    pub const fn y_offset(mut self, y_offset: f64) -> Self {
        self.y_offset = y_offset;
        self
    }

    /// Set the dimensionality.
    #[must_use]
    pub const fn dimensionality(mut self, dimensionality: Dimensionality) -> Self {
        self.dimensionality = dimensionality;
        self
    }

    /// Number of indices along y.
    #[must_use]
    pub const fn y_count(&self) -> u32 {
        match self.dimensionality {
            Dimensionality::Plane => 1,
            Dimensionality::Volume => self.dim,
        }
    }

    /// Total number of cells: `dim²` for a plane, `dim³` for a volume.
    ///
    /// Saturates at `usize::MAX`; see [`Lattice::checked_len`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    /// Cell count, or `None` if it does not fit in `usize`.
    #[must_use]
    pub fn checked_len(&self) -> Option<usize> {
        let dim = usize::try_from(self.dim).ok()?;
        let plane = dim.checked_mul(dim)?;
        match self.dimensionality {
            Dimensionality::Plane => Some(plane),
            Dimensionality::Volume => plane.checked_mul(dim),
        }
    }

    /// True when the lattice has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// World position of an index.
    #[must_use]
    pub fn position(&self, [xi, yi, zi]: [u32; 3]) -> [f64; 3] {
        [
            self.spacing * f64::from(xi),
            self.spacing * f64::from(yi) + self.y_offset,
            self.spacing * f64::from(zi),
        ]
    }

    /// Iterate all cells in lexicographic `(xi, yi, zi)` order.
    pub fn points(&self) -> impl Iterator<Item = LatticePoint> {
        let lattice = *self;
        let dim = lattice.dim;
        let y_count = lattice.y_count();

        (0..dim).flat_map(move |xi| {
            (0..y_count).flat_map(move |yi| {
                (0..dim).map(move |zi| {
                    let index = [xi, yi, zi];
                    LatticePoint { index, position: lattice.position(index) }
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_len() {
        assert_eq!(Lattice::new(5, 2.5).len(), 125);
        assert_eq!(Lattice::new(5, 2.5).points().count(), 125);
    }

    #[test]
    fn test_plane_len() {
        let plane = Lattice::new(4, 1.0).dimensionality(Dimensionality::Plane);
        assert_eq!(plane.len(), 16);
        assert_eq!(plane.points().count(), 16);
        assert!(plane.points().all(|p| p.index[1] == 0));
    }

    #[test]
    fn test_empty_lattice() {
        let lattice = Lattice::new(0, 1.0);
        assert!(lattice.is_empty());
        assert_eq!(lattice.points().count(), 0);

        let plane = lattice.dimensionality(Dimensionality::Plane);
        assert_eq!(plane.len(), 0);
        assert_eq!(plane.points().count(), 0);
    }

    #[test]
    fn test_huge_lattice_len_does_not_overflow() {
        let lattice = Lattice::new(u32::MAX, 1.0);
        assert_eq!(lattice.checked_len(), None);
        assert_eq!(lattice.len(), usize::MAX);
        assert!(!lattice.is_empty());

        let plane = lattice.dimensionality(Dimensionality::Plane);
        assert_eq!(plane.checked_len(), 4_294_967_295usize.checked_mul(4_294_967_295));
    }

    #[test]
    fn test_lexicographic_order() {
        let indices: Vec<[u32; 3]> = Lattice::new(2, 1.0).points().map(|p| p.index).collect();
        assert_eq!(
            indices,
            vec![
                [0, 0, 0],
                [0, 0, 1],
                [0, 1, 0],
                [0, 1, 1],
                [1, 0, 0],
                [1, 0, 1],
                [1, 1, 0],
                [1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_position_with_offset() {
        let lattice = Lattice::new(5, 2.5).y_offset(0.5);
        assert_eq!(lattice.position([0, 0, 0]), [0.0, 0.5, 0.0]);
        assert_eq!(lattice.position([1, 2, 3]), [2.5, 5.5, 7.5]);
    }

    #[test]
    fn test_position_matches_plain_multiplication() {
        let lattice = Lattice::new(7, 2.2).y_offset(2.5);
        let p = lattice.position([3, 3, 3]);
        assert_eq!(p[0], 2.2 * 3.0);
        assert_eq!(p[1], 2.2 * 3.0 + 2.5);
    }

    #[test]
    fn test_dimensionality_deserializes_lowercase() {
        let lattice: Lattice =
            serde_yaml_ng::from_str("dim: 3\nspacing: 1.5\ndimensionality: plane\n").unwrap();
        assert_eq!(lattice.dimensionality, Dimensionality::Plane);
        assert_eq!(lattice.y_offset, 0.0);
    }
}
