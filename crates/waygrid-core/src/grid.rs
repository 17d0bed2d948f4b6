//! The [`Grid`] type — a dense, row-major 2D array of cell values.
//!
//! Unlike a shared-buffer view, a `Grid` owns its storage outright, so a
//! `&Grid` can be searched from several threads at once.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Occupancy grid: `true` marks a blocked cell.
pub type BoolGrid = Grid<bool>;

/// Cost-field grid: each cell holds a non-negative traversal cost.
pub type CostGrid = Grid<f64>;

/// A rectangular grid of `T` values, `height` rows by `width` columns.
///
/// A grid always has at least one row and one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy> Grid<T> {
    /// Create a `width` × `height` grid with every cell set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let (w, h) = (width as usize, height as usize);
        Ok(Self {
            cells: vec![value; w * h],
            width: w,
            height: h,
        })
    }

    /// Build a grid from a slice of rows. Every row must have the same,
    /// non-zero length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }

        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    /// The bounding range of this grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid cannot be constructed without cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Read the cell at `p`, or `None` if `p` is outside bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }

    /// Fill every cell in the grid with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// Row-major iterator over `(Point, T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.point(i), v))
    }
}

impl Grid<bool> {
    /// Parse an ASCII map: `#` is blocked, `.` is free.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string and
    /// from each line, so maps can be written as indented string literals.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (y, line) in s.trim().lines().enumerate() {
            let row = line
                .trim()
                .chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    _ => Err(GridError::UnknownTile {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }
}

impl<T: Copy> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        Self::from_rows(&rows)
    }
}

#[cfg(feature = "serde")]
impl<T: Copy + serde::Serialize> serde::Serialize for Grid<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Copy + serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Grid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_filled_and_at() {
        let g = Grid::filled(4, 3, 0.5).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.len(), 12);
        assert_eq!(g.bounds(), Range::new(0, 0, 4, 3));
        assert_eq!(g.at(Point::new(3, 2)), Some(0.5));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn grid_filled_rejects_zero_dimensions() {
        assert_eq!(Grid::filled(0, 3, false), Err(GridError::Empty));
        assert_eq!(Grid::filled(3, 0, false), Err(GridError::Empty));
        assert_eq!(Grid::filled(-1, 2, false), Err(GridError::Empty));
    }

    #[test]
    fn grid_from_rows_is_row_major() {
        let g = Grid::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        // (row 1, col 0)
        assert_eq!(g.at(Point::new(0, 1)), Some(4.0));
        assert_eq!(g.index(Point::new(2, 1)), Some(5));
        assert_eq!(g.point(5), Point::new(2, 1));
    }

    #[test]
    fn grid_from_rows_rejects_bad_shapes() {
        let empty: Vec<Vec<bool>> = Vec::new();
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&[Vec::<bool>::new()]),
            Err(GridError::Empty)
        );
        let ragged = vec![vec![false, false], vec![false], vec![true, true]];
        assert_eq!(
            Grid::from_rows(&ragged),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn grid_set_and_fill() {
        let mut g = Grid::filled(3, 2, false).unwrap();
        g.set(Point::new(1, 1), true);
        assert_eq!(g.at(Point::new(1, 1)), Some(true));
        // out of bounds is a no-op
        g.set(Point::new(10, 10), true);
        assert_eq!(g.count_blocked(), 1);
        g.fill(true);
        assert!(g.iter().all(|(_, b)| b));
    }

    #[test]
    fn grid_iter_visits_every_cell() {
        let g = Grid::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(
            cells,
            vec![
                (Point::new(0, 0), 1),
                (Point::new(1, 0), 2),
                (Point::new(0, 1), 3),
                (Point::new(1, 1), 4),
            ]
        );
        assert_eq!(g.rows().count(), 2);
    }

    #[test]
    fn ascii_map_parses() {
        let g = BoolGrid::from_ascii(
            "
            ..#
            ###
            ...
            ",
        )
        .unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 3);
        assert_eq!(g.at(Point::new(2, 0)), Some(true));
        assert_eq!(g.at(Point::new(0, 0)), Some(false));
        assert_eq!(g.count_blocked(), 4);
    }

    #[test]
    fn ascii_map_rejects_unknown_tiles() {
        let err = BoolGrid::from_ascii("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownTile {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(matches!(
            BoolGrid::from_ascii("...\n.."),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn grid_try_from_rows() {
        let g: CostGrid = vec![vec![0.0, 1.0]].try_into().unwrap();
        assert_eq!(g.at(Point::new(1, 0)), Some(1.0));
    }
}
