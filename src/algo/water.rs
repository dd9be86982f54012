use crate::types::Height;
use derive_more::Display;
use std::cmp::{max, min};

/// A row whose length differs from the first row's.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "row {} has {} columns, expected {}", row, found, expected)]
pub struct RaggedRow {
    pub row: usize,
    pub found: usize,
    pub expected: usize,
}

/// A rectangular grid of cell heights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    rows: usize,
    columns: usize,
    heights: Vec<Height>,
}

impl HeightMap {
    /// The first row sets the width every other row must have.
    pub fn from_rows(rows: Vec<Vec<Height>>) -> Result<Self, RaggedRow> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(RaggedRow {
                row,
                found,
                expected: columns,
            });
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            heights: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn height(&self, i: usize, j: usize) -> Height {
        self.heights[i * self.columns + j]
    }
}

/// The volume of water the interior cells hold.
///
/// A cell is bounded by the lower of the tallest cell met walking its row from
/// the left and the tallest met walking its column from the top. Border cells
/// hold nothing.
pub fn trapped_water(map: &HeightMap) -> u64 {
    let (rows, columns) = (map.rows(), map.columns());
    let mut bounds = vec![0; rows * columns];
    for i in 0..rows {
        let mut tallest = 0;
        for j in 0..columns {
            tallest = max(tallest, map.height(i, j));
            bounds[i * columns + j] = tallest;
        }
    }
    for j in 0..columns {
        let mut tallest = 0;
        for i in 0..rows {
            tallest = max(tallest, map.height(i, j));
            bounds[i * columns + j] = min(bounds[i * columns + j], tallest);
        }
    }
    let mut volume = 0;
    for i in 1..rows.saturating_sub(1) {
        for j in 1..columns.saturating_sub(1) {
            let depth = i64::from(bounds[i * columns + j]) - i64::from(map.height(i, j));
            volume += max(depth, 0) as u64;
        }
    }
    volume
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_map(rows: &[&[Height]]) -> HeightMap {
        HeightMap::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_flat() {
        assert_eq!(trapped_water(&create_map(&[&[3, 3, 3], &[3, 3, 3], &[3, 3, 3]])), 0);
    }

    #[test]
    fn test_pit() {
        assert_eq!(trapped_water(&create_map(&[&[5, 5, 5], &[5, 1, 5], &[5, 5, 5]])), 4);
        assert_eq!(trapped_water(&create_map(&[&[2, 4, 2], &[4, 1, 4], &[2, 4, 2]])), 3);
    }

    #[test]
    fn test_wide_basin() {
        let map = create_map(&[
            &[3, 3, 3, 3],
            &[3, 0, 1, 3],
            &[3, 2, 0, 3],
            &[3, 3, 3, 3],
        ]);
        assert_eq!(trapped_water(&map), 3 + 2 + 1 + 3);
    }

    #[test]
    fn test_below_ground() {
        assert_eq!(trapped_water(&create_map(&[&[0, 0, 0], &[0, -1, 0], &[0, 0, 0]])), 1);
        assert_eq!(trapped_water(&create_map(&[&[-3, -3, -3], &[-3, -5, -3], &[-3, -3, -3]])), 5);
    }

    #[test]
    fn test_borders_only() {
        assert_eq!(trapped_water(&create_map(&[&[1, 0, 1], &[1, 0, 1]])), 0);
        assert_eq!(trapped_water(&create_map(&[&[7]])), 0);
        assert_eq!(trapped_water(&HeightMap::from_rows(vec![]).unwrap()), 0);
    }

    #[test]
    fn test_ragged() {
        assert_eq!(
            HeightMap::from_rows(vec![vec![1, 2], vec![3, 4], vec![5]]),
            Err(RaggedRow {
                row: 2,
                found: 1,
                expected: 2
            })
        );
    }
}
