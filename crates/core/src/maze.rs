//! Maze module - the grid of decided cells
//!
//! The maze is a `width x height` grid stored column-major (`[column][row]`).
//! Cells are created once by the generator and never mutated afterwards.
//! Coordinates: column 0 is the west edge, row 0 is the north edge.

use crate::tile::{layout_for, TileLayout};
use crate::types::{GridPos, Sides, WallSide};

/// One decided maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    open_sides: Sides,
    position: GridPos,
    group_id: u32,
}

impl Cell {
    pub fn new(open_sides: Sides, position: GridPos, group_id: u32) -> Self {
        Self {
            open_sides,
            position,
            group_id,
        }
    }

    /// Passable (unwalled) sides
    pub fn open_sides(&self) -> Sides {
        self.open_sides
    }

    /// Walled sides
    pub fn closed_sides(&self) -> Sides {
        self.open_sides.complement()
    }

    pub fn is_open(&self, side: WallSide) -> bool {
        self.open_sides.contains(side)
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    /// Opaque grouping metadata
    pub fn group_id(&self) -> u32 {
        self.group_id
    }

    /// Tile pixels for this cell
    pub fn layout(&self) -> TileLayout {
        layout_for(self.open_sides)
    }
}

/// Two neighbors disagreeing on their shared edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeViolation {
    /// West or north cell of the pair
    pub first: GridPos,
    /// East or south cell of the pair
    pub second: GridPos,
    /// Side of `first` that faces `second`
    pub side: WallSide,
}

/// A boundary-facing side left open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryViolation {
    pub position: GridPos,
    pub side: WallSide,
}

/// A completed, read-only maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    columns: Vec<Vec<Cell>>,
}

impl Maze {
    /// Assemble from column-major cells. Crate-private so only the generator
    /// can produce a maze.
    pub(crate) fn from_columns(width: usize, height: usize, columns: Vec<Vec<Cell>>) -> Self {
        debug_assert_eq!(columns.len(), width);
        debug_assert!(columns.iter().all(|c| c.len() == height));
        Self {
            width,
            height,
            columns,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at (column, row); `None` if out of bounds
    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        self.columns.get(column).and_then(|col| col.get(row))
    }

    pub fn get(&self, pos: GridPos) -> Option<&Cell> {
        self.cell(pos.column, pos.row)
    }

    /// Column-major cell storage
    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.columns
    }

    /// All cells in row-major order (the order they were decided in)
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        (0..self.height)
            .flat_map(move |row| (0..self.width).map(move |column| &self.columns[column][row]))
    }

    /// Adjacent pairs whose shared edge is open on one side only
    pub fn edge_violations(&self) -> Vec<EdgeViolation> {
        let mut out = Vec::new();
        for row in 0..self.height {
            for column in 0..self.width {
                let here = &self.columns[column][row];
                if let Some(east) = self.cell(column + 1, row) {
                    if here.is_open(WallSide::East) != east.is_open(WallSide::West) {
                        out.push(EdgeViolation {
                            first: here.position,
                            second: east.position,
                            side: WallSide::East,
                        });
                    }
                }
                if let Some(south) = self.cell(column, row + 1) {
                    if here.is_open(WallSide::South) != south.is_open(WallSide::North) {
                        out.push(EdgeViolation {
                            first: here.position,
                            second: south.position,
                            side: WallSide::South,
                        });
                    }
                }
            }
        }
        out
    }

    /// Open sides that face out of the grid
    pub fn boundary_violations(&self) -> Vec<BoundaryViolation> {
        let mut out = Vec::new();
        for cell in self.cells() {
            let GridPos { column, row } = cell.position;
            let facing_out = [
                (row == 0, WallSide::North),
                (column + 1 == self.width, WallSide::East),
                (row + 1 == self.height, WallSide::South),
                (column == 0, WallSide::West),
            ];
            for (on_edge, side) in facing_out {
                if on_edge && cell.is_open(side) {
                    out.push(BoundaryViolation {
                        position: cell.position,
                        side,
                    });
                }
            }
        }
        out
    }

    /// True if there are no edge or boundary violations
    pub fn is_consistent(&self) -> bool {
        self.edge_violations().is_empty() && self.boundary_violations().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_GROUP_ID;

    fn cell(column: usize, row: usize, open: &[WallSide]) -> Cell {
        Cell::new(
            Sides::from_sides(open),
            GridPos::new(column, row),
            DEFAULT_GROUP_ID,
        )
    }

    fn two_by_one(left: &[WallSide], right: &[WallSide]) -> Maze {
        Maze::from_columns(2, 1, vec![vec![cell(0, 0, left)], vec![cell(1, 0, right)]])
    }

    #[test]
    fn test_matching_shared_edge_is_consistent() {
        let maze = two_by_one(&[WallSide::East], &[WallSide::West]);
        assert!(maze.edge_violations().is_empty());
        assert!(maze.boundary_violations().is_empty());
        assert!(maze.is_consistent());
    }

    #[test]
    fn test_one_sided_opening_is_reported() {
        let maze = two_by_one(&[WallSide::East], &[]);
        assert_eq!(
            maze.edge_violations(),
            vec![EdgeViolation {
                first: GridPos::new(0, 0),
                second: GridPos::new(1, 0),
                side: WallSide::East,
            }]
        );
    }

    #[test]
    fn test_open_boundary_is_reported() {
        let maze = two_by_one(&[WallSide::East, WallSide::North], &[WallSide::West]);
        assert_eq!(
            maze.boundary_violations(),
            vec![BoundaryViolation {
                position: GridPos::new(0, 0),
                side: WallSide::North,
            }]
        );
    }

    #[test]
    fn test_cells_iterate_row_major() {
        let maze = Maze::from_columns(
            2,
            2,
            vec![
                vec![cell(0, 0, &[]), cell(0, 1, &[])],
                vec![cell(1, 0, &[]), cell(1, 1, &[])],
            ],
        );
        let order: Vec<GridPos> = maze.cells().map(|c| c.position()).collect();
        assert_eq!(
            order,
            vec![
                GridPos::new(0, 0),
                GridPos::new(1, 0),
                GridPos::new(0, 1),
                GridPos::new(1, 1)
            ]
        );
        assert_eq!(maze.cell(2, 0), None);
        assert_eq!(maze.len(), 4);
    }
}
