#![deny(clippy::all)]
#![forbid(unsafe_code)]

use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt::Debug;
use std::mem;
use std::ops::{Index, IndexMut};

pub trait World {
    type Cell: GridCell;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn num_cells(&self) -> usize;
    fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Self::Cell> + Clone;
    fn update(&mut self);
}

#[derive(Clone, Debug)]
pub struct WorldGrid<C>
where
    C: Clone + GridCell,
{
    width: u32,
    height: u32,
    pub cells: WorldGridCells<C>,
    pub next_cells: WorldGridCells<C>,
}

impl<C> WorldGrid<C>
where
    C: Clone + Debug + GridCell,
{
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: WorldGridCells::new(width, height),
            next_cells: WorldGridCells::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.num_cells()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.cells_iter()
    }

    pub fn update(&mut self) {
        step(&self.cells, &mut self.next_cells);
        mem::swap(&mut self.next_cells, &mut self.cells);
    }
}

pub fn step<C>(source: &WorldGridCells<C>, dest: &mut WorldGridCells<C>)
where
    C: GridCell,
{
    assert!(
        source.width() == dest.width() && source.height() == dest.height(),
        "step between grids of different sizes: {}x{} -> {}x{}",
        source.width(),
        source.height(),
        dest.width(),
        dest.height()
    );
    for row in 0..source.height() {
        for col in 0..source.width() {
            let loc = Loc::new(row, col);
            let neighborhood = Neighborhood::new(source, loc);
            source[loc].update(&neighborhood, &mut dest[loc]);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldGridCells<C>
where
    C: Clone + GridCell,
{
    cells: Vec<C>,
    width: u32,
    height: u32,
}

impl<C> WorldGridCells<C>
where
    C: Clone + Copy + Default + GridCell,
{
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width != 0 && height != 0);
        Self {
            cells: vec![C::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.iter()
    }

    fn cell(&self, loc: Loc) -> Option<&C> {
        loc.grid_index(self.width, self.height)
            .map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, loc: Loc) -> Option<&mut C> {
        loc.grid_index(self.width, self.height)
            .map(|index| &mut self.cells[index])
    }
}

impl<C> Index<Loc> for WorldGridCells<C>
where
    C: Clone + Copy + Default + GridCell,
{
    type Output = C;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl<C> IndexMut<Loc> for WorldGridCells<C>
where
    C: Clone + Copy + Default + GridCell,
{
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

pub trait GridCell
where
    Self: Copy + Default,
{
    fn glyph(&self) -> char;

    /// Must assign every field of `next_cell`; the scratch buffer still holds
    /// the generation before last.
    fn update(&self, neighborhood: &Neighborhood<Self>, next_cell: &mut Self);
}

/// The eight cells around a center cell. Edges wrap, so the grid is a torus.
pub struct Neighborhood<'a, C>
where
    C: Clone + Copy + Default + GridCell,
{
    cells: &'a WorldGridCells<C>,
    rows: [u32; 3],
    cols: [u32; 3],
}

impl<'a, C> Neighborhood<'a, C>
where
    C: Clone + Copy + Default + GridCell,
{
    pub fn new(cells: &'a WorldGridCells<C>, center: Loc) -> Self {
        let (row_above, row_below) = Self::adjacent_indexes(center.row, cells.height());
        let (col_left, col_right) = Self::adjacent_indexes(center.col, cells.width());
        Self {
            cells,
            rows: [row_above, center.row, row_below],
            cols: [col_left, center.col, col_right],
        }
    }

    pub fn cell(&self, row: u32, col: u32) -> &C {
        let grid_index = Loc::new(self.rows[row as usize], self.cols[col as usize]);
        &self.cells[grid_index]
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(&C),
    {
        self.for_cell(0, 0, &mut f);
        self.for_cell(0, 1, &mut f);
        self.for_cell(0, 2, &mut f);

        self.for_cell(1, 0, &mut f);
        self.for_cell(1, 2, &mut f);

        self.for_cell(2, 0, &mut f);
        self.for_cell(2, 1, &mut f);
        self.for_cell(2, 2, &mut f);
    }

    pub fn count_neighbor_cells<P>(&self, predicate: P) -> u32
    where
        P: Fn(&C) -> bool,
    {
        let mut result = 0;
        self.for_neighbor_cells(|neighbor| {
            if predicate(neighbor) {
                result += 1;
            }
        });
        result
    }

    fn for_cell<F>(&self, row: u32, col: u32, f: &mut F)
    where
        F: FnMut(&C),
    {
        f(self.cell(row, col));
    }

    fn adjacent_indexes(cell_index: u32, max: u32) -> (u32, u32) {
        (
            Self::modulo(cell_index as i64 - 1, max),
            Self::modulo(cell_index as i64 + 1, max),
        )
    }

    fn modulo(val: i64, max: u32) -> u32 {
        val.rem_euclid(max as i64) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, width: u32, height: u32) -> Option<usize> {
        if self.row < height && self.col < width {
            Some(self.row as usize * width as usize + self.col as usize)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_in_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
