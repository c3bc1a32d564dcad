use thiserror::Error;
use world_grid::{GridCell, Loc, Neighborhood, Random, World, WorldGrid};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PopulationError {
    #[error("cannot place {requested} live cells in a grid of {capacity}")]
    ExceedsCapacity { requested: usize, capacity: usize },
}

/// Live cells wanted for `density_percent` of a `width` by `height` grid,
/// rounded down. Saturates at `usize::MAX`, which no grid can hold.
pub fn population_count(density_percent: u32, width: u32, height: u32) -> usize {
    let count = density_percent as u128 * width as u128 * height as u128 / 100;
    usize::try_from(count).unwrap_or(usize::MAX)
}

#[derive(Debug)]
pub struct ConwayWorld {
    grid: WorldGrid<ConwayGridCell>,
    rand: Random,
}

impl ConwayWorld {
    pub fn new(
        width: u32,
        height: u32,
        population: usize,
        rand: Random,
    ) -> Result<Self, PopulationError> {
        let mut result = Self::new_empty(width, height, rand);
        result.add_random_life(population)?;
        Ok(result)
    }

    fn new_empty(width: u32, height: u32, rand: Random) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            grid: WorldGrid::new(width, height),
            rand,
        }
    }

    /// Brings `population` distinct dead cells to life, chosen uniformly by
    /// drawing locations until an unoccupied one turns up.
    fn add_random_life(&mut self, population: usize) -> Result<(), PopulationError> {
        let capacity = self.grid.num_cells() - self.population();
        if population > capacity {
            return Err(PopulationError::ExceedsCapacity {
                requested: population,
                capacity,
            });
        }

        let mut remaining = population;
        let mut draws = 0u64;
        while remaining > 0 {
            let loc = Loc::new(
                self.rand.next_in_range(0..self.grid.height()),
                self.rand.next_in_range(0..self.grid.width()),
            );
            draws += 1;
            let cell = &mut self.grid.cells[loc];
            if !cell.alive {
                cell.alive = true;
                remaining -= 1;
            }
        }
        log::trace!("placed {population} live cells in {draws} draws");
        Ok(())
    }

    pub fn population(&self) -> usize {
        self.grid.cells_iter().filter(|cell| cell.alive).count()
    }
}

impl World for ConwayWorld {
    type Cell = ConwayGridCell;

    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn num_cells(&self) -> usize {
        self.grid.num_cells()
    }

    fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &ConwayGridCell> + Clone {
        self.grid.cells_iter()
    }

    fn update(&mut self) {
        self.grid.update();
        log::debug!("population {}", self.population());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayGridCell {
    pub alive: bool,
}

impl ConwayGridCell {
    pub const ALIVE_GLYPH: char = '*';
    pub const DEAD_GLYPH: char = ' ';

    fn num_live_neighbors(neighborhood: &Neighborhood<ConwayGridCell>) -> u32 {
        neighborhood.count_neighbor_cells(|neighbor| neighbor.alive)
    }

    /// Survival on 2 or 3 live neighbors, birth on exactly 3.
    pub fn next_alive(alive: bool, neighbors: u32) -> bool {
        if alive {
            (2..=3).contains(&neighbors)
        } else {
            neighbors == 3
        }
    }
}

impl GridCell for ConwayGridCell {
    fn glyph(&self) -> char {
        if self.alive {
            Self::ALIVE_GLYPH
        } else {
            Self::DEAD_GLYPH
        }
    }

    fn update(&self, neighborhood: &Neighborhood<ConwayGridCell>, next_cell: &mut ConwayGridCell) {
        let neighbors = Self::num_live_neighbors(neighborhood);
        *next_cell = ConwayGridCell {
            alive: Self::next_alive(self.alive, neighbors),
        };
    }
}
