// Single owner of the map and everything the operations need.
//
// Each mutating call runs under the timer; the last elapsed time and the
// island count are what a front end displays.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bench::timer::measure;
use crate::core::{CellStatus, Color, Config, GridModel, Result};
use crate::fill;
use crate::terrain::{self, Palette};

#[derive(Debug)]
pub struct IslandSession {
    config: Config,
    grid: GridModel,
    rng: StdRng,
    palette: Palette,
    islands: usize,
    last_elapsed_ms: f64,
}

impl IslandSession {
    /// Validated config, empty all-sea grid.
    pub fn new(config: Config) -> Result<Self> {
        Self::build(config, StdRng::from_entropy(), Palette::from_entropy())
    }

    /// Reproducible terrain and island colors.
    pub fn with_seed(config: Config, seed: u64) -> Result<Self> {
        Self::build(
            config,
            StdRng::seed_from_u64(seed),
            Palette::seeded(seed.wrapping_add(1)),
        )
    }

    fn build(config: Config, rng: StdRng, palette: Palette) -> Result<Self> {
        config.validate()?;
        let grid = GridModel::new(config.size, config.sea_color)?;
        Ok(Self { config, grid, rng, palette, islands: 0, last_elapsed_ms: 0.0 })
    }

    /// Generates terrain and labels the islands once.
    pub fn start(&mut self) -> Result<usize> {
        self.generate()?;
        self.reset_island_count();
        Ok(self.find_islands())
    }

    /// Fresh terrain followed by island discovery.
    pub fn regenerate(&mut self) -> Result<usize> {
        self.generate()?;
        Ok(self.find_islands())
    }

    pub fn generate(&mut self) -> Result<()> {
        let Self { grid, config, rng, .. } = self;
        let timed = measure(|| terrain::generate(grid, config, rng));
        self.last_elapsed_ms = timed.elapsed_ms;
        timed.value
    }

    /// Replaces the config, then regenerates terrain under it.
    pub fn generate_with(&mut self, config: Config) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.generate()
    }

    pub fn find_islands(&mut self) -> usize {
        let Self { grid, palette, .. } = self;
        let timed = measure(|| fill::find_islands(grid, palette));
        self.islands = timed.value;
        self.last_elapsed_ms = timed.elapsed_ms;
        info!("found {} islands in {} ms", self.islands, self.last_elapsed_ms);
        self.islands
    }

    /// Returns the number of repainted cells.
    pub fn repaint(&mut self, row: i64, col: i64, color: Color) -> usize {
        let grid = &mut self.grid;
        let timed = measure(|| fill::repaint(grid, row, col, color));
        self.last_elapsed_ms = timed.elapsed_ms;
        timed.value
    }

    /// Repaint with the configured highlight color.
    pub fn repaint_highlight(&mut self, row: i64, col: i64) -> usize {
        self.repaint(row, col, self.config.highlight_color)
    }

    pub fn flatten(&mut self, color: Color) -> usize {
        let grid = &mut self.grid;
        let timed = measure(|| fill::flatten(grid, color));
        self.last_elapsed_ms = timed.elapsed_ms;
        timed.value
    }

    pub fn flatten_highlight(&mut self) -> usize {
        self.flatten(self.config.highlight_color)
    }

    /// Reallocates an all-sea grid. Terrain must be regenerated by the caller.
    /// Sizes outside `1..=MAX_SIZE` are rejected and leave the session unchanged.
    pub fn resize(&mut self, size: usize) -> Result<()> {
        if let Err(e) = self.grid.resize(size, self.config.sea_color) {
            warn!("rejected resize to {}", size);
            return Err(e);
        }
        self.config.size = size;
        Ok(())
    }

    pub fn reset_island_count(&mut self) {
        self.islands = 0;
    }

    pub fn color(&self, row: i64, col: i64) -> Option<Color> {
        self.grid.color(row, col)
    }

    pub fn status(&self, row: i64, col: i64) -> Option<CellStatus> {
        self.grid.status(row, col)
    }

    pub fn islands(&self) -> usize {
        self.islands
    }

    pub fn last_elapsed_ms(&self) -> f64 {
        self.last_elapsed_ms
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
