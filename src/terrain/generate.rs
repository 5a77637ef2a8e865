use log::debug;
use rand::Rng;

use crate::core::{CellStatus, Config, GridModel, Result};

/// Overwrites every cell with random sea or land.
///
/// Each cell draws `d` uniformly from `0..=100` and becomes land when
/// `d < config.land_ratio`. A grid whose size disagrees with the config is
/// reallocated first. An invalid config leaves the grid untouched.
pub fn generate<R: Rng>(grid: &mut GridModel, config: &Config, rng: &mut R) -> Result<()> {
    config.validate()?;
    if grid.size() != config.size {
        grid.resize(config.size, config.sea_color)?;
    }
    let ratio = u32::from(config.land_ratio);
    for (status, color) in grid.cells_mut() {
        let draw: u32 = rng.gen_range(0..=100);
        if draw < ratio {
            *status = CellStatus::Land;
            *color = config.land_color;
        } else {
            *status = CellStatus::Sea;
            *color = config.sea_color;
        }
    }
    debug!(
        "generated {}x{} terrain, {} land cells",
        config.size,
        config.size,
        grid.count_status(CellStatus::Land)
    );
    Ok(())
}
