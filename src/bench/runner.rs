// Size sweep: time terrain generation and island discovery across grid sizes.

use crate::core::Config;
use crate::session::IslandSession;

#[derive(Debug, Clone)]
pub struct SizeReport {
    pub size: usize,
    pub trials: usize,
    pub mean_generate_ms: f64,
    pub mean_islands_ms: f64,
    pub max_islands_ms: f64,
    pub mean_islands: f64,
}

#[derive(Debug)]
pub struct SweepReport {
    pub land_ratio: u8,
    pub per_size: Vec<SizeReport>,
}

/// Runs `trials` generate + find-islands rounds for each size.
pub fn run_sweep(base: &Config, sizes: &[usize], trials: usize, seed: u64) -> crate::core::Result<SweepReport> {
    let trials = trials.max(1);
    let mut per_size = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let config = Config { size, ..base.clone() };
        let mut session = IslandSession::with_seed(config, seed ^ size as u64)?;
        let mut generate_total = 0.0;
        let mut islands_total = 0.0;
        let mut islands_max: f64 = 0.0;
        let mut count_total = 0;

        for _ in 0..trials {
            session.generate()?;
            generate_total += session.last_elapsed_ms();
            count_total += session.find_islands();
            let t = session.last_elapsed_ms();
            islands_total += t;
            islands_max = islands_max.max(t);
        }

        per_size.push(SizeReport {
            size,
            trials,
            mean_generate_ms: generate_total / trials as f64,
            mean_islands_ms: islands_total / trials as f64,
            max_islands_ms: islands_max,
            mean_islands: count_total as f64 / trials as f64,
        });
    }

    Ok(SweepReport { land_ratio: base.land_ratio, per_size })
}

impl SweepReport {
    pub fn print_summary(&self) {
        println!("=== Island discovery sweep (land ratio {}%) ===", self.land_ratio);
        for r in &self.per_size {
            println!("  {:>5}x{:<5} | gen {:>8.2}ms | islands {:>8.2}ms (max {:.2}) | avg count {:.1}",
                r.size, r.size, r.mean_generate_ms, r.mean_islands_ms, r.max_islands_ms, r.mean_islands);
        }
    }
}
