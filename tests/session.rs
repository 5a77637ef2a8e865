use colorful_islands::core::{CellStatus, Color, Config, GridModel};
use colorful_islands::fill::{find_islands, flatten, repaint};
use colorful_islands::terrain::{generate, Palette};
use colorful_islands::IslandSession;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_grid(size: usize, land_ratio: u8, seed: u64) -> (GridModel, Config) {
    let config = Config { size, land_ratio, ..Config::default() };
    let mut grid = GridModel::new(size, config.sea_color).unwrap();
    generate(&mut grid, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
    (grid, config)
}

/// Island count by union-find over 8-connected land cells.
fn reference_count(grid: &GridModel) -> usize {
    fn root(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }
    let n = grid.size() as i64;
    let mut parent: Vec<usize> = (0..grid.len()).collect();
    for r in 0..n {
        for c in 0..n {
            if grid.status(r, c) != Some(CellStatus::Land) {
                continue;
            }
            for (dr, dc) in [(0, 1), (1, -1), (1, 0), (1, 1)] {
                if grid.status(r + dr, c + dc) == Some(CellStatus::Land) {
                    let a = root(&mut parent, grid.index(r, c).unwrap());
                    let b = root(&mut parent, grid.index(r + dr, c + dc).unwrap());
                    parent[a] = b;
                }
            }
        }
    }
    (0..grid.len())
        .filter(|&i| grid.statuses()[i] == CellStatus::Land && root(&mut parent, i) == i)
        .count()
}

#[test]
fn full_lifecycle() {
    let config = Config { size: 40, land_ratio: 45, ..Config::default() };
    let mut session = IslandSession::with_seed(config, 2024).unwrap();
    let islands = session.start().unwrap();
    assert!(islands > 0);
    assert_eq!(session.find_islands(), 0);

    let hi = Color::rgb(0xff00ff);
    let changed = session.flatten(hi);
    assert!(changed > 0);
    assert_eq!(session.flatten(hi), 0);

    session.resize(12).unwrap();
    assert_eq!(session.grid().len(), 144);
    assert_eq!(session.grid().count_status(CellStatus::Sea), 144);
    session.regenerate().unwrap();
    assert_eq!(session.grid().count_status(CellStatus::Land), 0);
}

#[test]
fn all_land_grid_is_one_island() {
    let config = Config { size: 64, land_ratio: 100, ..Config::default() };
    let mut grid = GridModel::new(64, config.sea_color).unwrap();
    for r in 0..64 {
        for c in 0..64 {
            grid.set_land(r, c, config.land_color);
        }
    }
    assert_eq!(find_islands(&mut grid, &mut Palette::seeded(0)), 1);
    assert_eq!(grid.count_status(CellStatus::Discovered), 64 * 64);
}

#[test]
fn separated_regions_stay_apart() {
    let sea = Color::rgb(0x000000);
    let land = Color::rgb(0x888888);
    let mut grid = GridModel::new(7, sea).unwrap();
    // two 3x3 blocks split by a sea column
    for r in 0..3 {
        for c in 0..3 {
            grid.set_land(r, c, land);
            grid.set_land(r, c + 4, land);
        }
    }
    assert_eq!(repaint(&mut grid, 1, 1, Color::rgb(0x00ff00)), 9);
    for r in 0..3 {
        for c in 4..7 {
            assert_eq!(grid.color(r, c), Some(land));
        }
    }
}

#[test]
fn oversized_config_cannot_build_a_session() {
    let config = Config::from_json(r#"{"size": 4294967297}"#);
    assert!(config.is_err());
    let config = Config { size: 4294967297, ..Config::default() };
    assert!(IslandSession::new(config).is_err());
}

proptest! {
    #[test]
    fn count_matches_union_find(size in 1usize..24, ratio in 0u8..=100, seed in any::<u64>()) {
        let (mut grid, _) = random_grid(size, ratio, seed);
        let expected = reference_count(&grid);
        let land = grid.count_status(CellStatus::Land);
        prop_assert_eq!(find_islands(&mut grid, &mut Palette::seeded(seed)), expected);
        prop_assert_eq!(grid.count_status(CellStatus::Discovered), land);
        prop_assert_eq!(find_islands(&mut grid, &mut Palette::seeded(seed)), 0);
    }

    #[test]
    fn repaint_anywhere_is_safe(
        size in 1usize..16,
        ratio in 0u8..=100,
        seed in any::<u64>(),
        row in -3i64..20,
        col in -3i64..20,
        label in any::<bool>(),
    ) {
        let (mut grid, _) = random_grid(size, ratio, seed);
        if label {
            find_islands(&mut grid, &mut Palette::seeded(seed));
        }
        let before = grid.clone();
        let target = Color::rgb(0x00ff00);
        let painted = repaint(&mut grid, row, col, target);

        prop_assert_eq!(grid.statuses(), before.statuses());
        prop_assert_eq!(grid.len(), size * size);
        let original = before.color(row, col);
        let mut changed = 0;
        for i in 0..grid.len() {
            if grid.colors()[i] != before.colors()[i] {
                changed += 1;
                prop_assert_eq!(grid.colors()[i], target);
                prop_assert_eq!(Some(before.colors()[i]), original);
                prop_assert!(before.statuses()[i] != CellStatus::Sea);
            }
        }
        prop_assert_eq!(changed, painted);
        if before.status(row, col).map_or(true, |s| s == CellStatus::Sea) || original == Some(target) {
            prop_assert_eq!(painted, 0);
        }
    }

    #[test]
    fn flatten_recolors_only_land(size in 1usize..20, ratio in 0u8..=100, seed in any::<u64>()) {
        let (mut grid, config) = random_grid(size, ratio, seed);
        find_islands(&mut grid, &mut Palette::seeded(seed));
        let target = Color::rgb(0x123456);
        flatten(&mut grid, target);
        for (s, c) in grid.statuses().iter().zip(grid.colors()) {
            if *s == CellStatus::Sea {
                prop_assert_eq!(*c, config.sea_color);
            } else {
                prop_assert_eq!(*c, target);
            }
        }
    }

    #[test]
    fn resize_defines_every_cell(first in 1usize..20, second in 1usize..20, seed in any::<u64>()) {
        let config = Config { size: first, ..Config::default() };
        let mut session = IslandSession::with_seed(config, seed).unwrap();
        session.start().unwrap();
        session.resize(second).unwrap();
        let n = second as i64;
        for r in 0..n {
            for c in 0..n {
                prop_assert_eq!(session.status(r, c), Some(CellStatus::Sea));
                prop_assert!(session.color(r, c).is_some());
            }
        }
        prop_assert_eq!(session.status(n, 0), None);
        prop_assert_eq!(session.color(0, n), None);
    }
}
