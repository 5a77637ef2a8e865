use anyhow::{bail, Context};
use colorful_islands::bench::runner::run_sweep;
use colorful_islands::core::{CellStatus, Config};
use colorful_islands::IslandSession;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let CliArgs { config_path, seed, sweep } = parse_args(std::env::args().skip(1))?;

    let config = match &config_path {
        Some(path) => Config::load(path).with_context(|| format!("loading config {}", path))?,
        None => Config { size: 24, ..Config::default() },
    };

    if sweep {
        let report = run_sweep(&config, &[50, 100, 200, 400], 5, seed.unwrap_or(0))?;
        report.print_summary();
        return Ok(());
    }

    println!("Colorful Islands");
    println!("================\n");

    let mut session = match seed {
        Some(s) => IslandSession::with_seed(config, s)?,
        None => IslandSession::new(config)?,
    };

    demo_discovery(&mut session)?;
    demo_repaint(&mut session);
    demo_flatten(&mut session);
    demo_resize(&mut session)?;
    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<String>,
    seed: Option<u64>,
    sweep: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let raw = args.next().context("--seed needs a value")?;
                cli.seed = Some(raw.parse::<u64>().with_context(|| format!("bad seed {:?}", raw))?);
            }
            "--sweep" => cli.sweep = true,
            flag if flag.starts_with("--") => bail!("unknown option {} (expected --seed N or --sweep)", flag),
            path => cli.config_path = Some(path.to_string()),
        }
    }
    Ok(cli)
}

fn demo_discovery(session: &mut IslandSession) -> anyhow::Result<()> {
    println!("--- Discovery ---");
    let islands = session.start()?;
    println!("{}", session.grid().render_ascii());
    println!("  {} islands in {:.2}ms", islands, session.last_elapsed_ms());
    println!("  {} distinct colors on the map", session.grid().color_histogram().len());
    Ok(())
}

fn demo_repaint(session: &mut IslandSession) {
    println!("\n--- Repaint ---");
    let size = session.config().size as i64;
    let target = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .find(|&(r, c)| session.status(r, c) == Some(CellStatus::Discovered));
    match target {
        Some((r, c)) => {
            let painted = session.repaint_highlight(r, c);
            println!("  clicked ({}, {}): {} cells now {} in {:.2}ms",
                r, c, painted, session.config().highlight_color, session.last_elapsed_ms());
            let again = session.repaint_highlight(r, c);
            println!("  clicked again: {} cells", again);
        }
        None => println!("  no land to click"),
    }
}

fn demo_flatten(session: &mut IslandSession) {
    println!("\n--- Flatten ---");
    let changed = session.flatten_highlight();
    println!("  {} cells recolored in {:.2}ms", changed, session.last_elapsed_ms());
}

fn demo_resize(session: &mut IslandSession) -> anyhow::Result<()> {
    println!("\n--- Resize ---");
    session.resize(10)?;
    println!("  resized to 10x10, {} cells of sea", session.grid().count_status(CellStatus::Sea));
    let islands = session.regenerate()?;
    println!("{}", session.grid().render_ascii());
    println!("  {} islands in {:.2}ms", islands, session.last_elapsed_ms());
    Ok(())
}
