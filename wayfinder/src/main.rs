//! Wayfinder — demo and dataset CLI for the gridpath engine.
//!
//! ```text
//! wayfinder demo     [--size N] [--prob P] [--seed S]
//! wayfinder generate [--samples N] [--out FILE] [--size N] [--prob P] [--seed S]
//! ```
//!
//! Dataset generation reports per-batch progress through the `log`
//! facade, which is silent unless a logger implementation is installed;
//! the final sample count is always printed to stdout.

mod render;

use std::error::Error;
use std::path::PathBuf;

use gridpath_data::{MapGen, MapGenConfig, generate_samples, save_samples};
use gridpath_search::PathFinder;
use rand::{
    SeedableRng,
    rngs::{StdRng, SysRng},
};

use render::render;

struct Args {
    mode: Mode,
    cfg: MapGenConfig,
    seed: Option<u64>,
    samples: usize,
    out: PathBuf,
}

enum Mode {
    Demo,
    Generate,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        mode: Mode::Demo,
        cfg: MapGenConfig::default(),
        seed: None,
        samples: 1000,
        out: PathBuf::from("data/dataset_v1.json"),
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = |name: &str| {
            it.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "demo" => args.mode = Mode::Demo,
            "generate" => args.mode = Mode::Generate,
            "--size" => args.cfg.size = value("--size")?.parse()?,
            "--prob" => args.cfg.obstacle_prob = value("--prob")?.parse()?,
            "--seed" => args.seed = Some(value("--seed")?.parse()?),
            "--samples" => args.samples = value("--samples")?.parse()?,
            "--out" => args.out = PathBuf::from(value("--out")?),
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    if args.cfg.size < 2 {
        return Err("--size must be at least 2".into());
    }
    if !(0.0..=1.0).contains(&args.cfg.obstacle_prob) {
        return Err("--prob must be between 0 and 1".into());
    }
    Ok(args)
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::try_from_rng(&mut SysRng).expect("OS RNG failure"),
    }
}

fn run_demo(args: &Args) -> Result<(), Box<dyn Error>> {
    let cfg = &args.cfg;
    println!("--- Single demo ({} map) ---", cfg.dims());

    let grid = MapGen::new(rng_for(args.seed)).random_map(cfg);
    let mut finder = PathFinder::new(cfg.dims());
    match finder.solve(&grid, cfg.start(), cfg.goal())? {
        Some(path) => {
            println!("path found, length {}", path.len());
            println!("{}", render(&grid, Some(&path), cfg.start(), cfg.goal()));
        }
        None => {
            println!("no path (blocked)");
            println!("{}", render(&grid, None, cfg.start(), cfg.goal()));
        }
    }
    Ok(())
}

fn run_generate(args: &Args) -> Result<(), Box<dyn Error>> {
    let samples = generate_samples(&args.cfg, args.samples, rng_for(args.seed));
    save_samples(&args.out, &samples)?;
    println!("saved {} samples to {}", samples.len(), args.out.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;
    match args.mode {
        Mode::Demo => run_demo(&args),
        Mode::Generate => run_generate(&args),
    }
}
