use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use waylost_core::{CellPos, SessionPlan, build_session_traced};

mod config;

use config::ToolsConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed hint for session construction; generated when absent
    #[arg(short, long)]
    seed: Option<String>,
    /// Board size (cells per side)
    #[arg(short = 'n', long)]
    size: Option<usize>,
    /// Optional TOML config providing defaults for --seed and --size
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the session plan and player records as JSON only
    #[arg(long)]
    json: bool,
}

const DEFAULT_MAP_SIZE: usize = 10;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ToolsConfig::load(path)?,
        None => ToolsConfig::default(),
    };

    let size = args.size.or(config.map_size).unwrap_or(DEFAULT_MAP_SIZE);
    let seed_hint = args
        .seed
        .or(config.seed_hint)
        .unwrap_or_else(|| generate_seed_hint(runtime_entropy()));

    let (plan, events) = build_session_traced(&seed_hint, size);
    let Some(plan) = plan else {
        bail!("could not construct a session for size {size}; pick a different seed or size");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan).context("serializing session plan")?);
        println!(
            "{}",
            serde_json::to_string_pretty(&plan.player_records())
                .context("serializing player records")?
        );
        return Ok(());
    }

    println!("Session seed: {}", plan.seed);
    println!("Board: {size}x{size}  fallback: {}", plan.fallback);
    println!("Start A: ({}, {})  Start B: ({}, {})", plan.start_a.ix, plan.start_a.iy,
        plan.start_b.ix, plan.start_b.iy);
    for event in &events {
        println!("  {event:?}");
    }
    println!("{}", render_board(&plan, size));
    Ok(())
}

/// ASCII sketch of the realized board with both start markers. A debugging
/// aid only; real rendering belongs to the front ends.
fn render_board(plan: &SessionPlan, size: usize) -> String {
    let grid = plan.realize_grid(size);
    let mut text = String::new();
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let here = CellPos { x, y };
            let mark = if (plan.start_a.ix, plan.start_a.iy) == (x, y) {
                'A'
            } else if (plan.start_b.ix, plan.start_b.iy) == (x, y) {
                'B'
            } else if grid.is_wall(here.x, here.y) {
                '#'
            } else {
                '.'
            };
            text.push(mark);
        }
        text.push('\n');
    }
    text
}

fn runtime_entropy() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17)
}

/// Mixes raw entropy into a short shareable hint, `seed-xxxxxxxx`.
fn generate_seed_hint(mut value: u64) -> String {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^= value >> 31;
    format!("seed-{:08x}", (value as u32))
}
