//! # N-bit counter reachability
//!
//! Builds an n-bit binary counter, optionally gated by an enable input and
//! saturating at its maximum value, runs the symbolic reachability analysis
//! and prints the BFS layers.
//!
//! Run with: `cargo run --example counter -- --bits 8 --enable --init 3`

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use robdd_reach::manager::{Manager, ManagerConfig};
use robdd_reach::reachability::Reachability;

#[derive(Parser, Debug)]
#[command(author, version, about = "Symbolic reachability of an n-bit counter")]
struct Cli {
    /// Number of state bits
    #[arg(short, long, default_value_t = 4)]
    bits: usize,

    /// Gate the increment by an input and saturate at the maximum
    #[arg(short, long)]
    enable: bool,

    /// Initial counter value
    #[arg(short, long, default_value_t = 0)]
    init: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,

    /// Write the reachable set as a DOT file
    #[arg(long)]
    dot: Option<PathBuf>,
}

fn bits(value: u64, width: usize) -> Vec<bool> {
    (0..width)
        .map(|i| value.checked_shr(i as u32).unwrap_or(0) & 1 == 1)
        .collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = Instant::now();

    let config = ManagerConfig::default().with_node_capacity(1 << 16);
    let inputs = if cli.enable { 1 } else { 0 };
    let mut fsm = Reachability::with_manager(Manager::new(config), cli.bits, inputs)?;

    let s = fsm.states().to_vec();
    let m = fsm.manager();
    let mut carry = if cli.enable {
        let full = m.and_many(s.iter().copied());
        m.eval(fsm.inputs()[0] & m.eval(!full))
    } else {
        m.one()
    };
    let mut functions = Vec::with_capacity(s.len());
    for &bit in &s {
        functions.push(m.eval(bit ^ carry));
        carry = m.eval(carry & bit);
    }

    fsm.set_transition_functions(&functions)?;
    fsm.set_init_state(&bits(cli.init, cli.bits))?;

    let layers = fsm.compute_reachable_states();
    let m = fsm.manager();
    for (k, &layer) in layers.iter().enumerate() {
        println!(
            "layer {:>4}: {} states, {} nodes",
            k,
            m.sat_count(layer, fsm.states()),
            m.size(layer)
        );
    }
    println!("reachable states: {}", fsm.num_reachable_states());
    println!("diameter: {}", fsm.diameter());
    println!("manager = {:?}", m);
    let stats = m.computed_table_stats();
    println!(
        "computed table: {} entries, hit rate {:.1}%",
        stats.len,
        100.0 * stats.hit_rate()
    );

    if let Some(path) = &cli.dot {
        m.write_dot(path, fsm.reachable_states())?;
        println!("Wrote {}", path.display());
    }

    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
