use std::fs::File;
use std::io::BufReader;
use std::time::Instant;
use clap::Parser;
use cachesweep::config::SweepConfig;
use cachesweep::sweep::Sweeper;

#[cfg(debug_assertions)]
const DEBUG_DEFAULT: bool = true;

#[cfg(not(debug_assertions))]
const DEBUG_DEFAULT: bool = false;

#[derive(Parser, Debug)]
#[command(about = String::from("Benchmark sweep driver for an external cache simulator"))]
struct Args {
    config: String,

    #[arg(short, long)]
    performance: bool,

    #[arg(short, long, default_value_t = DEBUG_DEFAULT)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let start = Instant::now();
    let args = Args::parse();
    let config_file = File::open(&args.config).map_err(|e| format!("Couldn't open the config file at path {}: {e}", args.config))?;
    let config: SweepConfig = serde_json::from_reader(BufReader::new(config_file)).map_err(|e| format!("Couldn't parse the config file: {e}"))?;
    config.validate()?;
    if args.debug {
        println!("Parsed sweep configuration: {config:?}");
    }
    let mut sweeper = Sweeper::new(&config)?;
    sweeper.sweep(args.debug)?;
    println!("Swept {} cache sizes across {} policies into {}", sweeper.get_rows_written(), config.policies.len(), config.output.display());
    if args.performance {
        let end = Instant::now();
        let sweep_time = sweeper.get_execution_time();
        let total_time = end - start;
        println!("Sweep time: {}s", sweep_time.as_nanos() as f64 / 1e9);
        println!("Total execution time (includes configuration and the summary output): {}s", total_time.as_nanos() as f64 / 1e9)
    }
    Ok(())
}
