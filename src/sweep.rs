use std::fs::{File, OpenOptions};
use std::io::Write;
use std::time::{Duration, Instant};
use crate::config::{OutputMode, SweepConfig};
use crate::runner::SimulatorRunner;

/// The sweep driver walks the capacity range, runs every policy at each capacity, and appends
/// one row per capacity to the output table
///
/// The table grows incrementally: each row is written as soon as its last cell arrives, so a
/// failed run leaves every previously written row valid on disk
pub struct Sweeper {
    runner: SimulatorRunner,
    output: File,
    start_size: u64,
    end_size: u64,
    policies: Vec<String>,
    rows_written: u64,
    sweep_time: Duration,
}

impl Sweeper {
    /// Creates a sweeper for a given configuration, opening the output file and writing the
    /// header line
    ///
    /// # Arguments
    ///
    /// * `config`: A sweep configuration, usually resulting from parsing JSON
    ///
    /// returns: Sweeper, or an error if the output file can't be opened or written
    pub fn new(config: &SweepConfig) -> Result<Self, String> {
        let output = match config.mode {
            OutputMode::Truncate => File::create(&config.output),
            OutputMode::Append => OpenOptions::new().create(true).append(true).open(&config.output),
        }
        .map_err(|e| format!("Couldn't open the output file at path {}: {e}", config.output.display()))?;
        let mut sweeper = Self {
            runner: SimulatorRunner::new(config),
            output,
            start_size: config.start_size,
            end_size: config.end_size,
            policies: config.policies.clone(),
            rows_written: 0,
            sweep_time: Duration::new(0, 0),
        };
        sweeper.write_header()?;
        Ok(sweeper)
    }

    // The header names the size column and then one column per policy, in configured order.
    // No trailing newline: rows carry their own leading newline.
    fn write_header(&mut self) -> Result<(), String> {
        let mut header = String::from("# size");
        for policy in &self.policies {
            header.push('\t');
            header.push_str(policy);
        }
        self.output
            .write_all(header.as_bytes())
            .map_err(|e| format!("Couldn't write the header to the output file: {e}"))
    }

    /// Runs the full sweep, one row per capacity in [start_size, end_size)
    ///
    /// The capacities are swept in ascending order, and within each row the policies run in
    /// configured order, so the columns always line up with the header. Any failure is fatal
    /// and leaves the table ending at the last complete row.
    ///
    /// # Arguments
    ///
    /// * `debug`: Print one progress line per simulator invocation
    ///
    /// returns: (), the table on disk is the result
    pub fn sweep(&mut self, debug: bool) -> Result<(), String> {
        let start = Instant::now();
        for size in self.start_size..self.end_size {
            let mut row = format!("\n{size}");
            for policy in &self.policies {
                let value = self.runner.run(size, policy)?;
                if debug {
                    println!("size {size}, policy {policy}: {value}");
                }
                row.push('\t');
                row.push_str(&value);
            }
            self.output
                .write_all(row.as_bytes())
                .map_err(|e| format!("Couldn't append row {size} to the output file: {e}"))?;
            self.rows_written += 1;
        }
        self.sweep_time += start.elapsed();
        Ok(())
    }

    pub fn get_rows_written(&self) -> u64 {
        self.rows_written
    }

    /// The time spent inside the sweep loop, including the simulator's own runtime
    pub fn get_execution_time(&self) -> Duration {
        self.sweep_time
    }
}
