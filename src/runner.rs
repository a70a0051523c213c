use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use lazy_static::lazy_static;
use regex::Regex;
use crate::config::SweepConfig;

lazy_static! {
    static ref NUMERIC: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?$").unwrap();
}

/// Invokes the external simulator, one subprocess per call
///
/// The simulator is expected to print a single numeric result on its standard output. Its
/// standard error is inherited, so simulator diagnostics pass straight through to the terminal.
pub struct SimulatorRunner {
    program: PathBuf,
    trace: PathBuf,
    timeout: Option<Duration>,
}

impl SimulatorRunner {
    pub fn new(config: &SweepConfig) -> Self {
        Self {
            program: config.simulator.clone(),
            trace: config.trace.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Runs the simulator once for a given cache capacity and replacement policy
    ///
    /// The subprocess is owned by this call for its entire lifetime: it is spawned, its standard
    /// output is read to end-of-stream, it is waited on, and on every failure path it is killed
    /// and reaped before the error is returned.
    ///
    /// # Arguments
    ///
    /// * `size`: The cache capacity passed to the simulator via -S
    /// * `policy`: The replacement policy token, passed through uninterpreted
    ///
    /// returns: The simulator's standard output with one trailing line terminator stripped
    pub fn run(&self, size: u64, policy: &str) -> Result<String, String> {
        let mut child = Command::new(&self.program)
            .arg("-f")
            .arg(&self.trace)
            .arg("-S")
            .arg(size.to_string())
            .arg(policy)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| format!("Couldn't start the simulator at path {}: {e}", self.program.display()))?;
        let (status, raw) = match self.collect(&mut child, size, policy) {
            Ok(collected) => collected,
            Err(e) => {
                // The child may still be running on this path
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };
        if !status.success() {
            return Err(format!("Simulator exited with {status} for size {size} and policy {policy}"));
        }
        let value = raw.strip_suffix("\r\n").or_else(|| raw.strip_suffix('\n')).unwrap_or(&raw);
        if !NUMERIC.is_match(value) {
            return Err(format!("Simulator produced non-numeric output {value:?} for size {size} and policy {policy}"));
        }
        Ok(value.to_string())
    }

    // Reads the child's stdout to end-of-stream, then reaps it. The read happens on its own
    // thread so a hung simulator can be abandoned when the configured timeout expires.
    fn collect(&self, child: &mut Child, size: u64, policy: &str) -> Result<(ExitStatus, String), String> {
        let mut stdout = child.stdout.take().ok_or("The simulator's stdout was not captured".to_string())?;
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut raw = String::new();
            let result = stdout.read_to_string(&mut raw).map(|_| raw);
            let _ = sender.send(result);
        });
        let read_result = match self.timeout {
            Some(limit) => receiver
                .recv_timeout(limit)
                .map_err(|_| format!("Simulator timed out after {}s for size {size} and policy {policy}", limit.as_secs()))?,
            None => receiver
                .recv()
                .map_err(|e| format!("Lost the simulator output stream for size {size} and policy {policy}: {e}"))?,
        };
        let raw = read_result.map_err(|e| format!("Couldn't decode the simulator output for size {size} and policy {policy}: {e}"))?;
        let status = child.wait().map_err(|e| format!("Couldn't wait on the simulator for size {size} and policy {policy}: {e}"))?;
        Ok((status, raw))
    }
}
