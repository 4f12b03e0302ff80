//! Script runner: executes commands against a station.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, trace};

use super::{Command, RunnerConfig, ScriptError};
use crate::domain::StationError;
use crate::station::{FixOutcome, Station};

/// Counts from a finished script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands executed (blank lines and comments excluded)
    pub commands: usize,
    /// Station operations that were rejected and skipped
    pub rejected: usize,
}

/// Runs station commands, writing query results and dumps to `out`.
///
/// Rejected station operations are skipped, leaving the station unchanged,
/// unless the configuration asks to stop on them.
///
/// # Examples
///
/// ```
/// use train_station::script::{Runner, RunnerConfig};
///
/// let mut runner = Runner::new(RunnerConfig::default(), Vec::new());
/// runner
///     .run_script("open 2\narrive 1 100\nadd 1 60\nadd 1 50\noverload\n")
///     .unwrap();
///
/// let out = String::from_utf8(runner.into_output()).unwrap();
/// assert_eq!(out, "overload: 1\n");
/// ```
pub struct Runner<W> {
    station: Station,
    config: RunnerConfig,
    out: W,
}

impl<W: Write> Runner<W> {
    /// Create a runner with a fresh station of `config.default_platforms`.
    pub fn new(config: RunnerConfig, out: W) -> Self {
        Self {
            station: Station::new(config.default_platforms),
            config,
            out,
        }
    }

    /// Returns the current station.
    pub fn station(&self) -> &Station {
        &self.station
    }

    /// Consume the runner, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every line of a script held in memory.
    pub fn run_script(&mut self, script: &str) -> Result<RunSummary, ScriptError> {
        self.run_lines(script.lines().map(|l| Ok::<_, io::Error>(l.to_string())))
    }

    /// Run every line read from `reader`.
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> Result<RunSummary, ScriptError> {
        self.run_lines(reader.lines())
    }

    fn run_lines(
        &mut self,
        lines: impl Iterator<Item = io::Result<String>>,
    ) -> Result<RunSummary, ScriptError> {
        let mut summary = RunSummary::default();

        for (idx, line) in lines.enumerate() {
            let line_no = idx + 1;
            let line = line?;

            let cmd = match Command::parse(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(e) => {
                    return Err(ScriptError::Parse {
                        line: line_no,
                        message: e.to_string(),
                    });
                }
            };

            summary.commands += 1;
            if !self.execute(line_no, cmd)? {
                summary.rejected += 1;
            }
        }

        self.out.flush()?;
        info!(
            commands = summary.commands,
            rejected = summary.rejected,
            "script finished"
        );
        Ok(summary)
    }

    /// Execute one command.
    ///
    /// Returns `Ok(false)` if the station rejected the operation and the
    /// rejection was skipped.
    pub fn execute(&mut self, line: usize, cmd: Command) -> Result<bool, ScriptError> {
        trace!(line, command = %cmd, "executing");

        let outcome = match cmd {
            Command::Open { platforms } => Station::try_new(platforms).map(|station| {
                self.station = station;
            }),
            Command::Arrive { platform, power } => self.station.arrive(platform, power),
            Command::Depart { platform } => self.station.depart(platform).map(drop),
            Command::Add { platform, weight } => self.station.append_car(platform, weight),
            Command::Remove { platform, weight } => self
                .station
                .remove_cars_by_weight(platform, weight)
                .map(drop),
            Command::Move {
                platform_a,
                pos_a,
                count,
                platform_b,
                pos_b,
            } => self
                .station
                .move_cars(platform_a, pos_a, count, platform_b, pos_b),
            Command::Order { platform } => self.station.order_train(platform),
            Command::Express => {
                let found = self.station.find_express();
                writeln!(self.out, "express: {}", PlatformOrNone(found))?;
                Ok(())
            }
            Command::Overload => {
                let found = self.station.find_overload();
                writeln!(self.out, "overload: {}", PlatformOrNone(found))?;
                Ok(())
            }
            Command::Optimal => {
                let found = self.station.find_optimal();
                writeln!(self.out, "optimal: {}", PlatformOrNone(found))?;
                Ok(())
            }
            Command::Heaviest { count } => {
                match self.station.find_heaviest_sequence(count) {
                    Some(seq) => {
                        let cars: Vec<String> = seq.cars.iter().map(|c| c.to_string()).collect();
                        writeln!(
                            self.out,
                            "heaviest: {} at {}: {}",
                            seq.platform,
                            seq.start + 1,
                            cars.join("-")
                        )?;
                    }
                    None => writeln!(self.out, "heaviest: none")?,
                }
                Ok(())
            }
            Command::Fix => {
                match self.station.fix_overload() {
                    FixOutcome::Balanced => writeln!(self.out, "fix: balanced")?,
                    FixOutcome::Fixed { platform, car, .. } => writeln!(
                        self.out,
                        "fix: removed {} from {platform}",
                        car.weight()
                    )?,
                    FixOutcome::Unfixable { platform } => {
                        writeln!(self.out, "fix: unfixable {platform}")?
                    }
                }
                Ok(())
            }
            Command::Show => {
                self.station.show(&mut self.out)?;
                Ok(())
            }
            Command::Snapshot => {
                serde_json::to_writer(&mut self.out, &self.station.snapshot())?;
                writeln!(self.out)?;
                Ok(())
            }
        };

        self.settle(line, cmd, outcome)
    }

    fn settle(
        &mut self,
        line: usize,
        cmd: Command,
        outcome: Result<(), StationError>,
    ) -> Result<bool, ScriptError> {
        match outcome {
            Ok(()) => {
                if cmd.mutates() && self.config.show_after_each {
                    self.station.show(&mut self.out)?;
                }
                Ok(true)
            }
            Err(source) if self.config.stop_on_error => {
                Err(ScriptError::Rejected { line, source })
            }
            Err(error) => {
                debug!(line, command = %cmd, %error, "skipping rejected command");
                Ok(false)
            }
        }
    }
}

/// Formats a platform index, or `none`.
struct PlatformOrNone(Option<usize>);

impl std::fmt::Display for PlatformOrNone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(platform) => write!(f, "{platform}"),
            None => f.write_str("none"),
        }
    }
}
