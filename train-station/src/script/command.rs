//! Station script commands.
//!
//! A script has one command per line. Blank lines and lines starting with
//! `#` are ignored; keywords are case-insensitive.
//!
//! ```text
//! open 3
//! arrive 0 100
//! add 0 40
//! move 0 1 1 1 1
//! show
//! ```

use std::fmt;

/// Error returned when a script line is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct InvalidCommand {
    reason: String,
}

impl InvalidCommand {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A single station script command.
///
/// Platform and position arguments are written as integers. Negative values
/// are accepted by the parser and mapped past every valid index, so the
/// station rejects them like any other out-of-range argument.
///
/// # Examples
///
/// ```
/// use train_station::script::Command;
///
/// let cmd = Command::parse("arrive 2 150").unwrap();
/// assert_eq!(cmd, Some(Command::Arrive { platform: 2, power: 150 }));
///
/// // Comments and blank lines are not commands
/// assert_eq!(Command::parse("# setup").unwrap(), None);
/// assert_eq!(Command::parse("   ").unwrap(), None);
///
/// // Unknown keywords are rejected
/// assert!(Command::parse("launch 1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the station with a new one of the given size
    Open { platforms: usize },
    Arrive { platform: usize, power: i64 },
    Depart { platform: usize },
    Add { platform: usize, weight: i64 },
    Remove { platform: usize, weight: i64 },
    Move {
        platform_a: usize,
        pos_a: usize,
        count: usize,
        platform_b: usize,
        pos_b: usize,
    },
    Order { platform: usize },
    Express,
    Overload,
    Optimal,
    Heaviest { count: usize },
    Fix,
    Show,
    Snapshot,
}

impl Command {
    /// Parse one script line.
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>, InvalidCommand> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let keyword = keyword.to_ascii_lowercase();
        let args: Vec<&str> = tokens.collect();

        let cmd = match keyword.as_str() {
            "open" => {
                let [platforms] = expect_args::<1>(&keyword, &args)?;
                Command::Open {
                    platforms: platforms.parse().map_err(|_| {
                        InvalidCommand::new(format!(
                            "invalid platform count `{platforms}` for `open`"
                        ))
                    })?,
                }
            }
            "arrive" => {
                let [platform, power] = expect_args::<2>(&keyword, &args)?;
                Command::Arrive {
                    platform: index(platform)?,
                    power: integer(power)?,
                }
            }
            "depart" => {
                let [platform] = expect_args::<1>(&keyword, &args)?;
                Command::Depart {
                    platform: index(platform)?,
                }
            }
            "add" => {
                let [platform, weight] = expect_args::<2>(&keyword, &args)?;
                Command::Add {
                    platform: index(platform)?,
                    weight: integer(weight)?,
                }
            }
            "remove" => {
                let [platform, weight] = expect_args::<2>(&keyword, &args)?;
                Command::Remove {
                    platform: index(platform)?,
                    weight: integer(weight)?,
                }
            }
            "move" => {
                let [platform_a, pos_a, count, platform_b, pos_b] =
                    expect_args::<5>(&keyword, &args)?;
                Command::Move {
                    platform_a: index(platform_a)?,
                    pos_a: index(pos_a)?,
                    count: index(count)?,
                    platform_b: index(platform_b)?,
                    pos_b: index(pos_b)?,
                }
            }
            "order" => {
                let [platform] = expect_args::<1>(&keyword, &args)?;
                Command::Order {
                    platform: index(platform)?,
                }
            }
            "heaviest" => {
                let [count] = expect_args::<1>(&keyword, &args)?;
                Command::Heaviest {
                    count: index(count)?,
                }
            }
            "express" => no_args(Command::Express, &keyword, &args)?,
            "overload" => no_args(Command::Overload, &keyword, &args)?,
            "optimal" => no_args(Command::Optimal, &keyword, &args)?,
            "fix" => no_args(Command::Fix, &keyword, &args)?,
            "show" => no_args(Command::Show, &keyword, &args)?,
            "snapshot" => no_args(Command::Snapshot, &keyword, &args)?,
            other => return Err(InvalidCommand::new(format!("unknown command `{other}`"))),
        };

        Ok(Some(cmd))
    }

    /// Returns true if the command can change the station.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Open { .. }
                | Command::Arrive { .. }
                | Command::Depart { .. }
                | Command::Add { .. }
                | Command::Remove { .. }
                | Command::Move { .. }
                | Command::Order { .. }
                | Command::Fix
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Open { platforms } => write!(f, "open {platforms}"),
            Command::Arrive { platform, power } => write!(f, "arrive {platform} {power}"),
            Command::Depart { platform } => write!(f, "depart {platform}"),
            Command::Add { platform, weight } => write!(f, "add {platform} {weight}"),
            Command::Remove { platform, weight } => write!(f, "remove {platform} {weight}"),
            Command::Move {
                platform_a,
                pos_a,
                count,
                platform_b,
                pos_b,
            } => write!(f, "move {platform_a} {pos_a} {count} {platform_b} {pos_b}"),
            Command::Order { platform } => write!(f, "order {platform}"),
            Command::Express => f.write_str("express"),
            Command::Overload => f.write_str("overload"),
            Command::Optimal => f.write_str("optimal"),
            Command::Heaviest { count } => write!(f, "heaviest {count}"),
            Command::Fix => f.write_str("fix"),
            Command::Show => f.write_str("show"),
            Command::Snapshot => f.write_str("snapshot"),
        }
    }
}

fn expect_args<'a, const N: usize>(
    keyword: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], InvalidCommand> {
    <[&str; N]>::try_from(args).map_err(|_| {
        InvalidCommand::new(format!(
            "`{keyword}` takes {N} argument{}, got {}",
            if N == 1 { "" } else { "s" },
            args.len()
        ))
    })
}

fn no_args(cmd: Command, keyword: &str, args: &[&str]) -> Result<Command, InvalidCommand> {
    expect_args::<0>(keyword, args).map(|[]| cmd)
}

fn integer(token: &str) -> Result<i64, InvalidCommand> {
    token
        .parse()
        .map_err(|_| InvalidCommand::new(format!("expected an integer, got `{token}`")))
}

/// Parse a platform, position or count. Negative values saturate to
/// `usize::MAX`, which no station accepts.
fn index(token: &str) -> Result<usize, InvalidCommand> {
    let value = integer(token)?;
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}
