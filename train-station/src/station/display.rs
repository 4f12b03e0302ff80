//! Text dump of the station.
//!
//! One line per platform:
//!
//! ```text
//! 0: (100)-|40|-|30|
//! 1: (80)
//! 2:
//! ```

use std::fmt;
use std::io;

use super::Station;

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, slot) in self.platforms().iter().enumerate() {
            write!(f, "{idx}: ")?;
            if let Some(train) = slot {
                write!(f, "({})", train.power())?;
                for car in train.cars() {
                    write!(f, "-{car}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Station {
    /// Write the text dump of every platform.
    pub fn show<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}
