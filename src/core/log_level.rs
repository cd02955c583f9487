//! Log level definitions and the shared dynamic threshold

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI32, Ordering};

/// Severity of a log record.
///
/// Levels are plain integers ordered by rank. The four named levels leave
/// gaps so that intermediate levels (e.g. `Level(2)`) can be used without
/// renumbering; any `i32` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    /// Integer rank of this level
    #[inline]
    pub const fn rank(self) -> i32 {
        self.0
    }

    /// The named level this level is displayed relative to, and the offset from it
    fn base(self) -> (&'static str, i32) {
        if self < Level::INFO {
            ("DEBUG", self.0 - Level::DEBUG.0)
        } else if self < Level::WARN {
            ("INFO", self.0 - Level::INFO.0)
        } else if self < Level::ERROR {
            ("WARN", self.0 - Level::WARN.0)
        } else {
            ("ERROR", self.0 - Level::ERROR.0)
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self.base().0 {
            "DEBUG" => Blue,
            "INFO" => Green,
            "WARN" => Yellow,
            _ => Red,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<i32> for Level {
    fn from(rank: i32) -> Self {
        Level(rank)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, offset) = self.base();
        if offset == 0 {
            f.write_str(name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}

impl FromStr for Level {
    type Err = String;

    /// Parses `INFO`, `warn`, `WARNING`, `ERROR+2`, `debug-1` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid log level: '{}'", s);
        let upper = s.trim().to_uppercase();
        let split = upper.find(|c: char| c == '+' || c == '-').unwrap_or(upper.len());
        let (name, offset) = upper.split_at(split);

        let base = match name {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" | "WARNING" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => return Err(invalid()),
        };

        if offset.is_empty() {
            return Ok(base);
        }
        let offset: i32 = offset.parse().map_err(|_| invalid())?;
        base.0.checked_add(offset).map(Level).ok_or_else(invalid)
    }
}

/// A level that can be read and replaced concurrently.
///
/// Handlers hold an `Arc<LevelVar>` and compare every record against its
/// current value, so changing it takes effect for every logger sharing it
/// without re-creating them.
#[derive(Debug)]
pub struct LevelVar {
    rank: AtomicI32,
}

impl LevelVar {
    pub const fn new(level: Level) -> Self {
        Self {
            rank: AtomicI32::new(level.0),
        }
    }

    #[inline]
    pub fn get(&self) -> Level {
        Level(self.rank.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, level: Level) {
        self.rank.store(level.0, Ordering::Relaxed);
    }
}

impl Default for LevelVar {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

impl fmt::Display for LevelVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelVar({})", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_levels_display() {
        assert_eq!(Level::DEBUG.to_string(), "DEBUG");
        assert_eq!(Level::INFO.to_string(), "INFO");
        assert_eq!(Level::WARN.to_string(), "WARN");
        assert_eq!(Level::ERROR.to_string(), "ERROR");
    }

    #[test]
    fn test_intermediate_levels_display() {
        assert_eq!(Level(2).to_string(), "INFO+2");
        assert_eq!(Level(-6).to_string(), "DEBUG-2");
        assert_eq!(Level(7).to_string(), "WARN+3");
        assert_eq!(Level(12).to_string(), "ERROR+4");
    }

    #[test]
    fn test_parse() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::INFO);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::WARN);
        assert_eq!("INFO+2".parse::<Level>().unwrap(), Level(2));
        assert_eq!("debug-1".parse::<Level>().unwrap(), Level(-5));
        assert!("verbose".parse::<Level>().is_err());
        assert!("INFO+x".parse::<Level>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::WARN);
        assert!(Level::WARN < Level::ERROR);
        assert!(Level(1) > Level::INFO && Level(1) < Level::WARN);
    }

    #[test]
    fn test_level_var() {
        let var = LevelVar::default();
        assert_eq!(var.get(), Level::INFO);

        var.set(Level::ERROR);
        assert_eq!(var.get(), Level::ERROR);

        var.set(Level(-100));
        assert_eq!(var.get(), Level(-100));
    }
}
