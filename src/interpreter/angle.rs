use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The unit trigonometric functions work in.
///
/// The mode only matters at the boundary of `sin`, `cos`, `tan` (argument
/// conversion) and `asin`, `acos`, `atan` (result conversion). Tokenizing and
/// parsing never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AngleMode {
    /// Degrees; a full turn is 360.
    #[default]
    #[serde(rename = "DEG")]
    Deg,
    /// Radians; a full turn is 2π.
    #[serde(rename = "RAD")]
    Rad,
}

impl AngleMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Deg => Self::Rad,
            Self::Rad => Self::Deg,
        }
    }

    /// Converts an angle written in this mode to radians.
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Deg => angle.to_radians(),
            Self::Rad => angle,
        }
    }

    /// Converts an angle in radians to this mode.
    #[must_use]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Deg => radians.to_degrees(),
            Self::Rad => radians,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deg => f.write_str("deg"),
            Self::Rad => f.write_str("rad"),
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    /// Parses `deg`/`rad` (also `degrees`/`radians`), ignoring case.
    ///
    /// # Example
    /// ```
    /// use reckon::AngleMode;
    ///
    /// assert_eq!("RAD".parse::<AngleMode>(), Ok(AngleMode::Rad));
    /// assert!("grad".parse::<AngleMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(Self::Deg),
            "rad" | "radian" | "radians" => Ok(Self::Rad),
            other => Err(format!("unknown angle mode '{other}', expected 'deg' or 'rad'")),
        }
    }
}
