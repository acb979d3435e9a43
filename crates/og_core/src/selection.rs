//! Filter selections (with the `"Overall"` sentinel) and categorical columns.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::record::Record;

/// Literal used by callers to mean "no filter on this axis".
pub const OVERALL: &str = "Overall";

/// Either every value of an axis, or exactly one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selection<T> {
    Overall,
    Only(T),
}

pub type YearSelection = Selection<i32>;
pub type RegionSelection = Selection<String>;
pub type SportSelection = Selection<String>;

impl<T> Selection<T> {
    #[inline]
    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    #[inline]
    pub fn as_only(&self) -> Option<&T> {
        match self {
            Selection::Overall => None,
            Selection::Only(v) => Some(v),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    /// `Overall` admits everything; `Only(v)` admits exactly `v`.
    #[inline]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::Overall => true,
            Selection::Only(v) => v == value,
        }
    }
}

impl Selection<String> {
    /// Filter against a nullable column: a null value is only admitted by `Overall`.
    #[inline]
    pub fn admits_opt(&self, value: Option<&str>) -> bool {
        match self {
            Selection::Overall => true,
            Selection::Only(v) => value == Some(v.as_str()),
        }
    }

    pub fn only(v: impl Into<String>) -> Self {
        Selection::Only(v.into())
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overall => f.write_str(OVERALL),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

impl FromStr for Selection<String> {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CoreError::Empty("selection"));
        }
        if s == OVERALL {
            Ok(Selection::Overall)
        } else {
            Ok(Selection::Only(s.to_string()))
        }
    }
}

impl FromStr for Selection<i32> {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == OVERALL {
            return Ok(Selection::Overall);
        }
        s.parse::<i32>().map(Selection::Only).map_err(|_| CoreError::InvalidYear)
    }
}

/// Categorical column that can be counted per year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dimension {
    Region,
    Event,
    Name,
    Sport,
    Noc,
    City,
    Team,
}

impl Dimension {
    /// Column value of `r`; `None` only for an unresolved region.
    pub fn value<'a>(&self, r: &'a Record) -> Option<&'a str> {
        match self {
            Dimension::Region => r.region.as_deref(),
            Dimension::Event => Some(&r.event),
            Dimension::Name => Some(&r.name),
            Dimension::Sport => Some(&r.sport),
            Dimension::Noc => Some(&r.noc),
            Dimension::City => Some(&r.city),
            Dimension::Team => Some(&r.team),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Region => "region",
            Dimension::Event => "event",
            Dimension::Name => "name",
            Dimension::Sport => "sport",
            Dimension::Noc => "noc",
            Dimension::City => "city",
            Dimension::Team => "team",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" | "nation" | "nations" => Ok(Dimension::Region),
            "event" | "events" => Ok(Dimension::Event),
            "name" | "athlete" | "athletes" => Ok(Dimension::Name),
            "sport" | "sports" => Ok(Dimension::Sport),
            "noc" => Ok(Dimension::Noc),
            "city" | "host" => Ok(Dimension::City),
            "team" => Ok(Dimension::Team),
            _ => Err(CoreError::UnknownDimension),
        }
    }
}
