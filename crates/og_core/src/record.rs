//! Canonical athlete-event record and its enumerated columns.

use core::fmt;
use core::ops::AddAssign;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sex {
    M,
    F,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Sex::M),
            "F" => Ok(Sex::F),
            _ => Err(CoreError::InvalidSex),
        }
    }
}

/// Medal awarded in one event. Ordered Gold < Silver < Bronze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medal {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(Medal::Gold),
            "silver" => Ok(Medal::Silver),
            "bronze" => Ok(Medal::Bronze),
            _ => Err(CoreError::InvalidMedal),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    Summer,
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => f.write_str("Summer"),
            Season::Winter => f.write_str("Winter"),
        }
    }
}

impl FromStr for Season {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summer" => Ok(Season::Summer),
            "winter" => Ok(Season::Winter),
            _ => Err(CoreError::InvalidSeason),
        }
    }
}

/// One (athlete, event, Games edition) participation after the region join.
///
/// The Gold/Silver/Bronze indicator columns are derived from `medal`, so at
/// most one of them is ever set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    pub name: String,
    pub sex: Sex,
    pub age: Option<u16>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    pub games: String,
    pub year: i32,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    pub region: Option<String>,
}

impl Record {
    #[inline]
    pub fn gold(&self) -> u32 {
        u32::from(self.medal == Some(Medal::Gold))
    }

    #[inline]
    pub fn silver(&self) -> u32 {
        u32::from(self.medal == Some(Medal::Silver))
    }

    #[inline]
    pub fn bronze(&self) -> u32 {
        u32::from(self.medal == Some(Medal::Bronze))
    }

    #[inline]
    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }

    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// One-hot medal vector of this row.
    pub fn medal_counts(&self) -> MedalCounts {
        MedalCounts { gold: self.gold(), silver: self.silver(), bronze: self.bronze() }
    }
}

/// Summed one-hot medal columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MedalCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalCounts {
    #[inline]
    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

impl AddAssign for MedalCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.gold += rhs.gold;
        self.silver += rhs.silver;
        self.bronze += rhs.bronze;
    }
}
