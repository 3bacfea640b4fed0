//! Challenges and gateways - the two axes of the generator

use serde::{Deserialize, Serialize};
use vortexmath_core::{Digit, Error, Result};

/// The nine challenge topics, numbered 1-9.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Challenge {
    Energy = 1,
    Water = 2,
    Food = 3,
    Health = 4,
    Education = 5,
    Shelter = 6,
    Climate = 7,
    Communication = 8,
    Peace = 9,
}

impl Challenge {
    pub const ALL: [Challenge; 9] = [
        Challenge::Energy,
        Challenge::Water,
        Challenge::Food,
        Challenge::Health,
        Challenge::Education,
        Challenge::Shelter,
        Challenge::Climate,
        Challenge::Communication,
        Challenge::Peace,
    ];

    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            1..=9 => Ok(Self::ALL[usize::from(index) - 1]),
            _ => Err(Error::UnknownChallenge(index)),
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn topic(self) -> &'static str {
        match self {
            Challenge::Energy => "Energy",
            Challenge::Water => "Water",
            Challenge::Food => "Food",
            Challenge::Health => "Health",
            Challenge::Education => "Education",
            Challenge::Shelter => "Shelter",
            Challenge::Climate => "Climate",
            Challenge::Communication => "Communication",
            Challenge::Peace => "Peace",
        }
    }

    pub fn digit(self) -> Digit {
        Digit::wrapping(i64::from(self.index()))
    }
}

impl std::fmt::Display for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.topic())
    }
}

/// One of the axis multipliers 3, 6, 9.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Gateway(u8);

impl Gateway {
    pub const ALL: [Gateway; 3] = [Gateway(3), Gateway(6), Gateway(9)];

    pub fn new(value: u8) -> Result<Self> {
        match value {
            3 | 6 | 9 => Ok(Self(value)),
            _ => Err(Error::InvalidGateway(value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn digit(self) -> Digit {
        Digit::wrapping(i64::from(self.0))
    }
}

impl std::fmt::Display for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Gateway {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Gateway> for u8 {
    fn from(g: Gateway) -> u8 {
        g.0
    }
}
