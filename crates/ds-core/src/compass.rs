//! Eight-point compass headings.

use std::fmt;

use crate::geo::normalize_degrees;

/// The nearest of the eight principal compass points to a bearing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cardinal {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Cardinal {
    /// All points in clockwise order starting at north.
    pub const ALL: [Cardinal; 8] = [
        Cardinal::N,
        Cardinal::NE,
        Cardinal::E,
        Cardinal::SE,
        Cardinal::S,
        Cardinal::SW,
        Cardinal::W,
        Cardinal::NW,
    ];

    /// Map a bearing in degrees to the nearest compass point by rounding
    /// `bearing / 45` modulo 8.  Any real angle is accepted.
    pub fn from_bearing(bearing_deg: f64) -> Cardinal {
        let sector = (normalize_degrees(bearing_deg) / 45.0).round() as usize % 8;
        Self::ALL[sector]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinal::N  => "N",
            Cardinal::NE => "NE",
            Cardinal::E  => "E",
            Cardinal::SE => "SE",
            Cardinal::S  => "S",
            Cardinal::SW => "SW",
            Cardinal::W  => "W",
            Cardinal::NW => "NW",
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
