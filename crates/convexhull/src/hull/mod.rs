//! Hull builders: Graham's scan and Jarvis' march, plus the mode selector.
//!
//! Purpose
//! - Turn a point-set snapshot into a fresh CCW `Hull`. Nothing is cached or
//!   updated incrementally; callers rebuild on every request.
//!
//! Shared contract
//! - Input is a borrowed slice; the builders sort and deduplicate a private copy.
//! - Fewer than 3 input points give an empty hull; collinear input gives the two
//!   extreme points. Neither is drawn (`Hull::polygon` is `None`).
//! - Both builders return the same vertex set (different start vertex).
//!
//! Note on structure
//! - `graham.rs` (monotone chains) and `jarvis.rs` (gift wrapping) are independent;
//!   shared predicates and orders live in `crate::geom2`.

mod graham;
mod jarvis;

pub use graham::graham_scan;
pub use jarvis::jarvis_march;

use std::fmt;
use std::str::FromStr;

use crate::geom2::{Hull, HullError, Point};

/// Two mutually exclusive hull algorithms (the viewer's mode selector).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    JarvisMarch,
    GrahamScan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::JarvisMarch, Algorithm::GrahamScan];

    /// Run the selected builder.
    #[inline]
    pub fn build(self, points: &[Point]) -> Result<Hull, HullError> {
        match self {
            Algorithm::JarvisMarch => jarvis_march(points),
            Algorithm::GrahamScan => graham_scan(points),
        }
    }

    /// Human-readable name (radio-button label).
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::JarvisMarch => "Jarvis' March",
            Algorithm::GrahamScan => "Graham's Scan",
        }
    }

    /// Short machine name, accepted by `FromStr`.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::JarvisMarch => "jarvis",
            Algorithm::GrahamScan => "graham",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown hull algorithm {:?} (expected \"jarvis\" or \"graham\")",
            self.input
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jarvis" | "jarvis-march" | "jarvis_march" | "gift-wrapping" => {
                Ok(Algorithm::JarvisMarch)
            }
            "graham" | "graham-scan" | "graham_scan" => Ok(Algorithm::GrahamScan),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests;
