//! The fixed 12-symbol letter grade scale

use std::fmt;
use std::str::FromStr;

/// A recognised letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    /// A (4.00)
    A,
    /// A- (3.67)
    AMinus,
    /// B+ (3.33)
    BPlus,
    /// B (3.00)
    B,
    /// B- (2.67)
    BMinus,
    /// C+ (2.33)
    CPlus,
    /// C (2.00)
    C,
    /// C- (1.67)
    CMinus,
    /// D+ (1.33)
    DPlus,
    /// D (1.00)
    D,
    /// D- (0.67)
    DMinus,
    /// F (0.00)
    F,
}

impl LetterGrade {
    /// Every grade, best first
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// Grade points on the 0.0 to 4.0 scale
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 4.00,
            Self::AMinus => 3.67,
            Self::BPlus => 3.33,
            Self::B => 3.00,
            Self::BMinus => 2.67,
            Self::CPlus => 2.33,
            Self::C => 2.00,
            Self::CMinus => 1.67,
            Self::DPlus => 1.33,
            Self::D => 1.00,
            Self::DMinus => 0.67,
            Self::F => 0.00,
        }
    }

    /// Canonical upper-case symbol (e.g., "B+")
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }

    /// Look up an exact symbol after upper-casing. No trimming.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let upper = symbol.to_uppercase();
        Self::ALL.into_iter().find(|g| g.symbol() == upper)
    }

    /// Comma-separated list of valid symbols, for error messages
    #[must_use]
    pub fn valid_symbols() -> String {
        Self::ALL
            .iter()
            .map(|g| g.symbol())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for LetterGrade {
    type Err = String;

    /// Parse user input: surrounding whitespace is ignored and case does not matter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s.trim()).ok_or_else(|| {
            format!(
                "Invalid letter grade '{s}'. Valid grades: {}",
                Self::valid_symbols()
            )
        })
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Points for a stored grade symbol, or `None` if it is not on the scale.
#[must_use]
pub fn grade_points(symbol: &str) -> Option<f64> {
    LetterGrade::from_symbol(symbol).map(LetterGrade::points)
}
