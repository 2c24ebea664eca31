use std::error::Error;
use std::fmt;

/// Amount a single [`PrecisionChange`] moves the iteration depth.
pub const PRECISION_STEP: u32 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrecisionError {
    Zero,
}

impl fmt::Display for PrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "precision needs at least one iteration"),
        }
    }
}

impl Error for PrecisionError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrecisionChange {
    Increase,
    Decrease,
}

/// Maximum escape-time iterations per pixel. Never below 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u32);

impl Precision {
    pub fn new(max_iterations: u32) -> Result<Self, PrecisionError> {
        if max_iterations == 0 {
            return Err(PrecisionError::Zero);
        }

        Ok(Self(max_iterations))
    }

    /// Like [`Precision::new`] but lifts 0 to the floor of 1.
    #[must_use]
    pub fn clamped(max_iterations: u32) -> Self {
        Self(max_iterations.max(1))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn apply(self, change: PrecisionChange) -> Self {
        match change {
            PrecisionChange::Increase => Self(self.0.saturating_add(PRECISION_STEP)),
            PrecisionChange::Decrease => Self::clamped(self.0.saturating_sub(PRECISION_STEP)),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
