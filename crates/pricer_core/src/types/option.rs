//! Call/put selection for European options.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// European option side.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert!(call.is_call());
/// assert_eq!(call.opposite(), OptionType::Put);
/// assert_eq!(OptionType::Put.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: max(S - K, 0).
    #[default]
    Call,
    /// Right to sell at the strike: max(K - S, 0).
    Put,
}

impl OptionType {
    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns the other side (call ↔ put).
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }
}

impl From<bool> for OptionType {
    /// `true` maps to `Call`, `false` to `Put`.
    #[inline]
    fn from(is_call: bool) -> Self {
        if is_call {
            OptionType::Call
        } else {
            OptionType::Put
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(format!("Unknown option type: {} (expected call or put)", other)),
        }
    }
}
