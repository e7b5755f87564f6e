//! Signal types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional index arbitrage advice
///
/// Serializes as the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArbitrageAdvice {
    /// Futures trade above fair value
    #[serde(rename = "ES overpriced vs fair value: short ES, buy SPX")]
    ShortFutures,
    /// Futures trade below fair value
    #[serde(rename = "ES underpriced vs fair value: buy ES, short SPX")]
    LongFutures,
    /// Futures trade exactly at fair value
    #[serde(rename = "ES at fair value: no arbitrage")]
    NoAction,
}

impl ArbitrageAdvice {
    /// Message shown to the caller
    pub fn message(&self) -> &'static str {
        match self {
            Self::ShortFutures => "ES overpriced vs fair value: short ES, buy SPX",
            Self::LongFutures => "ES underpriced vs fair value: buy ES, short SPX",
            Self::NoAction => "ES at fair value: no arbitrage",
        }
    }

    /// Short label for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortFutures => "short_futures",
            Self::LongFutures => "long_futures",
            Self::NoAction => "no_action",
        }
    }
}

impl fmt::Display for ArbitrageAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
