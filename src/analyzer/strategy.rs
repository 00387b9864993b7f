use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of named weight profiles
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Balanced across all four factors (the default)
    #[default]
    SmartBalance,
    /// Favor low-effort tasks
    FastestWins,
    /// Favor high-importance tasks
    HighImpact,
    /// Favor imminent deadlines
    DeadlineDriven,
}

/// Weights applied to the four factor scores; each profile sums to 1.0
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StrategyWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Resolve a strategy name. Unrecognized names silently fall back to
    /// `smart_balance`; callers can see which profile actually applied in
    /// the result's `strategy_used`.
    pub fn resolve(name: &str) -> Self {
        match name {
            "smart_balance" => Strategy::SmartBalance,
            "fastest_wins" => Strategy::FastestWins,
            "high_impact" => Strategy::HighImpact,
            "deadline_driven" => Strategy::DeadlineDriven,
            _ => Strategy::SmartBalance,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    pub fn weights(self) -> StrategyWeights {
        match self {
            Strategy::SmartBalance => StrategyWeights {
                urgency: 0.4,
                importance: 0.3,
                effort: 0.2,
                dependencies: 0.1,
            },
            Strategy::FastestWins => StrategyWeights {
                urgency: 0.2,
                importance: 0.2,
                effort: 0.6,
                dependencies: 0.0,
            },
            Strategy::HighImpact => StrategyWeights {
                urgency: 0.2,
                importance: 0.6,
                effort: 0.1,
                dependencies: 0.1,
            },
            Strategy::DeadlineDriven => StrategyWeights {
                urgency: 0.7,
                importance: 0.2,
                effort: 0.1,
                dependencies: 0.0,
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
