use serde::{Deserialize, Serialize};
use std::fmt;

/// A docking station in the two-node system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Olin,
    Wellesley,
}

impl Location {
    pub fn opposite(self) -> Self {
        match self {
            Location::Olin => Location::Wellesley,
            Location::Wellesley => Location::Olin,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Olin => write!(f, "Olin"),
            Location::Wellesley => write!(f, "Wellesley"),
        }
    }
}

/// Seasonal classification of a period. Alters the probability bands
/// used for action selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Summer,
}

/// What the selection policy decided to attempt for one period.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlannedMove {
    Move {
        count: u32,
        from: Location,
        to: Location,
    },
    Stay,
}

/// What actually happened after applying a planned move to the ledger.
///
/// Insufficient inventory is a normal, reportable outcome here, never an
/// `Err` — the simulation records it and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Moved {
        count: u32,
        from: Location,
        to: Location,
    },
    NotEnoughBikes {
        at: Location,
        requested: u32,
    },
    NoAction,
}

impl fmt::Display for TransferOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferOutcome::Moved { count, from, to } => {
                let noun = if *count == 1 { "bike" } else { "bikes" };
                write!(f, "Moved {} {} from {} to {}", count, noun, from, to)
            }
            TransferOutcome::NotEnoughBikes { at, requested } => {
                write!(f, "Not enough bikes at {} to move {}", at, requested)
            }
            TransferOutcome::NoAction => write!(f, "No bikes were shared"),
        }
    }
}

/// One discrete simulated unit of time. The core treats the label as
/// opaque text; calendar arithmetic lives in the adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub label: String,
    pub season: Season,
}

impl Period {
    pub fn new(label: impl Into<String>, season: Season) -> Self {
        Self {
            label: label.into(),
            season,
        }
    }
}

/// One post-action snapshot of the ledger, appended per period.
///
/// Field renames fix the persisted CSV column names, which existing
/// consumers of the output depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    #[serde(rename = "Date")]
    pub label: String,
    #[serde(rename = "Olin Bikes")]
    pub olin: u32,
    #[serde(rename = "Wellesley Bikes")]
    pub wellesley: u32,
    #[serde(rename = "Action")]
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        let moved = TransferOutcome::Moved {
            count: 1,
            from: Location::Olin,
            to: Location::Wellesley,
        };
        assert_eq!(moved.to_string(), "Moved 1 bike from Olin to Wellesley");

        let moved_two = TransferOutcome::Moved {
            count: 2,
            from: Location::Wellesley,
            to: Location::Olin,
        };
        assert_eq!(moved_two.to_string(), "Moved 2 bikes from Wellesley to Olin");

        let short = TransferOutcome::NotEnoughBikes {
            at: Location::Olin,
            requested: 2,
        };
        assert_eq!(short.to_string(), "Not enough bikes at Olin to move 2");

        assert_eq!(TransferOutcome::NoAction.to_string(), "No bikes were shared");
    }

    #[test]
    fn test_location_opposite() {
        assert_eq!(Location::Olin.opposite(), Location::Wellesley);
        assert_eq!(Location::Wellesley.opposite(), Location::Olin);
    }
}
