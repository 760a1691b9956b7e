use crate::domain::model::{Location, PlannedMove, Season, TransferOutcome};

/// In-memory record of bike counts at the two stations.
///
/// Both counters are unsigned, so non-negativity holds by construction;
/// every transfer moves bikes rather than creating or destroying them, so
/// `total()` is conserved across any sequence of operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BikeLedger {
    olin: u32,
    wellesley: u32,
}

impl BikeLedger {
    pub fn new(olin: u32, wellesley: u32) -> Self {
        Self { olin, wellesley }
    }

    pub fn count(&self, at: Location) -> u32 {
        match at {
            Location::Olin => self.olin,
            Location::Wellesley => self.wellesley,
        }
    }

    pub fn total(&self) -> u32 {
        self.olin + self.wellesley
    }

    fn slot(&mut self, at: Location) -> &mut u32 {
        match at {
            Location::Olin => &mut self.olin,
            Location::Wellesley => &mut self.wellesley,
        }
    }

    /// Move `amount` bikes from one station to the other, if available.
    ///
    /// Insufficient inventory leaves the ledger untouched and reports
    /// `NotEnoughBikes`; it is not an error.
    pub fn transfer(&mut self, from: Location, to: Location, amount: u32) -> TransferOutcome {
        debug_assert_ne!(from, to);
        debug_assert!(amount > 0);

        if self.count(from) < amount {
            return TransferOutcome::NotEnoughBikes {
                at: from,
                requested: amount,
            };
        }

        *self.slot(from) -= amount;
        *self.slot(to) += amount;
        TransferOutcome::Moved {
            count: amount,
            from,
            to,
        }
    }

    pub fn move_one_to_wellesley(&mut self) -> TransferOutcome {
        self.transfer(Location::Olin, Location::Wellesley, 1)
    }

    pub fn move_one_to_olin(&mut self) -> TransferOutcome {
        self.transfer(Location::Wellesley, Location::Olin, 1)
    }

    /// Apply a policy decision to the ledger.
    pub fn apply(&mut self, planned: PlannedMove) -> TransferOutcome {
        match planned {
            PlannedMove::Move { count, from, to } => self.transfer(from, to, count),
            PlannedMove::Stay => TransferOutcome::NoAction,
        }
    }
}

/// Select the transfer to attempt for one period, given a uniform draw in
/// [0, 1) and the period's season. Pure function of its inputs.
///
/// Bands are half-open and left-inclusive; a boundary draw belongs to the
/// band above it. Summer sees more relocation activity and larger batches:
///
/// | season | draw range   | action                |
/// |--------|--------------|-----------------------|
/// | Winter | [0, 0.20)    | move 1 Wellesley→Olin |
/// | Winter | [0.20, 0.60) | move 1 Olin→Wellesley |
/// | Winter | [0.60, 1.0)  | no action             |
/// | Summer | [0, 0.35)    | move 1 Wellesley→Olin |
/// | Summer | [0.35, 0.65) | move 1 Olin→Wellesley |
/// | Summer | [0.65, 0.85) | move 2 Wellesley→Olin |
/// | Summer | [0.85, 1.0)  | move 2 Olin→Wellesley |
pub fn choose_action(draw: f64, season: Season) -> PlannedMove {
    use Location::{Olin, Wellesley};

    match season {
        Season::Winter => {
            if draw < 0.20 {
                PlannedMove::Move {
                    count: 1,
                    from: Wellesley,
                    to: Olin,
                }
            } else if draw < 0.60 {
                PlannedMove::Move {
                    count: 1,
                    from: Olin,
                    to: Wellesley,
                }
            } else {
                PlannedMove::Stay
            }
        }
        Season::Summer => {
            if draw < 0.35 {
                PlannedMove::Move {
                    count: 1,
                    from: Wellesley,
                    to: Olin,
                }
            } else if draw < 0.65 {
                PlannedMove::Move {
                    count: 1,
                    from: Olin,
                    to: Wellesley,
                }
            } else if draw < 0.85 {
                PlannedMove::Move {
                    count: 2,
                    from: Wellesley,
                    to: Olin,
                }
            } else {
                PlannedMove::Move {
                    count: 2,
                    from: Olin,
                    to: Wellesley,
                }
            }
        }
    }
}

/// Season-free band table: the degenerate case used by step-count runs
/// where no calendar is in play. [0, 0.35) → 1 to Olin, [0.35, 0.80) →
/// 1 to Wellesley, [0.80, 1.0) → nothing.
pub fn choose_action_flat(draw: f64) -> PlannedMove {
    use Location::{Olin, Wellesley};

    if draw < 0.35 {
        PlannedMove::Move {
            count: 1,
            from: Wellesley,
            to: Olin,
        }
    } else if draw < 0.80 {
        PlannedMove::Move {
            count: 1,
            from: Olin,
            to: Wellesley,
        }
    } else {
        PlannedMove::Stay
    }
}
