use serde::{Deserialize, Serialize};

/// Ball-strike count. A live count never reaches 4 balls or 3 strikes;
/// those transitions are reported to the caller instead of being stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Count {
    pub balls: u8,
    pub strikes: u8,
}

/// Result of applying one pitch to the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountTransition {
    /// Count advanced, at-bat continues.
    InProgress(Count),
    /// Fourth ball.
    Walk,
    /// Third strike.
    Strikeout,
}

impl Count {
    pub fn new(balls: u8, strikes: u8) -> Self {
        debug_assert!(balls <= 3 && strikes <= 2, "count ({balls}-{strikes}) is terminal");
        Self { balls, strikes }
    }

    /// Apply a taken or called ball.
    pub fn add_ball(self) -> CountTransition {
        if self.balls == 3 {
            CountTransition::Walk
        } else {
            CountTransition::InProgress(Count { balls: self.balls + 1, ..self })
        }
    }

    /// Apply a called or swinging strike.
    pub fn add_strike(self) -> CountTransition {
        if self.strikes == 2 {
            CountTransition::Strikeout
        } else {
            CountTransition::InProgress(Count { strikes: self.strikes + 1, ..self })
        }
    }

    /// Apply a foul ball: a strike below two strikes, otherwise no change.
    pub fn add_foul(self) -> Count {
        if self.strikes < 2 {
            Count { strikes: self.strikes + 1, ..self }
        } else {
            self
        }
    }

    pub fn two_strikes(self) -> bool {
        self.strikes == 2
    }

    pub fn three_balls(self) -> bool {
        self.balls == 3
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_progression() {
        let c = Count::new(0, 0);
        assert_eq!(c.add_ball(), CountTransition::InProgress(Count::new(1, 0)));
        assert_eq!(Count::new(3, 2).add_ball(), CountTransition::Walk);
    }

    #[test]
    fn test_strike_progression() {
        assert_eq!(
            Count::new(1, 0).add_strike(),
            CountTransition::InProgress(Count::new(1, 1))
        );
        assert_eq!(Count::new(0, 2).add_strike(), CountTransition::Strikeout);
    }

    #[test]
    fn test_foul_rule() {
        // Below two strikes a foul is a strike.
        assert_eq!(Count::new(2, 1).add_foul(), Count::new(2, 2));
        // At two strikes the count is frozen.
        assert_eq!(Count::new(2, 2).add_foul(), Count::new(2, 2));
    }
}
