//! Fielder positioning and range attributes.
//!
//! Play resolution only needs where fielders stand and how far they can get
//! during a ball's hang time; routes and throws are not modeled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FielderSpot {
    First,
    Second,
    Shortstop,
    Third,
    LeftField,
    CenterField,
    RightField,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fielder {
    pub spot: FielderSpot,
    /// Field coordinates (ft): x lateral, y out from the plate.
    pub x_ft: f64,
    pub y_ft: f64,
    /// Sprint speed (ft/s). MLB average ~27.
    pub sprint_speed_ftps: f64,
    /// Reaction delay before moving (s).
    pub reaction_s: f64,
    /// Reach around the body at arrival (ft).
    pub catch_radius_ft: f64,
    /// Conversion rate on balls reached in the air.
    pub catch_prob: f64,
}

/// A full defensive alignment behind the pitcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defense {
    pub fielders: Vec<Fielder>,
}

impl Defense {
    /// Neutral straight-up alignment with league-average range.
    pub fn neutral() -> Self {
        let f = |spot, x_ft: f64, y_ft: f64| Fielder {
            spot,
            x_ft,
            y_ft,
            sprint_speed_ftps: 27.0,
            reaction_s: 0.45,
            catch_radius_ft: 5.0,
            catch_prob: 0.96,
        };
        Self {
            fielders: vec![
                f(FielderSpot::First, 80.0, 75.0),
                f(FielderSpot::Second, 35.0, 125.0),
                f(FielderSpot::Shortstop, -35.0, 125.0),
                f(FielderSpot::Third, -80.0, 75.0),
                f(FielderSpot::LeftField, -155.0, 240.0),
                f(FielderSpot::CenterField, 0.0, 295.0),
                f(FielderSpot::RightField, 155.0, 240.0),
            ],
        }
    }

    pub fn outfielders(&self) -> impl Iterator<Item = &Fielder> {
        self.fielders.iter().filter(|f| {
            matches!(
                f.spot,
                FielderSpot::LeftField | FielderSpot::CenterField | FielderSpot::RightField
            )
        })
    }

    pub fn infielders(&self) -> impl Iterator<Item = &Fielder> {
        self.fielders.iter().filter(|f| {
            matches!(
                f.spot,
                FielderSpot::First
                    | FielderSpot::Second
                    | FielderSpot::Shortstop
                    | FielderSpot::Third
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_alignment_shape() {
        let d = Defense::neutral();
        assert_eq!(d.fielders.len(), 7);
        assert_eq!(d.outfielders().count(), 3);
        assert_eq!(d.infielders().count(), 4);
    }

    #[test]
    fn test_outfield_depth_behind_infield() {
        let d = Defense::neutral();
        let min_of = d.outfielders().map(|f| f.y_ft).fold(f64::MAX, f64::min);
        let max_if = d.infielders().map(|f| f.y_ft).fold(f64::MIN, f64::max);
        assert!(min_of > max_if);
    }
}
