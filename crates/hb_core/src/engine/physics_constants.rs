//! Physical constants for the pitch/batted-ball simulation.
//!
//! Everything here is a fixed property of the ball, the field, or the
//! atmosphere. Tunable calibration values live in `engine::config` instead.

/// Regulation ball properties (imperial units throughout the engine).
pub mod ball {
    /// Ball weight (lbf): 5.125 oz.
    pub const WEIGHT_LBF: f64 = 0.3203;
    /// Ball mass (slug): weight / g.
    pub const MASS_SLUG: f64 = WEIGHT_LBF / super::gravity::G_FTPS2;
    /// Ball radius (ft): 9.125 in circumference.
    pub const RADIUS_FT: f64 = 0.1208;
    /// Cross-sectional area (ft^2): pi * r^2.
    pub const AREA_FT2: f64 = 0.045_84;
}

pub mod gravity {
    /// Gravitational acceleration (ft/s^2).
    pub const G_FTPS2: f64 = 32.174;
}

/// Standard atmosphere.
pub mod air {
    /// Sea-level air density (slug/ft^3) at 59 F.
    pub const RHO_SEA_LEVEL: f64 = 0.002_376_9;
    /// Density lapse per foot of altitude (fractional, exponential model).
    pub const ALTITUDE_SCALE_FT: f64 = 29_730.0;
}

/// Field geometry that never varies by park.
pub mod plate {
    /// Distance from the rubber to the rear point of home plate (ft).
    pub const RUBBER_TO_PLATE_FT: f64 = 60.5;
    /// y coordinate of the plate crossing plane used for targeting (ft).
    pub const CROSSING_PLANE_Y_FT: f64 = 0.0;
    /// Typical release distance from the plate plane (ft), rubber minus extension.
    pub const RELEASE_Y_FT: f64 = 55.0;
    /// Default release height (ft).
    pub const RELEASE_Z_FT: f64 = 6.0;
}

/// Official strike zone.
pub mod zone {
    /// Half-width of the plate (ft): 17 in wide.
    pub const HALF_WIDTH_FT: f64 = 17.0 / 24.0;
    /// Bottom of the zone (ft above ground).
    pub const BOTTOM_FT: f64 = 1.5;
    /// Top of the zone (ft above ground).
    pub const TOP_FT: f64 = 3.5;
    /// Zone center height (ft).
    pub const CENTER_Z_FT: f64 = (BOTTOM_FT + TOP_FT) / 2.0;

    /// True when a plate crossing is inside the official zone.
    #[inline]
    pub fn contains(x_ft: f64, z_ft: f64) -> bool {
        x_ft.abs() <= HALF_WIDTH_FT && (BOTTOM_FT..=TOP_FT).contains(&z_ft)
    }

    /// Distance outside the zone boundary (ft). Negative values are inside.
    ///
    /// The metric is the larger of the horizontal and vertical violations,
    /// which is what an umpire's edge judgment responds to.
    #[inline]
    pub fn edge_distance(x_ft: f64, z_ft: f64) -> f64 {
        let dx = x_ft.abs() - HALF_WIDTH_FT;
        let dz = if z_ft < BOTTOM_FT {
            BOTTOM_FT - z_ft
        } else if z_ft > TOP_FT {
            z_ft - TOP_FT
        } else {
            (BOTTOM_FT - z_ft).max(z_ft - TOP_FT)
        };
        dx.max(dz)
    }
}

/// Spray-angle conventions for batted balls.
pub mod spray {
    /// Foul lines sit at +/-45 degrees from straightaway center.
    pub const FOUL_LINE_DEG: f64 = 45.0;
}

/// Integrator sanity limits.
pub mod sanity {
    /// No ball in this engine moves faster than 200 mph between steps.
    pub const MAX_SPEED_MPH: f64 = 200.0;
    /// Same cap in ft/s.
    pub const MAX_SPEED_FTPS: f64 = MAX_SPEED_MPH * super::convert::MPH_TO_FTPS;
}

/// Unit conversions.
pub mod convert {
    pub const MPH_TO_FTPS: f64 = 5280.0 / 3600.0;
    pub const FTPS_TO_MPH: f64 = 3600.0 / 5280.0;
    pub const RPM_TO_RADPS: f64 = std::f64::consts::TAU / 60.0;
    pub const IN_TO_FT: f64 = 1.0 / 12.0;
    pub const FT_TO_IN: f64 = 12.0;
    pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
    pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_contains_center() {
        assert!(zone::contains(0.0, zone::CENTER_Z_FT));
        assert!(!zone::contains(1.0, zone::CENTER_Z_FT));
        assert!(!zone::contains(0.0, 4.0));
    }

    #[test]
    fn test_edge_distance_sign() {
        // Center of the zone is well inside.
        assert!(zone::edge_distance(0.0, zone::CENTER_Z_FT) < 0.0);
        // One foot outside the corner is outside.
        assert!(zone::edge_distance(zone::HALF_WIDTH_FT + 1.0, zone::CENTER_Z_FT) > 0.9);
    }

    #[test]
    fn test_mass_consistent_with_weight() {
        let w = ball::MASS_SLUG * gravity::G_FTPS2;
        assert!((w - ball::WEIGHT_LBF).abs() < 1e-9);
    }

    #[test]
    fn test_speed_cap() {
        assert!((sanity::MAX_SPEED_FTPS - 293.33).abs() < 0.01);
    }
}
