//! Batted-ball resolution: out, hit, or home run.
//!
//! Fielding is range-and-probability only. A fielder covers
//! `sprint_speed * (hang_time - reaction)` plus a catch radius; routes and
//! throws are not modeled. Fence clearance is read off the actual trajectory
//! trace, not inferred from landing distance.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::ballpark::Ballpark;
use super::buffer_pool::TrajectoryBuffer;
use super::integrator::Landing;
use super::physics_constants::{convert, spray};
use crate::models::{AtBatOutcome, ContactResult, Defense, Fielder, OutKind};

/// Launch angle below which a ball is fielded as a grounder.
const GROUND_BALL_MAX_DEG: f64 = 10.0;
/// Hang time and spray window for stretching a gap ball into three bases.
const TRIPLE_MIN_HANG_S: f64 = 4.5;
const TRIPLE_MIN_DISTANCE_FT: f64 = 300.0;
const TRIPLE_ALLEY_MIN_DEG: f64 = 12.0;
const TRIPLE_ALLEY_MAX_DEG: f64 = 38.0;
/// Landing this close to the fence plays off the wall for two bases.
const WALL_BALL_MARGIN_FT: f64 = 15.0;
/// A ball this far from the nearest fielder splits the defense.
const GAP_DISTANCE_FT: f64 = 55.0;
const GAP_MIN_CARRY_FT: f64 = 240.0;

/// Resolve a fair batted ball that has been integrated to its landing point.
pub fn resolve(
    contact: &ContactResult,
    landing: &Landing,
    trace: &TrajectoryBuffer,
    defense: &Defense,
    park: &Ballpark,
    hitter_speed: f64,
    rng: &mut ChaCha8Rng,
) -> AtBatOutcome {
    let land_x = landing.pos.x;
    let land_y = landing.pos.y;
    let distance = (land_x * land_x + land_y * land_y).sqrt();
    let spray_deg =
        (land_x.atan2(land_y) * convert::RAD_TO_DEG).clamp(-spray::FOUL_LINE_DEG, spray::FOUL_LINE_DEG);

    if let Some(hr) = check_home_run(trace, park, spray_deg, distance) {
        return hr;
    }

    if contact.launch_deg < GROUND_BALL_MAX_DEG {
        return resolve_ground_ball(contact, spray_deg, defense, hitter_speed, rng);
    }

    resolve_air_ball(contact, landing, distance, spray_deg, defense, park, rng)
}

/// Walk the trace out to the fence distance and compare heights there.
fn check_home_run(
    trace: &TrajectoryBuffer,
    park: &Ballpark,
    spray_deg: f64,
    landing_distance: f64,
) -> Option<AtBatOutcome> {
    let fence = park.fence_at(spray_deg)?;
    if landing_distance < fence.distance_ft {
        return None;
    }
    let samples = trace.samples();
    let mut prev_dist = 0.0;
    let mut prev_z = samples.first().map(|s| s.pos.z).unwrap_or(0.0);
    for s in samples {
        let d = (s.pos.x * s.pos.x + s.pos.y * s.pos.y).sqrt();
        if d >= fence.distance_ft {
            let span = (d - prev_dist).max(1e-9);
            let f = (fence.distance_ft - prev_dist) / span;
            let z_at_fence = prev_z + (s.pos.z - prev_z) * f;
            if z_at_fence > fence.height_ft {
                return Some(AtBatOutcome::HomeRun);
            }
            // Hit the wall on the fly: plays as a double.
            return Some(AtBatOutcome::Double);
        }
        prev_dist = d;
        prev_z = s.pos.z;
    }
    None
}

fn resolve_ground_ball(
    contact: &ContactResult,
    spray_deg: f64,
    defense: &Defense,
    hitter_speed: f64,
    rng: &mut ChaCha8Rng,
) -> AtBatOutcome {
    // Harder grounders get through; faster runners beat more throws; balls
    // hit at a fielder's lane die there.
    let mut p_out = 0.78;
    p_out -= (contact.exit_velo_mph - 85.0) * 0.004;
    p_out -= (hitter_speed.clamp(0.0, 1.0) - 0.5) * 0.12;

    let lane_gap = defense
        .infielders()
        .map(|f| (fielder_spray_deg(f) - spray_deg).abs())
        .fold(f64::MAX, f64::min);
    if lane_gap < 8.0 {
        p_out += 0.08;
    } else if lane_gap > 18.0 {
        p_out -= 0.10;
    }

    if rng.gen::<f64>() < p_out.clamp(0.05, 0.98) {
        AtBatOutcome::Out(OutKind::GroundOut)
    } else {
        AtBatOutcome::Single
    }
}

fn resolve_air_ball(
    contact: &ContactResult,
    landing: &Landing,
    distance: f64,
    spray_deg: f64,
    defense: &Defense,
    park: &Ballpark,
    rng: &mut ChaCha8Rng,
) -> AtBatOutcome {
    let hang = landing.time;

    // Nearest fielder who can reach the landing point before the ball.
    let mut best: Option<(&Fielder, f64)> = None;
    for f in &defense.fielders {
        let dx = f.x_ft - landing.pos.x;
        let dy = f.y_ft - landing.pos.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let reach = f.sprint_speed_ftps * (hang - f.reaction_s).max(0.0) + f.catch_radius_ft;
        if dist <= reach && best.map_or(true, |(_, d)| dist < d) {
            best = Some((f, dist));
        }
    }
    if let Some((fielder, _)) = best {
        if rng.gen::<f64>() < fielder.catch_prob {
            let kind = if contact.launch_deg < 20.0 {
                OutKind::LineOut
            } else if contact.launch_deg > 50.0 {
                OutKind::PopOut
            } else {
                OutKind::FlyOut
            };
            return AtBatOutcome::Out(kind);
        }
    }

    // Dropped in. Classify by where it landed.
    let fence_dist =
        park.fence_at(spray_deg).map(|f| f.distance_ft).unwrap_or_else(|| park.min_fence_distance());
    if distance > fence_dist - WALL_BALL_MARGIN_FT {
        return AtBatOutcome::Double;
    }

    let alley = spray_deg.abs() >= TRIPLE_ALLEY_MIN_DEG && spray_deg.abs() <= TRIPLE_ALLEY_MAX_DEG;
    if hang > TRIPLE_MIN_HANG_S && distance > TRIPLE_MIN_DISTANCE_FT && alley {
        return AtBatOutcome::Triple;
    }

    let nearest = defense
        .fielders
        .iter()
        .map(|f| {
            let dx = f.x_ft - landing.pos.x;
            let dy = f.y_ft - landing.pos.y;
            (dx * dx + dy * dy).sqrt()
        })
        .fold(f64::MAX, f64::min);
    if nearest > GAP_DISTANCE_FT && distance > GAP_MIN_CARRY_FT {
        return AtBatOutcome::Double;
    }

    AtBatOutcome::Single
}

/// Spray angle of a fielder's position.
fn fielder_spray_deg(f: &Fielder) -> f64 {
    f.x_ft.atan2(f.y_ft) * convert::RAD_TO_DEG
}
