//! The plate-appearance state machine.
//!
//! One call to [`simulate_at_bat`] sequences pitches until a terminal
//! outcome: strikeout, walk, hit by pitch, or a ball in play handed to play
//! resolution. Trajectory-level failures are recovered here - the pitch is
//! scored as a harmless ball (or a foul off the bat) and the at-bat
//! continues; nothing below this layer can end a game.

use tracing::warn;

use super::aerodynamics::AeroModel;
use super::ball::BallState;
use super::ballpark::Ballpark;
use super::buffer_pool::BufferPool;
use super::config::SimConfig;
use super::contact::{attempt, SwingResult};
use super::debug_log::{PitchLogCollector, PitchLogEntry};
use super::environment::Environment;
use super::integrator::{integrate, IntegratorSettings};
use super::physics_constants::{convert, zone};
use super::pitch_engine::{PitchEngine, ThrownPitch};
use super::pitcher_control::PitcherControl;
use super::play_resolution::resolve;
use super::swing::decide_swing;
use super::rng::SimStreams;
use super::umpire::Umpire;
use crate::error::Result;
use crate::models::{
    AtBatOutcome, AtBatRecord, Count, CountTransition, Defense, HitterAttributes, OutKind,
    PitcherAttributes, PitcherGameState, PitchOutcome, PitchRecord, PlateCrossing,
};

/// Everything a plate appearance borrows from its game.
pub struct AtBatContext<'a> {
    pub config: &'a SimConfig,
    pub aero: &'a AeroModel,
    pub park: &'a Ballpark,
    pub env: &'a Environment,
    pub pitcher: &'a PitcherAttributes,
    pub pitcher_state: &'a mut PitcherGameState,
    pub hitter: &'a HitterAttributes,
    pub defense: &'a Defense,
    /// Catcher framing quality behind the plate, 0..1.
    pub framing: f64,
}

/// Run one plate appearance to its terminal outcome.
pub fn simulate_at_bat(
    ctx: &mut AtBatContext<'_>,
    streams: &mut SimStreams,
    pool: &mut BufferPool,
    game_index: u64,
    at_bat_index: u32,
    log: &mut PitchLogCollector,
) -> Result<AtBatRecord> {
    let cfg = ctx.config;
    let control = PitcherControl::new(&cfg.intention);
    let pitch_engine = PitchEngine::new(ctx.aero, &cfg.physics);
    let umpire = Umpire::new(&cfg.umpire, ctx.framing);

    let mut count = Count::default();
    let mut pitches: Vec<PitchRecord> = Vec::new();

    loop {
        let call = control.call_pitch(ctx.pitcher, count, &mut streams.control);
        let arsenal_pitch = ctx
            .pitcher
            .pitch(call.pitch_type)
            .or_else(|| ctx.pitcher.arsenal.first())
            .ok_or_else(|| {
                crate::error::GameError::InvalidTeamSheet("pitcher has an empty arsenal".into())
            })?;

        let sigma = ctx.pitcher.command_sigma_in
            * ctx.pitcher_state.command_fatigue_factor(
                cfg.rules.fatigue_onset_pitches,
                cfg.rules.fatigue_sigma_per_pitch,
            );

        let mut buf = pool.acquire()?;
        let throw = pitch_engine.throw(
            arsenal_pitch,
            ctx.pitcher.release(),
            call.target,
            sigma,
            ctx.env,
            &mut streams.pitch,
            &mut buf,
        );
        pool.release(buf);
        ctx.pitcher_state.pitches_thrown += 1;

        let (thrown, recovered) = match throw {
            Ok(t) => (t, false),
            Err(err) => {
                // Programmer-error recovery: diagnose, score a harmless ball
                // well off the plate, keep the at-bat alive.
                warn!(target: "hb_core::at_bat", %err, pitch = pitches.len() + 1,
                      "pitch trajectory aborted; scoring as a ball");
                (harmless_ball(arsenal_pitch.speed_mph), true)
            }
        };

        let mut record = PitchRecord {
            number: (pitches.len() + 1) as u8,
            count_before: count,
            pitch_type: call.pitch_type,
            intention: call.intention,
            target_x_ft: call.target.0,
            target_z_ft: call.target.1,
            plate_x_ft: thrown.crossing.x_ft,
            plate_z_ft: thrown.crossing.z_ft,
            release_speed_mph: arsenal_pitch.speed_mph,
            spin_rpm: arsenal_pitch.spin_rpm,
            in_zone: zone::contains(thrown.crossing.x_ft, thrown.crossing.z_ft),
            targeting_degraded: thrown.targeting_degraded || recovered,
            swung: false,
            outcome: PitchOutcome::TakenBall,
            contact: None,
        };

        // Hit batter: a pitch running in on the body is taken, not swung at.
        if !recovered && is_hbp_candidate(cfg, &thrown.crossing) {
            use rand::Rng;
            if streams.pitch.gen::<f64>() < cfg.rules.hbp_prob {
                record.outcome = PitchOutcome::HitByPitch;
                pitches.push(record.clone());
                log.log(PitchLogEntry::from_record(game_index, at_bat_index, &record));
                return Ok(finish(AtBatOutcome::HitByPitch, count, pitches, None));
            }
        }

        let swung = !recovered
            && decide_swing(
                &cfg.swing,
                &thrown.crossing,
                call.pitch_type,
                count,
                ctx.hitter,
                &mut streams.swing,
            );
        record.swung = swung;

        let mut terminal: Option<(AtBatOutcome, Option<crate::models::ContactResult>)> = None;

        if swung {
            match attempt(
                &cfg.contact,
                &thrown.crossing,
                arsenal_pitch.base_whiff,
                count,
                ctx.hitter,
                &mut streams.contact,
            ) {
                SwingResult::Whiff => {
                    record.outcome = PitchOutcome::SwingingStrike;
                    match count.add_strike() {
                        CountTransition::Strikeout => {
                            terminal = Some((AtBatOutcome::Strikeout, None));
                        }
                        CountTransition::InProgress(c) => count = c,
                        CountTransition::Walk => unreachable!("strike cannot walk"),
                    }
                }
                SwingResult::Contact(contact) if contact.foul => {
                    record.outcome = PitchOutcome::Foul;
                    record.contact = Some(contact);
                    count = count.add_foul();
                }
                SwingResult::Contact(contact) => {
                    record.outcome = PitchOutcome::InPlay;
                    record.contact = Some(contact);
                    let outcome = resolve_in_play(ctx, &contact, streams, pool)?;
                    terminal = Some((outcome, Some(contact)));
                }
            }
        } else {
            let strike = !recovered && umpire.call(&thrown.crossing, &mut streams.umpire);
            if strike {
                record.outcome = PitchOutcome::TakenStrike;
                match count.add_strike() {
                    CountTransition::Strikeout => terminal = Some((AtBatOutcome::Strikeout, None)),
                    CountTransition::InProgress(c) => count = c,
                    CountTransition::Walk => unreachable!("strike cannot walk"),
                }
            } else {
                record.outcome = PitchOutcome::TakenBall;
                match count.add_ball() {
                    CountTransition::Walk => terminal = Some((AtBatOutcome::Walk, None)),
                    CountTransition::InProgress(c) => count = c,
                    CountTransition::Strikeout => unreachable!("ball cannot strike out"),
                }
            }
        }

        log.log(PitchLogEntry::from_record(game_index, at_bat_index, &record));
        pitches.push(record);

        if let Some((outcome, contact)) = terminal {
            return Ok(finish(outcome, count, pitches, contact));
        }

        // Pathological foul loops are bounded: the capping pitch is scored
        // as a caught foul.
        if pitches.len() >= cfg.rules.max_pitches_per_pa as usize {
            return Ok(finish(AtBatOutcome::Out(OutKind::FoulOut), count, pitches, None));
        }
    }
}

/// Integrate the batted ball and classify the play.
fn resolve_in_play(
    ctx: &mut AtBatContext<'_>,
    contact: &crate::models::ContactResult,
    streams: &mut SimStreams,
    pool: &mut BufferPool,
) -> Result<AtBatOutcome> {
    let cfg = ctx.config;
    let ball = BallState::off_bat(
        contact.exit_velo_mph,
        contact.launch_deg,
        contact.spray_deg,
        contact.spin_rpm,
    );
    let settings =
        IntegratorSettings::batted_ball(cfg.physics.dt_normal_s, cfg.physics.max_flight_time_s);
    let mut buf = pool.acquire()?;
    let landed = integrate(&ball, &settings, |s| ctx.aero.force(s, ctx.env), &mut buf);
    let outcome = match landed {
        Ok(landing) => Ok(resolve(
            contact,
            &landing,
            &buf,
            ctx.defense,
            ctx.park,
            ctx.hitter.speed,
            &mut streams.play,
        )),
        Err(err) => {
            // Recovered as a foul: the at-bat caller sees an ordinary out
            // distribution otherwise, and nothing below aborts the game.
            warn!(target: "hb_core::at_bat", %err, "batted-ball trajectory aborted; scoring a foul out");
            Ok(AtBatOutcome::Out(OutKind::FoulOut))
        }
    };
    pool.release(buf);
    outcome
}

fn is_hbp_candidate(cfg: &SimConfig, crossing: &PlateCrossing) -> bool {
    crossing.x_ft <= -cfg.rules.hbp_inside_ft && (0.5..=6.0).contains(&crossing.z_ft)
}

/// A pitch that never made it to the plate model: a ball well outside.
fn harmless_ball(release_speed_mph: f64) -> ThrownPitch {
    let crossing = PlateCrossing {
        x_ft: zone::HALF_WIDTH_FT + 1.5,
        z_ft: zone::CENTER_Z_FT,
        speed_mph: release_speed_mph * 0.92,
        time_s: 0.45,
    };
    let pos = nalgebra::Vector3::new(crossing.x_ft, 0.0, crossing.z_ft);
    let vel = nalgebra::Vector3::new(0.0, -crossing.speed_mph * convert::MPH_TO_FTPS, 0.0);
    let state = BallState::new(pos, vel, 0.0, nalgebra::Vector3::new(-1.0, 0.0, 0.0));
    ThrownPitch {
        release: state.clone(),
        plate: state,
        crossing,
        targeting_degraded: true,
    }
}

fn finish(
    outcome: AtBatOutcome,
    final_count: Count,
    pitches: Vec<PitchRecord>,
    contact: Option<crate::models::ContactResult>,
) -> AtBatRecord {
    AtBatRecord { outcome, final_count, pitches, contact }
}
