//! Single-game simulation and the parallel run boundary.
//!
//! A game is synchronous and single-threaded; parallelism exists only
//! across games. Every game derives its own RNG streams from
//! `(base_seed, game_index)`, so an N-thread run and a single-thread run
//! produce byte-identical per-game results.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use super::aerodynamics::AeroModel;
use super::at_bat::{simulate_at_bat, AtBatContext};
use super::ballpark::Ballpark;
use super::buffer_pool::BufferPool;
use super::config::SimConfig;
use super::debug_log::PitchLogCollector;
use super::environment::Environment;
use super::rng::SimStreams;
use super::timestep;
use crate::error::{GameError, Result};
use crate::models::{
    AtBatOutcome, Defense, GameResult, HitterAttributes, PitcherAttributes, PitcherGameState,
    TeamLine,
};

/// One team's personnel for a game.
#[derive(Debug, Clone)]
pub struct TeamSheet {
    pub lineup: Vec<HitterAttributes>,
    pub pitcher: PitcherAttributes,
    pub defense: Defense,
    /// Catcher framing quality presented to the umpire, 0..1.
    pub framing: f64,
}

impl TeamSheet {
    fn validate(&self) -> Result<()> {
        if self.lineup.is_empty() {
            return Err(GameError::InvalidTeamSheet("empty lineup".into()));
        }
        if self.pitcher.arsenal.is_empty() {
            return Err(GameError::InvalidTeamSheet("pitcher has no arsenal".into()));
        }
        Ok(())
    }
}

/// Simple base state: first, second, third.
#[derive(Debug, Clone, Copy, Default)]
struct Bases([bool; 3]);

impl Bases {
    /// Advance runners and the batter; returns runs scored.
    fn advance(&mut self, outcome: AtBatOutcome) -> u32 {
        let bases = outcome.bases();
        if bases == 0 {
            return 0;
        }
        let mut runs = 0;
        if matches!(outcome, AtBatOutcome::Walk | AtBatOutcome::HitByPitch) {
            // Forced advances only.
            if self.0[0] && self.0[1] && self.0[2] {
                runs += 1;
            } else if self.0[0] && self.0[1] {
                self.0[2] = true;
            } else if self.0[0] {
                self.0[1] = true;
            }
            self.0[0] = true;
            return runs;
        }
        for _ in 0..bases {
            if self.0[2] {
                runs += 1;
            }
            self.0[2] = self.0[1];
            self.0[1] = self.0[0];
            self.0[0] = false;
        }
        if bases >= 4 {
            runs += 1; // the batter
        } else {
            self.0[bases as usize - 1] = true;
        }
        runs
    }
}

/// One game between two team sheets.
pub struct GameSim<'a> {
    config: &'a SimConfig,
    aero: AeroModel,
    park: Ballpark,
    home: &'a TeamSheet,
    away: &'a TeamSheet,
    game_index: u64,
    base_seed: u64,
}

impl<'a> GameSim<'a> {
    pub fn new(
        config: &'a SimConfig,
        home: &'a TeamSheet,
        away: &'a TeamSheet,
        base_seed: u64,
        game_index: u64,
    ) -> Result<Self> {
        home.validate()?;
        away.validate()?;
        Ok(Self {
            config,
            aero: AeroModel::new(&config.physics),
            park: Ballpark::new(&config.park),
            home,
            away,
            game_index,
            base_seed,
        })
    }

    pub fn simulate(&self, log: &mut PitchLogCollector) -> Result<GameResult> {
        self.simulate_cancellable(log, None)
    }

    /// Simulate, checking the cancellation flag at at-bat boundaries only.
    pub fn simulate_cancellable(
        &self,
        log: &mut PitchLogCollector,
        cancel: Option<&AtomicBool>,
    ) -> Result<GameResult> {
        let cfg = self.config;
        let mut streams = SimStreams::for_game(self.base_seed, self.game_index);
        let env = Environment::for_game(&cfg.environment, &mut streams.environment);
        let mut pool = BufferPool::new(
            4,
            timestep::steps_required(cfg.physics.max_flight_time_s, cfg.physics.dt_normal_s),
        );

        let mut home_line = TeamLine::default();
        let mut away_line = TeamLine::default();
        let mut home_pitcher = PitcherGameState::default();
        let mut away_pitcher = PitcherGameState::default();
        let mut home_batter = 0usize;
        let mut away_batter = 0usize;
        let mut at_bat_index = 0u32;
        let mut innings_played = 0u8;

        'game: for _inning in 0..cfg.rules.innings_per_game {
            // Top: away bats against the home pitcher and defense.
            for half in 0..2u8 {
                let (batting, line, batter_idx, fielding, pitcher_state) = if half == 0 {
                    (self.away, &mut away_line, &mut away_batter, self.home, &mut home_pitcher)
                } else {
                    (self.home, &mut home_line, &mut home_batter, self.away, &mut away_pitcher)
                };

                let mut bases = Bases::default();
                let mut outs = 0u8;
                while outs < 3 {
                    if let Some(flag) = cancel {
                        if flag.load(Ordering::Relaxed) {
                            break 'game;
                        }
                    }

                    let hitter = &batting.lineup[*batter_idx % batting.lineup.len()];
                    *batter_idx += 1;

                    let mut ctx = AtBatContext {
                        config: cfg,
                        aero: &self.aero,
                        park: &self.park,
                        env: &env,
                        pitcher: &fielding.pitcher,
                        pitcher_state: &mut *pitcher_state,
                        hitter,
                        defense: &fielding.defense,
                        framing: fielding.framing,
                    };
                    let record = simulate_at_bat(
                        &mut ctx,
                        &mut streams,
                        &mut pool,
                        self.game_index,
                        at_bat_index,
                        log,
                    )?;
                    at_bat_index += 1;

                    line.record(&record);
                    match record.outcome {
                        AtBatOutcome::Strikeout | AtBatOutcome::Out(_) => outs += 1,
                        outcome => line.runs += bases.advance(outcome),
                    }
                }
            }
            innings_played += 1;
        }

        Ok(GameResult {
            game_index: self.game_index,
            seed: super::rng::derive_seed(self.base_seed, self.game_index),
            home: home_line,
            away: away_line,
            innings_played,
        })
    }
}

/// Run `n_games` on a rayon pool of `threads` workers.
///
/// Results come back ordered by game index, and are byte-identical for any
/// thread count given the same seed and config.
pub fn run_games(
    config: &SimConfig,
    home: &TeamSheet,
    away: &TeamSheet,
    base_seed: u64,
    n_games: u64,
    threads: usize,
) -> Result<Vec<GameResult>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| GameError::WorkerPool(e.to_string()))?;

    pool.install(|| {
        (0..n_games)
            .into_par_iter()
            .map(|game_index| {
                let mut log = PitchLogCollector::new(false);
                GameSim::new(config, home, away, base_seed, game_index)?.simulate(&mut log)
            })
            .collect()
    })
}

/// Neutral league-average team sheet used by calibration and tests.
pub fn neutral_team(config: &SimConfig, name: &str) -> TeamSheet {
    let lineup = (1..=9)
        .map(|i| HitterAttributes::league_average(&format!("{name} Hitter {i}")))
        .collect();
    let pitcher = PitcherAttributes {
        name: format!("{name} Pitcher"),
        command_sigma_in: config.rules.command_sigma_average_in,
        control_zone_bias: 0.5,
        release_point: [-2.0, 55.0, 6.0],
        arsenal: super::config::default_arsenal(),
    };
    TeamSheet { lineup, pitcher, defense: Defense::neutral(), framing: 0.5 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SimConfig {
        SimConfig::realistic()
    }

    #[test]
    fn test_game_produces_sane_lines() {
        let config = cfg();
        let home = neutral_team(&config, "Home");
        let away = neutral_team(&config, "Away");
        let mut log = PitchLogCollector::new(false);
        let result = GameSim::new(&config, &home, &away, 42, 0).unwrap().simulate(&mut log).unwrap();
        assert_eq!(result.innings_played, 9);
        // 27 outs per side minimum means at least 27 plate appearances.
        assert!(result.home.plate_appearances >= 27);
        assert!(result.away.plate_appearances >= 27);
        assert!(result.home.runs < 30 && result.away.runs < 30);
    }

    #[test]
    fn test_same_seed_same_game() {
        let config = cfg();
        let home = neutral_team(&config, "Home");
        let away = neutral_team(&config, "Away");
        let mut log = PitchLogCollector::new(false);
        let a = GameSim::new(&config, &home, &away, 9, 5).unwrap().simulate(&mut log).unwrap();
        let b = GameSim::new(&config, &home, &away, 9, 5).unwrap().simulate(&mut log).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let config = cfg();
        let home = neutral_team(&config, "Home");
        let away = neutral_team(&config, "Away");
        let serial = run_games(&config, &home, &away, 1234, 6, 1).unwrap();
        let parallel = run_games(&config, &home, &away, 1234, 6, 4).unwrap();
        assert_eq!(serial, parallel);
        // Ordered by game index.
        for (i, g) in serial.iter().enumerate() {
            assert_eq!(g.game_index, i as u64);
        }
    }

    #[test]
    fn test_cancellation_at_at_bat_boundary() {
        let config = cfg();
        let home = neutral_team(&config, "Home");
        let away = neutral_team(&config, "Away");
        let cancel = AtomicBool::new(true);
        let mut log = PitchLogCollector::new(false);
        let result = GameSim::new(&config, &home, &away, 7, 0)
            .unwrap()
            .simulate_cancellable(&mut log, Some(&cancel))
            .unwrap();
        // Pre-cancelled: no at-bat ever ran.
        assert_eq!(result.home.plate_appearances, 0);
        assert_eq!(result.away.plate_appearances, 0);
        assert_eq!(result.innings_played, 0);
    }

    #[test]
    fn test_empty_lineup_rejected() {
        let config = cfg();
        let mut home = neutral_team(&config, "Home");
        home.lineup.clear();
        let away = neutral_team(&config, "Away");
        assert!(matches!(
            GameSim::new(&config, &home, &away, 1, 0),
            Err(GameError::InvalidTeamSheet(_))
        ));
    }

    #[test]
    fn test_bases_walk_forces_only() {
        let mut bases = Bases::default();
        // Runner on second; a walk must not advance him.
        bases.0 = [false, true, false];
        let runs = bases.advance(AtBatOutcome::Walk);
        assert_eq!(runs, 0);
        assert_eq!(bases.0, [true, true, false]);
    }

    #[test]
    fn test_bases_loaded_walk_scores() {
        let mut bases = Bases::default();
        bases.0 = [true, true, true];
        let runs = bases.advance(AtBatOutcome::Walk);
        assert_eq!(runs, 1);
        assert_eq!(bases.0, [true, true, true]);
    }

    #[test]
    fn test_bases_homer_clears() {
        let mut bases = Bases::default();
        bases.0 = [true, false, true];
        let runs = bases.advance(AtBatOutcome::HomeRun);
        assert_eq!(runs, 3);
    }

    #[test]
    fn test_bases_double_scores_from_second() {
        let mut bases = Bases::default();
        bases.0 = [false, true, false];
        let runs = bases.advance(AtBatOutcome::Double);
        assert_eq!(runs, 1);
        assert_eq!(bases.0, [false, true, false]);
    }
}
