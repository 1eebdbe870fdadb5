//! Seeded scenario batches for calibration and regression checks.
//!
//! A scenario pins the personnel and runs a deterministic batch of plate
//! appearances or games, returning a [`StatSnapshot`] for rate assertions.
//! Attribute profiles for the standard tiers live here too, so calibration
//! tests and the CLI describe scenarios the same way.

use super::stat_snapshot::StatSnapshot;
use crate::engine::aerodynamics::AeroModel;
use crate::engine::at_bat::{simulate_at_bat, AtBatContext};
use crate::engine::ballpark::Ballpark;
use crate::engine::buffer_pool::BufferPool;
use crate::engine::config::{default_arsenal, SimConfig};
use crate::engine::debug_log::PitchLogCollector;
use crate::engine::environment::Environment;
use crate::engine::game::{GameSim, TeamSheet};
use crate::engine::rng::SimStreams;
use crate::engine::timestep;
use crate::error::Result;
use crate::models::{Defense, HitterAttributes, PitcherAttributes, PitcherGameState};

/// Pitcher command tiers from the calibration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTier {
    Elite,
    Average,
    Poor,
}

/// A pitcher at the given command tier with the stock arsenal.
pub fn tier_pitcher(config: &SimConfig, tier: CommandTier) -> PitcherAttributes {
    let sigma = match tier {
        CommandTier::Elite => config.rules.command_sigma_elite_in,
        CommandTier::Average => config.rules.command_sigma_average_in,
        CommandTier::Poor => config.rules.command_sigma_poor_in,
    };
    PitcherAttributes {
        name: format!("{tier:?} pitcher"),
        command_sigma_in: sigma,
        control_zone_bias: 0.5,
        release_point: [-2.0, 55.0, 6.0],
        arsenal: default_arsenal(),
    }
}

/// Hitter profiles the end-to-end scenarios are defined against.
pub mod hitters {
    use crate::models::HitterAttributes;

    pub fn elite_discipline() -> HitterAttributes {
        HitterAttributes { discipline: 0.95, ..HitterAttributes::league_average("Elite Eye") }
    }

    pub fn poor_contact() -> HitterAttributes {
        HitterAttributes { contact: 0.12, ..HitterAttributes::league_average("Free Swinger") }
    }

    pub fn power() -> HitterAttributes {
        HitterAttributes {
            power: 0.92,
            attack_angle_control: 0.75,
            ..HitterAttributes::league_average("Slugger")
        }
    }
}

pub struct ScenarioRunner<'a> {
    config: &'a SimConfig,
    seed: u64,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(config: &'a SimConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Run `n` independent plate appearances in calm conditions.
    ///
    /// Each at-bat derives its own stream set from `(seed, index)`, so the
    /// batch is order-independent and reproducible.
    pub fn run_at_bats(
        &self,
        pitcher: &PitcherAttributes,
        hitter: &HitterAttributes,
        n: u32,
    ) -> Result<StatSnapshot> {
        let cfg = self.config;
        let aero = AeroModel::new(&cfg.physics);
        let park = Ballpark::new(&cfg.park);
        let env = Environment::calm(&cfg.environment);
        let defense = Defense::neutral();
        let mut pool = BufferPool::new(
            4,
            timestep::steps_required(cfg.physics.max_flight_time_s, cfg.physics.dt_normal_s),
        );
        let mut log = PitchLogCollector::new(false);
        let mut snapshot = StatSnapshot::default();

        for i in 0..n {
            let mut streams = SimStreams::for_game(self.seed, i as u64);
            let mut pitcher_state = PitcherGameState::default();
            let mut ctx = AtBatContext {
                config: cfg,
                aero: &aero,
                park: &park,
                env: &env,
                pitcher,
                pitcher_state: &mut pitcher_state,
                hitter,
                defense: &defense,
                framing: 0.5,
            };
            let record = simulate_at_bat(&mut ctx, &mut streams, &mut pool, 0, i, &mut log)?;
            snapshot.record(&record);
        }
        Ok(snapshot)
    }

    /// Run `n` full games serially and fold both team lines.
    pub fn run_games(&self, home: &TeamSheet, away: &TeamSheet, n: u64) -> Result<StatSnapshot> {
        let mut snapshot = StatSnapshot::default();
        let mut log = PitchLogCollector::new(false);
        for game_index in 0..n {
            let result = GameSim::new(self.config, home, away, self.seed, game_index)?
                .simulate(&mut log)?;
            snapshot.record_game(&result);
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_bat_batch_reproducible() {
        let cfg = SimConfig::realistic();
        let runner = ScenarioRunner::new(&cfg, 4242);
        let pitcher = tier_pitcher(&cfg, CommandTier::Average);
        let hitter = HitterAttributes::league_average("H");
        let a = runner.run_at_bats(&pitcher, &hitter, 50).unwrap();
        let b = runner.run_at_bats(&pitcher, &hitter, 50).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.plate_appearances, 50);
    }

    #[test]
    fn test_tier_sigma_mapping() {
        let cfg = SimConfig::realistic();
        assert_eq!(tier_pitcher(&cfg, CommandTier::Elite).command_sigma_in, 2.7);
        assert_eq!(tier_pitcher(&cfg, CommandTier::Average).command_sigma_in, 4.3);
        assert_eq!(tier_pitcher(&cfg, CommandTier::Poor).command_sigma_in, 6.3);
    }

    #[test]
    fn test_poor_command_walks_more() {
        let cfg = SimConfig::realistic();
        let runner = ScenarioRunner::new(&cfg, 777);
        let hitter = HitterAttributes::league_average("H");
        let elite = runner
            .run_at_bats(&tier_pitcher(&cfg, CommandTier::Elite), &hitter, 600)
            .unwrap();
        let poor = runner
            .run_at_bats(&tier_pitcher(&cfg, CommandTier::Poor), &hitter, 600)
            .unwrap();
        assert!(
            poor.bb_pct() > elite.bb_pct(),
            "poor command BB% {} should exceed elite {}",
            poor.bb_pct(),
            elite.bb_pct()
        );
    }
}
