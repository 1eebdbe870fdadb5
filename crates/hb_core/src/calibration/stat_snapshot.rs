//! Rate accumulation across simulated plate appearances.

use serde::{Deserialize, Serialize};

use crate::models::{AtBatOutcome, AtBatRecord, GameResult, PitchOutcome, TeamLine};

/// Counting stats over any batch of plate appearances, with rate accessors
/// for the quantities calibration cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub plate_appearances: u64,
    pub strikeouts: u64,
    pub walks: u64,
    pub hit_by_pitch: u64,
    pub singles: u64,
    pub doubles: u64,
    pub triples: u64,
    pub home_runs: u64,
    pub outs_in_play: u64,
    pub pitches: u64,
    pub swings: u64,
    pub whiffs: u64,
    pub fouls: u64,
    pub in_zone_pitches: u64,
}

impl StatSnapshot {
    pub fn record(&mut self, ab: &AtBatRecord) {
        self.plate_appearances += 1;
        match ab.outcome {
            AtBatOutcome::Strikeout => self.strikeouts += 1,
            AtBatOutcome::Walk => self.walks += 1,
            AtBatOutcome::HitByPitch => self.hit_by_pitch += 1,
            AtBatOutcome::Single => self.singles += 1,
            AtBatOutcome::Double => self.doubles += 1,
            AtBatOutcome::Triple => self.triples += 1,
            AtBatOutcome::HomeRun => self.home_runs += 1,
            AtBatOutcome::Out(_) => self.outs_in_play += 1,
        }
        for p in &ab.pitches {
            self.pitches += 1;
            if p.in_zone {
                self.in_zone_pitches += 1;
            }
            if p.swung {
                self.swings += 1;
            }
            match p.outcome {
                PitchOutcome::SwingingStrike => self.whiffs += 1,
                PitchOutcome::Foul => self.fouls += 1,
                _ => {}
            }
        }
    }

    /// Fold a team's game line in (pitch-level fields unavailable there).
    pub fn record_team_line(&mut self, line: &TeamLine) {
        self.plate_appearances += line.plate_appearances as u64;
        self.strikeouts += line.strikeouts as u64;
        self.walks += line.walks as u64;
        self.hit_by_pitch += line.hit_by_pitch as u64;
        self.singles += line.singles as u64;
        self.doubles += line.doubles as u64;
        self.triples += line.triples as u64;
        self.home_runs += line.home_runs as u64;
        self.outs_in_play += line.outs_in_play as u64;
        self.pitches += line.pitches_seen as u64;
    }

    pub fn record_game(&mut self, game: &GameResult) {
        self.record_team_line(&game.home);
        self.record_team_line(&game.away);
    }

    pub fn merge(&mut self, other: &StatSnapshot) {
        self.plate_appearances += other.plate_appearances;
        self.strikeouts += other.strikeouts;
        self.walks += other.walks;
        self.hit_by_pitch += other.hit_by_pitch;
        self.singles += other.singles;
        self.doubles += other.doubles;
        self.triples += other.triples;
        self.home_runs += other.home_runs;
        self.outs_in_play += other.outs_in_play;
        self.pitches += other.pitches;
        self.swings += other.swings;
        self.whiffs += other.whiffs;
        self.fouls += other.fouls;
        self.in_zone_pitches += other.in_zone_pitches;
    }

    fn rate(num: u64, den: u64) -> f64 {
        if den == 0 {
            0.0
        } else {
            num as f64 / den as f64
        }
    }

    pub fn k_pct(&self) -> f64 {
        Self::rate(self.strikeouts, self.plate_appearances)
    }

    pub fn bb_pct(&self) -> f64 {
        Self::rate(self.walks, self.plate_appearances)
    }

    pub fn hr_pct(&self) -> f64 {
        Self::rate(self.home_runs, self.plate_appearances)
    }

    pub fn hits(&self) -> u64 {
        self.singles + self.doubles + self.triples + self.home_runs
    }

    pub fn zone_rate(&self) -> f64 {
        Self::rate(self.in_zone_pitches, self.pitches)
    }

    pub fn swing_rate(&self) -> f64 {
        Self::rate(self.swings, self.pitches)
    }

    pub fn whiff_per_swing(&self) -> f64 {
        Self::rate(self.whiffs, self.swings)
    }

    pub fn pitches_per_pa(&self) -> f64 {
        Self::rate(self.pitches, self.plate_appearances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Count;

    fn ab(outcome: AtBatOutcome) -> AtBatRecord {
        AtBatRecord { outcome, final_count: Count::new(1, 2), pitches: vec![], contact: None }
    }

    #[test]
    fn test_rates() {
        let mut s = StatSnapshot::default();
        s.record(&ab(AtBatOutcome::Strikeout));
        s.record(&ab(AtBatOutcome::Walk));
        s.record(&ab(AtBatOutcome::HomeRun));
        s.record(&ab(AtBatOutcome::Single));
        assert_eq!(s.plate_appearances, 4);
        assert!((s.k_pct() - 0.25).abs() < 1e-12);
        assert!((s.bb_pct() - 0.25).abs() < 1e-12);
        assert_eq!(s.hits(), 2);
    }

    #[test]
    fn test_empty_snapshot_rates_are_zero() {
        let s = StatSnapshot::default();
        assert_eq!(s.k_pct(), 0.0);
        assert_eq!(s.zone_rate(), 0.0);
    }

    #[test]
    fn test_merge_adds() {
        let mut a = StatSnapshot::default();
        a.record(&ab(AtBatOutcome::Strikeout));
        let mut b = StatSnapshot::default();
        b.record(&ab(AtBatOutcome::Walk));
        a.merge(&b);
        assert_eq!(a.plate_appearances, 2);
        assert_eq!(a.strikeouts, 1);
        assert_eq!(a.walks, 1);
    }
}
