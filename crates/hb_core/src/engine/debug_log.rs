//! # Pitch decision log
//!
//! Opt-in structured record of every pitch for calibration work. Answers
//! "why did that at-bat go that way" without a debugger: intention, aim,
//! actual location, command error, and the resolution, one JSON line per
//! pitch.
//!
//! Collectors hold value copies only and live per game; the game loop
//! merges them at the end. When disabled, logging is a no-op.

use serde::Serialize;

use crate::models::{PitchIntention, PitchOutcome, PitchRecord, PitchType};

/// One pitch, flattened for JSON-lines output.
#[derive(Debug, Clone, Serialize)]
pub struct PitchLogEntry {
    pub game_index: u64,
    pub at_bat_index: u32,
    pub pitch_number: u8,
    pub balls: u8,
    pub strikes: u8,
    pub pitch_type: PitchType,
    pub intention: PitchIntention,
    pub target_x_ft: f64,
    pub target_z_ft: f64,
    pub plate_x_ft: f64,
    pub plate_z_ft: f64,
    pub command_error_in: f64,
    pub in_zone: bool,
    pub swung: bool,
    pub outcome: PitchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_velo_mph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spray_deg: Option<f64>,
}

impl PitchLogEntry {
    pub fn from_record(game_index: u64, at_bat_index: u32, rec: &PitchRecord) -> Self {
        Self {
            game_index,
            at_bat_index,
            pitch_number: rec.number,
            balls: rec.count_before.balls,
            strikes: rec.count_before.strikes,
            pitch_type: rec.pitch_type,
            intention: rec.intention,
            target_x_ft: rec.target_x_ft,
            target_z_ft: rec.target_z_ft,
            plate_x_ft: rec.plate_x_ft,
            plate_z_ft: rec.plate_z_ft,
            command_error_in: rec.command_error_in(),
            in_zone: rec.in_zone,
            swung: rec.swung,
            outcome: rec.outcome,
            exit_velo_mph: rec.contact.map(|c| c.exit_velo_mph),
            launch_deg: rec.contact.map(|c| c.launch_deg),
            spray_deg: rec.contact.map(|c| c.spray_deg),
        }
    }
}

/// In-memory pitch log. Never a hot-path cost when disabled.
#[derive(Debug, Default)]
pub struct PitchLogCollector {
    enabled: bool,
    entries: Vec<PitchLogEntry>,
}

impl PitchLogCollector {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, entries: Vec::new() }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn log(&mut self, entry: PitchLogEntry) {
        if self.enabled {
            self.entries.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PitchLogEntry] {
        &self.entries
    }

    /// Fold another game's collector into this one.
    pub fn merge(&mut self, mut other: PitchLogCollector) {
        if self.enabled {
            self.entries.append(&mut other.entries);
        }
    }

    /// Serialize as JSON lines, one pitch per line.
    pub fn to_json_lines(&self) -> String {
        let mut out = String::new();
        for e in &self.entries {
            // Flat structs with finite floats cannot fail to serialize.
            if let Ok(line) = serde_json::to_string(e) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}
