/// timestep.rs
/// Fixed integration step presets.
///
/// The integrator is fixed-step RK4; precision is traded for speed purely by
/// choosing a coarser dt. Reference results are always produced at DT_NORMAL.

/// Reference step (1 ms) - deterministic-reference mode
pub const DT_NORMAL: f64 = 0.001;

/// Fast step (2 ms) - bulk simulation
pub const DT_FAST: f64 = 0.002;

/// Ultra step (5 ms) - coarse screening only
pub const DT_ULTRA: f64 = 0.005;

/// Longest flight the engine will integrate (s). A 110 mph fly ball is down
/// well inside 9 seconds; anything longer is divergence.
pub const MAX_FLIGHT_TIME: f64 = 12.0;

// Compile-time validation: presets must stay ordered
const _: () = assert!(DT_NORMAL > 0.0 && DT_NORMAL < DT_FAST && DT_FAST < DT_ULTRA);
const _: () = assert!(MAX_FLIGHT_TIME > 5.0);

/// Buffer capacity required to trace a full flight at the given step.
#[inline]
pub fn steps_required(max_time: f64, dt: f64) -> usize {
    (max_time / dt).ceil() as usize + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_presets() {
        assert_eq!(DT_NORMAL, 0.001);
        assert_eq!(DT_FAST, 0.002);
        assert_eq!(DT_ULTRA, 0.005);
    }

    #[test]
    fn test_steps_required_rounds_up() {
        assert_eq!(steps_required(1.0, 0.001), 1002);
        assert_eq!(steps_required(0.0015, 0.001), 4);
    }
}
