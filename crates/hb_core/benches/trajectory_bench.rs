//! Hot-path benchmarks: the integrator and the full pitch targeting loop.

use criterion::{criterion_group, criterion_main, Criterion};

use hb_core::engine::aerodynamics::AeroModel;
use hb_core::engine::ball::BallState;
use hb_core::engine::buffer_pool::TrajectoryBuffer;
use hb_core::engine::config::{default_arsenal, EnvironmentConfig, PhysicsConfig};
use hb_core::engine::environment::Environment;
use hb_core::engine::integrator::{integrate, IntegratorSettings};
use hb_core::engine::pitch_engine::PitchEngine;
use hb_core::engine::timestep;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_batted_ball(c: &mut Criterion) {
    let aero = AeroModel::new(&PhysicsConfig::default());
    let env = Environment::calm(&EnvironmentConfig::calm());
    let ball = BallState::off_bat(100.0, 28.0, 0.0, 1800.0);
    let settings = IntegratorSettings::batted_ball(timestep::DT_NORMAL, 12.0);
    let mut buf = TrajectoryBuffer::with_capacity(timestep::steps_required(12.0, timestep::DT_NORMAL));

    c.bench_function("batted_ball_rk4_1ms", |b| {
        b.iter(|| integrate(&ball, &settings, |s| aero.force(s, &env), &mut buf).unwrap())
    });

    let mut table_cfg = PhysicsConfig::default();
    table_cfg.use_lookup_table = true;
    let aero_table = AeroModel::new(&table_cfg);
    c.bench_function("batted_ball_rk4_1ms_lookup", |b| {
        b.iter(|| integrate(&ball, &settings, |s| aero_table.force(s, &env), &mut buf).unwrap())
    });
}

fn bench_pitch_targeting(c: &mut Criterion) {
    let aero = AeroModel::new(&PhysicsConfig::default());
    let env = Environment::calm(&EnvironmentConfig::calm());
    let engine = PitchEngine::new(&aero, &PhysicsConfig::default());
    let arsenal = default_arsenal();
    let fastball = arsenal[0].clone();
    let release = nalgebra::Vector3::new(-2.0, 55.0, 6.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut buf = TrajectoryBuffer::with_capacity(timestep::steps_required(2.0, timestep::DT_NORMAL));

    c.bench_function("pitch_targeting_full", |b| {
        b.iter(|| {
            engine
                .throw(&fastball, release, (0.2, 2.5), 4.3, &env, &mut rng, &mut buf)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_batted_ball, bench_pitch_targeting);
criterion_main!(benches);
