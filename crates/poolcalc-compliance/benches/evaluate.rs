use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poolcalc_compliance::{
    calculate_pool_installation, cable_size, InstallationParameters, PoolCalculator, PoolType,
    SupplyVoltage,
};

fn bench_evaluate(c: &mut Criterion) {
    let calculator = PoolCalculator::default();
    let private = InstallationParameters::default();
    let public = InstallationParameters {
        pool_type: PoolType::Public,
        heater_power: 18000.0,
        pump_power: 4000.0,
        lighting: 1200.0,
        has_underwater_lighting: true,
        supply_voltage: SupplyVoltage::V400,
        ..Default::default()
    };

    c.bench_function("evaluate_private", |b| {
        b.iter(|| calculator.evaluate(black_box(&private)))
    });
    c.bench_function("evaluate_public_three_phase", |b| {
        b.iter(|| calculate_pool_installation(black_box(&public)))
    });
    c.bench_function("cable_size", |b| {
        b.iter(|| cable_size(black_box(37.5), black_box(0.87)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
