//! ISA 대기 헬퍼 기준점 테스트. 값은 표준 대기표 기준이다.
use engine_performance_toolbox::air::isa;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn sea_level_standard_density() {
    assert_close("rho", isa::isa_density(0.0, 15.0), 1.225, 1e-3);
    let state = isa::isa_state(0.0, 15.0);
    assert_close("pressure", state.pressure_pa, 101_325.0, 1e-9);
    assert_close("isa temp", state.isa_temp_c, 15.0, 1e-9);
}

#[test]
fn thousand_meters_reference_point() {
    // 표준 대기표: 1000 m에서 약 89.87 kPa, 8.5 °C, 1.112 kg/m³
    let state = isa::isa_state(1000.0, 8.5);
    assert_close("pressure", state.pressure_pa, 89_875.0, 1e-3);
    assert_close("isa temp", state.isa_temp_c, 8.5, 1e-6);
    assert_close("rho", state.density_kg_m3, 1.112, 1e-3);
}

#[test]
fn density_decreases_with_altitude() {
    let rho0 = isa::isa_density(0.0, 15.0);
    let rho2k = isa::isa_density(2000.0, 15.0);
    let rho4k = isa::isa_density(4000.0, 15.0);
    assert!(rho0 > rho2k);
    assert!(rho2k > rho4k);
    assert!(rho4k > 0.0);
}

#[test]
fn warmer_air_is_thinner() {
    assert!(isa::isa_density(0.0, 35.0) < isa::isa_density(0.0, -10.0));
}

#[test]
fn boost_maps_to_manifold_pressure_ratio() {
    assert_close("na", isa::pressure_ratio_from_boost(0.0), 1.0, 1e-12);
    assert_close("one atm", isa::pressure_ratio_from_boost(101.325), 2.0, 1e-12);
}
