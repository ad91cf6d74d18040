//! 성능 모델 회귀/성질 테스트. 대표 시나리오는 4기통 2.0L 자연흡기 가솔린 엔진이다.
use engine_performance_toolbox::engine::maps::CurveTable;
use engine_performance_toolbox::engine::performance::{
    EngineInput, PerfError, PerformanceModel,
};
use engine_performance_toolbox::fuel_db;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// 4기통, 보어 86mm × 스트로크 86mm, CR 10.5, 3000/6500 RPM, 300 g/kWh, AFR 14.7.
fn base_input() -> EngineInput {
    EngineInput {
        num_cylinders: 4,
        bore_mm: 86.0,
        stroke_mm: 86.0,
        compression_ratio: 10.5,
        rpm: 3000.0,
        rpm_redline: 6500.0,
        bsfc_g_per_kwh: 300.0,
        afr: 14.7,
        fuel: "Gasoline".to_string(),
        rho_air_kg_m3: 1.225,
        manifold_pressure_ratio: 1.0,
        throttle_scaler: 1.0,
    }
}

#[test]
fn known_fuels_always_construct() {
    for code in ["Gasoline", "Diesel", "E85", "gasoline", "DIESEL"] {
        let mut input = base_input();
        input.fuel = code.to_string();
        assert!(
            PerformanceModel::new(input).is_ok(),
            "fuel {code} should construct"
        );
    }
}

#[test]
fn unknown_fuel_is_rejected_at_construction() {
    let mut input = base_input();
    input.fuel = "Hydrogen".to_string();
    match PerformanceModel::new(input) {
        Err(PerfError::UnknownFuel(code)) => assert_eq!(code, "Hydrogen"),
        other => panic!("expected UnknownFuel, got {other:?}"),
    }
}

#[test]
fn zero_rpm_degrades_to_zero_outputs() {
    let mut input = base_input();
    input.rpm = 0.0;
    let model = PerformanceModel::new(input).expect("model");
    let r = model.results();
    assert_eq!(r.air_mass_flow_kg_s, 0.0);
    assert_eq!(r.fuel_mass_flow_kg_s, 0.0);
    assert_eq!(r.brake_power_w, 0.0);
    assert_eq!(r.torque_nm, 0.0);
    assert_eq!(r.bmep_kpa, 0.0);
    assert_eq!(r.imep_kpa, 0.0);
    assert!(r.displacement_l > 0.0);
}

#[test]
fn zero_ambient_density_zeroes_flows_and_power() {
    let mut input = base_input();
    input.rho_air_kg_m3 = 0.0;
    let model = PerformanceModel::new(input).expect("model");
    let r = model.results();
    assert_eq!(r.air_mass_flow_kg_s, 0.0);
    assert_eq!(r.fuel_mass_flow_kg_s, 0.0);
    assert_eq!(r.brake_power_w, 0.0);
    assert_eq!(r.torque_nm, 0.0);
}

#[test]
fn ve_curve_bounded_and_peaks_near_60pct_of_redline() {
    let base = base_input();
    let mut best = (0.0_f64, 0.0_f64);
    let mut rpm = 0.0;
    while rpm <= base.rpm_redline {
        let mut input = base.clone();
        input.rpm = rpm;
        let ve = PerformanceModel::new(input)
            .expect("model")
            .results()
            .volumetric_efficiency_pct;
        assert!(
            (60.0..=100.0).contains(&ve),
            "VE {ve:.2}% out of [60, 100] at {rpm} RPM"
        );
        if ve > best.1 {
            best = (rpm, ve);
        }
        rpm += 50.0;
    }
    // 피크는 0.6 × redline = 3900 RPM에 있어야 한다.
    assert_close("peak rpm", best.0, 3900.0, 0.02);
}

#[test]
fn opening_throttle_never_decreases_flows_or_power() {
    let mut prev = (0.0, 0.0, 0.0);
    for step in 0..=10 {
        let mut input = base_input();
        input.throttle_scaler = f64::from(step) / 10.0;
        let model = PerformanceModel::new(input).expect("model");
        let r = model.results();
        assert!(r.air_mass_flow_kg_s >= prev.0);
        assert!(r.fuel_mass_flow_kg_s >= prev.1);
        assert!(r.brake_power_w >= prev.2);
        prev = (r.air_mass_flow_kg_s, r.fuel_mass_flow_kg_s, r.brake_power_w);
    }
}

#[test]
fn fuel_swap_changes_downstream_quantities() {
    // AFR을 고정하면 공기/연료 질량 유량은 같아도 LHV/밀도 때문에
    // 열효율과 체적 유량은 달라져야 한다.
    let gasoline = PerformanceModel::new(base_input()).expect("model");
    let mut diesel_input = base_input();
    diesel_input.fuel = "Diesel".to_string();
    let diesel = PerformanceModel::new(diesel_input).expect("model");

    assert_eq!(
        gasoline.results().air_mass_flow_kg_s,
        diesel.results().air_mass_flow_kg_s
    );
    assert_ne!(
        gasoline.results().brake_thermal_efficiency_pct,
        diesel.results().brake_thermal_efficiency_pct
    );
    assert_ne!(
        gasoline.results().fuel_flow_l_per_h,
        diesel.results().fuel_flow_l_per_h
    );

    // 연료별 이론 공연비까지 따라가면 연료 질량 유량 자체가 달라진다.
    let mut e85_input = base_input();
    e85_input.fuel = "E85".to_string();
    e85_input.afr = fuel_db::find_fuel("E85").expect("fuel").stoich_afr;
    let e85 = PerformanceModel::new(e85_input).expect("model");
    assert!(e85.results().fuel_mass_flow_kg_s > gasoline.results().fuel_mass_flow_kg_s);
}

#[test]
fn identical_inputs_give_bit_identical_results() {
    let a = PerformanceModel::new(base_input()).expect("model");
    let b = PerformanceModel::new(base_input()).expect("model");
    assert_eq!(a.results(), b.results());
}

#[test]
fn efficiencies_stay_within_physical_bounds() {
    for rpm in [0.0, 1000.0, 2500.0, 3900.0, 5000.0, 6500.0] {
        for cr in [6.0, 10.5, 14.0, 18.0, 22.0] {
            for afr in [8.0, 12.0, 14.7, 18.0, 25.0] {
                let mut input = base_input();
                input.rpm = rpm;
                input.compression_ratio = cr;
                input.afr = afr;
                let model = PerformanceModel::new(input).expect("model");
                let r = model.results();
                assert!(
                    (0.0..=100.0).contains(&r.mechanical_efficiency_pct),
                    "η_mech {} out of range (rpm {rpm}, cr {cr}, afr {afr})",
                    r.mechanical_efficiency_pct
                );
                assert!(
                    (0.0..=100.0).contains(&r.brake_thermal_efficiency_pct),
                    "η_bth {} out of range (rpm {rpm}, cr {cr}, afr {afr})",
                    r.brake_thermal_efficiency_pct
                );
                assert!(
                    (0.0..=100.0).contains(&r.otto_efficiency_pct),
                    "η_otto {} out of range (cr {cr})",
                    r.otto_efficiency_pct
                );
            }
        }
    }
}

#[test]
fn reference_two_liter_engine() {
    let model = PerformanceModel::new(base_input()).expect("model");
    let r = model.results();

    // 86 × 86 × 4기통 → 약 2.0 L
    assert_close("displacement", r.displacement_l, 2.0, 0.05);
    // 3000 RPM은 피크(3900)에서 σ_low(975) 이내라 VE가 바닥보다 훨씬 높아야 한다.
    assert!(r.volumetric_efficiency_pct > 80.0);
    assert!(r.torque_nm > 0.0 && r.torque_nm.is_finite());
    assert!(r.bmep_kpa > 0.0 && r.bmep_kpa.is_finite());
    assert!(r.brake_power_w > 0.0);
    // 결과 필드에 NaN/음수가 없어야 한다.
    for (name, value) in [
        ("air", r.air_mass_flow_kg_s),
        ("fuel", r.fuel_mass_flow_kg_s),
        ("fuel_lph", r.fuel_flow_l_per_h),
        ("brake", r.brake_power_w),
        ("indicated", r.indicated_power_w),
        ("friction", r.friction_power_w),
        ("imep", r.imep_kpa),
        ("fmep", r.fmep_kpa),
        ("bsfc", r.bsfc_g_per_kwh),
        ("ve", r.volumetric_efficiency_pct),
    ] {
        assert!(value.is_finite() && value >= 0.0, "{name} = {value}");
    }
}

#[test]
fn imep_agrees_with_bmep_over_mechanical_efficiency() {
    for rpm in [1200.0, 3000.0, 5200.0] {
        let mut input = base_input();
        input.rpm = rpm;
        let model = PerformanceModel::new(input).expect("model");
        let r = model.results();
        let eta_mech = r.mechanical_efficiency_pct / 100.0;
        assert!(eta_mech > 0.0);
        assert_close(
            "imep vs bmep/η_mech",
            r.imep_kpa,
            r.bmep_kpa / eta_mech,
            1e-9,
        );
    }
}

#[test]
fn external_table_replaces_builtin_curves() {
    let csv = "\
RPM,VE,BSFC_g_kWh
1000,72,340
2000,83,312
3000,92,290
4000,96,280
5000,90,292
6500,72,336
";
    let table = CurveTable::from_reader(csv.as_bytes()).expect("table");
    let model = PerformanceModel::with_table(base_input(), &table).expect("model");
    let r = model.results();
    // 노트 위에서는 스플라인이 테이블 값을 그대로 돌려준다.
    assert_close("VE at 3000", r.volumetric_efficiency_pct, 92.0, 1e-9);
    assert_close("BSFC at 3000", r.bsfc_g_per_kwh, 290.0, 1e-9);

    let builtin = PerformanceModel::new(base_input()).expect("model");
    assert_ne!(
        builtin.results().volumetric_efficiency_pct,
        r.volumetric_efficiency_pct
    );
}
