//! 보간 스플라인과 VE/BSFC 조회 테이블 로드 경로 테스트.
use std::path::Path;

use engine_performance_toolbox::engine::interp::CubicSpline;
use engine_performance_toolbox::engine::maps::{CurveTable, MapError};
use engine_performance_toolbox::engine::performance::{EngineInput, PerformanceModel};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn spline_passes_through_knots() {
    let xs = vec![1000.0, 2000.0, 3500.0, 5000.0, 6500.0];
    let ys = vec![72.0, 84.0, 95.0, 88.0, 71.0];
    let spline = CubicSpline::new(xs.clone(), ys.clone()).expect("spline");
    for (x, y) in xs.iter().zip(ys.iter()) {
        assert_close("knot", spline.eval(*x), *y, 1e-12);
    }
}

#[test]
fn spline_reproduces_straight_lines_everywhere() {
    // 직선 위의 노트라면 자연 경계 조건으로 2차 도함수가 전부 0이 되어
    // 보간 구간은 물론 외삽 구간에서도 직선이 그대로 나와야 한다.
    let xs: Vec<f64> = (0..6).map(|i| 500.0 * f64::from(i)).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 0.01 * x + 3.0).collect();
    let spline = CubicSpline::new(xs, ys).expect("spline");
    for x in [-400.0, 0.0, 333.0, 1250.0, 2500.0, 4000.0] {
        assert_close("line", spline.eval(x), 0.01 * x + 3.0, 1e-10);
    }
}

#[test]
fn spline_with_two_points_is_linear() {
    let spline = CubicSpline::new(vec![1000.0, 2000.0], vec![70.0, 90.0]).expect("spline");
    assert_close("mid", spline.eval(1500.0), 80.0, 1e-12);
    // 범위 밖은 경계 구간 기울기로 연장된다.
    assert_close("below", spline.eval(500.0), 60.0, 1e-12);
    assert_close("above", spline.eval(2500.0), 100.0, 1e-12);
}

#[test]
fn spline_extrapolation_is_continuous_at_bounds() {
    let spline = CubicSpline::new(
        vec![1000.0, 2000.0, 3000.0, 4000.0],
        vec![75.0, 88.0, 93.0, 85.0],
    )
    .expect("spline");
    let (lo, hi) = spline.domain();
    assert_close("left edge", spline.eval(lo - 1e-9), spline.eval(lo), 1e-6);
    assert_close("right edge", spline.eval(hi + 1e-9), spline.eval(hi), 1e-6);
    assert!(spline.eval(lo - 500.0).is_finite());
    assert!(spline.eval(hi + 500.0).is_finite());
}

#[test]
fn spline_rejects_unsorted_or_duplicate_x() {
    assert!(CubicSpline::new(vec![2000.0, 1000.0], vec![1.0, 2.0]).is_err());
    assert!(CubicSpline::new(vec![1000.0, 1000.0], vec![1.0, 2.0]).is_err());
    assert!(CubicSpline::new(vec![], vec![]).is_err());
}

#[test]
fn table_parses_and_sorts_rows() {
    // 행 순서가 뒤섞여 있어도 RPM 오름차순으로 정렬되어야 한다.
    let csv = "\
RPM,VE,BSFC_g_kWh
4000,96,280
1000,72,340
3000,92,290
2000,83,312
";
    let table = CurveTable::from_reader(csv.as_bytes()).expect("table");
    assert_eq!(table.rpm, vec![1000.0, 2000.0, 3000.0, 4000.0]);
    assert_eq!(table.ve_pct[2], 92.0);
    assert_eq!(table.bsfc_g_per_kwh[0], 340.0);
    assert!(table.ve_spline().is_ok());
    assert!(table.bsfc_spline().is_ok());
}

#[test]
fn table_rejects_missing_column() {
    let csv = "RPM,VE\n1000,72\n2000,83\n";
    match CurveTable::from_reader(csv.as_bytes()) {
        Err(MapError::MissingColumn(name)) => assert_eq!(name, "BSFC_g_kWh"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn table_rejects_too_few_rows() {
    let csv = "RPM,VE,BSFC_g_kWh\n3000,92,290\n";
    assert!(matches!(
        CurveTable::from_reader(csv.as_bytes()),
        Err(MapError::TooFewRows)
    ));
}

#[test]
fn table_rejects_non_numeric_and_duplicate_rows() {
    let bad_number = "RPM,VE,BSFC_g_kWh\n1000,abc,340\n2000,83,312\n";
    assert!(matches!(
        CurveTable::from_reader(bad_number.as_bytes()),
        Err(MapError::InvalidRow(_))
    ));
    let dup_rpm = "RPM,VE,BSFC_g_kWh\n1000,72,340\n1000,83,312\n";
    assert!(matches!(
        CurveTable::from_reader(dup_rpm.as_bytes()),
        Err(MapError::InvalidRow(_))
    ));
}

#[test]
fn missing_map_file_falls_back_to_builtin_curves() {
    let input = EngineInput::default();
    let with_missing =
        PerformanceModel::with_maps(input.clone(), Path::new("no/such/ve_bsfc.csv"))
            .expect("fallback model");
    let builtin = PerformanceModel::new(input).expect("model");
    assert_eq!(with_missing.results(), builtin.results());
}
