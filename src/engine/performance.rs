use std::f64::consts::PI;
use std::path::Path;

use crate::engine::calibration::Calibration;
use crate::engine::curves::{self, BsfcSource, VeSource};
use crate::engine::maps::CurveTable;
use crate::fuel_db::{self, FuelData};

/// 성능 모델 구성 오류.
#[derive(Debug)]
pub enum PerfError {
    /// 연료 테이블에 없는 연료 코드
    UnknownFuel(String),
}

impl std::fmt::Display for PerfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerfError::UnknownFuel(code) => write!(f, "알 수 없는 연료: {code}"),
        }
    }
}

impl std::error::Error for PerfError {}

/// 한 번의 평가에 쓰는 엔진 제원과 운전점.
///
/// 길이는 mm, BSFC는 g/kWh로 받고 내부 계산은 전부 SI로 수행한다.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineInput {
    pub num_cylinders: u32,
    pub bore_mm: f64,
    pub stroke_mm: f64,
    pub compression_ratio: f64,
    /// 현재 운전점 회전수 [RPM]
    pub rpm: f64,
    /// 레드라인 [RPM]
    pub rpm_redline: f64,
    /// 토크 피크 기준 명목 BSFC [g/kWh]
    pub bsfc_g_per_kwh: f64,
    /// 공연비 (질량 기준)
    pub afr: f64,
    /// fuel_db 코드 (Gasoline / Diesel / E85)
    pub fuel: String,
    /// 주변 공기 밀도 [kg/m³]
    pub rho_air_kg_m3: f64,
    /// 흡기 매니폴드/대기 압력비. 자연흡기 = 1.0.
    pub manifold_pressure_ratio: f64,
    /// 스로틀 개도 스케일러 (0.0~1.0)
    pub throttle_scaler: f64,
}

impl Default for EngineInput {
    fn default() -> Self {
        Self {
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
}

/// 정상상태 성능 지표 묶음. 압력은 kPa, 동력은 W, 효율은 % 기준.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceResult {
    pub displacement_l: f64,
    pub air_mass_flow_kg_s: f64,
    pub fuel_mass_flow_kg_s: f64,
    pub fuel_flow_l_per_h: f64,
    pub brake_power_w: f64,
    pub indicated_power_w: f64,
    pub friction_power_w: f64,
    pub torque_nm: f64,
    pub bmep_kpa: f64,
    pub imep_kpa: f64,
    pub fmep_kpa: f64,
    /// 유효 BSFC [g/kWh]
    pub bsfc_g_per_kwh: f64,
    pub mechanical_efficiency_pct: f64,
    pub brake_thermal_efficiency_pct: f64,
    /// 오토 사이클 이상 열효율 [%]
    pub otto_efficiency_pct: f64,
    pub volumetric_efficiency_pct: f64,
    pub mean_piston_speed_m_s: f64,
}

/// 파라미터 집합 하나에 대해 생성 시점에 한 번 계산하고 결과를 보관하는 불변 모델.
/// 입력이 바뀌면 새 인스턴스를 만든다.
#[derive(Debug, Clone)]
pub struct PerformanceModel {
    input: EngineInput,
    calib: Calibration,
    fuel: &'static FuelData,
    result: PerformanceResult,
}

impl PerformanceModel {
    /// 내장 VE/BSFC 곡선으로 모델을 만든다.
    pub fn new(input: EngineInput) -> Result<Self, PerfError> {
        Self::with_calibration(input, Calibration::default(), None)
    }

    /// 외부 조회 테이블의 보간 곡선으로 모델을 만든다.
    pub fn with_table(input: EngineInput, table: &CurveTable) -> Result<Self, PerfError> {
        Self::with_calibration(input, Calibration::default(), Some(table))
    }

    /// 경로의 테이블 파일을 시도하고, 읽지 못하면 내장 곡선으로 폴백한다.
    /// 파일 부재/손상은 치명적 오류가 아니라 진단 로그로만 남는다.
    pub fn with_maps(input: EngineInput, path: &Path) -> Result<Self, PerfError> {
        match CurveTable::load(path) {
            Ok(table) => Self::with_table(input, &table),
            Err(err) => {
                log::warn!(
                    "조회 테이블({})을 읽지 못해 내장 곡선을 사용합니다: {err}",
                    path.display()
                );
                Self::new(input)
            }
        }
    }

    /// 보정 상수와 테이블을 직접 주입하는 저수준 생성자.
    pub fn with_calibration(
        input: EngineInput,
        calib: Calibration,
        table: Option<&CurveTable>,
    ) -> Result<Self, PerfError> {
        let fuel = fuel_db::find_fuel(&input.fuel)
            .ok_or_else(|| PerfError::UnknownFuel(input.fuel.clone()))?;

        let (ve_source, bsfc_source) = match table {
            Some(table) => match (table.ve_spline(), table.bsfc_spline()) {
                (Ok(ve), Ok(bsfc)) => (VeSource::Table(ve), BsfcSource::Table(bsfc)),
                _ => {
                    log::warn!("조회 테이블로 보간 곡선을 만들지 못해 내장 곡선을 사용합니다.");
                    formula_sources(&input)
                }
            },
            None => formula_sources(&input),
        };

        let result = calculate(&input, fuel, &calib, &ve_source, &bsfc_source);
        Ok(Self {
            input,
            calib,
            fuel,
            result,
        })
    }

    /// 계산된 지표 스냅샷을 돌려준다.
    pub fn results(&self) -> &PerformanceResult {
        &self.result
    }

    pub fn input(&self) -> &EngineInput {
        &self.input
    }

    pub fn fuel(&self) -> &'static FuelData {
        self.fuel
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calib
    }
}

fn formula_sources(input: &EngineInput) -> (VeSource, BsfcSource) {
    (
        VeSource::Formula {
            redline_rpm: input.rpm_redline,
        },
        BsfcSource::Formula,
    )
}

/// 분모가 0 이하이면 0을 돌려주는 나눗셈. RPM 0, 배기량 0 같은 퇴화 입력이
/// 예외 대신 0 결과로 내려앉게 한다.
fn guard_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// 전체 계산 파이프라인.
fn calculate(
    input: &EngineInput,
    fuel: &FuelData,
    calib: &Calibration,
    ve_source: &VeSource,
    bsfc_source: &BsfcSource,
) -> PerformanceResult {
    // 1) 배기량
    let bore_m = input.bore_mm / 1000.0;
    let stroke_m = input.stroke_mm / 1000.0;
    let piston_area_m2 = PI * (bore_m / 2.0).powi(2);
    let vd_m3 = piston_area_m2 * stroke_m * f64::from(input.num_cylinders);

    // 2) 회전수 의존 효율 곡선
    let ve_frac = ve_source.eval(input.rpm, calib);
    let bsfc_nominal_kg_per_j = curves::grams_per_kwh_to_kg_per_j(input.bsfc_g_per_kwh);
    let bsfc_eff_kg_per_j = bsfc_source.eval(input.rpm, ve_frac, bsfc_nominal_kg_per_j, calib);

    // 3) 공기/연료 유량. 4행정은 2회전에 1회 흡기라 RPM/120이 초당 흡기 횟수가 된다.
    let rho_eff_kg_m3 = input.rho_air_kg_m3 * input.manifold_pressure_ratio * input.throttle_scaler;
    let air_mass_flow_kg_s = vd_m3 * (input.rpm / 120.0) * rho_eff_kg_m3 * ve_frac;
    let fuel_mass_flow_kg_s = guard_div(air_mass_flow_kg_s, input.afr);
    let fuel_flow_l_per_h = guard_div(fuel_mass_flow_kg_s, fuel.density_kg_per_l) * 3600.0;

    // 4) 동력과 토크. 제동 동력은 연료 유량 ÷ 유효 BSFC.
    let brake_power_w = guard_div(fuel_mass_flow_kg_s, bsfc_eff_kg_per_j);
    let omega_rad_s = input.rpm * 2.0 * PI / 60.0;
    let torque_nm = guard_div(brake_power_w, omega_rad_s);
    let bmep_kpa = guard_div(torque_nm * 2.0 * PI, vd_m3) / 1000.0;

    // 5) 마찰(Watson-Heywood)과 도시 동력
    let mean_piston_speed_m_s = 2.0 * stroke_m * input.rpm / 60.0;
    let fmep_kpa = calib.fmep_const_kpa
        + calib.fmep_linear_kpa * mean_piston_speed_m_s
        + calib.fmep_quadratic_kpa * mean_piston_speed_m_s.powi(2);
    let friction_power_w = fmep_kpa * 1000.0 * vd_m3 * input.rpm / 120.0;
    let indicated_power_w = brake_power_w + friction_power_w;
    // IMEP는 도시 동력 경로로 유도한다. 도시 토크에 BMEP와 같은 환산을 적용하므로
    // 기계효율이 정의되는 구간에서는 BMEP/η_mech와 일치한다.
    let indicated_torque_nm = guard_div(indicated_power_w, omega_rad_s);
    let imep_kpa = guard_div(indicated_torque_nm * 2.0 * PI, vd_m3) / 1000.0;

    // 6) 효율
    let mech_eff = guard_div(brake_power_w, indicated_power_w);
    let brake_thermal_eff = guard_div(brake_power_w, fuel_mass_flow_kg_s * fuel.lhv_j_per_kg);
    let otto_eff = if input.compression_ratio > 1.0 {
        1.0 - input.compression_ratio.powf(1.0 - calib.gamma)
    } else {
        0.0
    };

    PerformanceResult {
        displacement_l: vd_m3 * 1000.0,
        air_mass_flow_kg_s,
        fuel_mass_flow_kg_s,
        fuel_flow_l_per_h,
        brake_power_w,
        indicated_power_w,
        friction_power_w,
        torque_nm,
        bmep_kpa,
        imep_kpa,
        fmep_kpa,
        bsfc_g_per_kwh: curves::kg_per_j_to_grams_per_kwh(bsfc_eff_kg_per_j),
        mechanical_efficiency_pct: mech_eff * 100.0,
        brake_thermal_efficiency_pct: brake_thermal_eff * 100.0,
        otto_efficiency_pct: otto_eff * 100.0,
        volumetric_efficiency_pct: ve_frac * 100.0,
        mean_piston_speed_m_s,
    }
}
