use crate::engine::calibration::Calibration;
use crate::engine::interp::CubicSpline;

const J_PER_KWH_X_GRAMS: f64 = 1000.0 * 3.6e6;

/// g/kWh → kg/J 환산.
pub fn grams_per_kwh_to_kg_per_j(value: f64) -> f64 {
    value / J_PER_KWH_X_GRAMS
}

/// kg/J → g/kWh 환산.
pub fn kg_per_j_to_grams_per_kwh(value: f64) -> f64 {
    value * J_PER_KWH_X_GRAMS
}

/// 체적효율 곡선 공급원.
/// 외부 테이블이 있으면 3차 보간으로 읽고, 없으면 내장 비대칭 가우시안 곡선을 쓴다.
#[derive(Debug, Clone)]
pub enum VeSource {
    /// 내장 곡선. 피크 RPM = redline × ve_peak_ratio.
    Formula { redline_rpm: f64 },
    /// 외부 CSV 테이블(% 단위)의 3차 보간 곡선.
    Table(CubicSpline),
}

impl VeSource {
    /// 체적효율을 분율로 평가한다. 테이블은 % 값을 담고 있어 100으로 나눈다.
    pub fn eval(&self, rpm: f64, calib: &Calibration) -> f64 {
        match self {
            VeSource::Formula { redline_rpm } => ve_formula(rpm, *redline_rpm, calib),
            VeSource::Table(spline) => spline.eval(rpm) / 100.0,
        }
    }
}

/// 내장 체적효율 곡선: floor + amplitude × exp(−½((rpm−피크)/σ)²).
/// 피크 위쪽은 더 좁은 σ를 써서 피크 이후가 더 빨리 떨어지는 토크 곡선 모양을 만든다.
fn ve_formula(rpm: f64, redline_rpm: f64, calib: &Calibration) -> f64 {
    let rpm_peak = redline_rpm * calib.ve_peak_ratio;
    let sigma = if rpm < rpm_peak {
        rpm_peak * calib.ve_sigma_low_ratio
    } else {
        rpm_peak * calib.ve_sigma_high_ratio
    };
    if sigma <= 0.0 {
        return calib.ve_floor;
    }
    let z = (rpm - rpm_peak) / sigma;
    calib.ve_floor + calib.ve_amplitude * (-0.5 * z * z).exp()
}

/// 유효 BSFC 공급원.
/// 테이블이 있으면 g/kWh 값을 그대로 읽고, 없으면 명목값에 VE 연동 선형 보정을 적용한다.
#[derive(Debug, Clone)]
pub enum BsfcSource {
    Formula,
    /// 외부 CSV 테이블(g/kWh 단위)의 3차 보간 곡선.
    Table(CubicSpline),
}

impl BsfcSource {
    /// 유효 BSFC를 kg/J로 평가한다. `nominal_kg_per_j`는 토크 피크 기준 명목값.
    pub fn eval(&self, rpm: f64, ve_frac: f64, nominal_kg_per_j: f64, calib: &Calibration) -> f64 {
        match self {
            BsfcSource::Formula => {
                nominal_kg_per_j * (1.0 - calib.bsfc_ve_gain * (ve_frac - calib.ve_floor))
            }
            BsfcSource::Table(spline) => grams_per_kwh_to_kg_per_j(spline.eval(rpm)),
        }
    }
}
