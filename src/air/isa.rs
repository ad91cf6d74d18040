/// 국제표준대기(ISA) 근사 계산 결과.
#[derive(Debug, Clone)]
pub struct IsaState {
    /// 고도 기압 [Pa]
    pub pressure_pa: f64,
    /// ISA 표준 기온 [°C] (참고용)
    pub isa_temp_c: f64,
    /// 사용자 기온 기준 공기 밀도 [kg/m³]
    pub density_kg_m3: f64,
}

const P0_PA: f64 = 101_325.0;
const T0_K: f64 = 288.15;
const G_M_PER_S2: f64 = 9.80665;
const LAPSE_K_PER_M: f64 = 0.0065;
/// 건공기 비기체상수 [J/(kg·K)]
const R_AIR: f64 = 287.058;
/// 건공기 몰질량 [kg/mol]
const MOLAR_MASS_KG_MOL: f64 = 0.028_964_4;
/// 일반기체상수 [J/(mol·K)]
const R_UNIVERSAL: f64 = 8.314_46;

/// 고도와 기온으로 공기 밀도를 구한다.
///
/// 기압은 대류권 기압 고도식, 밀도는 사용자 기온을 넣은 이상기체식으로 계산한다.
/// 기온 보정이 필요 없으면 `isa_temp_c`를 그대로 다시 넣으면 된다.
pub fn isa_state(altitude_m: f64, ambient_temp_c: f64) -> IsaState {
    let temp_k = ambient_temp_c + 273.15;
    let isa_temp_k = T0_K - LAPSE_K_PER_M * altitude_m;
    let exponent = G_M_PER_S2 * MOLAR_MASS_KG_MOL / (R_UNIVERSAL * LAPSE_K_PER_M);
    let base = (1.0 - LAPSE_K_PER_M * altitude_m / T0_K).max(0.0);
    let pressure_pa = P0_PA * base.powf(exponent);
    let density_kg_m3 = if temp_k > 0.0 {
        pressure_pa / (R_AIR * temp_k)
    } else {
        0.0
    };
    IsaState {
        pressure_pa,
        isa_temp_c: isa_temp_k - 273.15,
        density_kg_m3,
    }
}

/// 고도/기온 → 공기 밀도 [kg/m³].
pub fn isa_density(altitude_m: f64, ambient_temp_c: f64) -> f64 {
    isa_state(altitude_m, ambient_temp_c).density_kg_m3
}

/// 부스트 게이지압 [kPa] → 매니폴드/대기 압력비. 0 kPa = 자연흡기(1.0).
pub fn pressure_ratio_from_boost(boost_kpa: f64) -> f64 {
    1.0 + boost_kpa / 101.325
}
