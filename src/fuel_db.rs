/// 연료 물성(저위발열량, 액체 밀도, 이론 공연비) 테이블과 조회 함수를 제공한다.
/// 값은 대표적인 시판 연료 기준이며 정밀 해석에는 실측값으로 교체해야 한다.

#[derive(Debug)]
pub struct FuelData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 저위발열량 LHV [J/kg]
    pub lhv_j_per_kg: f64,
    /// 액체 밀도 [kg/L]
    pub density_kg_per_l: f64,
    /// 이론 공연비 (질량 기준)
    pub stoich_afr: f64,
}

pub fn fuels() -> &'static [FuelData] {
    FUELS
}

/// 코드 또는 이름으로 연료를 찾는다. 대소문자는 구분하지 않는다.
pub fn find_fuel(code: &str) -> Option<&'static FuelData> {
    FUELS
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(code) || f.name.eq_ignore_ascii_case(code))
}

const FUELS: &[FuelData] = &[
    FuelData {
        code: "Gasoline",
        name: "가솔린",
        notes: "무연 휘발유 (RON 91~95 기준)",
        lhv_j_per_kg: 44.0e6,
        density_kg_per_l: 0.75,
        stoich_afr: 14.7,
    },
    FuelData {
        code: "Diesel",
        name: "디젤",
        notes: "경유 (자동차용)",
        lhv_j_per_kg: 42.5e6,
        density_kg_per_l: 0.85,
        stoich_afr: 14.5,
    },
    FuelData {
        code: "E85",
        name: "E85",
        notes: "에탄올 85% 혼합 연료",
        lhv_j_per_kg: 27.0e6,
        density_kg_per_l: 0.78,
        stoich_afr: 9.7,
    },
];
