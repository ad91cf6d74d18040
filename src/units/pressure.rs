use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 kPa이다. 평균유효압력(MEP) 표시용이라 게이지/절대 구분은 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    KiloPascal,
    Bar,
    Psi,
}

const KPA_PER_BAR: f64 = 100.0;
const KPA_PER_PSI: f64 = 6.894_757;

fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KiloPascal => value,
        PressureUnit::Bar => value * KPA_PER_BAR,
        PressureUnit::Psi => value * KPA_PER_PSI,
    }
}

fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::Bar => value_kpa / KPA_PER_BAR,
        PressureUnit::Psi => value_kpa / KPA_PER_PSI,
    }
}

/// 압력을 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_kpa(to_kpa(value, from), to)
}

pub fn pressure_unit_label(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::Bar => "bar",
        PressureUnit::Psi => "psi",
    }
}
