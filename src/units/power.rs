use serde::{Deserialize, Serialize};

/// 동력 단위. 내부 기준은 와트(W)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    /// 기계 마력 (550 ft·lbf/s)
    MechanicalHorsepower,
    /// 미터법 마력 (PS)
    MetricHorsepower,
}

const W_PER_HP: f64 = 745.699_872;
const W_PER_PS: f64 = 735.498_75;

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::MechanicalHorsepower => value * W_PER_HP,
        PowerUnit::MetricHorsepower => value * W_PER_PS,
    }
}

fn from_watt(value_w: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value_w,
        PowerUnit::Kilowatt => value_w / 1000.0,
        PowerUnit::MechanicalHorsepower => value_w / W_PER_HP,
        PowerUnit::MetricHorsepower => value_w / W_PER_PS,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    from_watt(to_watt(value, from), to)
}

pub fn power_unit_label(unit: PowerUnit) -> &'static str {
    match unit {
        PowerUnit::Watt => "W",
        PowerUnit::Kilowatt => "kW",
        PowerUnit::MechanicalHorsepower => "hp",
        PowerUnit::MetricHorsepower => "PS",
    }
}
