use serde::{Deserialize, Serialize};

/// 연료 체적 유량 단위. 내부 기준은 L/h이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    LiterPerHour,
    UsGallonPerHour,
    ImperialGallonPerHour,
}

const L_PER_US_GAL: f64 = 3.785_411_784;
const L_PER_IMP_GAL: f64 = 4.546_09;

fn to_liter_per_hour(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::LiterPerHour => value,
        FlowUnit::UsGallonPerHour => value * L_PER_US_GAL,
        FlowUnit::ImperialGallonPerHour => value * L_PER_IMP_GAL,
    }
}

fn from_liter_per_hour(value_lph: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::LiterPerHour => value_lph,
        FlowUnit::UsGallonPerHour => value_lph / L_PER_US_GAL,
        FlowUnit::ImperialGallonPerHour => value_lph / L_PER_IMP_GAL,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    from_liter_per_hour(to_liter_per_hour(value, from), to)
}

pub fn flow_unit_label(unit: FlowUnit) -> &'static str {
    match unit {
        FlowUnit::LiterPerHour => "L/h",
        FlowUnit::UsGallonPerHour => "gal/h",
        FlowUnit::ImperialGallonPerHour => "gal(imp)/h",
    }
}
