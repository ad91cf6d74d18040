//! 표시용 단위 정의 및 변환 모듈 모음. 내부 계산은 항상 SI로 하고,
//! 변환은 출력 직전에만 적용한다.

pub mod flow;
pub mod power;
pub mod pressure;
pub mod temperature;
pub mod torque;

pub use flow::{convert_flow, flow_unit_label, FlowUnit};
pub use power::{convert_power, power_unit_label, PowerUnit};
pub use pressure::{convert_pressure, pressure_unit_label, PressureUnit};
pub use temperature::{convert_temperature, temperature_unit_label, TemperatureUnit};
pub use torque::{convert_torque, torque_unit_label, TorqueUnit};
