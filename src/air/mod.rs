//! 대기/흡기 조건 관련 계산 모듈 모음.

pub mod isa;

pub use isa::{isa_density, isa_state, pressure_ratio_from_boost, IsaState};
