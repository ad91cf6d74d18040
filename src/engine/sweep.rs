use crate::engine::maps::CurveTable;
use crate::engine::performance::{EngineInput, PerfError, PerformanceModel, PerformanceResult};

/// RPM 스윕 한 점의 결과.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub rpm: f64,
    pub result: PerformanceResult,
}

/// `start..=end` 구간을 `step` 간격으로 스윕한다.
/// 점마다 독립적인 모델을 새로 만들므로 평가 사이에 공유 상태가 없다.
pub fn sweep_rpm(
    base: &EngineInput,
    start: f64,
    end: f64,
    step: f64,
    table: Option<&CurveTable>,
) -> Result<Vec<SweepPoint>, PerfError> {
    let mut points = Vec::new();
    if step <= 0.0 || end < start {
        return Ok(points);
    }
    let mut rpm = start;
    while rpm <= end + 1e-9 {
        let mut input = base.clone();
        input.rpm = rpm;
        let model = match table {
            Some(table) => PerformanceModel::with_table(input, table)?,
            None => PerformanceModel::new(input)?,
        };
        points.push(SweepPoint {
            rpm,
            result: model.results().clone(),
        });
        rpm += step;
    }
    Ok(points)
}
