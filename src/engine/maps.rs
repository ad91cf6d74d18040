use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::engine::interp::{CubicSpline, SplineError};

/// VE/BSFC 조회 테이블 로드 오류. 모델 생성에는 치명적이지 않고,
/// 호출 측에서 내장 곡선으로 폴백하는 것이 전제다.
#[derive(Debug)]
pub enum MapError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// CSV 파싱 오류
    Csv(csv::Error),
    /// 필수 컬럼 누락 (RPM / VE / BSFC_g_kWh)
    MissingColumn(&'static str),
    /// 보간에 필요한 최소 행 수(2행) 미달
    TooFewRows,
    /// 행 값이 숫자가 아니거나 RPM이 중복된 경우
    InvalidRow(&'static str),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            MapError::Csv(e) => write!(f, "CSV 파싱 오류: {e}"),
            MapError::MissingColumn(name) => write!(f, "필수 컬럼 누락: {name}"),
            MapError::TooFewRows => write!(f, "행이 2개 미만이라 보간할 수 없습니다."),
            MapError::InvalidRow(msg) => write!(f, "잘못된 행: {msg}"),
        }
    }
}

impl std::error::Error for MapError {}

impl From<std::io::Error> for MapError {
    fn from(value: std::io::Error) -> Self {
        MapError::Io(value)
    }
}

impl From<csv::Error> for MapError {
    fn from(value: csv::Error) -> Self {
        MapError::Csv(value)
    }
}

/// RPM별 VE(%)와 BSFC(g/kWh)를 담는 조회 테이블.
/// 행은 로드 시 RPM 오름차순으로 정렬되며, 입력 파일의 행 순서는 상관없다.
#[derive(Debug, Clone)]
pub struct CurveTable {
    pub rpm: Vec<f64>,
    pub ve_pct: Vec<f64>,
    pub bsfc_g_per_kwh: Vec<f64>,
}

impl CurveTable {
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MapError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        let find = |name: &'static str| -> Result<usize, MapError> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or(MapError::MissingColumn(name))
        };
        let idx_rpm = find("RPM")?;
        let idx_ve = find("VE")?;
        let idx_bsfc = find("BSFC_g_kWh")?;

        let mut rows: Vec<(f64, f64, f64)> = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let field = |idx: usize| -> Option<f64> {
                record
                    .get(idx)
                    .and_then(|s| s.trim().parse::<f64>().ok())
                    .filter(|v| v.is_finite())
            };
            match (field(idx_rpm), field(idx_ve), field(idx_bsfc)) {
                (Some(rpm), Some(ve), Some(bsfc)) => rows.push((rpm, ve, bsfc)),
                _ => return Err(MapError::InvalidRow("숫자로 읽을 수 없는 값이 있습니다.")),
            }
        }
        if rows.len() < 2 {
            return Err(MapError::TooFewRows);
        }
        rows.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        if rows.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(MapError::InvalidRow("RPM 값이 중복되었습니다."));
        }

        Ok(Self {
            rpm: rows.iter().map(|r| r.0).collect(),
            ve_pct: rows.iter().map(|r| r.1).collect(),
            bsfc_g_per_kwh: rows.iter().map(|r| r.2).collect(),
        })
    }

    /// VE(%) 보간 곡선을 만든다.
    pub fn ve_spline(&self) -> Result<CubicSpline, SplineError> {
        CubicSpline::new(self.rpm.clone(), self.ve_pct.clone())
    }

    /// BSFC(g/kWh) 보간 곡선을 만든다.
    pub fn bsfc_spline(&self) -> Result<CubicSpline, SplineError> {
        CubicSpline::new(self.rpm.clone(), self.bsfc_g_per_kwh.clone())
    }
}
