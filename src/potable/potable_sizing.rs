use crate::conversion;
use crate::pipe_db::PotablePipe;

/// 급수 관경 선정 오류.
#[derive(Debug, PartialEq)]
pub enum PotableSizingError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
    /// 이론 관경이 카탈로그 범위를 벗어난 경우
    OutOfCommercialRange,
}

impl std::fmt::Display for PotableSizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotableSizingError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            PotableSizingError::OutOfCommercialRange => {
                write!(f, "이론 관경이 상용 카탈로그 범위를 벗어났습니다.")
            }
        }
    }
}

impl std::error::Error for PotableSizingError {}

/// 급수 관경 선정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotableSelection {
    /// 제한 유속 기준 이론 최소 내경 [mm]
    pub theoretical_diameter_mm: f64,
    /// 선정된 상용 관
    pub pipe: PotablePipe,
}

/// 설계 유량과 제한 유속으로 상용 관경을 선정한다.
///
/// 필요 단면적 A = Q / V_limit 에서 이론 내경을 구하고, 내경 오름차순
/// 카탈로그에서 이론 내경 이상인 첫 번째 관을 고른다. 선정은 면적
/// 기준만 사용하며 선정 관에 대한 유속/용량 재계산은 하지 않는다.
pub fn select_diameter(
    design_flow_lps: f64,
    limit_velocity_m_per_s: f64,
    catalog: &[PotablePipe],
) -> Result<PotableSelection, PotableSizingError> {
    if !(design_flow_lps > 0.0) {
        return Err(PotableSizingError::InvalidInput(
            "설계 유량은 0보다 커야 합니다.",
        ));
    }
    if !(limit_velocity_m_per_s > 0.0) {
        return Err(PotableSizingError::InvalidInput(
            "제한 유속은 0보다 커야 합니다.",
        ));
    }

    let flow_m3s = conversion::lps_to_m3s(design_flow_lps);
    let min_area_m2 = flow_m3s / limit_velocity_m_per_s;
    let theoretical_diameter_mm =
        (4.0 * min_area_m2 / std::f64::consts::PI).sqrt() * 1000.0;

    let pipe = catalog
        .iter()
        .find(|p| p.internal_diameter_mm >= theoretical_diameter_mm)
        .ok_or(PotableSizingError::OutOfCommercialRange)?;

    Ok(PotableSelection {
        theoretical_diameter_mm,
        pipe: *pipe,
    })
}
