use crate::conversion;
use crate::hydraulics::{flow_section, manning_flow, manning_velocity};
use crate::pipe_db::PipeSpec;

/// 오수 관경 선정 오류.
#[derive(Debug, PartialEq)]
pub enum DrainageSizingError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
    /// 카탈로그를 다 훑어도 설계 유량을 만족하는 관이 없는 경우
    NoSuitablePipe,
}

impl std::fmt::Display for DrainageSizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrainageSizingError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            DrainageSizingError::NoSuitablePipe => {
                write!(f, "설계 유량을 만족하는 상용 관이 없습니다.")
            }
        }
    }
}

impl std::error::Error for DrainageSizingError {}

/// 오수 관경 평가 입력값.
#[derive(Debug, Clone)]
pub struct DrainageInput {
    /// 설계 유량 [L/s]
    pub design_flow_lps: f64,
    /// 경사 [%]
    pub slope_percent: f64,
    /// Manning 조도계수 n
    pub manning_n: f64,
    /// 설계 충수비 y/D [%]
    pub fill_ratio_percent: f64,
}

/// 카탈로그 관 하나에 대한 평가 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainageRow {
    pub pipe: PipeSpec,
    /// 설계 충수비에서의 통수 능력 [L/s]
    pub capacity_lps: f64,
    /// 통수 능력 기준 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 설계 충수비에서의 수심 [mm]
    pub water_depth_mm: f64,
    /// 통수 능력이 설계 유량 이상인지
    pub viable: bool,
}

/// 오수 관경 선정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainageSelection {
    pub pipe: PipeSpec,
    /// 설계 충수비에서의 통수 능력 [L/s]
    pub capacity_lps: f64,
    /// 설계 유량이 흐를 때의 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 설계 충수비에서의 수심 [mm]
    pub water_depth_mm: f64,
}

fn validate(input: &DrainageInput) -> Result<(), DrainageSizingError> {
    if !(input.design_flow_lps > 0.0) {
        return Err(DrainageSizingError::InvalidInput(
            "설계 유량은 0보다 커야 합니다.",
        ));
    }
    if !(input.slope_percent > 0.0) {
        return Err(DrainageSizingError::InvalidInput(
            "경사는 0보다 커야 합니다.",
        ));
    }
    if !(input.manning_n > 0.0) {
        return Err(DrainageSizingError::InvalidInput(
            "Manning 조도계수는 0보다 커야 합니다.",
        ));
    }
    if !(input.fill_ratio_percent > 0.0 && input.fill_ratio_percent <= 100.0) {
        return Err(DrainageSizingError::InvalidInput(
            "충수비는 0 초과 100 이하 퍼센트여야 합니다.",
        ));
    }
    Ok(())
}

/// 카탈로그 전체를 설계 충수비에서 Manning 식으로 평가한다.
/// 행 순서는 카탈로그 순서를 보존한다.
pub fn evaluate_catalog(
    input: &DrainageInput,
    catalog: &[PipeSpec],
) -> Result<Vec<DrainageRow>, DrainageSizingError> {
    validate(input)?;

    let design_flow_m3s = conversion::lps_to_m3s(input.design_flow_lps);
    let slope = conversion::percent_to_fraction(input.slope_percent);
    let fill_ratio = conversion::percent_to_fraction(input.fill_ratio_percent);

    Ok(catalog
        .iter()
        .map(|pipe| {
            let diameter_m = conversion::mm_to_m(pipe.internal_diameter_mm);
            let depth_m = fill_ratio * diameter_m;
            let geom = flow_section(diameter_m, depth_m);
            let capacity_m3s =
                manning_flow(geom.area_m2, input.manning_n, geom.hydraulic_radius_m, slope);
            DrainageRow {
                pipe: *pipe,
                capacity_lps: conversion::m3s_to_lps(capacity_m3s),
                velocity_m_per_s: manning_velocity(capacity_m3s, geom.area_m2),
                water_depth_mm: depth_m * 1000.0,
                viable: capacity_m3s >= design_flow_m3s,
            }
        })
        .collect())
}

/// 설계 유량을 만족하는 최소 관경을 선정한다.
///
/// 내경 오름차순 카탈로그에서 통수 능력이 설계 유량 이상인 첫 번째 관이
/// 곧 최소 적합 관경이다. 선정 유속은 통수 능력이 아니라 설계 유량이
/// 흐를 때 기준이다.
pub fn select_diameter(
    input: &DrainageInput,
    catalog: &[PipeSpec],
) -> Result<DrainageSelection, DrainageSizingError> {
    validate(input)?;

    let design_flow_m3s = conversion::lps_to_m3s(input.design_flow_lps);
    let slope = conversion::percent_to_fraction(input.slope_percent);
    let fill_ratio = conversion::percent_to_fraction(input.fill_ratio_percent);

    for pipe in catalog {
        let diameter_m = conversion::mm_to_m(pipe.internal_diameter_mm);
        let depth_m = fill_ratio * diameter_m;
        let geom = flow_section(diameter_m, depth_m);
        let capacity_m3s =
            manning_flow(geom.area_m2, input.manning_n, geom.hydraulic_radius_m, slope);
        if capacity_m3s >= design_flow_m3s {
            return Ok(DrainageSelection {
                pipe: *pipe,
                capacity_lps: conversion::m3s_to_lps(capacity_m3s),
                velocity_m_per_s: manning_velocity(design_flow_m3s, geom.area_m2),
                water_depth_mm: depth_m * 1000.0,
            });
        }
    }

    Err(DrainageSizingError::NoSuitablePipe)
}
