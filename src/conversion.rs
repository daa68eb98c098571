use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mm`, `m2`, `l/s`, `mm/h`, `cSt` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::Flow => {
            let from = parse_flow_unit(from_unit_str)?;
            let to = parse_flow_unit(to_unit_str)?;
            Ok(convert_flow(value, from, to))
        }
        QuantityKind::RainfallIntensity => {
            let from = parse_intensity_unit(from_unit_str)?;
            let to = parse_intensity_unit(to_unit_str)?;
            Ok(convert_intensity(value, from, to))
        }
        QuantityKind::KinematicViscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ha" | "hectare" => Ok(AreaUnit::Hectare),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3/s" | "m^3/s" | "cms" => Ok(FlowUnit::CubicMeterPerSecond),
        "l/s" | "lps" => Ok(FlowUnit::LiterPerSecond),
        "m3/h" | "m^3/h" | "cmh" => Ok(FlowUnit::CubicMeterPerHour),
        "gpm" | "usgpm" => Ok(FlowUnit::UsGallonPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_intensity_unit(s: &str) -> Result<IntensityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "mm/h" | "mm/hr" => Ok(IntensityUnit::MillimeterPerHour),
        "in/h" | "in/hr" => Ok(IntensityUnit::InchPerHour),
        "l/s-ha" | "l/(s·ha)" | "l/s.ha" => Ok(IntensityUnit::LiterPerSecondHectare),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2/s" | "m^2/s" => Ok(ViscosityUnit::SquareMeterPerSecond),
        "cst" | "centistokes" => Ok(ViscosityUnit::Centistokes),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

// 설계 계산에서 반복되는 환산. 각 솔버 호출부가 개별적으로 환산하지 않고
// 반드시 이 함수들을 거친다.

/// mm 단위 내경을 m로 환산한다.
pub fn mm_to_m(value_mm: f64) -> f64 {
    value_mm / 1000.0
}

/// 퍼센트 값을 비율(0~1)로 환산한다.
pub fn percent_to_fraction(value_percent: f64) -> f64 {
    value_percent / 100.0
}

/// 강우 강도 mm/hr를 m/s로 환산한다.
pub fn intensity_mmh_to_ms(value_mm_per_h: f64) -> f64 {
    value_mm_per_h / 3_600_000.0
}

/// m3/s 유량을 L/s로 환산한다.
pub fn m3s_to_lps(value_m3s: f64) -> f64 {
    value_m3s * 1000.0
}

/// L/s 유량을 m3/s로 환산한다.
pub fn lps_to_m3s(value_lps: f64) -> f64 {
    value_lps / 1000.0
}
