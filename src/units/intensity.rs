use serde::{Deserialize, Serialize};

/// 강우 강도 단위. 내부 기준은 m/s(수심 증가율)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityUnit {
    MillimeterPerHour,
    InchPerHour,
    LiterPerSecondHectare,
}

fn to_meter_per_second(value: f64, unit: IntensityUnit) -> f64 {
    match unit {
        IntensityUnit::MillimeterPerHour => value / 3_600_000.0,
        IntensityUnit::InchPerHour => value * 25.4 / 3_600_000.0,
        // 1 L/(s·ha) = 0.001 m3/s 를 10,000 m2에 분배
        IntensityUnit::LiterPerSecondHectare => value * 1.0e-7,
    }
}

fn from_meter_per_second(value_ms: f64, unit: IntensityUnit) -> f64 {
    match unit {
        IntensityUnit::MillimeterPerHour => value_ms * 3_600_000.0,
        IntensityUnit::InchPerHour => value_ms * 3_600_000.0 / 25.4,
        IntensityUnit::LiterPerSecondHectare => value_ms / 1.0e-7,
    }
}

/// 강우 강도를 다른 단위로 변환한다.
pub fn convert_intensity(value: f64, from: IntensityUnit, to: IntensityUnit) -> f64 {
    let ms = to_meter_per_second(value, from);
    from_meter_per_second(ms, to)
}
