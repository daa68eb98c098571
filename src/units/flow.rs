use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m3/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    LiterPerSecond,
    CubicMeterPerHour,
    UsGallonPerMinute,
}

fn to_cubic_meter_per_second(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::CubicMeterPerHour => value / 3600.0,
        FlowUnit::UsGallonPerMinute => value * 6.30902e-5,
    }
}

fn from_cubic_meter_per_second(value_m3s: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value_m3s,
        FlowUnit::LiterPerSecond => value_m3s * 1000.0,
        FlowUnit::CubicMeterPerHour => value_m3s * 3600.0,
        FlowUnit::UsGallonPerMinute => value_m3s / 6.30902e-5,
    }
}

/// 체적 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let m3s = to_cubic_meter_per_second(value, from);
    from_cubic_meter_per_second(m3s, to)
}
