use serde::{Deserialize, Serialize};

/// 유속 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
}

fn to_meter_per_second(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerSecond => value * 0.3048,
    }
}

fn from_meter_per_second(value_ms: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value_ms,
        VelocityUnit::FootPerSecond => value_ms / 0.3048,
    }
}

/// 유속을 다른 단위로 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let ms = to_meter_per_second(value, from);
    from_meter_per_second(ms, to)
}
