use serde::{Deserialize, Serialize};

/// 동점성계수 단위. 내부 기준은 m2/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    SquareMeterPerSecond,
    Centistokes,
}

fn to_square_meter_per_second(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::SquareMeterPerSecond => value,
        ViscosityUnit::Centistokes => value * 1.0e-6,
    }
}

fn from_square_meter_per_second(value_m2s: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::SquareMeterPerSecond => value_m2s,
        ViscosityUnit::Centistokes => value_m2s / 1.0e-6,
    }
}

/// 동점성계수를 다른 단위로 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    let m2s = to_square_meter_per_second(value, from);
    from_square_meter_per_second(m2s, to)
}
