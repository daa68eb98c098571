//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod flow;
pub mod intensity;
pub mod length;
pub mod velocity;
pub mod viscosity;

pub use area::{convert_area, AreaUnit};
pub use flow::{convert_flow, FlowUnit};
pub use intensity::{convert_intensity, IntensityUnit};
pub use length::{convert_length, LengthUnit};
pub use velocity::{convert_velocity, VelocityUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
