use super::GRAVITY_M_PER_S2;

/// 평균 유속과 유량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    /// 평균 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 유량 [m3/s]
    pub flow_m3_per_s: f64,
}

impl FlowState {
    const ZERO: FlowState = FlowState {
        velocity_m_per_s: 0.0,
        flow_m3_per_s: 0.0,
    };
}

/// Colebrook-White 계열 반경험식으로 평균 유속과 유량을 계산한다.
///
/// v = -2 * sqrt(8 g Rh S) * log10( ks/(14.8 Rh) + 2.51 ν / (4 Rh sqrt(8 g Rh S)) )
///
/// 폐형식이며 반복 계산이 없다. 동수반경이나 경사가 0 이하이면 물리적으로
/// 흐름이 없으므로 {0, 0}을 반환하고, 로그 인자가 0 이하가 되는 퇴화
/// 입력도 같은 방식으로 막는다.
pub fn colebrook_flow(
    hydraulic_radius_m: f64,
    slope: f64,
    area_m2: f64,
    roughness_m: f64,
    kinematic_viscosity_m2_s: f64,
) -> FlowState {
    if hydraulic_radius_m <= 0.0 || slope <= 0.0 {
        return FlowState::ZERO;
    }

    let sqrt_8g_rh_s = (8.0 * GRAVITY_M_PER_S2 * hydraulic_radius_m * slope).sqrt();
    let term1 = roughness_m / (14.8 * hydraulic_radius_m);
    let term2 = (2.51 * kinematic_viscosity_m2_s) / (4.0 * hydraulic_radius_m * sqrt_8g_rh_s);

    if term1 + term2 <= 0.0 {
        return FlowState::ZERO;
    }

    let velocity = -2.0 * sqrt_8g_rh_s * (term1 + term2).log10();
    FlowState {
        velocity_m_per_s: velocity,
        flow_m3_per_s: velocity * area_m2,
    }
}
