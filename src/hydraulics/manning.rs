/// Manning 식으로 통수 능력을 계산한다.
///
/// Q = A * (1/n) * Rh^(2/3) * S^(1/2)
pub fn manning_flow(area_m2: f64, manning_n: f64, hydraulic_radius_m: f64, slope: f64) -> f64 {
    area_m2 * (1.0 / manning_n) * hydraulic_radius_m.powf(2.0 / 3.0) * slope.sqrt()
}

/// 유량과 단면적에서 평균 유속을 구한다. 단면적 0은 유속 0으로 처리한다.
pub fn manning_velocity(flow_m3_per_s: f64, area_m2: f64) -> f64 {
    if area_m2 > 0.0 {
        flow_m3_per_s / area_m2
    } else {
        0.0
    }
}
