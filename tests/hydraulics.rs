use hydrosanitary_toolbox::hydraulics::{
    colebrook_flow, flow_section, manning_flow, manning_velocity,
};

#[test]
fn full_pipe_uses_exact_shortcut() {
    let d = 0.2;
    let g = flow_section(d, d);
    // 만관 분기는 삼각함수를 거치지 않으므로 비트 단위로 일치해야 한다.
    assert_eq!(g.area_m2, std::f64::consts::PI * d * d / 4.0);
    assert_eq!(g.wetted_perimeter_m, std::f64::consts::PI * d);
    assert_eq!(g.hydraulic_radius_m, d / 4.0);
    assert_eq!(g.central_angle_rad, 2.0 * std::f64::consts::PI);
}

#[test]
fn over_full_depth_is_treated_as_full() {
    let g_full = flow_section(0.1, 0.1);
    let g_over = flow_section(0.1, 0.15);
    assert_eq!(g_full, g_over);
}

#[test]
fn zero_depth_degenerates_to_no_flow_section() {
    let g = flow_section(0.25, 0.0);
    assert_eq!(g.area_m2, 0.0);
    assert_eq!(g.wetted_perimeter_m, 0.0);
    assert_eq!(g.hydraulic_radius_m, 0.0);
}

#[test]
fn half_full_area_is_half_of_full() {
    let d = 0.3;
    let g = flow_section(d, d / 2.0);
    let full = std::f64::consts::PI * d * d / 4.0;
    assert!((g.area_m2 - full / 2.0).abs() < 1e-12);
    assert!((g.central_angle_rad - std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn hydraulic_radius_nondecreasing_up_to_081d() {
    // 원형 단면의 동수반경은 약 0.81D까지 수심에 대해 단조 비감소한다.
    let d = 0.2;
    let mut prev = 0.0;
    for i in 1..=100 {
        let y = 0.81 * d * i as f64 / 100.0;
        let rh = flow_section(d, y).hydraulic_radius_m;
        assert!(
            rh >= prev - 1e-12,
            "Rh decreased at y={y}: {rh} < {prev}"
        );
        prev = rh;
    }
}

#[test]
fn colebrook_zero_hydraulic_radius_means_no_flow() {
    let state = colebrook_flow(0.0, 0.02, 0.01, 1.5e-6, 1.141e-6);
    assert_eq!(state.velocity_m_per_s, 0.0);
    assert_eq!(state.flow_m3_per_s, 0.0);
}

#[test]
fn colebrook_zero_slope_means_no_flow() {
    let state = colebrook_flow(0.05, 0.0, 0.01, 1.5e-6, 1.141e-6);
    assert_eq!(state.velocity_m_per_s, 0.0);
    assert_eq!(state.flow_m3_per_s, 0.0);
}

#[test]
fn colebrook_typical_section_flows_forward() {
    // 200mm 관, 85% 충수, 2% 경사에서 유속은 수 m/s 수준의 양수여야 한다.
    let g = flow_section(0.1985, 0.85 * 0.1985);
    let state = colebrook_flow(g.hydraulic_radius_m, 0.02, g.area_m2, 1.5e-6, 1.141e-6);
    assert!(state.velocity_m_per_s > 1.0 && state.velocity_m_per_s < 10.0);
    assert!((state.flow_m3_per_s - state.velocity_m_per_s * g.area_m2).abs() < 1e-12);
}

#[test]
fn manning_flow_scales_linearly_with_inverse_n() {
    let (a, rh, s) = (0.01, 0.03, 0.02);
    let q1 = manning_flow(a, 0.009, rh, s);
    let q2 = manning_flow(a, 0.018, rh, s);
    assert!((q1 - 2.0 * q2).abs() < 1e-12);
}

#[test]
fn manning_velocity_guards_zero_area() {
    assert_eq!(manning_velocity(0.01, 0.0), 0.0);
    assert!((manning_velocity(0.01, 0.005) - 2.0).abs() < 1e-12);
}

#[test]
fn solvers_are_idempotent() {
    let g1 = flow_section(0.1529, 0.12);
    let g2 = flow_section(0.1529, 0.12);
    assert_eq!(g1, g2);

    let s1 = colebrook_flow(g1.hydraulic_radius_m, 0.01, g1.area_m2, 1.5e-6, 1.141e-6);
    let s2 = colebrook_flow(g2.hydraulic_radius_m, 0.01, g2.area_m2, 1.5e-6, 1.141e-6);
    assert_eq!(s1, s2);
}
