use hydrosanitary_toolbox::pipe_db::{self, PipeSpec};
use hydrosanitary_toolbox::pluvial::{
    evaluate_cell, evaluate_matrix, CellOutcome, FailReason, PluvialInput,
};

fn default_input() -> PluvialInput {
    PluvialInput {
        intensity_mm_per_h: 100.0,
        runoff_coefficient: 0.9,
        roughness_m: 1.5e-6,
        kinematic_viscosity_m2_s: 1.141e-6,
        fill_ratio_percent: 85.0,
    }
}

#[test]
fn small_pipe_on_flat_slope_fails_self_cleaning() {
    // 3" 관은 0.5% 경사에서 설계 만수 깊이로도 τ가 0.15 kgf/m2에 못 미친다.
    let pipe = PipeSpec::new("3\"", 77.9);
    let cell = evaluate_cell(&pipe, 0.5, &default_input());
    match cell {
        CellOutcome::Invalid {
            reason,
            tau_max_kgf_per_m2,
            slope_percent,
        } => {
            assert_eq!(reason, FailReason::LowTractiveForce);
            assert!(tau_max_kgf_per_m2 < 0.15, "tau={tau_max_kgf_per_m2}");
            assert!((slope_percent - 0.5).abs() < 1e-12);
        }
        CellOutcome::Valid { .. } => panic!("expected invalid cell"),
    }
}

#[test]
fn large_pipe_on_steep_slope_yields_valid_interval() {
    let pipe = PipeSpec::new("8\"", 198.5);
    let cell = evaluate_cell(&pipe, 2.0, &default_input());
    match cell {
        CellOutcome::Valid {
            area_min_m2,
            area_max_m2,
            flow_min_lps,
            flow_max_lps,
            tau_max_kgf_per_m2,
            ..
        } => {
            assert!(area_min_m2 > 0.0);
            assert!(area_max_m2 > 0.0);
            assert!(area_min_m2 <= area_max_m2);
            assert!(flow_min_lps > 0.0);
            assert!(flow_min_lps <= flow_max_lps);
            assert!(tau_max_kgf_per_m2 >= 0.15);
        }
        CellOutcome::Invalid { reason, .. } => panic!("expected valid cell, got {reason:?}"),
    }
}

#[test]
fn full_fill_ratio_uses_full_pipe_shear() {
    // 만수비 100%는 만관 분기를 타므로 τ = γ·(D/4)·S 가 그대로 나온다.
    let pipe = PipeSpec::new("8\"", 198.5);
    let mut input = default_input();
    input.fill_ratio_percent = 100.0;
    let cell = evaluate_cell(&pipe, 2.0, &input);
    let expected_tau = 1000.0 * (0.1985 / 4.0) * 0.02;
    assert!((cell.tau_max() - expected_tau).abs() < 1e-9);
    assert!(cell.is_valid());
}

#[test]
fn zero_intensity_guards_area_division() {
    // 강우 강도 0이면 면적 분모가 0이므로 두 면적 모두 0으로 보호된다.
    let pipe = PipeSpec::new("8\"", 198.5);
    let mut input = default_input();
    input.intensity_mm_per_h = 0.0;
    match evaluate_cell(&pipe, 2.0, &input) {
        CellOutcome::Valid {
            area_min_m2,
            area_max_m2,
            ..
        } => {
            assert_eq!(area_min_m2, 0.0);
            assert_eq!(area_max_m2, 0.0);
        }
        CellOutcome::Invalid { reason, .. } => panic!("expected valid cell, got {reason:?}"),
    }
}

#[test]
fn steeper_slope_requires_less_depth_for_self_cleaning() {
    // 경사가 가파를수록 목표 동수반경이 작아져 최소 유량도 작아진다.
    let pipe = PipeSpec::new("8\"", 198.5);
    let input = default_input();
    let flow_min_at = |slope: f64| match evaluate_cell(&pipe, slope, &input) {
        CellOutcome::Valid { flow_min_lps, .. } => flow_min_lps,
        CellOutcome::Invalid { reason, .. } => panic!("invalid cell: {reason:?}"),
    };
    assert!(flow_min_at(2.0) < flow_min_at(1.0));
}

#[test]
fn matrix_preserves_catalog_and_slope_order() {
    let slopes = [0.5, 1.0, 2.0];
    let rows = evaluate_matrix(&default_input(), pipe_db::sanitary_pipes(), &slopes);
    assert_eq!(rows.len(), pipe_db::sanitary_pipes().len());
    for (row, pipe) in rows.iter().zip(pipe_db::sanitary_pipes()) {
        assert_eq!(row.pipe, *pipe);
        assert_eq!(row.cells.len(), slopes.len());
        for (cell, slope) in row.cells.iter().zip(slopes) {
            let cell_slope = match cell {
                CellOutcome::Valid { slope_percent, .. }
                | CellOutcome::Invalid { slope_percent, .. } => *slope_percent,
            };
            assert!((cell_slope - slope).abs() < 1e-12);
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let pipe = PipeSpec::new("6\"", 152.9);
    let input = default_input();
    let first = evaluate_cell(&pipe, 1.0, &input);
    let second = evaluate_cell(&pipe, 1.0, &input);
    assert_eq!(first, second);
}
