use hydrosanitary_toolbox::hunter::{interpolate_flow, probable_flow, HunterError};
use hydrosanitary_toolbox::pipe_db::{self, HunterPoint};
use hydrosanitary_toolbox::potable::{self, PotableSizingError};
use hydrosanitary_toolbox::sanitary::{self, DrainageInput, DrainageSizingError};

#[test]
fn potable_reference_case_selects_two_and_half_inch() {
    // 5 L/s, 제한 유속 2.0 m/s → 이론 내경 sqrt(4·0.0025/π)·1000 ≈ 56.42mm
    let sel = potable::select_diameter(5.0, 2.0, pipe_db::potable_pipes()).expect("selection");
    assert!((sel.theoretical_diameter_mm - 56.419).abs() < 0.01);
    assert_eq!(sel.pipe.nominal, "2-1/2\"");
    assert!(sel.pipe.internal_diameter_mm >= sel.theoretical_diameter_mm);
}

#[test]
fn potable_selection_is_first_match_in_catalog_order() {
    let sel = potable::select_diameter(5.0, 2.0, pipe_db::potable_pipes()).expect("selection");
    // 선정 관보다 앞선 카탈로그 항목은 전부 이론 내경 미만이어야 한다.
    for pipe in pipe_db::potable_pipes() {
        if pipe.internal_diameter_mm < sel.pipe.internal_diameter_mm {
            assert!(pipe.internal_diameter_mm < sel.theoretical_diameter_mm);
        }
    }
}

#[test]
fn potable_rejects_nonpositive_inputs() {
    let err = potable::select_diameter(0.0, 2.0, pipe_db::potable_pipes()).unwrap_err();
    assert!(matches!(err, PotableSizingError::InvalidInput(_)));
    let err = potable::select_diameter(5.0, -1.0, pipe_db::potable_pipes()).unwrap_err();
    assert!(matches!(err, PotableSizingError::InvalidInput(_)));
}

#[test]
fn potable_out_of_commercial_range() {
    // 1 m3/s를 0.1 m/s로 흘리려면 내경 3m 이상이 필요하다.
    let err = potable::select_diameter(1000.0, 0.1, pipe_db::potable_pipes()).unwrap_err();
    assert_eq!(err, PotableSizingError::OutOfCommercialRange);
}

#[test]
fn potable_selection_is_idempotent() {
    let a = potable::select_diameter(5.0, 2.0, pipe_db::potable_pipes()).expect("selection");
    let b = potable::select_diameter(5.0, 2.0, pipe_db::potable_pipes()).expect("selection");
    assert_eq!(a, b);
}

fn drainage_input(flow_lps: f64) -> DrainageInput {
    DrainageInput {
        design_flow_lps: flow_lps,
        slope_percent: 2.0,
        manning_n: 0.009,
        fill_ratio_percent: 75.0,
    }
}

#[test]
fn drainage_selects_smallest_adequate_diameter() {
    // 6 L/s, 2%, n=0.009, 75% 충수에서 3"는 약 4.9 L/s로 부족, 4"는 약 10.5 L/s.
    let sel =
        sanitary::select_diameter(&drainage_input(6.0), pipe_db::sanitary_pipes()).expect("pipe");
    assert_eq!(sel.pipe.name, "4\"");
    assert!((sel.capacity_lps - 10.45).abs() < 0.3, "q={}", sel.capacity_lps);
    assert!(sel.capacity_lps >= 6.0);
    // 선정 유속은 통수 능력이 아니라 설계 유량 기준이다.
    assert!((sel.velocity_m_per_s - 0.89).abs() < 0.03, "v={}", sel.velocity_m_per_s);
    assert!((sel.water_depth_mm - 77.4).abs() < 0.1);
}

#[test]
fn drainage_rows_follow_catalog_order_and_flag_viability() {
    let rows =
        sanitary::evaluate_catalog(&drainage_input(6.0), pipe_db::sanitary_pipes()).expect("rows");
    assert_eq!(rows.len(), pipe_db::sanitary_pipes().len());
    // 카탈로그가 내경 오름차순이므로 통수 능력도 오름차순이다.
    for pair in rows.windows(2) {
        assert!(pair[0].capacity_lps < pair[1].capacity_lps);
    }
    // 적합 플래그는 한 번 참이 되면 계속 참이다.
    let first_viable = rows.iter().position(|r| r.viable).expect("some viable");
    assert_eq!(rows[first_viable].pipe.name, "4\"");
    for row in &rows[first_viable..] {
        assert!(row.viable);
    }
    for row in &rows[..first_viable] {
        assert!(!row.viable);
    }
}

#[test]
fn drainage_catalog_exhausted_reports_no_suitable_pipe() {
    let err =
        sanitary::select_diameter(&drainage_input(10_000.0), pipe_db::sanitary_pipes()).unwrap_err();
    assert_eq!(err, DrainageSizingError::NoSuitablePipe);
}

#[test]
fn drainage_rejects_out_of_domain_inputs() {
    let mut input = drainage_input(6.0);
    input.slope_percent = 0.0;
    let err = sanitary::select_diameter(&input, pipe_db::sanitary_pipes()).unwrap_err();
    assert!(matches!(err, DrainageSizingError::InvalidInput(_)));

    let mut input = drainage_input(6.0);
    input.fill_ratio_percent = 120.0;
    let err = sanitary::evaluate_catalog(&input, pipe_db::sanitary_pipes()).unwrap_err();
    assert!(matches!(err, DrainageSizingError::InvalidInput(_)));
}

#[test]
fn catalogs_are_ascending_and_searchable() {
    // 카탈로그 순서가 곧 "첫 번째 적합 관" 탐색 순서이므로 오름차순이어야 한다.
    for pair in pipe_db::sanitary_pipes().windows(2) {
        assert!(pair[0].internal_diameter_mm < pair[1].internal_diameter_mm);
    }
    for pair in pipe_db::potable_pipes().windows(2) {
        assert!(pair[0].internal_diameter_mm < pair[1].internal_diameter_mm);
    }
    let found = pipe_db::find_sanitary("4\"").expect("4 inch pipe");
    assert!((found.internal_diameter_mm - 103.2).abs() < 1e-9);
    assert!(pipe_db::find_sanitary("40\"").is_none());
}

#[test]
fn hunter_interpolation_is_linear_between_points() {
    let table = [HunterPoint::new(10.0, 1.0), HunterPoint::new(20.0, 2.0)];
    let mid = interpolate_flow(&table, 15.0).expect("flow");
    assert!((mid.flow_lps - 1.5).abs() < 1e-12);
    assert!(!mid.clamped);
}

#[test]
fn hunter_interpolation_clamps_at_both_ends() {
    let table = [HunterPoint::new(10.0, 1.0), HunterPoint::new(20.0, 2.0)];
    let below = interpolate_flow(&table, 5.0).expect("flow");
    assert_eq!(below.flow_lps, 1.0);
    assert!(below.clamped);
    let above = interpolate_flow(&table, 25.0).expect("flow");
    assert_eq!(above.flow_lps, 2.0);
    assert!(above.clamped);
}

#[test]
fn hunter_empty_curve_yields_none() {
    assert!(interpolate_flow(&[], 10.0).is_none());
}

#[test]
fn hunter_probable_flow_reads_both_curves() {
    // 30 UH는 두 내장 곡선 모두의 표 점이다.
    let res = probable_flow(30.0).expect("result");
    assert!((res.tank.flow_lps - 0.65).abs() < 1e-9);
    assert!(!res.tank.clamped);
    assert!((res.flush.flow_lps - 2.50).abs() < 1e-9);
    assert!(!res.flush.clamped);
    // 플러시 밸브식 곡선이 항상 탱크식보다 큰 유량을 준다.
    assert!(res.flush.flow_lps > res.tank.flow_lps);
}

#[test]
fn hunter_rejects_nonpositive_units() {
    assert!(matches!(
        probable_flow(0.0),
        Err(HunterError::InvalidInput(_))
    ));
    assert!(matches!(
        probable_flow(f64::NAN),
        Err(HunterError::InvalidInput(_))
    ));
}
