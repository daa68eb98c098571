/// 상용 관 카탈로그와 Hunter 확률 유량 곡선을 제공한다.
/// 값은 참고용이며 설계 시 제조사 카탈로그와 해당 규격(NTC 1500 등)으로
/// 검증해야 한다.

/// 배수/우수용 관 사양. 카탈로그는 내경 오름차순이며 순서가 곧
/// "첫 번째 적합 관 선택" 규칙의 탐색 순서이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSpec {
    pub name: &'static str,
    pub internal_diameter_mm: f64,
}

impl PipeSpec {
    pub const fn new(name: &'static str, internal_diameter_mm: f64) -> Self {
        Self {
            name,
            internal_diameter_mm,
        }
    }
}

/// 급수용 상용 관 사양 (PVC SCH40). 공칭 호칭 + 공칭 mm + 실제 내경.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotablePipe {
    pub nominal: &'static str,
    pub nominal_mm: f64,
    pub internal_diameter_mm: f64,
}

impl PotablePipe {
    pub const fn new(nominal: &'static str, nominal_mm: f64, internal_diameter_mm: f64) -> Self {
        Self {
            nominal,
            nominal_mm,
            internal_diameter_mm,
        }
    }
}

/// Hunter 곡선의 한 점: 기구 단위 수 → 확률 유량 [L/s].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterPoint {
    pub units: f64,
    pub flow_lps: f64,
}

impl HunterPoint {
    pub const fn new(units: f64, flow_lps: f64) -> Self {
        Self { units, flow_lps }
    }
}

/// 배수/우수 설계에 쓰는 PVC 위생관 카탈로그.
pub fn sanitary_pipes() -> &'static [PipeSpec] {
    SANITARY_PIPES
}

/// 급수 설계에 쓰는 PVC SCH40 카탈로그.
pub fn potable_pipes() -> &'static [PotablePipe] {
    POTABLE_PIPES
}

/// 탱크식 시스템의 Hunter 곡선 (NTC 1500).
pub fn hunter_tank_curve() -> &'static [HunterPoint] {
    HUNTER_TANK
}

/// 플러시 밸브식 시스템의 Hunter 곡선 (NTC 1500).
pub fn hunter_flush_curve() -> &'static [HunterPoint] {
    HUNTER_FLUSH
}

/// 호칭으로 위생관을 찾는다.
pub fn find_sanitary(name: &str) -> Option<&'static PipeSpec> {
    SANITARY_PIPES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

const SANITARY_PIPES: &[PipeSpec] = &[
    ps("1-1/2\"", 40.9),
    ps("2\"", 52.5),
    ps("3\"", 77.9),
    ps("4\"", 103.2),
    ps("6\"", 152.9),
    ps("8\"", 198.5),
    ps("10\"", 247.7),
    ps("12\"", 293.7),
];

const POTABLE_PIPES: &[PotablePipe] = &[
    pp("1/2\"", 13.0, 15.80),
    pp("3/4\"", 19.0, 20.93),
    pp("1\"", 25.0, 26.64),
    pp("1-1/4\"", 32.0, 35.05),
    pp("1-1/2\"", 38.0, 40.89),
    pp("2\"", 50.0, 52.50),
    pp("2-1/2\"", 63.0, 62.71),
    pp("3\"", 75.0, 77.93),
    pp("4\"", 100.0, 102.26),
    pp("6\"", 150.0, 154.05),
    pp("8\"", 200.0, 202.72),
];

const HUNTER_TANK: &[HunterPoint] = &[
    hp(6.0, 0.25),
    hp(8.0, 0.29),
    hp(10.0, 0.32),
    hp(12.0, 0.36),
    hp(14.0, 0.39),
    hp(16.0, 0.42),
    hp(18.0, 0.46),
    hp(20.0, 0.50),
    hp(25.0, 0.58),
    hp(30.0, 0.65),
    hp(40.0, 0.78),
    hp(50.0, 0.90),
    hp(60.0, 1.01),
    hp(80.0, 1.21),
    hp(100.0, 1.42),
    hp(140.0, 1.79),
    hp(180.0, 2.14),
    hp(250.0, 2.80),
    hp(400.0, 3.95),
    hp(600.0, 5.35),
    hp(1000.0, 7.90),
];

const HUNTER_FLUSH: &[HunterPoint] = &[
    hp(10.0, 1.70),
    hp(15.0, 1.93),
    hp(20.0, 2.14),
    hp(25.0, 2.32),
    hp(30.0, 2.50),
    hp(40.0, 2.80),
    hp(50.0, 3.05),
    hp(60.0, 3.28),
    hp(80.0, 3.70),
    hp(100.0, 4.10),
    hp(140.0, 4.80),
    hp(180.0, 5.40),
    hp(250.0, 6.35),
    hp(400.0, 8.10),
    hp(600.0, 10.30),
    hp(1000.0, 13.70),
];

const fn ps(name: &'static str, internal_diameter_mm: f64) -> PipeSpec {
    PipeSpec::new(name, internal_diameter_mm)
}

const fn pp(nominal: &'static str, nominal_mm: f64, internal_diameter_mm: f64) -> PotablePipe {
    PotablePipe::new(nominal, nominal_mm, internal_diameter_mm)
}

const fn hp(units: f64, flow_lps: f64) -> HunterPoint {
    HunterPoint::new(units, flow_lps)
}

// NOTE:
// - SCH40 internal diameters follow ASTM D1785 nominal bores.
// - Sanitary PVC internal diameters are typical manufacturer values for the
//   Colombian market; substitute the governing catalog for construction use.
// - Hunter curve points are read from the NTC 1500 probable-flow charts
//   (tank vs flush-valve systems).
