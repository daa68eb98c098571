use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_PLUVIAL: &str = "main_menu.pluvial";
    pub const MAIN_MENU_HUNTER: &str = "main_menu.hunter";
    pub const MAIN_MENU_POTABLE: &str = "main_menu.potable";
    pub const MAIN_MENU_DRAINAGE: &str = "main_menu.drainage";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const PLUVIAL_HEADING: &str = "pluvial.heading";
    pub const PLUVIAL_PROMPT_INTENSITY: &str = "pluvial.prompt_intensity";
    pub const PLUVIAL_PROMPT_RUNOFF: &str = "pluvial.prompt_runoff";
    pub const PLUVIAL_PROMPT_ROUGHNESS: &str = "pluvial.prompt_roughness";
    pub const PLUVIAL_PROMPT_VISCOSITY: &str = "pluvial.prompt_viscosity";
    pub const PLUVIAL_PROMPT_FILL_RATIO: &str = "pluvial.prompt_fill_ratio";
    pub const PLUVIAL_TABLE_TITLE: &str = "pluvial.table_title";
    pub const PLUVIAL_CELL_LOW_TAU: &str = "pluvial.cell_low_tau";
    pub const PLUVIAL_CELL_NO_TARGET_DEPTH: &str = "pluvial.cell_no_target_depth";
    pub const PLUVIAL_CELL_RANGE_INVERTED: &str = "pluvial.cell_range_inverted";

    pub const HUNTER_HEADING: &str = "hunter.heading";
    pub const HUNTER_PROMPT_UNITS: &str = "hunter.prompt_units";
    pub const HUNTER_RESULT_TANK: &str = "hunter.result_tank";
    pub const HUNTER_RESULT_FLUSH: &str = "hunter.result_flush";
    pub const HUNTER_NOTE_CLAMPED: &str = "hunter.note_clamped";

    pub const POTABLE_HEADING: &str = "potable.heading";
    pub const POTABLE_PROMPT_FLOW: &str = "potable.prompt_flow";
    pub const POTABLE_PROMPT_VELOCITY: &str = "potable.prompt_velocity";
    pub const POTABLE_RESULT_THEORETICAL: &str = "potable.result_theoretical";
    pub const POTABLE_RESULT_COMMERCIAL: &str = "potable.result_commercial";
    pub const POTABLE_RESULT_REAL_ID: &str = "potable.result_real_id";

    pub const DRAINAGE_HEADING: &str = "drainage.heading";
    pub const DRAINAGE_PROMPT_FLOW: &str = "drainage.prompt_flow";
    pub const DRAINAGE_PROMPT_SLOPE: &str = "drainage.prompt_slope";
    pub const DRAINAGE_PROMPT_MANNING: &str = "drainage.prompt_manning";
    pub const DRAINAGE_PROMPT_FILL_RATIO: &str = "drainage.prompt_fill_ratio";
    pub const DRAINAGE_TABLE_TITLE: &str = "drainage.table_title";
    pub const DRAINAGE_STATUS_OK: &str = "drainage.status_ok";
    pub const DRAINAGE_STATUS_INSUFFICIENT: &str = "drainage.status_insufficient";
    pub const DRAINAGE_RESULT_SELECTED: &str = "drainage.result_selected";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Es,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("es") {
            Language::Es
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/es)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어/스페인어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Es => es(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "es" => Some("es-es".into()),
        "es-es" | "es-co" => Some("es-es".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("es") => Some("es-es".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        "es" => Some("es".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "es-es" | "es" => parse_toml_to_map(include_str!("../locales/es-es.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Hydrosanitary Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_PLUVIAL => "2) 우수 설계 매트릭스",
        MAIN_MENU_HUNTER => "3) Hunter 기구 단위 유량",
        MAIN_MENU_POTABLE => "4) 급수 관경 선정",
        MAIN_MENU_DRAINAGE => "5) 오수 관경 선정 (Manning)",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 길이  2) 면적  3) 유속  4) 유량  5) 강우 강도  6) 동점성계수",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: mm, l/s, mm/h): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: in, m3/h, l/s-ha): ",
        UNIT_CONVERSION_RESULT => "변환 결과",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        PLUVIAL_HEADING => "\n-- 우수 설계 매트릭스 --",
        PLUVIAL_PROMPT_INTENSITY => "강우 강도 [mm/hr]: ",
        PLUVIAL_PROMPT_RUNOFF => "유출 계수 (0~1): ",
        PLUVIAL_PROMPT_ROUGHNESS => "절대 조도 ks [m] (PVC 약 1.5e-6): ",
        PLUVIAL_PROMPT_VISCOSITY => "동점성계수 [m2/s] (15°C 물 약 1.141e-6): ",
        PLUVIAL_PROMPT_FILL_RATIO => "설계 만수비 [%] (관행값 85): ",
        PLUVIAL_TABLE_TITLE => "허용 배수 면적 [m2] (관 × 경사)",
        PLUVIAL_CELL_LOW_TAU => "소류력 미달",
        PLUVIAL_CELL_NO_TARGET_DEPTH => "목표 수심 미도달",
        PLUVIAL_CELL_RANGE_INVERTED => "면적 범위 역전",
        HUNTER_HEADING => "\n-- Hunter 기구 단위 유량 --",
        HUNTER_PROMPT_UNITS => "기구 단위 수 (UH): ",
        HUNTER_RESULT_TANK => "탱크식 시스템",
        HUNTER_RESULT_FLUSH => "플러시 밸브식 시스템",
        HUNTER_NOTE_CLAMPED => "(곡선 범위 밖: 가장자리 값)",
        POTABLE_HEADING => "\n-- 급수 관경 선정 --",
        POTABLE_PROMPT_FLOW => "설계 유량 [L/s]: ",
        POTABLE_PROMPT_VELOCITY => "제한 유속 [m/s] (관행값 2.0): ",
        POTABLE_RESULT_THEORETICAL => "이론 최소 내경",
        POTABLE_RESULT_COMMERCIAL => "상용 관 (PVC SCH40)",
        POTABLE_RESULT_REAL_ID => "실제 내경",
        DRAINAGE_HEADING => "\n-- 오수 관경 선정 (Manning) --",
        DRAINAGE_PROMPT_FLOW => "설계 유량 [L/s]: ",
        DRAINAGE_PROMPT_SLOPE => "경사 [%]: ",
        DRAINAGE_PROMPT_MANNING => "Manning 조도계수 n (PVC 약 0.009): ",
        DRAINAGE_PROMPT_FILL_RATIO => "설계 충수비 y/D [%] (관행값 75): ",
        DRAINAGE_TABLE_TITLE => "관별 통수 능력 평가",
        DRAINAGE_STATUS_OK => "적합",
        DRAINAGE_STATUS_INSUFFICIENT => "용량 부족",
        DRAINAGE_RESULT_SELECTED => "선정 관경",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어",
        SETTINGS_OPTIONS => "1) 자동  2) 한국어  3) English  4) Español",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Hydrosanitary Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit converter",
        MAIN_MENU_PLUVIAL => "2) Pluvial design matrix",
        MAIN_MENU_HUNTER => "3) Hunter fixture-unit flow",
        MAIN_MENU_POTABLE => "4) Potable water pipe sizing",
        MAIN_MENU_DRAINAGE => "5) Drainage pipe sizing (Manning)",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Select again.",
        ERROR_INVALID_NUMBER => "Enter a number.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Length  2) Area  3) Velocity  4) Flow  5) Rainfall intensity  6) Kinematic viscosity"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Enter value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: mm, l/s, mm/h): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: in, m3/h, l/s-ha): ",
        UNIT_CONVERSION_RESULT => "Result",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported number.",
        PLUVIAL_HEADING => "\n-- Pluvial Design Matrix --",
        PLUVIAL_PROMPT_INTENSITY => "Rainfall intensity [mm/hr]: ",
        PLUVIAL_PROMPT_RUNOFF => "Runoff coefficient (0-1): ",
        PLUVIAL_PROMPT_ROUGHNESS => "Absolute roughness ks [m] (PVC approx. 1.5e-6): ",
        PLUVIAL_PROMPT_VISCOSITY => "Kinematic viscosity [m2/s] (water 15°C approx. 1.141e-6): ",
        PLUVIAL_PROMPT_FILL_RATIO => "Design fill ratio [%] (convention 85): ",
        PLUVIAL_TABLE_TITLE => "Allowable drainage area [m2] (pipe x slope)",
        PLUVIAL_CELL_LOW_TAU => "low tractive force",
        PLUVIAL_CELL_NO_TARGET_DEPTH => "target depth not reached",
        PLUVIAL_CELL_RANGE_INVERTED => "area range inverted",
        HUNTER_HEADING => "\n-- Hunter Fixture-Unit Flow --",
        HUNTER_PROMPT_UNITS => "Fixture units (UH): ",
        HUNTER_RESULT_TANK => "Tank system",
        HUNTER_RESULT_FLUSH => "Flush-valve system",
        HUNTER_NOTE_CLAMPED => "(outside curve: edge value)",
        POTABLE_HEADING => "\n-- Potable Water Pipe Sizing --",
        POTABLE_PROMPT_FLOW => "Design flow [L/s]: ",
        POTABLE_PROMPT_VELOCITY => "Limit velocity [m/s] (convention 2.0): ",
        POTABLE_RESULT_THEORETICAL => "Theoretical minimum ID",
        POTABLE_RESULT_COMMERCIAL => "Commercial pipe (PVC SCH40)",
        POTABLE_RESULT_REAL_ID => "Real ID",
        DRAINAGE_HEADING => "\n-- Drainage Pipe Sizing (Manning) --",
        DRAINAGE_PROMPT_FLOW => "Design flow [L/s]: ",
        DRAINAGE_PROMPT_SLOPE => "Slope [%]: ",
        DRAINAGE_PROMPT_MANNING => "Manning coefficient n (PVC approx. 0.009): ",
        DRAINAGE_PROMPT_FILL_RATIO => "Design fill ratio y/D [%] (convention 75): ",
        DRAINAGE_TABLE_TITLE => "Capacity evaluation per pipe",
        DRAINAGE_STATUS_OK => "OK",
        DRAINAGE_STATUS_INSUFFICIENT => "insufficient",
        DRAINAGE_RESULT_SELECTED => "Selected diameter",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language",
        SETTINGS_OPTIONS => "1) Auto  2) 한국어  3) English  4) Español",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    };
    Some(s)
}

fn es(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Saliendo del programa.",
        MAIN_MENU_TITLE => "\n=== Hydrosanitary Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Conversor de unidades",
        MAIN_MENU_PLUVIAL => "2) Matriz de diseño pluvial",
        MAIN_MENU_HUNTER => "3) Unidades Hunter",
        MAIN_MENU_POTABLE => "4) Dimensionamiento agua potable",
        MAIN_MENU_DRAINAGE => "5) Dimensionamiento sanitario (Manning)",
        MAIN_MENU_SETTINGS => "6) Configuración",
        MAIN_MENU_EXIT => "0) Salir",
        PROMPT_MENU_SELECT => "Seleccione el menú: ",
        INVALID_SELECTION_RETRY => "Entrada inválida. Seleccione de nuevo.",
        ERROR_INVALID_NUMBER => "Ingrese un número.",
        UNIT_CONVERSION_HEADING => "\n-- Conversión de Unidades --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Longitud  2) Área  3) Velocidad  4) Caudal  5) Intensidad de lluvia  6) Viscosidad cinemática"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Número de la magnitud: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Valor: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "Unidad de origen (ej: mm, l/s, mm/h): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "Unidad de destino (ej: in, m3/h, l/s-ha): ",
        UNIT_CONVERSION_RESULT => "Resultado",
        UNIT_CONVERSION_UNSUPPORTED => "Número no soportado.",
        PLUVIAL_HEADING => "\n-- Matriz de Diseño Pluvial --",
        PLUVIAL_PROMPT_INTENSITY => "Intensidad de lluvia [mm/hr]: ",
        PLUVIAL_PROMPT_RUNOFF => "Coeficiente de escorrentía (0-1): ",
        PLUVIAL_PROMPT_ROUGHNESS => "Rugosidad absoluta ks [m] (PVC aprox. 1.5e-6): ",
        PLUVIAL_PROMPT_VISCOSITY => "Viscosidad cinemática [m2/s] (agua 15°C aprox. 1.141e-6): ",
        PLUVIAL_PROMPT_FILL_RATIO => "Lámina de diseño [%] (convención 85): ",
        PLUVIAL_TABLE_TITLE => "Área de drenaje admisible [m2] (tubería x pendiente)",
        PLUVIAL_CELL_LOW_TAU => "fuerza tractiva insuficiente",
        PLUVIAL_CELL_NO_TARGET_DEPTH => "tirante objetivo no alcanzado",
        PLUVIAL_CELL_RANGE_INVERTED => "rango de áreas invertido",
        HUNTER_HEADING => "\n-- Unidades Hunter --",
        HUNTER_PROMPT_UNITS => "Unidades Hunter (UH): ",
        HUNTER_RESULT_TANK => "Sistema con tanque",
        HUNTER_RESULT_FLUSH => "Sistema con fluxómetro",
        HUNTER_NOTE_CLAMPED => "(fuera de la curva: valor del borde)",
        POTABLE_HEADING => "\n-- Dimensionamiento Agua Potable --",
        POTABLE_PROMPT_FLOW => "Caudal de diseño [L/s]: ",
        POTABLE_PROMPT_VELOCITY => "Velocidad límite [m/s] (convención 2.0): ",
        POTABLE_RESULT_THEORETICAL => "Diámetro teórico mínimo",
        POTABLE_RESULT_COMMERCIAL => "Tubería comercial (PVC SCH40)",
        POTABLE_RESULT_REAL_ID => "ID real",
        DRAINAGE_HEADING => "\n-- Dimensionamiento Sanitario (Manning) --",
        DRAINAGE_PROMPT_FLOW => "Caudal de diseño [L/s]: ",
        DRAINAGE_PROMPT_SLOPE => "Pendiente [%]: ",
        DRAINAGE_PROMPT_MANNING => "Coeficiente de Manning n (PVC aprox. 0.009): ",
        DRAINAGE_PROMPT_FILL_RATIO => "Tirante de diseño y/D [%] (convención 75): ",
        DRAINAGE_TABLE_TITLE => "Evaluación de capacidad por tubería",
        DRAINAGE_STATUS_OK => "Cumple",
        DRAINAGE_STATUS_INSUFFICIENT => "insuficiente",
        DRAINAGE_RESULT_SELECTED => "Diámetro seleccionado",
        SETTINGS_HEADING => "\n-- Configuración --",
        SETTINGS_CURRENT_LANGUAGE => "Idioma actual",
        SETTINGS_OPTIONS => "1) Auto  2) 한국어  3) English  4) Español",
        SETTINGS_PROMPT_CHANGE => "Número a cambiar (Enter para cancelar): ",
        SETTINGS_INVALID => "Entrada inválida; no se cambió nada.",
        SETTINGS_SAVED => "Configuración guardada.",
        _ => return None,
    };
    Some(s)
}
