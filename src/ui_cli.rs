use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::hunter;
use crate::i18n::{keys, Translator};
use crate::pipe_db;
use crate::pluvial::{CellOutcome, FailReason, PluvialInput};
use crate::potable;
use crate::quantity::QuantityKind;
use crate::sanitary::{self, DrainageInput};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    Pluvial,
    Hunter,
    Potable,
    Drainage,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_PLUVIAL));
    println!("{}", tr.t(keys::MAIN_MENU_HUNTER));
    println!("{}", tr.t(keys::MAIN_MENU_POTABLE));
    println!("{}", tr.t(keys::MAIN_MENU_DRAINAGE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::Pluvial),
            "3" => return Ok(MenuChoice::Hunter),
            "4" => return Ok(MenuChoice::Potable),
            "5" => return Ok(MenuChoice::Drainage),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!(
            "{}: {result} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            to_unit.trim()
        ),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Length),
        2 => Some(QuantityKind::Area),
        3 => Some(QuantityKind::Velocity),
        4 => Some(QuantityKind::Flow),
        5 => Some(QuantityKind::RainfallIntensity),
        6 => Some(QuantityKind::KinematicViscosity),
        _ => None,
    }
}

/// 우수 설계 매트릭스 메뉴를 처리한다.
pub fn handle_pluvial(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PLUVIAL_HEADING));
    let input = PluvialInput {
        intensity_mm_per_h: read_f64(tr, tr.t(keys::PLUVIAL_PROMPT_INTENSITY))?,
        runoff_coefficient: read_f64(tr, tr.t(keys::PLUVIAL_PROMPT_RUNOFF))?,
        roughness_m: read_f64(tr, tr.t(keys::PLUVIAL_PROMPT_ROUGHNESS))?,
        kinematic_viscosity_m2_s: read_f64(tr, tr.t(keys::PLUVIAL_PROMPT_VISCOSITY))?,
        fill_ratio_percent: read_f64(tr, tr.t(keys::PLUVIAL_PROMPT_FILL_RATIO))?,
    };

    let slopes = &cfg.pluvial.slopes_percent;
    let rows = crate::pluvial::evaluate_matrix(&input, pipe_db::sanitary_pipes(), slopes);

    println!("\n{}", tr.t(keys::PLUVIAL_TABLE_TITLE));
    print!("{:<8} {:>9}", "", "ID(mm)");
    for s in slopes {
        print!(" | {:>26}", format!("S = {s:.1}%"));
    }
    println!();
    for row in &rows {
        print!("{:<8} {:>9.1}", row.pipe.name, row.pipe.internal_diameter_mm);
        for cell in &row.cells {
            print!(" | {:>26}", format_cell(tr, cell));
        }
        println!();
    }
    Ok(())
}

fn format_cell(tr: &Translator, cell: &CellOutcome) -> String {
    match cell {
        CellOutcome::Valid {
            area_min_m2,
            area_max_m2,
            ..
        } => format!("{area_min_m2:.0} ~ {area_max_m2:.0}"),
        CellOutcome::Invalid { reason, .. } => {
            let key = match reason {
                FailReason::LowTractiveForce => keys::PLUVIAL_CELL_LOW_TAU,
                FailReason::TargetDepthNotFound => keys::PLUVIAL_CELL_NO_TARGET_DEPTH,
                FailReason::MinExceedsMax => keys::PLUVIAL_CELL_RANGE_INVERTED,
            };
            tr.t(key).to_string()
        }
    }
}

/// Hunter 기구 단위 메뉴를 처리한다.
pub fn handle_hunter(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HUNTER_HEADING));
    let units = read_f64(tr, tr.t(keys::HUNTER_PROMPT_UNITS))?;
    match hunter::probable_flow(units) {
        Ok(result) => {
            print_hunter_line(tr, keys::HUNTER_RESULT_TANK, result.tank);
            print_hunter_line(tr, keys::HUNTER_RESULT_FLUSH, result.flush);
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

fn print_hunter_line(tr: &Translator, label_key: &str, flow: hunter::InterpolatedFlow) {
    let note = if flow.clamped {
        format!(" {}", tr.t(keys::HUNTER_NOTE_CLAMPED))
    } else {
        String::new()
    };
    println!("{}: {:.3} L/s{note}", tr.t(label_key), flow.flow_lps);
}

/// 급수 관경 선정 메뉴를 처리한다.
pub fn handle_potable(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POTABLE_HEADING));
    let flow = read_f64(tr, tr.t(keys::POTABLE_PROMPT_FLOW))?;
    let velocity = read_f64_with_default(
        tr,
        tr.t(keys::POTABLE_PROMPT_VELOCITY),
        cfg.potable.limit_velocity_m_per_s,
    )?;
    match potable::select_diameter(flow, velocity, pipe_db::potable_pipes()) {
        Ok(sel) => {
            println!(
                "{}: {:.2} mm",
                tr.t(keys::POTABLE_RESULT_THEORETICAL),
                sel.theoretical_diameter_mm
            );
            println!(
                "{}: {} (DN{:.0})",
                tr.t(keys::POTABLE_RESULT_COMMERCIAL),
                sel.pipe.nominal,
                sel.pipe.nominal_mm
            );
            println!(
                "{}: {:.2} mm",
                tr.t(keys::POTABLE_RESULT_REAL_ID),
                sel.pipe.internal_diameter_mm
            );
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 오수 관경 선정 메뉴를 처리한다.
pub fn handle_drainage(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DRAINAGE_HEADING));
    let input = DrainageInput {
        design_flow_lps: read_f64(tr, tr.t(keys::DRAINAGE_PROMPT_FLOW))?,
        slope_percent: read_f64_with_default(
            tr,
            tr.t(keys::DRAINAGE_PROMPT_SLOPE),
            cfg.drainage.slope_percent,
        )?,
        manning_n: read_f64_with_default(
            tr,
            tr.t(keys::DRAINAGE_PROMPT_MANNING),
            cfg.drainage.manning_n,
        )?,
        fill_ratio_percent: read_f64_with_default(
            tr,
            tr.t(keys::DRAINAGE_PROMPT_FILL_RATIO),
            cfg.drainage.fill_ratio_percent,
        )?,
    };

    let rows = match sanitary::evaluate_catalog(&input, pipe_db::sanitary_pipes()) {
        Ok(rows) => rows,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    println!("\n{}", tr.t(keys::DRAINAGE_TABLE_TITLE));
    println!(
        "{:<8} {:>9} {:>14} {:>12} {:>11}",
        "", "ID(mm)", "Q(L/s)", "v(m/s)", "y(mm)"
    );
    for row in &rows {
        let status = if row.viable {
            tr.t(keys::DRAINAGE_STATUS_OK)
        } else {
            tr.t(keys::DRAINAGE_STATUS_INSUFFICIENT)
        };
        println!(
            "{:<8} {:>9.1} {:>14.2} {:>12.2} {:>11.1}   {status}",
            row.pipe.name,
            row.pipe.internal_diameter_mm,
            row.capacity_lps,
            row.velocity_m_per_s,
            row.water_depth_mm
        );
    }

    match sanitary::select_diameter(&input, pipe_db::sanitary_pipes()) {
        Ok(sel) => println!(
            "\n{}: {} ({:.2} L/s, {:.2} m/s)",
            tr.t(keys::DRAINAGE_RESULT_SELECTED),
            sel.pipe.name,
            sel.capacity_lps,
            sel.velocity_m_per_s
        ),
        Err(e) => println!("\n{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}: {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "auto".to_string(),
        "2" => "ko-kr".to_string(),
        "3" => "en-us".to_string(),
        "4" => "es-es".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 쓰는 숫자 입력.
fn read_f64_with_default(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
