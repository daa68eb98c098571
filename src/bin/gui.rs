#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use hydrosanitary_toolbox::{
    config, conversion, hunter, i18n, pipe_db,
    pluvial::{self, CellOutcome, FailReason, MatrixRow, PluvialInput},
    potable,
    quantity::QuantityKind,
    sanitary::{self, DrainageInput, DrainageRow},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko-kr/en-us/es-es)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 760.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }

    eframe::run_native(
        "Hydrosanitary Engineering Toolbox",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글/스페인어 UI를 표시하기 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 사용자 지정 폰트
/// 2) 플랫폼별 시스템 폰트
/// 3) 모두 실패 시 Err를 반환하고 egui 기본 폰트로 동작한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let candidates = [
        "assets/fonts/malgun.ttf",
        "assets/fonts/NotoSansKR-Regular.ttf",
        "C:/Windows/Fonts/malgun.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for path in candidates {
        if let Ok(bytes) = fs::read(path) {
            apply_font_bytes(ctx, bytes, "ui_font");
            return Ok(());
        }
    }
    Err("CJK 폰트를 찾지 못했습니다. assets/fonts/ 아래에 폰트를 두세요.".to_string())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Pluvial,
    Hunter,
    Potable,
    Drainage,
    UnitConv,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    ui_scale: f32,
    window_alpha: f32,
    show_settings_modal: bool,
    tab: Tab,
    // 우수 매트릭스
    pluvial_intensity: f64,
    pluvial_runoff: f64,
    pluvial_roughness: f64,
    pluvial_viscosity: f64,
    pluvial_fill_ratio: f64,
    pluvial_rows: Option<Vec<MatrixRow>>,
    pluvial_csv_status: Option<String>,
    // Hunter
    hunter_units: f64,
    hunter_result: Option<String>,
    hunter_error: Option<String>,
    // 급수
    potable_flow: f64,
    potable_velocity: f64,
    potable_result: Option<String>,
    potable_error: Option<String>,
    // 오수
    drainage_flow: f64,
    drainage_slope: f64,
    drainage_manning_n: f64,
    drainage_fill_ratio: f64,
    drainage_rows: Option<Vec<DrainageRow>>,
    drainage_selection: Option<String>,
    drainage_error: Option<String>,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
}

impl GuiApp {
    fn new(cfg: config::Config) -> Self {
        let resolved = i18n::resolve_language(&cfg.language, None);
        let tr = i18n::Translator::new_with_pack(&resolved, cfg.language_pack_dir.as_deref());
        let lang_input = cfg.language.clone();
        let window_alpha = cfg.window_alpha;
        let pluvial = cfg.pluvial.clone();
        let drainage = cfg.drainage.clone();
        let potable = cfg.potable.clone();
        Self {
            config: cfg,
            tr,
            lang_input,
            ui_scale: 1.0,
            window_alpha,
            show_settings_modal: false,
            tab: Tab::Pluvial,
            pluvial_intensity: pluvial.intensity_mm_per_h,
            pluvial_runoff: pluvial.runoff_coefficient,
            pluvial_roughness: pluvial.roughness_m,
            pluvial_viscosity: pluvial.kinematic_viscosity_m2_s,
            pluvial_fill_ratio: pluvial.fill_ratio_percent,
            pluvial_rows: None,
            pluvial_csv_status: None,
            hunter_units: 0.0,
            hunter_result: None,
            hunter_error: None,
            potable_flow: 0.0,
            potable_velocity: potable.limit_velocity_m_per_s,
            potable_result: None,
            potable_error: None,
            drainage_flow: 0.0,
            drainage_slope: drainage.slope_percent,
            drainage_manning_n: drainage.manning_n,
            drainage_fill_ratio: drainage.fill_ratio_percent,
            drainage_rows: None,
            drainage_selection: None,
            drainage_error: None,
            conv_kind: QuantityKind::Length,
            conv_value: 0.0,
            conv_from: "mm".to_string(),
            conv_to: "in".to_string(),
            conv_result: None,
        }
    }

    fn ui_pluvial(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.pluvial.heading", "Pluvial Design Matrix"));
        ui.label(txt(
            "gui.pluvial.tip",
            "Tractive-force validation and allowable drainage area for circular conduits.",
        ));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("pluvial_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.pluvial.intensity", "Rainfall intensity [mm/hr]"));
                    ui.add(egui::DragValue::new(&mut self.pluvial_intensity).speed(1.0));
                    ui.end_row();
                    ui.label(txt("gui.pluvial.runoff", "Runoff coefficient C"));
                    ui.add(
                        egui::DragValue::new(&mut self.pluvial_runoff)
                            .speed(0.01)
                            .clamp_range(0.0..=1.0),
                    );
                    ui.end_row();
                    ui.label(txt("gui.pluvial.roughness", "Absolute roughness ks [m]"));
                    ui.add(
                        egui::DragValue::new(&mut self.pluvial_roughness)
                            .speed(1.0e-7)
                            .custom_formatter(|v, _| format!("{v:.2e}")),
                    );
                    ui.end_row();
                    ui.label(txt("gui.pluvial.viscosity", "Kinematic viscosity [m2/s]"));
                    ui.add(
                        egui::DragValue::new(&mut self.pluvial_viscosity)
                            .speed(1.0e-8)
                            .custom_formatter(|v, _| format!("{v:.3e}")),
                    );
                    ui.end_row();
                    ui.label(txt("gui.pluvial.fill_ratio", "Design fill ratio [%]"));
                    ui.add(
                        egui::DragValue::new(&mut self.pluvial_fill_ratio)
                            .speed(1.0)
                            .clamp_range(1.0..=100.0),
                    );
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button(txt("gui.common.calculate", "Calculate")).clicked() {
                let input = PluvialInput {
                    intensity_mm_per_h: self.pluvial_intensity,
                    runoff_coefficient: self.pluvial_runoff,
                    roughness_m: self.pluvial_roughness,
                    kinematic_viscosity_m2_s: self.pluvial_viscosity,
                    fill_ratio_percent: self.pluvial_fill_ratio,
                };
                self.pluvial_rows = Some(pluvial::evaluate_matrix(
                    &input,
                    pipe_db::sanitary_pipes(),
                    &self.config.pluvial.slopes_percent,
                ));
                self.pluvial_csv_status = None;
            }
            if self.pluvial_rows.is_some()
                && ui.button(txt("gui.common.export_csv", "Export CSV")).clicked()
            {
                self.export_pluvial_csv();
            }
        });

        if let Some(status) = &self.pluvial_csv_status {
            ui.label(status.clone());
        }

        let slopes = self.config.pluvial.slopes_percent.clone();
        if let Some(rows) = &self.pluvial_rows {
            ui.add_space(8.0);
            ui.label(txt(
                "pluvial.table_title",
                "Allowable drainage area [m2] (pipe x slope)",
            ));
            egui::Grid::new("pluvial_table")
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.common.pipe", "Pipe"));
                    ui.label(txt("gui.common.id_mm", "ID (mm)"));
                    for s in &slopes {
                        ui.label(format!("S = {s:.1}%"));
                    }
                    ui.end_row();
                    for row in rows {
                        ui.label(row.pipe.name);
                        ui.label(format!("{:.1}", row.pipe.internal_diameter_mm));
                        for cell in &row.cells {
                            match cell {
                                CellOutcome::Valid { .. } => {
                                    ui.label(cell_text(cell, &self.tr));
                                }
                                CellOutcome::Invalid { .. } => {
                                    ui.colored_label(
                                        egui::Color32::from_rgb(180, 60, 60),
                                        cell_text(cell, &self.tr),
                                    );
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        }
    }

    fn export_pluvial_csv(&mut self) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let Some(rows) = &self.pluvial_rows else {
            return;
        };
        let Some(path) = FileDialog::new()
            .set_file_name("pluvial_matrix.csv")
            .save_file()
        else {
            return;
        };
        let csv = matrix_to_csv(rows, &self.config.pluvial.slopes_percent);
        self.pluvial_csv_status = Some(match fs::write(&path, csv) {
            Ok(()) => format!(
                "{}{}",
                txt("gui.pluvial.csv_saved", "CSV saved: "),
                path.display()
            ),
            Err(e) => format!("{}{e}", txt("gui.pluvial.csv_error", "CSV write failed: ")),
        });
    }

    fn ui_hunter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.hunter.heading", "Hunter Fixture-Unit Flow"));
        ui.label(txt(
            "gui.hunter.tip",
            "Probable peak flow per the NTC 1500 Hunter curves.",
        ));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("hunter_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.hunter.units", "Fixture units (UH)"));
                    ui.add(egui::DragValue::new(&mut self.hunter_units).speed(1.0));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        if ui.button(txt("gui.common.calculate", "Calculate")).clicked() {
            match hunter::probable_flow(self.hunter_units) {
                Ok(res) => {
                    let tank_label = txt("gui.hunter.tank", "Tank system [L/s]");
                    let flush_label = txt("gui.hunter.flush", "Flush-valve system [L/s]");
                    let note = txt("hunter.note_clamped", "(outside curve: edge value)");
                    let mut out = format!("{tank_label}: {:.3}", res.tank.flow_lps);
                    if res.tank.clamped {
                        out.push_str(&format!(" {note}"));
                    }
                    out.push_str(&format!("\n{flush_label}: {:.3}", res.flush.flow_lps));
                    if res.flush.clamped {
                        out.push_str(&format!(" {note}"));
                    }
                    self.hunter_result = Some(out);
                    self.hunter_error = None;
                }
                Err(e) => {
                    self.hunter_result = None;
                    self.hunter_error = Some(e.to_string());
                }
            }
        }

        if let Some(result) = &self.hunter_result {
            ui.add_space(8.0);
            ui.label(result.clone());
        }
        if let Some(err) = &self.hunter_error {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::from_rgb(180, 60, 60), err.clone());
        }
    }

    fn ui_potable(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.potable.heading", "Potable Water Sizing"));
        ui.label(txt(
            "gui.potable.tip",
            "Smallest SCH40 pipe whose bore meets the limit-velocity area.",
        ));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("potable_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.potable.flow", "Design flow [L/s]"));
                    ui.add(egui::DragValue::new(&mut self.potable_flow).speed(0.1));
                    ui.end_row();
                    ui.label(txt("gui.potable.velocity", "Limit velocity [m/s]"));
                    ui.add(egui::DragValue::new(&mut self.potable_velocity).speed(0.1));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        if ui.button(txt("gui.common.calculate", "Calculate")).clicked() {
            match potable::select_diameter(
                self.potable_flow,
                self.potable_velocity,
                pipe_db::potable_pipes(),
            ) {
                Ok(sel) => {
                    self.potable_result = Some(format!(
                        "{}: {:.2} mm\n{}: {} (DN{:.0}, ID {:.2} mm)",
                        txt("gui.potable.theoretical", "Theoretical minimum ID [mm]"),
                        sel.theoretical_diameter_mm,
                        txt("gui.potable.commercial", "Commercial pipe"),
                        sel.pipe.nominal,
                        sel.pipe.nominal_mm,
                        sel.pipe.internal_diameter_mm
                    ));
                    self.potable_error = None;
                }
                Err(e) => {
                    self.potable_result = None;
                    self.potable_error = Some(e.to_string());
                }
            }
        }

        if let Some(result) = &self.potable_result {
            ui.add_space(8.0);
            ui.label(result.clone());
        }
        if let Some(err) = &self.potable_error {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::from_rgb(180, 60, 60), err.clone());
        }
    }

    fn ui_drainage(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.drainage.heading", "Drainage Sizing (Manning)"));
        ui.label(txt(
            "gui.drainage.tip",
            "Free-surface Manning capacity at the design fill ratio, per catalog pipe.",
        ));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("drainage_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.drainage.flow", "Design flow [L/s]"));
                    ui.add(egui::DragValue::new(&mut self.drainage_flow).speed(0.1));
                    ui.end_row();
                    ui.label(txt("gui.drainage.slope", "Slope [%]"));
                    ui.add(egui::DragValue::new(&mut self.drainage_slope).speed(0.1));
                    ui.end_row();
                    ui.label(txt("gui.drainage.manning", "Manning n"));
                    ui.add(
                        egui::DragValue::new(&mut self.drainage_manning_n)
                            .speed(0.001)
                            .custom_formatter(|v, _| format!("{v:.4}")),
                    );
                    ui.end_row();
                    ui.label(txt("gui.drainage.fill_ratio", "Fill ratio y/D [%]"));
                    ui.add(
                        egui::DragValue::new(&mut self.drainage_fill_ratio)
                            .speed(1.0)
                            .clamp_range(1.0..=99.0),
                    );
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        if ui.button(txt("gui.common.calculate", "Calculate")).clicked() {
            let input = DrainageInput {
                design_flow_lps: self.drainage_flow,
                slope_percent: self.drainage_slope,
                manning_n: self.drainage_manning_n,
                fill_ratio_percent: self.drainage_fill_ratio,
            };
            match sanitary::evaluate_catalog(&input, pipe_db::sanitary_pipes()) {
                Ok(rows) => {
                    self.drainage_rows = Some(rows);
                    self.drainage_error = None;
                    self.drainage_selection =
                        match sanitary::select_diameter(&input, pipe_db::sanitary_pipes()) {
                            Ok(sel) => Some(format!(
                                "{}: {} ({:.2} L/s, {:.2} m/s)",
                                txt("drainage.result_selected", "Selected diameter"),
                                sel.pipe.name,
                                sel.capacity_lps,
                                sel.velocity_m_per_s
                            )),
                            Err(e) => Some(e.to_string()),
                        };
                }
                Err(e) => {
                    self.drainage_rows = None;
                    self.drainage_selection = None;
                    self.drainage_error = Some(e.to_string());
                }
            }
        }

        if let Some(err) = &self.drainage_error {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::from_rgb(180, 60, 60), err.clone());
        }

        if let Some(rows) = &self.drainage_rows {
            ui.add_space(8.0);
            ui.label(txt("drainage.table_title", "Capacity evaluation per pipe"));
            egui::Grid::new("drainage_table")
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.common.pipe", "Pipe"));
                    ui.label(txt("gui.common.id_mm", "ID (mm)"));
                    ui.label(txt("gui.drainage.capacity", "Capacity (L/s)"));
                    ui.label(txt("gui.drainage.velocity", "Velocity (m/s)"));
                    ui.label(txt("gui.drainage.depth", "Depth (mm)"));
                    ui.label(txt("gui.common.status", "Status"));
                    ui.end_row();
                    for row in rows {
                        ui.label(row.pipe.name);
                        ui.label(format!("{:.1}", row.pipe.internal_diameter_mm));
                        ui.label(format!("{:.2}", row.capacity_lps));
                        ui.label(format!("{:.2}", row.velocity_m_per_s));
                        ui.label(format!("{:.1}", row.water_depth_mm));
                        if row.viable {
                            ui.colored_label(
                                egui::Color32::from_rgb(40, 130, 60),
                                txt("drainage.status_ok", "OK"),
                            );
                        } else {
                            ui.label(txt("drainage.status_insufficient", "insufficient"));
                        }
                        ui.end_row();
                    }
                });
        }

        if let Some(selection) = &self.drainage_selection {
            ui.add_space(8.0);
            ui.label(selection.clone());
        }
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.tab.unit_conv", "Unit Converter"));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("unit_conversion.prompt_kind", "Quantity"));
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(quantity_label(self.conv_kind))
                        .show_ui(ui, |ui| {
                            for kind in [
                                QuantityKind::Length,
                                QuantityKind::Area,
                                QuantityKind::Velocity,
                                QuantityKind::Flow,
                                QuantityKind::RainfallIntensity,
                                QuantityKind::KinematicViscosity,
                            ] {
                                ui.selectable_value(
                                    &mut self.conv_kind,
                                    kind,
                                    quantity_label(kind),
                                );
                            }
                        });
                    ui.end_row();
                    ui.label(txt("unit_conversion.prompt_value", "Enter value: "));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(0.1));
                    ui.end_row();
                    ui.label(txt("unit_conversion.prompt_from_unit", "From unit"));
                    ui.text_edit_singleline(&mut self.conv_from);
                    ui.end_row();
                    ui.label(txt("unit_conversion.prompt_to_unit", "To unit"));
                    ui.text_edit_singleline(&mut self.conv_to);
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        if ui.button(txt("gui.common.calculate", "Calculate")).clicked() {
            self.conv_result = Some(
                match conversion::convert(
                    self.conv_kind,
                    self.conv_value,
                    self.conv_from.trim(),
                    self.conv_to.trim(),
                ) {
                    Ok(v) => format!(
                        "{}: {v} {}",
                        txt("unit_conversion.result", "Result"),
                        self.conv_to.trim()
                    ),
                    Err(e) => e.to_string(),
                },
            );
        }

        if let Some(result) = &self.conv_result {
            ui.add_space(8.0);
            ui.label(result.clone());
        }
    }
}

fn quantity_label(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::Length => "Length",
        QuantityKind::Area => "Area",
        QuantityKind::Velocity => "Velocity",
        QuantityKind::Flow => "Flow",
        QuantityKind::RainfallIntensity => "Rainfall intensity",
        QuantityKind::KinematicViscosity => "Kinematic viscosity",
    }
}

/// 매트릭스 셀 표시 문자열.
fn cell_text(cell: &CellOutcome, tr: &i18n::Translator) -> String {
    match cell {
        CellOutcome::Valid {
            area_min_m2,
            area_max_m2,
            ..
        } => format!("{area_min_m2:.0} ~ {area_max_m2:.0} m2"),
        CellOutcome::Invalid { reason, .. } => {
            let (key, default) = match reason {
                FailReason::LowTractiveForce => ("pluvial.cell_low_tau", "low tractive force"),
                FailReason::TargetDepthNotFound => {
                    ("pluvial.cell_no_target_depth", "target depth not reached")
                }
                FailReason::MinExceedsMax => ("pluvial.cell_range_inverted", "area range inverted"),
            };
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        }
    }
}

/// 우수 매트릭스를 CSV 문자열로 직렬화한다. 행/열 순서는 표와 같다.
fn matrix_to_csv(rows: &[MatrixRow], slopes_percent: &[f64]) -> String {
    let mut out = String::from("pipe,id_mm");
    for s in slopes_percent {
        out.push_str(&format!(
            ",area_min_m2_s{s},area_max_m2_s{s},flow_min_lps_s{s},flow_max_lps_s{s},tau_max_s{s},status_s{s}"
        ));
    }
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},{:.1}",
            row.pipe.name, row.pipe.internal_diameter_mm
        ));
        for cell in &row.cells {
            match cell {
                CellOutcome::Valid {
                    area_min_m2,
                    area_max_m2,
                    flow_min_lps,
                    flow_max_lps,
                    tau_max_kgf_per_m2,
                    ..
                } => out.push_str(&format!(
                    ",{area_min_m2:.2},{area_max_m2:.2},{flow_min_lps:.3},{flow_max_lps:.3},{tau_max_kgf_per_m2:.4},valid"
                )),
                CellOutcome::Invalid {
                    reason,
                    tau_max_kgf_per_m2,
                    ..
                } => {
                    let tag = match reason {
                        FailReason::LowTractiveForce => "low_tau_max",
                        FailReason::TargetDepthNotFound => "target_depth_not_found",
                        FailReason::MinExceedsMax => "min_greater_than_max",
                    };
                    out.push_str(&format!(",,,,,{tau_max_kgf_per_m2:.4},{tag}"));
                }
            }
        }
        out.push('\n');
    }
    out
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Hydrosanitary Engineering Toolbox"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut open = true;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                            ui.selectable_value(
                                &mut self.lang_input,
                                "en-us".into(),
                                "English (US)",
                            );
                            ui.selectable_value(&mut self.lang_input, "es-es".into(), "Español");
                        });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    if ui
                        .add(egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x"))
                        .changed()
                    {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            eprintln!("config save error: {e}");
                        }
                    }
                });
            if !open {
                self.show_settings_modal = false;
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Pluvial,
                    txt("gui.tab.pluvial", "Pluvial Matrix"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Hunter,
                    txt("gui.tab.hunter", "Hunter Units"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Potable,
                    txt("gui.tab.potable", "Potable Water"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Drainage,
                    txt("gui.tab.drainage", "Drainage Flow"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::UnitConv,
                    txt("gui.tab.unit_conv", "Unit Converter"),
                );
            });
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Pluvial => self.ui_pluvial(ui),
                Tab::Hunter => self.ui_hunter(ui),
                Tab::Potable => self.ui_potable(ui),
                Tab::Drainage => self.ui_drainage(ui),
                Tab::UnitConv => self.ui_unit_conv(ui),
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<MatrixRow> {
        let input = PluvialInput {
            intensity_mm_per_h: 100.0,
            runoff_coefficient: 0.9,
            roughness_m: 1.5e-6,
            kinematic_viscosity_m2_s: 1.141e-6,
            fill_ratio_percent: 85.0,
        };
        pluvial::evaluate_matrix(&input, pipe_db::sanitary_pipes(), &[0.5, 2.0])
    }

    #[test]
    fn csv_has_header_and_one_line_per_pipe() {
        let rows = sample_rows();
        let csv = matrix_to_csv(&rows, &[0.5, 2.0]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 1 + pipe_db::sanitary_pipes().len());
        assert!(lines[0].starts_with("pipe,id_mm"));
        assert!(lines[0].contains("area_min_m2_s0.5"));
        assert!(lines[0].contains("status_s2"));
    }

    #[test]
    fn csv_marks_invalid_cells_with_reason_tag() {
        let rows = sample_rows();
        let csv = matrix_to_csv(&rows, &[0.5, 2.0]);
        // 소구경 관은 0.5% 경사에서 소류력 미달이다.
        assert!(csv.contains("low_tau_max"));
        assert!(csv.contains("valid"));
    }

    #[test]
    fn invalid_cell_text_uses_reason() {
        let tr = i18n::Translator::new("en");
        let cell = CellOutcome::Invalid {
            reason: FailReason::LowTractiveForce,
            tau_max_kgf_per_m2: 0.1,
            slope_percent: 0.5,
        };
        assert_eq!(cell_text(&cell, &tr), "low tractive force");
    }
}
