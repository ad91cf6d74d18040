#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 엔진 성능 대시보드 진입점.
//! 슬라이더 입력이 바뀔 때마다 새 성능 모델을 만들어 지표와 곡선을 갱신한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path, path::PathBuf};

use engine_performance_toolbox::{
    air::isa,
    config::{self, DisplayUnits, UnitSystem},
    engine::maps::CurveTable,
    engine::performance::{EngineInput, PerformanceModel, PerformanceResult},
    engine::sweep::{self, SweepPoint},
    fuel_db,
    i18n::{self, keys, Translator},
    units::*,
};

fn main() -> Result<(), eframe::Error> {
    // GUI 바이너리는 eframe이 인자 처리를 하지 않으므로 --lang만 직접 읽는다.
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
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1180.0, 780.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    let lang_arg = cli_lang.unwrap_or_else(|| "auto".to_string());
    let resolved = i18n::resolve_language(&lang_arg, Some(app_cfg.language.as_str()));
    app_cfg.language = resolved;

    eframe::run_native(
        "Engine Performance Toolbox",
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
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한국어 표시가 가능한 시스템 폰트를 찾아 등록한다. 못 찾으면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "malgunbd.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    for path in candidates {
        if path.exists() {
            let bytes =
                fs::read(&path).map_err(|e| format!("font read failed ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("CJK font not found; falling back to the default fonts.".into())
}

/// 폰트 바이트를 egui에 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, name.to_owned());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(name.to_owned());
    ctx.set_fonts(fonts);
}

/// 게이지 채움 비율. 최대값이 0 이하이면 0으로 둔다.
fn gauge_fraction(value: f64, max_value: f64) -> f32 {
    if max_value <= 0.0 {
        0.0
    } else {
        (value / max_value).clamp(0.0, 1.0) as f32
    }
}

struct GuiApp {
    cfg: config::Config,
    tr: Translator,
    // 입력 상태 (슬라이더 값)
    num_cylinders: u32,
    bore_mm: f64,
    stroke_mm: f64,
    compression_ratio: f64,
    rpm: f64,
    rpm_redline: f64,
    bsfc_g_per_kwh: f64,
    afr: f64,
    fuel_code: String,
    altitude_m: f64,
    ambient_temp_c: f64,
    boost_kpa: f64,
    throttle_pct: f64,
    // 곡선 테이블
    curve_table: Option<CurveTable>,
    maps_note: String,
    // 계산 캐시. 입력이 바뀐 프레임에만 갱신한다.
    result: Option<PerformanceResult>,
    sweep_cache: Vec<SweepPoint>,
    dirty: bool,
    last_error: Option<String>,
}

impl GuiApp {
    fn new(cfg: config::Config) -> Self {
        let tr = Translator::new(&cfg.language);
        let defaults = EngineInput::default();
        let (curve_table, maps_note) = match CurveTable::load(Path::new(&cfg.maps_path)) {
            Ok(table) => (
                Some(table),
                format!("{} {}", tr.t(keys::NOTE_MAPS_ACTIVE), cfg.maps_path),
            ),
            Err(err) => {
                log::warn!("조회 테이블({}) 로드 실패: {err}", cfg.maps_path);
                (None, tr.t(keys::NOTE_MAPS_FALLBACK).to_string())
            }
        };
        Self {
            cfg,
            tr,
            num_cylinders: defaults.num_cylinders,
            bore_mm: defaults.bore_mm,
            stroke_mm: defaults.stroke_mm,
            compression_ratio: defaults.compression_ratio,
            rpm: defaults.rpm,
            rpm_redline: defaults.rpm_redline,
            bsfc_g_per_kwh: defaults.bsfc_g_per_kwh,
            afr: defaults.afr,
            fuel_code: defaults.fuel,
            altitude_m: 0.0,
            ambient_temp_c: 15.0,
            boost_kpa: 0.0,
            throttle_pct: 100.0,
            curve_table,
            maps_note,
            result: None,
            sweep_cache: Vec::new(),
            dirty: true,
            last_error: None,
        }
    }

    /// 현재 슬라이더 상태를 모델 입력으로 환산한다.
    fn engine_input(&self) -> EngineInput {
        EngineInput {
            num_cylinders: self.num_cylinders,
            bore_mm: self.bore_mm,
            stroke_mm: self.stroke_mm,
            compression_ratio: self.compression_ratio,
            rpm: self.rpm,
            rpm_redline: self.rpm_redline,
            bsfc_g_per_kwh: self.bsfc_g_per_kwh,
            afr: self.afr,
            fuel: self.fuel_code.clone(),
            rho_air_kg_m3: isa::isa_density(self.altitude_m, self.ambient_temp_c),
            manifold_pressure_ratio: isa::pressure_ratio_from_boost(self.boost_kpa),
            throttle_scaler: (self.throttle_pct / 100.0).clamp(0.0, 1.0),
        }
    }

    fn recompute(&mut self) {
        let input = self.engine_input();
        match PerformanceModel::with_calibration(
            input.clone(),
            Default::default(),
            self.curve_table.as_ref(),
        ) {
            Ok(model) => {
                self.result = Some(model.results().clone());
                self.last_error = None;
            }
            Err(err) => {
                self.result = None;
                self.last_error = Some(err.to_string());
            }
        }
        let step = (self.rpm_redline / 60.0).max(50.0);
        self.sweep_cache = sweep::sweep_rpm(
            &input,
            step,
            self.rpm_redline,
            step,
            self.curve_table.as_ref(),
        )
        .unwrap_or_default();
        self.dirty = false;
    }

    fn apply_unit_preset(&mut self, system: UnitSystem) {
        self.cfg.unit_system = system;
        self.cfg.display_units = DisplayUnits::preset(system);
    }

    fn set_language(&mut self, code: &str) {
        self.cfg.language = code.to_string();
        let resolved = i18n::resolve_language(code, None);
        self.tr = Translator::new(&resolved);
    }

    fn pick_maps_file(&mut self) {
        if let Some(path) = FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
            match CurveTable::load(&path) {
                Ok(table) => {
                    self.cfg.maps_path = path.display().to_string();
                    self.maps_note = format!(
                        "{} {}",
                        self.tr.t(keys::NOTE_MAPS_ACTIVE),
                        self.cfg.maps_path
                    );
                    self.curve_table = Some(table);
                }
                Err(err) => {
                    self.maps_note = format!("{}: {err}", self.tr.t(keys::NOTE_MAPS_FALLBACK));
                    self.curve_table = None;
                }
            }
            self.dirty = true;
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Engine Performance Toolbox");
            ui.separator();

            let mut system = self.cfg.unit_system;
            egui::ComboBox::from_id_source("unit_preset")
                .selected_text(format!("{system:?}"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut system, UnitSystem::Metric, "Metric");
                    ui.selectable_value(&mut system, UnitSystem::Imperial, "Imperial");
                });
            if system != self.cfg.unit_system {
                self.apply_unit_preset(system);
            }

            let mut lang = self.cfg.language.clone();
            egui::ComboBox::from_id_source("language")
                .selected_text(lang.clone())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut lang, "ko".to_string(), "한국어");
                    ui.selectable_value(&mut lang, "en".to_string(), "English");
                });
            if lang != self.cfg.language {
                self.set_language(&lang);
            }

            if ui.button(self.tr.t(keys::GUI_LOAD_MAPS)).clicked() {
                self.pick_maps_file();
            }
            if self.curve_table.is_some() && ui.button(self.tr.t(keys::GUI_CLEAR_MAPS)).clicked() {
                self.curve_table = None;
                self.maps_note = self.tr.t(keys::NOTE_MAPS_FALLBACK).to_string();
                self.dirty = true;
            }
            ui.label(&self.maps_note);
        });
    }

    fn input_panel(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr;
        let mut changed = false;

        ui.heading(tr.t(keys::GUI_PANEL_GEOMETRY));
        changed |= ui
            .add(egui::Slider::new(&mut self.num_cylinders, 1..=16).text(tr.t(keys::PROMPT_NUM_CYLINDERS)))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.bore_mm, 60.0..=120.0).text(tr.t(keys::PROMPT_BORE)))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.stroke_mm, 60.0..=120.0).text(tr.t(keys::PROMPT_STROKE)))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut self.compression_ratio, 6.0..=22.0)
                    .text(tr.t(keys::PROMPT_COMPRESSION_RATIO)),
            )
            .changed();
        ui.separator();

        ui.heading(tr.t(keys::GUI_PANEL_OPERATING));
        changed |= ui
            .add(
                egui::Slider::new(&mut self.rpm, 0.0..=self.rpm_redline)
                    .text(tr.t(keys::PROMPT_RPM)),
            )
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut self.rpm_redline, 4000.0..=12000.0)
                    .text(tr.t(keys::PROMPT_REDLINE)),
            )
            .changed();
        if self.rpm > self.rpm_redline {
            self.rpm = self.rpm_redline;
            changed = true;
        }
        changed |= ui
            .add(egui::Slider::new(&mut self.throttle_pct, 0.0..=100.0).text(tr.t(keys::PROMPT_THROTTLE)))
            .changed();
        ui.separator();

        ui.heading(tr.t(keys::GUI_PANEL_AMBIENT));
        changed |= ui
            .add(egui::Slider::new(&mut self.altitude_m, 0.0..=4000.0).text(tr.t(keys::PROMPT_ALTITUDE)))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut self.ambient_temp_c, -20.0..=50.0)
                    .text(tr.t(keys::PROMPT_AMBIENT_TEMP)),
            )
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.boost_kpa, 0.0..=200.0).text(tr.t(keys::PROMPT_BOOST)))
            .changed();
        ui.label(format!(
            "{}: {:.4} kg/m³   {}: {:.3}",
            tr.t(keys::GUI_AIR_DENSITY),
            isa::isa_density(self.altitude_m, self.ambient_temp_c),
            tr.t(keys::GUI_MANIFOLD_RATIO),
            isa::pressure_ratio_from_boost(self.boost_kpa),
        ));
        ui.separator();

        ui.heading(tr.t(keys::GUI_PANEL_FUEL));
        let prev_fuel = self.fuel_code.clone();
        egui::ComboBox::from_label(tr.t(keys::PROMPT_FUEL))
            .selected_text(self.fuel_code.clone())
            .show_ui(ui, |ui| {
                for fuel in fuel_db::fuels() {
                    ui.selectable_value(&mut self.fuel_code, fuel.code.to_string(), fuel.code);
                }
            });
        if self.fuel_code != prev_fuel {
            // 연료를 바꾸면 AFR 슬라이더를 해당 연료의 이론 공연비로 되돌린다.
            if let Some(fuel) = fuel_db::find_fuel(&self.fuel_code) {
                self.afr = fuel.stoich_afr;
            }
            changed = true;
        }
        changed |= ui
            .add(egui::Slider::new(&mut self.afr, 8.0..=25.0).text(tr.t(keys::PROMPT_AFR)))
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut self.bsfc_g_per_kwh, 200.0..=450.0)
                    .text(tr.t(keys::PROMPT_BSFC)),
            )
            .changed();

        if changed {
            self.dirty = true;
        }
    }

    fn metrics_panel(&self, ui: &mut egui::Ui) {
        let tr = self.tr;
        let units = &self.cfg.display_units;
        let Some(result) = &self.result else {
            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, format!("{} {err}", tr.t(keys::ERROR_PREFIX)));
            }
            return;
        };

        let max_power_w = self
            .sweep_cache
            .iter()
            .map(|p| p.result.brake_power_w)
            .fold(0.0, f64::max);
        let max_torque_nm = self
            .sweep_cache
            .iter()
            .map(|p| p.result.torque_nm)
            .fold(0.0, f64::max);
        let max_bmep_kpa = self
            .sweep_cache
            .iter()
            .map(|p| p.result.bmep_kpa)
            .fold(0.0, f64::max);

        ui.heading(tr.t(keys::GUI_PANEL_METRICS));
        ui.label(format!(
            "{}: {:.3} L   |   {}: {:.2} m/s",
            tr.t(keys::RESULT_DISPLACEMENT),
            result.displacement_l,
            tr.t(keys::RESULT_PISTON_SPEED),
            result.mean_piston_speed_m_s,
        ));
        ui.add_space(4.0);

        let power = convert_power(result.brake_power_w, PowerUnit::Watt, units.power);
        ui.add(
            egui::ProgressBar::new(gauge_fraction(result.brake_power_w, max_power_w)).text(format!(
                "{}: {:.1} {}",
                tr.t(keys::RESULT_BRAKE_POWER),
                power,
                power_unit_label(units.power)
            )),
        );
        let torque = convert_torque(result.torque_nm, TorqueUnit::NewtonMeter, units.torque);
        ui.add(
            egui::ProgressBar::new(gauge_fraction(result.torque_nm, max_torque_nm)).text(format!(
                "{}: {:.1} {}",
                tr.t(keys::RESULT_TORQUE),
                torque,
                torque_unit_label(units.torque)
            )),
        );
        let bmep = convert_pressure(result.bmep_kpa, PressureUnit::KiloPascal, units.pressure);
        ui.add(
            egui::ProgressBar::new(gauge_fraction(result.bmep_kpa, max_bmep_kpa)).text(format!(
                "{}: {:.1} {}",
                tr.t(keys::RESULT_BMEP),
                bmep,
                pressure_unit_label(units.pressure)
            )),
        );
        ui.add(
            egui::ProgressBar::new(gauge_fraction(result.volumetric_efficiency_pct, 100.0)).text(
                format!(
                    "{}: {:.1} %",
                    tr.t(keys::RESULT_VE),
                    result.volumetric_efficiency_pct
                ),
            ),
        );
        ui.add_space(6.0);

        egui::Grid::new("metric_grid").num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::RESULT_AIR_FLOW));
            ui.label(format!("{:.4} kg/s", result.air_mass_flow_kg_s));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_FUEL_MASS_FLOW));
            ui.label(format!("{:.5} kg/s", result.fuel_mass_flow_kg_s));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_FUEL_VOL_FLOW));
            ui.label(format!(
                "{:.2} {}",
                convert_flow(result.fuel_flow_l_per_h, FlowUnit::LiterPerHour, units.flow),
                flow_unit_label(units.flow)
            ));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_INDICATED_POWER));
            ui.label(format!(
                "{:.1} {}",
                convert_power(result.indicated_power_w, PowerUnit::Watt, units.power),
                power_unit_label(units.power)
            ));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_IMEP));
            ui.label(format!(
                "{:.1} {}",
                convert_pressure(result.imep_kpa, PressureUnit::KiloPascal, units.pressure),
                pressure_unit_label(units.pressure)
            ));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_FMEP));
            ui.label(format!(
                "{:.1} {}",
                convert_pressure(result.fmep_kpa, PressureUnit::KiloPascal, units.pressure),
                pressure_unit_label(units.pressure)
            ));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_BSFC_EFF));
            ui.label(format!("{:.1} g/kWh", result.bsfc_g_per_kwh));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_ETA_MECH));
            ui.label(format!("{:.1} %", result.mechanical_efficiency_pct));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_ETA_BRAKE_THERMAL));
            ui.label(format!("{:.1} %", result.brake_thermal_efficiency_pct));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_ETA_OTTO));
            ui.label(format!("{:.1} %", result.otto_efficiency_pct));
            ui.end_row();
        });
    }

    /// 토크/동력 스윕 곡선을 그린다. 현재 RPM 위치는 세로선으로 표시한다.
    fn chart_panel(&self, ui: &mut egui::Ui) {
        let tr = self.tr;
        ui.heading(tr.t(keys::GUI_PANEL_CHART));
        if self.sweep_cache.len() < 2 {
            return;
        }

        let desired = egui::vec2(ui.available_width(), 240.0);
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
        let rect = response.rect.shrink(8.0);
        painter.rect_filled(response.rect, 4.0, ui.visuals().extreme_bg_color);

        let max_rpm = self.rpm_redline.max(1.0);
        let max_torque = self
            .sweep_cache
            .iter()
            .map(|p| p.result.torque_nm)
            .fold(0.0, f64::max)
            .max(1e-9);
        let max_power = self
            .sweep_cache
            .iter()
            .map(|p| p.result.brake_power_w)
            .fold(0.0, f64::max)
            .max(1e-9);

        let to_pos = |rpm: f64, frac: f64| -> egui::Pos2 {
            egui::pos2(
                rect.left() + (rpm / max_rpm) as f32 * rect.width(),
                rect.bottom() - frac as f32 * rect.height(),
            )
        };

        let torque_color = egui::Color32::from_rgb(0x4f, 0xa3, 0xff);
        let power_color = egui::Color32::from_rgb(0xff, 0x8c, 0x42);

        let torque_line: Vec<egui::Pos2> = self
            .sweep_cache
            .iter()
            .map(|p| to_pos(p.rpm, p.result.torque_nm / max_torque))
            .collect();
        let power_line: Vec<egui::Pos2> = self
            .sweep_cache
            .iter()
            .map(|p| to_pos(p.rpm, p.result.brake_power_w / max_power))
            .collect();
        painter.add(egui::Shape::line(
            torque_line,
            egui::Stroke::new(2.0, torque_color),
        ));
        painter.add(egui::Shape::line(
            power_line,
            egui::Stroke::new(2.0, power_color),
        ));

        // 현재 운전점 표시
        let x = rect.left() + (self.rpm / max_rpm) as f32 * rect.width();
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
        );

        let units = &self.cfg.display_units;
        painter.text(
            rect.left_top(),
            egui::Align2::LEFT_TOP,
            format!(
                "{}: {:.0} {}",
                tr.t(keys::RESULT_TORQUE),
                convert_torque(max_torque, TorqueUnit::NewtonMeter, units.torque),
                torque_unit_label(units.torque)
            ),
            egui::FontId::proportional(12.0),
            torque_color,
        );
        painter.text(
            rect.center_top(),
            egui::Align2::CENTER_TOP,
            format!(
                "{}: {:.0} {}",
                tr.t(keys::RESULT_BRAKE_POWER),
                convert_power(max_power, PowerUnit::Watt, units.power),
                power_unit_label(units.power)
            ),
            egui::FontId::proportional(12.0),
            power_color,
        );
        painter.text(
            rect.right_bottom(),
            egui::Align2::RIGHT_BOTTOM,
            format!("{:.0} RPM", max_rpm),
            egui::FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.dirty {
            self.recompute();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.top_bar(ui);
        });

        egui::SidePanel::left("inputs")
            .min_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.input_panel(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.metrics_panel(ui);
            ui.add_space(8.0);
            self.chart_panel(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.cfg.save() {
            eprintln!("설정 저장 실패: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_metric_applies_si_defaults() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(UnitSystem::Metric);
        assert_eq!(app.cfg.display_units.power, PowerUnit::Kilowatt);
        assert_eq!(app.cfg.display_units.torque, TorqueUnit::NewtonMeter);
        assert_eq!(app.cfg.display_units.pressure, PressureUnit::KiloPascal);
        assert_eq!(app.cfg.display_units.flow, FlowUnit::LiterPerHour);
        assert_eq!(app.cfg.display_units.temperature, TemperatureUnit::Celsius);
    }

    #[test]
    fn preset_imperial_applies_imperial_defaults() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply_unit_preset(UnitSystem::Imperial);
        assert_eq!(
            app.cfg.display_units.power,
            PowerUnit::MechanicalHorsepower
        );
        assert_eq!(app.cfg.display_units.torque, TorqueUnit::PoundFoot);
        assert_eq!(app.cfg.display_units.pressure, PressureUnit::Psi);
        assert_eq!(app.cfg.display_units.flow, FlowUnit::UsGallonPerHour);
        assert_eq!(
            app.cfg.display_units.temperature,
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn engine_input_maps_boost_and_throttle() {
        let mut app = GuiApp::new(config::Config::default());
        app.boost_kpa = 101.325;
        app.throttle_pct = 50.0;
        let input = app.engine_input();
        assert!((input.manifold_pressure_ratio - 2.0).abs() < 1e-12);
        assert!((input.throttle_scaler - 0.5).abs() < 1e-12);
    }

    #[test]
    fn gauge_fraction_guards_zero_max() {
        assert_eq!(gauge_fraction(10.0, 0.0), 0.0);
        assert_eq!(gauge_fraction(5.0, 10.0), 0.5);
        assert_eq!(gauge_fraction(20.0, 10.0), 1.0);
    }
}
