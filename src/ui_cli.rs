use std::io::{self, Write};
use std::path::Path;

use crate::air::isa;
use crate::app::AppError;
use crate::config::{Config, DisplayUnits, UnitSystem};
use crate::engine::maps::CurveTable;
use crate::engine::performance::{EngineInput, PerformanceModel, PerformanceResult};
use crate::engine::sweep;
use crate::fuel_db;
use crate::i18n::{keys, Translator};
use crate::units::*;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Performance,
    Sweep,
    FuelTable,
    IsaDensity,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PERFORMANCE));
    println!("{}", tr.t(keys::MAIN_MENU_SWEEP));
    println!("{}", tr.t(keys::MAIN_MENU_FUELS));
    println!("{}", tr.t(keys::MAIN_MENU_ISA));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Performance),
            "2" => return Ok(MenuChoice::Sweep),
            "3" => return Ok(MenuChoice::FuelTable),
            "4" => return Ok(MenuChoice::IsaDensity),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단일 운전점 성능 계산 메뉴를 처리한다.
pub fn handle_performance(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PERF_HEADING));
    println!("{}", tr.t(keys::PERF_NOTE_DEFAULTS));
    let input = prompt_engine_input(tr, cfg)?;
    let table = load_table_with_note(tr, cfg);
    let model = match table {
        Some(table) => PerformanceModel::with_table(input, &table)?,
        None => PerformanceModel::new(input)?,
    };
    print_results(tr, cfg, model.results());
    Ok(())
}

/// RPM 스윕 메뉴를 처리한다.
pub fn handle_sweep(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SWEEP_HEADING));
    println!("{}", tr.t(keys::PERF_NOTE_DEFAULTS));
    let input = prompt_engine_input(tr, cfg)?;
    let step = read_f64_default(tr, tr.t(keys::PROMPT_SWEEP_STEP), 500.0)?;
    let table = load_table_with_note(tr, cfg);
    let points = sweep::sweep_rpm(&input, step, input.rpm_redline, step, table.as_ref())?;

    let units = &cfg.display_units;
    println!("{}", tr.t(keys::SWEEP_TABLE_HEADER));
    for point in points {
        let r = &point.result;
        println!(
            "{:8.0} | {:7.1} {} | {:7.1} {} | {:5.0} {} | {:6.1}",
            point.rpm,
            convert_torque(r.torque_nm, TorqueUnit::NewtonMeter, units.torque),
            torque_unit_label(units.torque),
            convert_power(r.brake_power_w, PowerUnit::Watt, units.power),
            power_unit_label(units.power),
            convert_pressure(r.bmep_kpa, PressureUnit::KiloPascal, units.pressure),
            pressure_unit_label(units.pressure),
            r.volumetric_efficiency_pct,
        );
    }
    Ok(())
}

/// 연료 물성 테이블을 출력한다.
pub fn handle_fuel_table(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FUELS_HEADING));
    println!("{}", tr.t(keys::FUELS_TABLE_HEADER));
    for fuel in fuel_db::fuels() {
        println!(
            "{:<10} | {:11.1} | {:11.2} | {:10.1} | {}",
            fuel.code,
            fuel.lhv_j_per_kg / 1e6,
            fuel.density_kg_per_l,
            fuel.stoich_afr,
            fuel.notes,
        );
    }
    Ok(())
}

/// ISA 공기 밀도 메뉴를 처리한다.
pub fn handle_isa(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ISA_HEADING));
    let altitude_m = read_f64_default(tr, tr.t(keys::PROMPT_ALTITUDE), 0.0)?;
    let temp_c = prompt_ambient_temp_c(tr, cfg, 15.0)?;
    let state = isa::isa_state(altitude_m, temp_c);
    println!(
        "{} {:.4} kg/m³",
        tr.t(keys::ISA_RESULT_DENSITY),
        state.density_kg_m3
    );
    println!(
        "{} {:.2} kPa",
        tr.t(keys::ISA_RESULT_PRESSURE),
        state.pressure_pa / 1000.0
    );
    println!(
        "{} {:.1} {}",
        tr.t(keys::ISA_RESULT_STD_TEMP),
        convert_temperature(
            state.isa_temp_c,
            TemperatureUnit::Celsius,
            cfg.display_units.temperature
        ),
        temperature_unit_label(cfg.display_units.temperature),
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => apply_unit_system(cfg, UnitSystem::Metric, tr),
        "2" => apply_unit_system(cfg, UnitSystem::Imperial, tr),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.language = "ko".to_string(),
        "2" => cfg.language = "en".to_string(),
        "3" => cfg.language = "auto".to_string(),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_MAPS), cfg.maps_path);
    let path = read_line(tr.t(keys::SETTINGS_PROMPT_MAPS))?;
    if !path.trim().is_empty() {
        cfg.maps_path = path.trim().to_string();
    }
    println!("{} {:?} / {}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system, cfg.language);
    Ok(())
}

fn apply_unit_system(cfg: &mut Config, system: UnitSystem, tr: &Translator) {
    cfg.unit_system = system;
    cfg.display_units = DisplayUnits::preset(system);
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), system);
}

/// 엔진 제원/운전점을 대화식으로 입력받는다. 대기 조건은 ISA 헬퍼로 환산한다.
fn prompt_engine_input(tr: &Translator, cfg: &Config) -> Result<EngineInput, AppError> {
    let defaults = EngineInput::default();
    let num_cylinders =
        read_f64_default(tr, tr.t(keys::PROMPT_NUM_CYLINDERS), f64::from(defaults.num_cylinders))?
            .max(0.0) as u32;
    let bore_mm = read_f64_default(tr, tr.t(keys::PROMPT_BORE), defaults.bore_mm)?;
    let stroke_mm = read_f64_default(tr, tr.t(keys::PROMPT_STROKE), defaults.stroke_mm)?;
    let compression_ratio = read_f64_default(
        tr,
        tr.t(keys::PROMPT_COMPRESSION_RATIO),
        defaults.compression_ratio,
    )?;
    let rpm = read_f64_default(tr, tr.t(keys::PROMPT_RPM), defaults.rpm)?;
    let rpm_redline = read_f64_default(tr, tr.t(keys::PROMPT_REDLINE), defaults.rpm_redline)?;
    let bsfc_g_per_kwh = read_f64_default(tr, tr.t(keys::PROMPT_BSFC), defaults.bsfc_g_per_kwh)?;

    let fuel = {
        let line = read_line(&format!("{} ({}): ", tr.t(keys::PROMPT_FUEL), defaults.fuel))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            defaults.fuel.clone()
        } else {
            trimmed.to_string()
        }
    };
    let default_afr = fuel_db::find_fuel(&fuel)
        .map(|f| f.stoich_afr)
        .unwrap_or(defaults.afr);
    let afr = read_f64_default(tr, tr.t(keys::PROMPT_AFR), default_afr)?;

    let altitude_m = read_f64_default(tr, tr.t(keys::PROMPT_ALTITUDE), 0.0)?;
    let temp_c = prompt_ambient_temp_c(tr, cfg, 15.0)?;
    let boost_kpa = read_f64_default(tr, tr.t(keys::PROMPT_BOOST), 0.0)?;
    let throttle_pct = read_f64_default(tr, tr.t(keys::PROMPT_THROTTLE), 100.0)?;

    Ok(EngineInput {
        num_cylinders,
        bore_mm,
        stroke_mm,
        compression_ratio,
        rpm,
        rpm_redline,
        bsfc_g_per_kwh,
        afr,
        fuel,
        rho_air_kg_m3: isa::isa_density(altitude_m, temp_c),
        manifold_pressure_ratio: isa::pressure_ratio_from_boost(boost_kpa),
        throttle_scaler: (throttle_pct / 100.0).clamp(0.0, 1.0),
    })
}

/// 외기 온도를 표시 단위로 입력받아 °C로 환산한다.
fn prompt_ambient_temp_c(tr: &Translator, cfg: &Config, default_c: f64) -> Result<f64, AppError> {
    let unit = cfg.display_units.temperature;
    let default_display = convert_temperature(default_c, TemperatureUnit::Celsius, unit);
    let label = format!(
        "{} [{}]",
        tr.t(keys::PROMPT_AMBIENT_TEMP),
        temperature_unit_label(unit)
    );
    let value = read_f64_default(tr, &label, default_display)?;
    Ok(convert_temperature(value, unit, TemperatureUnit::Celsius))
}

/// 설정된 경로의 조회 테이블을 읽고, 사용 여부를 사용자에게 알린다.
fn load_table_with_note(tr: &Translator, cfg: &Config) -> Option<CurveTable> {
    match CurveTable::load(Path::new(&cfg.maps_path)) {
        Ok(table) => {
            println!("{} {}", tr.t(keys::NOTE_MAPS_ACTIVE), cfg.maps_path);
            Some(table)
        }
        Err(err) => {
            log::warn!("조회 테이블({}) 로드 실패: {err}", cfg.maps_path);
            println!("{}", tr.t(keys::NOTE_MAPS_FALLBACK));
            None
        }
    }
}

/// 지표 묶음을 설정된 표시 단위로 출력한다.
fn print_results(tr: &Translator, cfg: &Config, result: &PerformanceResult) {
    let units = &cfg.display_units;
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{:<24} {:8.3} L",
        tr.t(keys::RESULT_DISPLACEMENT),
        result.displacement_l
    );
    println!(
        "{:<24} {:8.4} kg/s",
        tr.t(keys::RESULT_AIR_FLOW),
        result.air_mass_flow_kg_s
    );
    println!(
        "{:<24} {:8.5} kg/s",
        tr.t(keys::RESULT_FUEL_MASS_FLOW),
        result.fuel_mass_flow_kg_s
    );
    println!(
        "{:<24} {:8.2} {}",
        tr.t(keys::RESULT_FUEL_VOL_FLOW),
        convert_flow(result.fuel_flow_l_per_h, FlowUnit::LiterPerHour, units.flow),
        flow_unit_label(units.flow),
    );
    println!(
        "{:<24} {:8.1} {}",
        tr.t(keys::RESULT_BRAKE_POWER),
        convert_power(result.brake_power_w, PowerUnit::Watt, units.power),
        power_unit_label(units.power),
    );
    println!(
        "{:<24} {:8.1} {}",
        tr.t(keys::RESULT_INDICATED_POWER),
        convert_power(result.indicated_power_w, PowerUnit::Watt, units.power),
        power_unit_label(units.power),
    );
    println!(
        "{:<24} {:8.1} {}",
        tr.t(keys::RESULT_TORQUE),
        convert_torque(result.torque_nm, TorqueUnit::NewtonMeter, units.torque),
        torque_unit_label(units.torque),
    );
    for (key, kpa) in [
        (keys::RESULT_BMEP, result.bmep_kpa),
        (keys::RESULT_IMEP, result.imep_kpa),
        (keys::RESULT_FMEP, result.fmep_kpa),
    ] {
        println!(
            "{:<24} {:8.1} {}",
            tr.t(key),
            convert_pressure(kpa, PressureUnit::KiloPascal, units.pressure),
            pressure_unit_label(units.pressure),
        );
    }
    println!(
        "{:<24} {:8.1} g/kWh",
        tr.t(keys::RESULT_BSFC_EFF),
        result.bsfc_g_per_kwh
    );
    println!(
        "{:<24} {:8.1} %",
        tr.t(keys::RESULT_ETA_MECH),
        result.mechanical_efficiency_pct
    );
    println!(
        "{:<24} {:8.1} %",
        tr.t(keys::RESULT_ETA_BRAKE_THERMAL),
        result.brake_thermal_efficiency_pct
    );
    println!(
        "{:<24} {:8.1} %",
        tr.t(keys::RESULT_ETA_OTTO),
        result.otto_efficiency_pct
    );
    println!(
        "{:<24} {:8.1} %",
        tr.t(keys::RESULT_VE),
        result.volumetric_efficiency_pct
    );
    println!(
        "{:<24} {:8.2} m/s",
        tr.t(keys::RESULT_PISTON_SPEED),
        result.mean_piston_speed_m_s
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 숫자를 입력받되, 빈 입력이면 기본값을 쓴다.
fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let line = read_line(&format!("{label} ({default}): "))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
