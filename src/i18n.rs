use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PERFORMANCE: &str = "main_menu.performance";
    pub const MAIN_MENU_SWEEP: &str = "main_menu.sweep";
    pub const MAIN_MENU_FUELS: &str = "main_menu.fuels";
    pub const MAIN_MENU_ISA: &str = "main_menu.isa";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PERF_HEADING: &str = "performance.heading";
    pub const PERF_NOTE_DEFAULTS: &str = "performance.note_defaults";
    pub const PROMPT_NUM_CYLINDERS: &str = "prompt.num_cylinders";
    pub const PROMPT_BORE: &str = "prompt.bore";
    pub const PROMPT_STROKE: &str = "prompt.stroke";
    pub const PROMPT_COMPRESSION_RATIO: &str = "prompt.compression_ratio";
    pub const PROMPT_RPM: &str = "prompt.rpm";
    pub const PROMPT_REDLINE: &str = "prompt.redline";
    pub const PROMPT_BSFC: &str = "prompt.bsfc";
    pub const PROMPT_AFR: &str = "prompt.afr";
    pub const PROMPT_FUEL: &str = "prompt.fuel";
    pub const PROMPT_ALTITUDE: &str = "prompt.altitude";
    pub const PROMPT_AMBIENT_TEMP: &str = "prompt.ambient_temp";
    pub const PROMPT_BOOST: &str = "prompt.boost";
    pub const PROMPT_THROTTLE: &str = "prompt.throttle";

    pub const NOTE_MAPS_ACTIVE: &str = "maps.active";
    pub const NOTE_MAPS_FALLBACK: &str = "maps.fallback";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_DISPLACEMENT: &str = "result.displacement";
    pub const RESULT_AIR_FLOW: &str = "result.air_flow";
    pub const RESULT_FUEL_MASS_FLOW: &str = "result.fuel_mass_flow";
    pub const RESULT_FUEL_VOL_FLOW: &str = "result.fuel_vol_flow";
    pub const RESULT_BRAKE_POWER: &str = "result.brake_power";
    pub const RESULT_INDICATED_POWER: &str = "result.indicated_power";
    pub const RESULT_TORQUE: &str = "result.torque";
    pub const RESULT_BMEP: &str = "result.bmep";
    pub const RESULT_IMEP: &str = "result.imep";
    pub const RESULT_FMEP: &str = "result.fmep";
    pub const RESULT_BSFC_EFF: &str = "result.bsfc_eff";
    pub const RESULT_ETA_MECH: &str = "result.eta_mech";
    pub const RESULT_ETA_BRAKE_THERMAL: &str = "result.eta_brake_thermal";
    pub const RESULT_ETA_OTTO: &str = "result.eta_otto";
    pub const RESULT_VE: &str = "result.ve";
    pub const RESULT_PISTON_SPEED: &str = "result.piston_speed";

    pub const SWEEP_HEADING: &str = "sweep.heading";
    pub const PROMPT_SWEEP_STEP: &str = "sweep.prompt_step";
    pub const SWEEP_TABLE_HEADER: &str = "sweep.table_header";

    pub const FUELS_HEADING: &str = "fuels.heading";
    pub const FUELS_TABLE_HEADER: &str = "fuels.table_header";

    pub const ISA_HEADING: &str = "isa.heading";
    pub const ISA_RESULT_DENSITY: &str = "isa.result_density";
    pub const ISA_RESULT_PRESSURE: &str = "isa.result_pressure";
    pub const ISA_RESULT_STD_TEMP: &str = "isa.result_std_temp";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_CURRENT_MAPS: &str = "settings.current_maps";
    pub const SETTINGS_PROMPT_MAPS: &str = "settings.prompt_maps";

    pub const GUI_PANEL_GEOMETRY: &str = "gui.panel_geometry";
    pub const GUI_PANEL_OPERATING: &str = "gui.panel_operating";
    pub const GUI_PANEL_AMBIENT: &str = "gui.panel_ambient";
    pub const GUI_PANEL_FUEL: &str = "gui.panel_fuel";
    pub const GUI_PANEL_METRICS: &str = "gui.panel_metrics";
    pub const GUI_PANEL_CHART: &str = "gui.panel_chart";
    pub const GUI_LOAD_MAPS: &str = "gui.load_maps";
    pub const GUI_CLEAR_MAPS: &str = "gui.clear_maps";
    pub const GUI_AIR_DENSITY: &str = "gui.air_density";
    pub const GUI_MANIFOLD_RATIO: &str = "gui.manifold_ratio";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
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

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Engine Performance Toolbox ===",
        MAIN_MENU_PERFORMANCE => "1) 성능 계산 (단일 운전점)",
        MAIN_MENU_SWEEP => "2) RPM 스윕 테이블",
        MAIN_MENU_FUELS => "3) 연료 물성 테이블",
        MAIN_MENU_ISA => "4) 고도별 공기 밀도 (ISA)",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PERF_HEADING => "\n-- 성능 계산 --",
        PERF_NOTE_DEFAULTS => "참고: 엔터만 누르면 괄호 안의 기본값을 사용합니다.",
        PROMPT_NUM_CYLINDERS => "실린더 수",
        PROMPT_BORE => "보어 [mm]",
        PROMPT_STROKE => "스트로크 [mm]",
        PROMPT_COMPRESSION_RATIO => "압축비",
        PROMPT_RPM => "엔진 회전수 [RPM]",
        PROMPT_REDLINE => "레드라인 [RPM]",
        PROMPT_BSFC => "명목 BSFC [g/kWh]",
        PROMPT_AFR => "공연비 (AFR)",
        PROMPT_FUEL => "연료 (Gasoline/Diesel/E85)",
        PROMPT_ALTITUDE => "고도 [m]",
        PROMPT_AMBIENT_TEMP => "외기 온도",
        PROMPT_BOOST => "부스트압 [kPa(g)]",
        PROMPT_THROTTLE => "스로틀 [%]",
        NOTE_MAPS_ACTIVE => "외부 VE/BSFC 테이블을 사용합니다:",
        NOTE_MAPS_FALLBACK => "외부 테이블이 없거나 읽지 못해 내장 곡선을 사용합니다.",
        RESULT_HEADING => "\n== 계산 결과 ==",
        RESULT_DISPLACEMENT => "배기량",
        RESULT_AIR_FLOW => "공기 질량 유량",
        RESULT_FUEL_MASS_FLOW => "연료 질량 유량",
        RESULT_FUEL_VOL_FLOW => "연료 체적 유량",
        RESULT_BRAKE_POWER => "제동 동력",
        RESULT_INDICATED_POWER => "도시 동력",
        RESULT_TORQUE => "토크",
        RESULT_BMEP => "BMEP",
        RESULT_IMEP => "IMEP",
        RESULT_FMEP => "FMEP",
        RESULT_BSFC_EFF => "유효 BSFC",
        RESULT_ETA_MECH => "기계효율",
        RESULT_ETA_BRAKE_THERMAL => "제동 열효율",
        RESULT_ETA_OTTO => "오토 사이클 이상효율",
        RESULT_VE => "체적효율",
        RESULT_PISTON_SPEED => "평균 피스톤 속도",
        SWEEP_HEADING => "\n-- RPM 스윕 --",
        PROMPT_SWEEP_STEP => "스윕 간격 [RPM]",
        SWEEP_TABLE_HEADER => "     RPM |      토크 |      동력 |    BMEP |   VE[%]",
        FUELS_HEADING => "\n-- 연료 물성 --",
        FUELS_TABLE_HEADER => "코드       | LHV [MJ/kg] | 밀도 [kg/L] | 이론 AFR | 비고",
        ISA_HEADING => "\n-- 고도별 공기 밀도 (ISA) --",
        ISA_RESULT_DENSITY => "공기 밀도:",
        ISA_RESULT_PRESSURE => "대기압:",
        ISA_RESULT_STD_TEMP => "ISA 표준 기온:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 프리셋:",
        SETTINGS_UNIT_OPTIONS => "1) Metric  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다:",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어(ko)  2) English(en)  3) 자동(auto)",
        SETTINGS_CURRENT_MAPS => "현재 VE/BSFC 테이블 경로:",
        SETTINGS_PROMPT_MAPS => "새 경로(유지하려면 엔터): ",
        GUI_PANEL_GEOMETRY => "기하 제원",
        GUI_PANEL_OPERATING => "운전 조건",
        GUI_PANEL_AMBIENT => "대기/흡기 조건",
        GUI_PANEL_FUEL => "연료/효율",
        GUI_PANEL_METRICS => "성능 지표",
        GUI_PANEL_CHART => "토크/동력 곡선",
        GUI_LOAD_MAPS => "VE/BSFC 테이블 불러오기…",
        GUI_CLEAR_MAPS => "테이블 해제 (내장 곡선)",
        GUI_AIR_DENSITY => "공기 밀도",
        GUI_MANIFOLD_RATIO => "매니폴드 압력비",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Engine Performance Toolbox ===",
        MAIN_MENU_PERFORMANCE => "1) Performance (single operating point)",
        MAIN_MENU_SWEEP => "2) RPM sweep table",
        MAIN_MENU_FUELS => "3) Fuel property table",
        MAIN_MENU_ISA => "4) Air density vs altitude (ISA)",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PERF_HEADING => "\n-- Performance --",
        PERF_NOTE_DEFAULTS => "Note: press enter to accept the default in parentheses.",
        PROMPT_NUM_CYLINDERS => "Number of cylinders",
        PROMPT_BORE => "Bore [mm]",
        PROMPT_STROKE => "Stroke [mm]",
        PROMPT_COMPRESSION_RATIO => "Compression ratio",
        PROMPT_RPM => "Engine speed [RPM]",
        PROMPT_REDLINE => "Redline [RPM]",
        PROMPT_BSFC => "Nominal BSFC [g/kWh]",
        PROMPT_AFR => "Air-fuel ratio (AFR)",
        PROMPT_FUEL => "Fuel (Gasoline/Diesel/E85)",
        PROMPT_ALTITUDE => "Altitude [m]",
        PROMPT_AMBIENT_TEMP => "Ambient temperature",
        PROMPT_BOOST => "Boost pressure [kPa(g)]",
        PROMPT_THROTTLE => "Throttle [%]",
        NOTE_MAPS_ACTIVE => "Using external VE/BSFC table:",
        NOTE_MAPS_FALLBACK => "No usable external table; using built-in curves.",
        RESULT_HEADING => "\n== Results ==",
        RESULT_DISPLACEMENT => "Displacement",
        RESULT_AIR_FLOW => "Air mass flow",
        RESULT_FUEL_MASS_FLOW => "Fuel mass flow",
        RESULT_FUEL_VOL_FLOW => "Fuel volume flow",
        RESULT_BRAKE_POWER => "Brake power",
        RESULT_INDICATED_POWER => "Indicated power",
        RESULT_TORQUE => "Torque",
        RESULT_BMEP => "BMEP",
        RESULT_IMEP => "IMEP",
        RESULT_FMEP => "FMEP",
        RESULT_BSFC_EFF => "Effective BSFC",
        RESULT_ETA_MECH => "Mechanical efficiency",
        RESULT_ETA_BRAKE_THERMAL => "Brake thermal efficiency",
        RESULT_ETA_OTTO => "Otto-cycle ideal efficiency",
        RESULT_VE => "Volumetric efficiency",
        RESULT_PISTON_SPEED => "Mean piston speed",
        SWEEP_HEADING => "\n-- RPM sweep --",
        PROMPT_SWEEP_STEP => "Sweep step [RPM]",
        SWEEP_TABLE_HEADER => "     RPM |    Torque |     Power |    BMEP |   VE[%]",
        FUELS_HEADING => "\n-- Fuel properties --",
        FUELS_TABLE_HEADER => "Code       | LHV [MJ/kg] | Dens [kg/L] | Stoich AFR | Notes",
        ISA_HEADING => "\n-- Air density vs altitude (ISA) --",
        ISA_RESULT_DENSITY => "Air density:",
        ISA_RESULT_PRESSURE => "Ambient pressure:",
        ISA_RESULT_STD_TEMP => "ISA standard temperature:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit preset:",
        SETTINGS_UNIT_OPTIONS => "1) Metric  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings changed:",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) Korean(ko)  2) English(en)  3) auto",
        SETTINGS_CURRENT_MAPS => "Current VE/BSFC table path:",
        SETTINGS_PROMPT_MAPS => "New path (enter to keep): ",
        GUI_PANEL_GEOMETRY => "Geometry",
        GUI_PANEL_OPERATING => "Operating point",
        GUI_PANEL_AMBIENT => "Ambient / intake",
        GUI_PANEL_FUEL => "Fuel & efficiency",
        GUI_PANEL_METRICS => "Performance metrics",
        GUI_PANEL_CHART => "Torque / power curves",
        GUI_LOAD_MAPS => "Load VE/BSFC table…",
        GUI_CLEAR_MAPS => "Clear table (built-in curves)",
        GUI_AIR_DENSITY => "Air density",
        GUI_MANIFOLD_RATIO => "Manifold pressure ratio",
        _ => return None,
    })
}
