use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_FLUID_PROPERTIES: &str = "main_menu.fluid_properties";
    pub const MAIN_MENU_SURFACE: &str = "main_menu.surface";
    pub const MAIN_MENU_POROSITY: &str = "main_menu.porosity";
    pub const MAIN_MENU_WETTABILITY: &str = "main_menu.wettability";
    pub const MAIN_MENU_CAPILLARY: &str = "main_menu.capillary";
    pub const MAIN_MENU_VERTICAL: &str = "main_menu.vertical";
    pub const MAIN_MENU_DARCY: &str = "main_menu.darcy";
    pub const MAIN_MENU_EXERCISES: &str = "main_menu.exercises";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const FLUID_HEADING: &str = "fluid.heading";
    pub const FLUID_OPTIONS: &str = "fluid.options";
    pub const SURFACE_HEADING: &str = "surface.heading";
    pub const SURFACE_OPTIONS: &str = "surface.options";
    pub const POROSITY_HEADING: &str = "porosity.heading";
    pub const POROSITY_OPTIONS: &str = "porosity.options";
    pub const WETTABILITY_HEADING: &str = "wettability.heading";
    pub const WETTABILITY_OPTIONS: &str = "wettability.options";
    pub const CAPILLARY_HEADING: &str = "capillary.heading";
    pub const CAPILLARY_OPTIONS: &str = "capillary.options";
    pub const VERTICAL_HEADING: &str = "vertical.heading";
    pub const VERTICAL_OPTIONS: &str = "vertical.options";
    pub const DARCY_HEADING: &str = "darcy.heading";
    pub const DARCY_OPTIONS: &str = "darcy.options";

    pub const PROMPT_PHASE_NAME: &str = "prompt.phase_name";
    pub const ERROR_DUPLICATE_PHASE: &str = "error.duplicate_phase";
    pub const PROMPT_LAYER_COUNT: &str = "prompt.layer_count";
    pub const PROMPT_SECOND_RADIUS: &str = "prompt.second_radius";

    pub const RESULT: &str = "result.value";
    pub const RESULT_CAVITATION_YES: &str = "result.cavitation_yes";
    pub const RESULT_CAVITATION_NO: &str = "result.cavitation_no";

    pub const EXERCISES_HEADING: &str = "exercises.heading";
    pub const EXERCISES_OPTIONS: &str = "exercises.options";
    pub const PROMPT_QUESTION_NUMBER: &str = "prompt.question_number";
    pub const EXERCISE_QUESTION: &str = "exercises.question";
    pub const EXERCISE_ANSWER: &str = "exercises.answer";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_CURRENT_GRAVITY: &str = "settings.current_gravity";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_GRAVITY: &str = "settings.prompt_gravity";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
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
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if overrides.is_some() {
            log::debug!("언어팩 로드: {lang_code}");
        }
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

    /// 번역을 가져온다. 언어팩 → 내장 언어 → 한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
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
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵(테이블 중첩 허용).
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
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

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Fluid Mechanics Toolbox ===",
        MAIN_MENU_FLUID_PROPERTIES => "1) 유체의 성질",
        MAIN_MENU_SURFACE => "2) 표면장력·모세관 현상",
        MAIN_MENU_POROSITY => "3) 공극률·포화도",
        MAIN_MENU_WETTABILITY => "4) 젖음성",
        MAIN_MENU_CAPILLARY => "5) 모세관압·Leverett J",
        MAIN_MENU_VERTICAL => "6) 수직 평형",
        MAIN_MENU_DARCY => "7) Darcy 유동·등가 투수계수",
        MAIN_MENU_EXERCISES => "8) 연습문제",
        MAIN_MENU_UNIT_CONVERSION => "9) 단위 변환기",
        MAIN_MENU_SETTINGS => "10) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION => "잘못된 선택입니다.",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        FLUID_HEADING => "\n-- 유체의 성질 --",
        FLUID_OPTIONS => "1) 밀도  2) 비중량  3) 비중  4) 동점성계수  5) 전단응력  6) 체적탄성계수",
        SURFACE_HEADING => "\n-- 표면장력·모세관 현상 --",
        SURFACE_OPTIONS => "1) 액적 압력  2) 비누방울 압력  3) 액체 제트 압력  4) 모세관 상승  5) 공동현상 판정",
        POROSITY_HEADING => "\n-- 공극률·포화도 --",
        POROSITY_OPTIONS => {
            "1) 공극률(공극 체적)  2) 공극률(고체 체적)  3) 압력 의존 공극률  4) 공극 압축률  5) 포화도  6) 포화도 합"
        }
        WETTABILITY_HEADING => "\n-- 젖음성 --",
        WETTABILITY_OPTIONS => "1) 접촉각 분류  2) Amott/Amott-Harvey 지수  3) USBM 지수",
        CAPILLARY_HEADING => "\n-- 모세관압 --",
        CAPILLARY_OPTIONS => "1) Laplace 모세관압  2) 실험실→저류층 환산  3) Leverett J 함수",
        VERTICAL_HEADING => "\n-- 수직 평형 --",
        VERTICAL_OPTIONS => "1) Pc → 높이  2) 높이 → Pc",
        DARCY_HEADING => "\n-- Darcy 유동·등가 투수계수 --",
        DARCY_OPTIONS => {
            "1) Darcy 속도  2) Darcy 유량  3) 투수계수 역산  4) 직렬 등가 투수계수  5) 병렬 등가 투수계수"
        }
        PROMPT_PHASE_NAME => "상 이름 (입력 종료는 엔터): ",
        ERROR_DUPLICATE_PHASE => "이미 입력한 상입니다. 다른 이름을 입력하세요:",
        PROMPT_LAYER_COUNT => "층 개수: ",
        PROMPT_SECOND_RADIUS => "두 번째 곡률 반경 r2 [m] (없으면 엔터): ",
        RESULT => "결과:",
        RESULT_CAVITATION_YES => "공동현상 위험: 국부 압력이 증기압 이하입니다.",
        RESULT_CAVITATION_NO => "공동현상 위험 없음.",
        EXERCISES_HEADING => "\n-- 연습문제 --",
        EXERCISES_OPTIONS => "1) 1장 예제  2) Exercise 1.1  3) Exercise 1.2",
        PROMPT_QUESTION_NUMBER => "문제 번호: ",
        EXERCISE_QUESTION => "문제:",
        EXERCISE_ANSWER => "답안:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 압력  2) 길이  3) 면적  4) 체적  5) 질량  6) 점도  7) 밀도  8) 투수계수",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: kPa, um, cP, mD): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: psi, m, Pa.s, m2): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_CURRENT_GRAVITY => "현재 중력가속도 [m/s²]:",
        SETTINGS_OPTIONS => "1) SI  2) Laboratory  3) Field",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_GRAVITY => "중력가속도 [m/s²] (유지하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Fluid Mechanics Toolbox ===",
        MAIN_MENU_FLUID_PROPERTIES => "1) Fluid properties",
        MAIN_MENU_SURFACE => "2) Surface tension & capillarity",
        MAIN_MENU_POROSITY => "3) Porosity & saturation",
        MAIN_MENU_WETTABILITY => "4) Wettability",
        MAIN_MENU_CAPILLARY => "5) Capillary pressure & Leverett J",
        MAIN_MENU_VERTICAL => "6) Vertical equilibrium",
        MAIN_MENU_DARCY => "7) Darcy flow & equivalent permeability",
        MAIN_MENU_EXERCISES => "8) Exercises",
        MAIN_MENU_UNIT_CONVERSION => "9) Unit converter",
        MAIN_MENU_SETTINGS => "10) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION => "Invalid selection.",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        FLUID_HEADING => "\n-- Fluid Properties --",
        FLUID_OPTIONS => {
            "1) Density  2) Specific weight  3) Specific gravity  4) Kinematic viscosity  5) Shear stress  6) Bulk modulus"
        }
        SURFACE_HEADING => "\n-- Surface Tension & Capillarity --",
        SURFACE_OPTIONS => {
            "1) Droplet pressure  2) Soap bubble pressure  3) Liquid jet pressure  4) Capillary rise  5) Cavitation check"
        }
        POROSITY_HEADING => "\n-- Porosity & Saturation --",
        POROSITY_OPTIONS => {
            "1) Porosity (pore volume)  2) Porosity (solid volume)  3) Pressure-dependent porosity  4) Pore compressibility  5) Saturation  6) Saturation sum"
        }
        WETTABILITY_HEADING => "\n-- Wettability --",
        WETTABILITY_OPTIONS => "1) Contact-angle class  2) Amott/Amott-Harvey indices  3) USBM index",
        CAPILLARY_HEADING => "\n-- Capillary Pressure --",
        CAPILLARY_OPTIONS => "1) Laplace capillary pressure  2) Lab → reservoir conversion  3) Leverett J-function",
        VERTICAL_HEADING => "\n-- Vertical Equilibrium --",
        VERTICAL_OPTIONS => "1) Pc → height  2) Height → Pc",
        DARCY_HEADING => "\n-- Darcy Flow & Equivalent Permeability --",
        DARCY_OPTIONS => {
            "1) Darcy velocity  2) Darcy flow rate  3) Permeability from flow  4) Series permeability  5) Parallel permeability"
        }
        PROMPT_PHASE_NAME => "Phase name (enter to finish): ",
        ERROR_DUPLICATE_PHASE => "Phase already entered; choose another name:",
        PROMPT_LAYER_COUNT => "Number of layers: ",
        PROMPT_SECOND_RADIUS => "Second radius r2 [m] (enter if none): ",
        RESULT => "Result:",
        RESULT_CAVITATION_YES => "Cavitation risk: local pressure is at or below vapour pressure.",
        RESULT_CAVITATION_NO => "No cavitation risk.",
        EXERCISES_HEADING => "\n-- Exercises --",
        EXERCISES_OPTIONS => "1) Chapter 1 examples  2) Exercise 1.1  3) Exercise 1.2",
        PROMPT_QUESTION_NUMBER => "Question number: ",
        EXERCISE_QUESTION => "Question:",
        EXERCISE_ANSWER => "Answer:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Pressure  2) Length  3) Area  4) Volume  5) Mass  6) Viscosity  7) Density  8) Permeability"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: kPa, um, cP, mD): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: psi, m, Pa.s, m2): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_CURRENT_GRAVITY => "Current gravity [m/s²]:",
        SETTINGS_OPTIONS => "1) SI  2) Laboratory  3) Field",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_GRAVITY => "Gravity [m/s²] (enter to keep): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_korean_for_unknown_key() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn nested_toml_pack_is_flattened() {
        let map = parse_toml_to_map("[main_menu]\ntitle = \"T\"\n").expect("map");
        assert_eq!(map.get("main_menu.title").map(String::as_str), Some("T"));
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-GB")), "en");
    }
}
