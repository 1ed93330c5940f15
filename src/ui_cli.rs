use std::collections::HashMap;
use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{self, Config, UnitSystem};
use crate::conversion;
use crate::exercises::ExerciseSet;
use crate::fluids;
use crate::i18n::{keys, Translator};
use crate::porous_media;
use crate::quantity::QuantityKind;
use crate::units::{convert_length, convert_permeability, convert_pressure};
use crate::units::{LengthUnit, PermeabilityUnit, PressureUnit};

/// 직렬/병렬 등가 투수계수 계산에서 한 번에 입력받는 최대 층 수
pub const MAX_LAYERS: usize = 100;

/// 층 개수 입력을 해석한다. 1..=`MAX_LAYERS` 밖이면 `None`.
pub fn parse_layer_count(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_LAYERS).contains(n))
}

/// 문제 번호 입력을 해석한다. 1 이상의 정수만 받는다.
pub fn parse_question_number(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&n| n >= 1)
}

/// 포화도 합 메뉴에서 상 이름 한 줄을 읽은 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseInput {
    /// 빈 줄: 입력 종료
    Done,
    New(String),
    /// 이미 입력된 상 이름
    Duplicate(String),
}

/// 상 이름 입력을 해석한다. 이미 있는 이름은 덮어쓰지 않도록 `Duplicate` 로 돌려준다.
pub fn parse_phase_name(input: &str, entered: &HashMap<String, f64>) -> PhaseInput {
    let name = input.trim();
    if name.is_empty() {
        PhaseInput::Done
    } else if entered.contains_key(name) {
        PhaseInput::Duplicate(name.to_string())
    } else {
        PhaseInput::New(name.to_string())
    }
}

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FluidProperties,
    Surface,
    Porosity,
    Wettability,
    Capillary,
    VerticalEquilibrium,
    Darcy,
    Exercises,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_FLUID_PROPERTIES,
        keys::MAIN_MENU_SURFACE,
        keys::MAIN_MENU_POROSITY,
        keys::MAIN_MENU_WETTABILITY,
        keys::MAIN_MENU_CAPILLARY,
        keys::MAIN_MENU_VERTICAL,
        keys::MAIN_MENU_DARCY,
        keys::MAIN_MENU_EXERCISES,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::FluidProperties),
            "2" => return Ok(MenuChoice::Surface),
            "3" => return Ok(MenuChoice::Porosity),
            "4" => return Ok(MenuChoice::Wettability),
            "5" => return Ok(MenuChoice::Capillary),
            "6" => return Ok(MenuChoice::VerticalEquilibrium),
            "7" => return Ok(MenuChoice::Darcy),
            "8" => return Ok(MenuChoice::Exercises),
            "9" => return Ok(MenuChoice::UnitConversion),
            "10" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 유체의 기본 성질 메뉴를 처리한다.
pub fn handle_fluid_properties(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FLUID_HEADING));
    println!("{}", tr.t(keys::FLUID_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let g = cfg.gravity_m_s2;
    match sel.trim() {
        "1" => {
            let m = read_f64(tr, "m [kg]: ")?;
            let v = read_f64(tr, "V [m3]: ")?;
            print_value(tr, "ρ", fluids::density(m, v)?, "kg/m³");
        }
        "2" => {
            let rho = read_f64(tr, "ρ [kg/m3]: ")?;
            print_value(tr, "w", fluids::specific_weight(rho, g), "N/m³");
        }
        "3" => {
            let rho = read_f64(tr, "ρ [kg/m3]: ")?;
            print_value(tr, "S", fluids::specific_gravity(rho), "-");
        }
        "4" => {
            let mu = read_f64(tr, "μ [Pa·s]: ")?;
            let rho = read_f64(tr, "ρ [kg/m3]: ")?;
            print_value(tr, "ν", fluids::kinematic_viscosity(mu, rho)?, "m²/s");
        }
        "5" => {
            let mu = read_f64(tr, "μ [Pa·s]: ")?;
            let du_dy = read_f64(tr, "du/dy [1/s]: ")?;
            print_value(tr, "τ", fluids::shear_stress(mu, du_dy), "Pa");
        }
        "6" => {
            let dp = read_f64(tr, "Δp [Pa]: ")?;
            let strain = read_f64(tr, "ΔV/V [-]: ")?;
            print_pressure(tr, cfg, "K", fluids::bulk_modulus(dp, strain)?);
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 표면장력·모세관 현상 메뉴를 처리한다.
pub fn handle_surface(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SURFACE_HEADING));
    println!("{}", tr.t(keys::SURFACE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        choice @ ("1" | "2" | "3") => {
            let sigma = read_f64(tr, "σ [N/m]: ")?;
            let r = read_f64(tr, "r [m]: ")?;
            let dp = match choice {
                "1" => fluids::pressure_due_to_surface_tension(sigma, r)?,
                "2" => fluids::soap_bubble_pressure(sigma, r)?,
                _ => fluids::liquid_jet_pressure(sigma, r)?,
            };
            print_pressure(tr, cfg, "Δp", dp);
        }
        "4" => {
            let sigma = read_f64(tr, "σ [N/m]: ")?;
            let theta = read_f64(tr, "θ [deg]: ")?;
            let rho = read_f64(tr, "ρ [kg/m3]: ")?;
            let d = read_f64(tr, "d [m]: ")?;
            let h = fluids::capillary_rise(sigma, theta, rho, d, cfg.gravity_m_s2)?;
            print_length(tr, cfg, "h", h);
        }
        "5" => {
            let p = read_f64(tr, "p [Pa]: ")?;
            let pv = read_f64(tr, "pv [Pa]: ")?;
            if fluids::cavitation_risk(p, pv) {
                println!("{}", tr.t(keys::RESULT_CAVITATION_YES));
            } else {
                println!("{}", tr.t(keys::RESULT_CAVITATION_NO));
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 공극률·포화도 메뉴를 처리한다.
pub fn handle_porosity(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POROSITY_HEADING));
    println!("{}", tr.t(keys::POROSITY_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let vp = read_f64(tr, "Vp [m3]: ")?;
            let vt = read_f64(tr, "VT [m3]: ")?;
            print_value(tr, "φ", porous_media::porosity(vp, vt)?, "-");
        }
        "2" => {
            let vs = read_f64(tr, "Vs [m3]: ")?;
            let vt = read_f64(tr, "VT [m3]: ")?;
            print_value(tr, "φ", porous_media::porosity_from_solid_volume(vs, vt)?, "-");
        }
        "3" => {
            let phi0 = read_f64(tr, "φ0 [-]: ")?;
            let c_phi = read_f64(tr, "cφ [1/Pa]: ")?;
            let p = read_f64(tr, "p [Pa]: ")?;
            let p0 = read_f64(tr, "p0 [Pa]: ")?;
            let phi = porous_media::porosity_pressure_dependence(phi0, c_phi, p, p0);
            print_value(tr, "φ", phi, "-");
        }
        "4" => {
            let dphi_dp = read_f64(tr, "∂φ/∂p [1/Pa]: ")?;
            let phi = read_f64(tr, "φ [-]: ")?;
            print_value(tr, "cφ", porous_media::pore_compressibility(dphi_dp, phi)?, "1/Pa");
        }
        "5" => {
            let vi = read_f64(tr, "Vi [m3]: ")?;
            let vp = read_f64(tr, "Vp [m3]: ")?;
            print_value(tr, "S", porous_media::saturation(vi, vp)?, "-");
        }
        "6" => {
            let mut saturations = HashMap::new();
            loop {
                let input = read_line(tr.t(keys::PROMPT_PHASE_NAME))?;
                match parse_phase_name(&input, &saturations) {
                    PhaseInput::Done => break,
                    PhaseInput::Duplicate(name) => {
                        println!("{} {name}", tr.t(keys::ERROR_DUPLICATE_PHASE));
                    }
                    PhaseInput::New(name) => {
                        let s = read_f64(tr, &format!("S_{name} [-]: "))?;
                        saturations.insert(name, s);
                    }
                }
            }
            print_value(tr, "ΣS", porous_media::saturation_sum(&saturations), "-");
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 젖음성 메뉴를 처리한다.
pub fn handle_wettability(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WETTABILITY_HEADING));
    println!("{}", tr.t(keys::WETTABILITY_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let theta = read_f64(tr, "θ [deg]: ")?;
            let class = porous_media::contact_angle_classification(theta);
            println!("{} {class}", tr.t(keys::RESULT));
        }
        "2" => {
            let vo1 = read_f64(tr, "VO1: ")?;
            let vo2 = read_f64(tr, "VO2: ")?;
            let vw1 = read_f64(tr, "VW1: ")?;
            let vw2 = read_f64(tr, "VW2: ")?;
            let idx = porous_media::amott_indices(vo1, vo2, vw1, vw2);
            println!(
                "{} δW = {:.4}, δO = {:.4}, WI = {:.4}",
                tr.t(keys::RESULT),
                idx.delta_water,
                idx.delta_oil,
                idx.amott_harvey_index
            );
        }
        "3" => {
            let a1 = read_f64(tr, "A1: ")?;
            let a2 = read_f64(tr, "A2: ")?;
            print_value(tr, "W", porous_media::usbm_wettability_index(a1, a2)?, "-");
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 모세관압 메뉴를 처리한다.
pub fn handle_capillary(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CAPILLARY_HEADING));
    println!("{}", tr.t(keys::CAPILLARY_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let sigma = read_f64(tr, "σ [N/m]: ")?;
            let theta = read_f64(tr, "θ [deg]: ")?;
            let r1 = read_f64(tr, "r1 [m]: ")?;
            let r2 = read_optional_f64(tr, tr.t(keys::PROMPT_SECOND_RADIUS))?;
            let pc = porous_media::capillary_pressure(sigma, theta, r1, r2);
            print_pressure(tr, cfg, "Pc", pc);
        }
        "2" => {
            let pc_lab = read_f64(tr, "PcL [Pa]: ")?;
            let sigma_lab = read_f64(tr, "σL [N/m]: ")?;
            let sigma_res = read_f64(tr, "σR [N/m]: ")?;
            let theta_lab = read_f64(tr, "θL [deg]: ")?;
            let theta_res = read_f64(tr, "θR [deg]: ")?;
            let pc_res = porous_media::capillary_pressure_conversion(
                pc_lab, sigma_lab, sigma_res, theta_lab, theta_res,
            );
            print_pressure(tr, cfg, "PcR", pc_res);
        }
        "3" => {
            let pc = read_f64(tr, "Pc [Pa]: ")?;
            let sigma = read_f64(tr, "σ [N/m]: ")?;
            let theta = read_f64(tr, "θ [deg]: ")?;
            let k = read_f64(tr, "k [m2]: ")?;
            let phi = read_f64(tr, "φ [-]: ")?;
            let j = porous_media::leverett_j_function(pc, sigma, theta, k, phi)?;
            print_value(tr, "J", j, "-");
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 수직 평형 메뉴를 처리한다.
pub fn handle_vertical_equilibrium(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::VERTICAL_HEADING));
    println!("{}", tr.t(keys::VERTICAL_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let g = cfg.gravity_m_s2;
    match sel.trim() {
        "1" => {
            let pc = read_f64(tr, "Pc [Pa]: ")?;
            let rho_w = read_f64(tr, "ρw [kg/m3]: ")?;
            let rho_nw = read_f64(tr, "ρnw [kg/m3]: ")?;
            let h = porous_media::vertical_height_from_pc(pc, rho_w, rho_nw, g)?;
            print_length(tr, cfg, "h", h);
        }
        "2" => {
            let h = read_f64(tr, "h [m]: ")?;
            let rho_w = read_f64(tr, "ρw [kg/m3]: ")?;
            let rho_nw = read_f64(tr, "ρnw [kg/m3]: ")?;
            let pc = porous_media::capillary_pressure_from_height(h, rho_w, rho_nw, g);
            print_pressure(tr, cfg, "Pc", pc);
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// Darcy 유동·등가 투수계수 메뉴를 처리한다.
pub fn handle_darcy(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DARCY_HEADING));
    println!("{}", tr.t(keys::DARCY_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let k = read_f64(tr, "k [m2]: ")?;
            let mu = read_f64(tr, "μ [Pa·s]: ")?;
            let grad = read_f64(tr, "dp/dx [Pa/m]: ")?;
            print_value(tr, "v", porous_media::darcy_velocity(k, mu, grad)?, "m/s");
        }
        "2" => {
            let k = read_f64(tr, "k [m2]: ")?;
            let mu = read_f64(tr, "μ [Pa·s]: ")?;
            let area = read_f64(tr, "A [m2]: ")?;
            let dp = read_f64(tr, "Δp [Pa]: ")?;
            let length = read_f64(tr, "L [m]: ")?;
            let q = porous_media::darcy_flow_rate(k, mu, area, dp, length)?;
            print_value(tr, "Q", q, "m³/s");
        }
        "3" => {
            let q = read_f64(tr, "Q [m3/s]: ")?;
            let mu = read_f64(tr, "μ [Pa·s]: ")?;
            let length = read_f64(tr, "L [m]: ")?;
            let area = read_f64(tr, "A [m2]: ")?;
            let dp = read_f64(tr, "Δp [Pa]: ")?;
            let k = porous_media::permeability_from_darcy(q, mu, length, area, dp)?;
            print_permeability(tr, cfg, "k", k);
        }
        choice @ ("4" | "5") => {
            let (permeabilities, extents) = read_layers(tr, choice == "4")?;
            let k_eq = if choice == "4" {
                porous_media::equivalent_permeability_series(&permeabilities, &extents)?
            } else {
                porous_media::equivalent_permeability_parallel(&permeabilities, &extents)?
            };
            print_permeability(tr, cfg, "k_eq", k_eq);
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    Ok(())
}

/// 층 수를 묻고 층별 투수계수와 길이(직렬) 또는 두께(병렬)를 입력받는다.
fn read_layers(
    tr: &Translator,
    series: bool,
) -> Result<(HashMap<String, f64>, HashMap<String, f64>), AppError> {
    let count = loop {
        let s = read_line(tr.t(keys::PROMPT_LAYER_COUNT))?;
        match parse_layer_count(&s) {
            Some(n) => break n,
            None => println!("{} (1..={MAX_LAYERS})", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    };
    let extent_label = if series { "L" } else { "t" };
    let mut permeabilities = HashMap::new();
    let mut extents = HashMap::new();
    for i in 1..=count {
        let layer = format!("L{i}");
        let k = read_f64(tr, &format!("k_{i} [m2]: "))?;
        let l = read_f64(tr, &format!("{extent_label}_{i} [m]: "))?;
        permeabilities.insert(layer.clone(), k);
        extents.insert(layer, l);
    }
    Ok((permeabilities, extents))
}

/// 연습문제 메뉴를 처리한다.
pub fn handle_exercises(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EXERCISES_HEADING));
    println!("{}", tr.t(keys::EXERCISES_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let set = match sel.trim() {
        "1" => ExerciseSet::Examples1_1,
        "2" => ExerciseSet::Exercise1_1,
        "3" => ExerciseSet::Exercise1_2,
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION));
            return Ok(());
        }
    };
    let number = loop {
        let s = read_line(tr.t(keys::PROMPT_QUESTION_NUMBER))?;
        match parse_question_number(&s) {
            Some(n) => break n,
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    };
    print_exercise(tr, set, number, true)
}

/// 문제(및 수록된 경우 답안)를 출력한다.
pub fn print_exercise(
    tr: &Translator,
    set: ExerciseSet,
    number: u32,
    with_answer: bool,
) -> Result<(), AppError> {
    println!("[{set} #{number}] {} {}", tr.t(keys::EXERCISE_QUESTION), set.question(number)?);
    if with_answer {
        match set.answer(number) {
            Ok(answer) => println!("{} {answer}", tr.t(keys::EXERCISE_ANSWER)),
            Err(err) => log::info!("{err}"),
        }
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(kind) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QuantityKind::ALL.get(i).copied())
        {
            break kind;
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result} {}", tr.t(keys::UNIT_CONVERSION_RESULT), to_unit.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_GRAVITY), cfg.gravity_m_s2);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.apply_unit_system(UnitSystem::SI),
        "2" => cfg.apply_unit_system(UnitSystem::Laboratory),
        "3" => cfg.apply_unit_system(UnitSystem::Field),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    match read_optional_f64(tr, tr.t(keys::SETTINGS_PROMPT_GRAVITY))? {
        Some(g) if config::is_valid_gravity(g) => cfg.gravity_m_s2 = g,
        Some(_) => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        None => {}
    }
    Ok(())
}

fn print_value(tr: &Translator, label: &str, value: f64, unit: &str) {
    println!("{} {label} = {value:.6e} {unit}", tr.t(keys::RESULT));
}

fn print_pressure(tr: &Translator, cfg: &Config, label: &str, value_pa: f64) {
    let unit = cfg.default_units.pressure;
    if unit == PressureUnit::Pascal {
        print_value(tr, label, value_pa, unit.symbol());
    } else {
        let shown = convert_pressure(value_pa, PressureUnit::Pascal, unit);
        println!(
            "{} {label} = {value_pa:.6e} Pa ({shown:.6e} {})",
            tr.t(keys::RESULT),
            unit.symbol()
        );
    }
}

fn print_length(tr: &Translator, cfg: &Config, label: &str, value_m: f64) {
    let unit = cfg.default_units.length;
    if unit == LengthUnit::Meter {
        print_value(tr, label, value_m, unit.symbol());
    } else {
        let shown = convert_length(value_m, LengthUnit::Meter, unit);
        println!(
            "{} {label} = {value_m:.6e} m ({shown:.6e} {})",
            tr.t(keys::RESULT),
            unit.symbol()
        );
    }
}

fn print_permeability(tr: &Translator, cfg: &Config, label: &str, value_m2: f64) {
    let unit = cfg.default_units.permeability;
    if unit == PermeabilityUnit::SquareMeter {
        print_value(tr, label, value_m2, unit.symbol());
    } else {
        let shown = convert_permeability(value_m2, PermeabilityUnit::SquareMeter, unit);
        println!(
            "{} {label} = {value_m2:.6e} m² ({shown:.4} {})",
            tr.t(keys::RESULT),
            unit.symbol()
        );
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
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

/// 빈 입력이면 `None` 을 돌려준다.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
