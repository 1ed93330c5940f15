//! Exercise 1.1 (예제 문제) 와 Exercise 1.2 (수치 문제) 의 질문과 답안.

use super::{lookup, Entry, ExerciseError};

pub const EXERCISE_1_1: [Entry; 6] = [
    (
        1,
        "Determine the mass density of an oil, if 3.00 tonnes of the oil occupies a volume of 4 m^3.",
    ),
    (
        2,
        "A certain liquid, occupying a volume of 1.6 m^3, weighs 12.8 kN. \
        What is the specific weight of the liquid?",
    ),
    (
        3,
        "A container of volume 3.0 m^3 has 25.5 kN of an oil. \
        Find the specific weight and mass density of the oil.",
    ),
    (
        4,
        "What is the specific gravity of a liquid, whose specific weight is 7.36 kN/m^3?",
    ),
    (
        5,
        "A drum of 1 m^3 volume contains 8.5 kN an oil when full. \
        Find its specific weight and specific gravity.",
    ),
    (
        6,
        "A 5 mm diameter glass tube is immersed vertically in water. \
        If the contact angle is 5°, find the capillary rise. \
        Take surface tension for the water as 0.074 N/m.",
    ),
];

pub const EXERCISE_1_1_ANSWERS: [Entry; 6] = [
    (
        1,
        "Mass density = 3.0 tonnes / 4 m^3 = 3000 kg / 4 m^3 = 750 kg/m^3.",
    ),
    (
        2,
        "Specific weight = weight / volume = 12.8 kN / 1.6 m^3 = 8 kN/m^3.",
    ),
    (
        3,
        "Specific weight = 25.5 kN / 3.0 m^3 = 8.5 kN/m^3. \
        Mass density = specific_weight / g = 8500 N/m^3 / 9.81 m/s^2 ≈ 866 kg/m^3.",
    ),
    (
        4,
        "Specific gravity = specific_weight / (rho_water * g) = 7360 N/m^3 / 9810 N/m^3 = 0.75.",
    ),
    (
        5,
        "Specific weight = 8.5 kN / 1 m^3 = 8.5 kN/m^3. \
        Specific gravity = 8500 / 9810 ≈ 0.866.",
    ),
    (
        6,
        "Capillary rise h = 4 * sigma * cos(alpha) / (rho * g * d). \
        Using sigma=0.074 N/m, alpha=5°, rho=1000 kg/m^3, d=5e-3 m: \
        h ≈ 6.0e-3 m = 6 mm.",
    ),
];

pub const EXERCISE_1_2: [Entry; 5] = [
    (
        1,
        "The mass density of a liquid is 850 kg/m^3. Determine its specific weight \
        and specific gravity. Take g = 9.81 m/s^2.",
    ),
    (
        2,
        "A liquid has a bulk modulus of elasticity of 2.1 GPa. Determine the \
        change in pressure required to produce a volumetric strain of 0.1%.",
    ),
    (
        3,
        "The volume of a liquid decreases by 0.02% when the pressure is increased \
        by 4 MPa. Determine the bulk modulus of the liquid.",
    ),
    (
        4,
        "Determine the capillary rise in a glass tube of 4 mm diameter when \
        immersed in water. Take surface tension = 0.072 N/m, contact angle = 0°, \
        and density of water = 1000 kg/m^3.",
    ),
    (
        5,
        "A liquid weighs 9 kN/m^3. Determine its mass density and specific gravity.",
    ),
];

pub const EXERCISE_1_2_ANSWERS: [Entry; 5] = [
    (
        1,
        "Specific weight = ρ g = 850 × 9.81 = 8338.5 N/m^3 ≈ 8.34 kN/m^3. \
        Specific gravity = ρ / ρ_water = 850 / 1000 = 0.85.",
    ),
    (
        2,
        "Bulk modulus K = Δp / (ΔV / V). \
        ΔV / V = 0.1% = 0.001. \
        Δp = K × (ΔV / V) = 2.1×10^9 × 0.001 = 2.1×10^6 Pa = 2.1 MPa.",
    ),
    (
        3,
        "Bulk modulus K = Δp / (ΔV / V). \
        ΔV / V = 0.02% = 0.0002. \
        K = 4×10^6 / 0.0002 = 2.0×10^10 Pa = 20 GPa.",
    ),
    (
        4,
        "Capillary rise h = 4 σ cosθ / (ρ g d). \
        h = (4 × 0.072 × cos0°) / (1000 × 9.81 × 0.004) \
        ≈ 7.34×10^-3 m = 7.34 mm.",
    ),
    (
        5,
        "Mass density ρ = γ / g = 9000 / 9.81 ≈ 917 kg/m^3. \
        Specific gravity = ρ / 1000 ≈ 0.917.",
    ),
];

/// Exercise 1.1 문제(1~6)
pub fn question(number: u32) -> Result<&'static str, ExerciseError> {
    lookup(&EXERCISE_1_1, number)
}

/// Exercise 1.1 답안(1~6)
pub fn answer(number: u32) -> Result<&'static str, ExerciseError> {
    lookup(&EXERCISE_1_1_ANSWERS, number)
}

/// Exercise 1.2 문제(1~5)
pub fn exercise_1_2_question(number: u32) -> Result<&'static str, ExerciseError> {
    lookup(&EXERCISE_1_2, number)
}

/// Exercise 1.2 답안(1~5)
pub fn exercise_1_2_answer(number: u32) -> Result<&'static str, ExerciseError> {
    lookup(&EXERCISE_1_2_ANSWERS, number)
}
