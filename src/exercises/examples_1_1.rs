//! 1장 예제 문제 1~6. 답안 없이 문제만 수록한다.

use super::{lookup, Entry, ExerciseError};

pub const QUESTION_1: &str = "A fluid has a mass of 250 kg and occupies a volume of 0.2 m^3. \
    (a) Determine the density of the fluid. \
    (b) Determine its specific weight.";

pub const QUESTION_2: &str = "The density of an oil is 850 kg/m^3. \
    Determine the specific gravity of the oil.";

pub const QUESTION_3: &str =
    "A fluid has a dynamic viscosity of 0.9 Ns/m^2 and a density of 900 kg/m^3. \
    Determine the kinematic viscosity of the fluid.";

pub const QUESTION_4: &str = "The velocity gradient between two parallel fluid layers is 40 s^-1. \
    If the dynamic viscosity is 0.8 Ns/m^2, determine the shear stress.";

pub const QUESTION_5: &str =
    "Determine the capillary rise in a glass tube of 2 mm diameter when water flows through it. \
    Take surface tension = 0.072 N/m, contact angle = 0 degrees, \
    and density of water = 1000 kg/m^3.";

pub const QUESTION_6: &str = "The local pressure at a point in a flowing fluid is 2.5 kPa. \
    The vapor pressure of the fluid is 3 kPa. \
    Determine whether cavitation will occur.";

pub const QUESTIONS: [Entry; 6] = [
    (1, QUESTION_1),
    (2, QUESTION_2),
    (3, QUESTION_3),
    (4, QUESTION_4),
    (5, QUESTION_5),
    (6, QUESTION_6),
];

/// 예제 문제를 번호(1~6)로 조회한다.
pub fn question(number: u32) -> Result<&'static str, ExerciseError> {
    lookup(&QUESTIONS, number)
}
