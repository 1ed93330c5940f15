//! 교재 연습문제 질문/답안 문자열 테이블.
//! Khurmi & Gupta, Hydraulics, Fluid Mechanics and Hydraulic Machines 1장(Properties of Fluids).

pub mod chapter_1;
pub mod examples_1_1;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 문제 번호로 조회되는 정적 테이블 항목.
pub type Entry = (u32, &'static str);

/// 연습문제 조회 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    /// 테이블에 없는 문제 번호
    #[error("문제 번호는 1부터 {max} 사이여야 합니다 (입력 {number})")]
    UnknownQuestion { number: u32, max: u32 },
    /// 답안이 수록되지 않은 문제집
    #[error("{0} 에는 답안이 수록되어 있지 않습니다")]
    NoAnswers(ExerciseSet),
    /// 알 수 없는 문제집 이름
    #[error("알 수 없는 문제집: {0}")]
    UnknownSet(String),
}

/// 테이블에서 번호에 해당하는 문자열을 찾는다.
pub(crate) fn lookup(table: &[Entry], number: u32) -> Result<&'static str, ExerciseError> {
    table
        .iter()
        .find(|(n, _)| *n == number)
        .map(|(_, text)| *text)
        .ok_or(ExerciseError::UnknownQuestion {
            number,
            max: table.len() as u32,
        })
}

/// CLI 에서 선택 가능한 문제집.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseSet {
    /// 1장 예제 1~6
    Examples1_1,
    /// Exercise 1.1 (문제 1~6, 답안 포함)
    Exercise1_1,
    /// Exercise 1.2 수치 문제 (문제 1~5, 답안 포함)
    Exercise1_2,
}

impl ExerciseSet {
    pub const ALL: [ExerciseSet; 3] = [
        ExerciseSet::Examples1_1,
        ExerciseSet::Exercise1_1,
        ExerciseSet::Exercise1_2,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExerciseSet::Examples1_1 => "examples-1.1",
            ExerciseSet::Exercise1_1 => "exercise-1.1",
            ExerciseSet::Exercise1_2 => "exercise-1.2",
        }
    }

    fn questions(&self) -> &'static [Entry] {
        match self {
            ExerciseSet::Examples1_1 => &examples_1_1::QUESTIONS,
            ExerciseSet::Exercise1_1 => &chapter_1::EXERCISE_1_1,
            ExerciseSet::Exercise1_2 => &chapter_1::EXERCISE_1_2,
        }
    }

    fn answers(&self) -> Option<&'static [Entry]> {
        match self {
            ExerciseSet::Examples1_1 => None,
            ExerciseSet::Exercise1_1 => Some(&chapter_1::EXERCISE_1_1_ANSWERS),
            ExerciseSet::Exercise1_2 => Some(&chapter_1::EXERCISE_1_2_ANSWERS),
        }
    }

    /// 문제 수
    pub fn len(&self) -> usize {
        self.questions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions().is_empty()
    }

    pub fn question(&self, number: u32) -> Result<&'static str, ExerciseError> {
        lookup(self.questions(), number)
    }

    pub fn answer(&self, number: u32) -> Result<&'static str, ExerciseError> {
        let table = self.answers().ok_or(ExerciseError::NoAnswers(*self))?;
        lookup(table, number)
    }
}

impl fmt::Display for ExerciseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ExerciseSet {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "examples-1.1" | "examples" | "ex" => Ok(ExerciseSet::Examples1_1),
            "exercise-1.1" | "1.1" => Ok(ExerciseSet::Exercise1_1),
            "exercise-1.2" | "1.2" => Ok(ExerciseSet::Exercise1_2),
            _ => Err(ExerciseError::UnknownSet(s.to_string())),
        }
    }
}
