//! 연습문제 테이블 조회 테스트.
use fluid_mechanics_toolbox::exercises::{chapter_1, examples_1_1, ExerciseError, ExerciseSet};

#[test]
fn set_sizes() {
    assert_eq!(ExerciseSet::Examples1_1.len(), 6);
    assert_eq!(ExerciseSet::Exercise1_1.len(), 6);
    assert_eq!(ExerciseSet::Exercise1_2.len(), 5);
    assert!(ExerciseSet::ALL.iter().all(|s| !s.is_empty()));
}

#[test]
fn every_question_is_reachable() {
    for set in ExerciseSet::ALL {
        for n in 1..=set.len() as u32 {
            let text = set.question(n).expect("question");
            assert!(!text.is_empty(), "{set} #{n}");
        }
    }
}

#[test]
fn exercise_1_1_first_question_and_answer() {
    let q = chapter_1::question(1).expect("question");
    assert!(q.contains("mass density"));
    let a = chapter_1::answer(1).expect("answer");
    assert!(a.contains("750 kg/m^3"));
    assert_eq!(ExerciseSet::Exercise1_1.answer(1), Ok(a));
}

#[test]
fn exercise_1_2_answers_line_up_with_questions() {
    for n in 1..=5 {
        assert!(chapter_1::exercise_1_2_question(n).is_ok());
        assert!(chapter_1::exercise_1_2_answer(n).is_ok());
    }
}

#[test]
fn out_of_range_question_number() {
    assert_eq!(
        ExerciseSet::Exercise1_1.question(7),
        Err(ExerciseError::UnknownQuestion { number: 7, max: 6 })
    );
    assert_eq!(
        chapter_1::exercise_1_2_answer(0),
        Err(ExerciseError::UnknownQuestion { number: 0, max: 5 })
    );
    assert!(examples_1_1::question(99).is_err());
}

#[test]
fn examples_have_no_answers() {
    assert_eq!(
        ExerciseSet::Examples1_1.answer(1),
        Err(ExerciseError::NoAnswers(ExerciseSet::Examples1_1))
    );
}

#[test]
fn examples_table_matches_constants() {
    assert_eq!(examples_1_1::question(1), Ok(examples_1_1::QUESTION_1));
    assert_eq!(examples_1_1::question(6), Ok(examples_1_1::QUESTION_6));
}

#[test]
fn set_names_parse_from_cli_aliases() {
    assert_eq!("examples-1.1".parse(), Ok(ExerciseSet::Examples1_1));
    assert_eq!("1.1".parse(), Ok(ExerciseSet::Exercise1_1));
    assert_eq!(" Exercise-1.2 ".parse(), Ok(ExerciseSet::Exercise1_2));
    assert_eq!(
        "2.1".parse::<ExerciseSet>(),
        Err(ExerciseError::UnknownSet("2.1".to_string()))
    );
    for set in ExerciseSet::ALL {
        assert_eq!(set.to_string().parse(), Ok(set));
    }
}
