use serde::{Deserialize, Serialize};

use crate::*;

/// Integer percentage of correctly recalled cells, `0..=100`.
pub type Score = u8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellVerdict {
    Empty,
    Correct,
    Wrong,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub correct: CellCount,
    pub wrong: CellCount,
    pub total: CellCount,
    pub score: Score,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub const fn from_score(score: Score) -> Self {
        match score {
            90.. => Self::APlus,
            80..=89 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            _ => Self::D,
        }
    }

    pub const fn label(self) -> &'static str {
        use Grade::*;
        match self {
            APlus => "A+",
            A => "A",
            B => "B",
            C => "C",
            D => "D",
        }
    }

    pub const fn message(self) -> &'static str {
        use Grade::*;
        match self {
            APlus => "Perfect recall!",
            A => "Excellent!",
            B => "Good!",
            C => "Passed!",
            D => "Needs more practice!",
        }
    }
}

pub struct ScoreEvaluator;

impl ScoreEvaluator {
    /// Grades one answer against the number it should recall.
    pub fn is_correct(number: u8, answer: &str) -> bool {
        answer.parse::<u32>().ok() == Some(number.into())
    }

    pub fn verdict(numbers: &NumberGrid, answers: &AnswerGrid, coords: Coord2) -> CellVerdict {
        let answer = answers.cell_at(coords);
        if answer.is_empty() {
            CellVerdict::Empty
        } else if Self::is_correct(numbers[coords], answer) {
            CellVerdict::Correct
        } else {
            CellVerdict::Wrong
        }
    }

    pub fn report(numbers: &NumberGrid, answers: &AnswerGrid) -> ScoreReport {
        let total = numbers.total_cells();
        let correct = iter_coords(numbers.size())
            .filter(|&coords| {
                answers
                    .validate_coords(coords)
                    .is_ok_and(|coords| Self::is_correct(numbers[coords], answers.cell_at(coords)))
            })
            .count()
            .try_into()
            .unwrap_or(total);

        ScoreReport {
            correct,
            wrong: total - correct,
            total,
            score: percentage(correct, total),
        }
    }

    pub fn evaluate(numbers: &NumberGrid, answers: &AnswerGrid) -> Score {
        Self::report(numbers, answers).score
    }
}

/// `round(100 * part / total)` with halves rounded up, 0 for an empty total.
fn percentage(part: CellCount, total: CellCount) -> Score {
    if total == 0 {
        return 0;
    }
    let part = u32::from(part.min(total));
    let total = u32::from(total);
    ((200 * part + total) / (2 * total)) as Score
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn numbers() -> NumberGrid {
        NumberGrid::from_rows(&[[10u8, 21, 32], [43, 54, 65], [76, 87, 98]]).unwrap()
    }

    fn answers_from(values: &[&str]) -> AnswerGrid {
        let mut answers = AnswerGrid::empty(3);
        for (coords, value) in iter_coords(3).zip(values) {
            answers.set_cell(coords.0, coords.1, value);
        }
        answers
    }

    #[test]
    fn empty_answers_score_zero() {
        let report = ScoreEvaluator::report(&numbers(), &AnswerGrid::empty(3));

        assert_eq!(
            report,
            ScoreReport {
                correct: 0,
                wrong: 9,
                total: 9,
                score: 0
            }
        );
    }

    #[test]
    fn perfect_answers_score_hundred() {
        let grid = numbers();
        let mut answers = AnswerGrid::empty(3);
        for coords in iter_coords(3) {
            answers.set_cell(coords.0, coords.1, &grid[coords].to_string());
        }

        assert_eq!(ScoreEvaluator::evaluate(&grid, &answers), 100);
        assert_eq!(Grade::from_score(100), Grade::APlus);
    }

    #[test]
    fn evaluate_is_pure() {
        let grid = numbers();
        let answers = answers_from(&["10", "21", "", "43", "9"]);

        let first = ScoreEvaluator::evaluate(&grid, &answers);
        let second = ScoreEvaluator::evaluate(&grid, &answers);

        assert_eq!(first, second);
        // 3 of 9 rounds to 33
        assert_eq!(first, 33);
        assert_eq!(answers, answers_from(&["10", "21", "", "43", "9"]));
    }

    #[test]
    fn verdicts_per_cell() {
        let grid = numbers();
        let answers = answers_from(&["10", "12"]);

        assert_eq!(ScoreEvaluator::verdict(&grid, &answers, (0, 0)), CellVerdict::Correct);
        assert_eq!(ScoreEvaluator::verdict(&grid, &answers, (0, 1)), CellVerdict::Wrong);
        assert_eq!(ScoreEvaluator::verdict(&grid, &answers, (2, 2)), CellVerdict::Empty);
    }

    #[test]
    fn correct_means_same_integer() {
        assert!(ScoreEvaluator::is_correct(42, "42"));
        assert!(!ScoreEvaluator::is_correct(42, "24"));
        assert!(!ScoreEvaluator::is_correct(42, ""));
        assert!(!ScoreEvaluator::is_correct(42, "4x"));
    }

    #[test]
    fn percentage_rounds_halves_up() {
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 9), 11);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 49), 2);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_score(90).label(), "A+");
        assert_eq!(Grade::from_score(89), Grade::A);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
    }
}
