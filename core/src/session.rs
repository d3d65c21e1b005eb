use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    #[default]
    Home,
    Memorizing,
    Answering,
    Result,
}

impl GamePhase {
    /// Only the memorize phase consumes timer ticks.
    pub const fn is_ticking(self) -> bool {
        matches!(self, Self::Memorizing)
    }

    pub const fn is_in_game(self) -> bool {
        matches!(self, Self::Memorizing | Self::Answering)
    }
}

/// Intents from the presentation layer, plus the timer's tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SelectDifficulty(Difficulty),
    Tick,
    EditCell { row: Coord, col: Coord, value: String },
    Complete,
    GiveUp,
    PlayAgain,
    GoHome,
}

/// What handling an event did: whether anything observable changed, and what the tick source should do.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub changed: bool,
    pub timer: TimerDirective,
}

impl Transition {
    pub const fn has_update(self) -> bool {
        self.changed
    }
}

/// One memory game from difficulty selection to result, owning both grids.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomNumberGridGenerator> {
    generator: G,
    phase: GamePhase,
    difficulty: Option<Difficulty>,
    numbers: NumberGrid,
    answers: AnswerGrid,
    countdown: Countdown,
    score: Score,
}

impl GameSession {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomNumberGridGenerator::new(seed))
    }
}

impl<G: NumberGridGenerator> GameSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            phase: GamePhase::Home,
            difficulty: None,
            numbers: NumberGrid::default(),
            answers: AnswerGrid::default(),
            countdown: Countdown::default(),
            score: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn grid_size(&self) -> Coord {
        self.numbers.size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.numbers.total_cells()
    }

    pub fn numbers(&self) -> &NumberGrid {
        &self.numbers
    }

    /// The ground truth, but only in the phases where the player may look at it.
    pub fn visible_numbers(&self) -> Option<&NumberGrid> {
        match self.phase {
            GamePhase::Memorizing | GamePhase::Result => Some(&self.numbers),
            GamePhase::Home | GamePhase::Answering => None,
        }
    }

    pub fn answers(&self) -> &AnswerGrid {
        &self.answers
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.time_left()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn wants_ticks(&self) -> bool {
        self.phase.is_ticking()
    }

    pub fn report(&self) -> ScoreReport {
        ScoreEvaluator::report(&self.numbers, &self.answers)
    }

    pub fn grade(&self) -> Option<Grade> {
        matches!(self.phase, GamePhase::Result).then(|| Grade::from_score(self.score))
    }

    pub fn verdict_at(&self, coords: Coord2) -> Option<CellVerdict> {
        if !matches!(self.phase, GamePhase::Result) {
            return None;
        }
        let coords = self.numbers.validate_coords(coords).ok()?;
        Some(ScoreEvaluator::verdict(&self.numbers, &self.answers, coords))
    }

    pub fn handle(&mut self, event: Event) -> Transition {
        let was_ticking = self.wants_ticks();

        let changed = match (self.phase, event) {
            (GamePhase::Home, Event::SelectDifficulty(difficulty)) => self.start_game(difficulty),
            (GamePhase::Memorizing, Event::Tick) => self.advance_countdown(),
            (GamePhase::Answering, Event::EditCell { row, col, value }) => {
                self.edit_answer((row, col), &value)
            }
            (GamePhase::Answering, Event::Complete | Event::GiveUp) => self.finish(),
            (GamePhase::Result, Event::PlayAgain) => match self.difficulty {
                Some(difficulty) => self.start_game(difficulty),
                None => false,
            },
            (_, Event::GoHome) => self.reset(),
            (phase, event) => {
                log::trace!("ignoring {:?} while {:?}", event, phase);
                false
            }
        };

        Transition {
            changed,
            timer: TimerDirective::between(was_ticking, self.wants_ticks()),
        }
    }

    /// Pure form of [`GameSession::handle`].
    pub fn transition(mut self, event: Event) -> (Self, Transition) {
        let transition = self.handle(event);
        (self, transition)
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Transition {
        self.handle(Event::SelectDifficulty(difficulty))
    }

    pub fn tick(&mut self) -> Transition {
        self.handle(Event::Tick)
    }

    pub fn edit_cell(&mut self, row: Coord, col: Coord, value: impl Into<String>) -> Transition {
        self.handle(Event::EditCell {
            row,
            col,
            value: value.into(),
        })
    }

    pub fn complete(&mut self) -> Transition {
        self.handle(Event::Complete)
    }

    pub fn give_up(&mut self) -> Transition {
        self.handle(Event::GiveUp)
    }

    pub fn play_again(&mut self) -> Transition {
        self.handle(Event::PlayAgain)
    }

    pub fn go_home(&mut self) -> Transition {
        self.handle(Event::GoHome)
    }

    fn start_game(&mut self, difficulty: Difficulty) -> bool {
        let config = difficulty.config();
        let numbers = match self.generator.generate(config.grid_size) {
            Ok(numbers) => numbers,
            Err(err) => {
                log::error!("failed to generate {} grid: {}", difficulty, err);
                return false;
            }
        };

        self.difficulty = Some(difficulty);
        self.numbers = numbers;
        self.answers = AnswerGrid::empty(config.grid_size);
        self.countdown = Countdown::new(config.time_limit);
        self.score = 0;
        self.phase = GamePhase::Memorizing;
        log::debug!(
            "new {} game: {} cells, {}s to memorize",
            difficulty,
            config.total_cells(),
            config.time_limit
        );
        true
    }

    fn advance_countdown(&mut self) -> bool {
        if self.countdown.tick() == CountdownOutcome::Expired {
            self.phase = GamePhase::Answering;
            log::debug!("memorize time is up");
        }
        true
    }

    fn edit_answer(&mut self, coords: Coord2, value: &str) -> bool {
        match self.answers.validate_coords(coords) {
            Ok((row, col)) => self.answers.set_cell(row, col, value).has_update(),
            Err(err) => {
                log::error!("rejected answer at {:?}: {}", coords, err);
                false
            }
        }
    }

    fn finish(&mut self) -> bool {
        self.score = ScoreEvaluator::evaluate(&self.numbers, &self.answers);
        self.phase = GamePhase::Result;
        log::debug!("game finished with score {}", self.score);
        true
    }

    fn reset(&mut self) -> bool {
        let changed = self.phase != GamePhase::Home;
        self.phase = GamePhase::Home;
        self.difficulty = None;
        self.numbers = NumberGrid::default();
        self.answers = AnswerGrid::default();
        self.countdown = Countdown::default();
        self.score = 0;
        changed
    }
}
