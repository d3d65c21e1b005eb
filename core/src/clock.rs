use crate::*;

/// A repeating one-second timer owned by whoever drives the session.
///
/// The session never holds a timer itself, it only asks for one to be started or stopped through
/// [`TimerDirective`]s, and the owner feeds each tick back as [`Event::Tick`].
pub trait TickSource {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TimerDirective {
    #[default]
    Keep,
    Start,
    Stop,
}

impl TimerDirective {
    pub(crate) fn between(was_ticking: bool, is_ticking: bool) -> Self {
        match (was_ticking, is_ticking) {
            (false, true) => Self::Start,
            (true, false) => Self::Stop,
            _ => Self::Keep,
        }
    }

    pub fn apply_to<T: TickSource + ?Sized>(self, source: &mut T) {
        match self {
            Self::Keep => {}
            Self::Start => {
                if !source.is_running() {
                    source.start();
                }
            }
            Self::Stop => source.stop(),
        }
    }
}

/// Tick source without a real timer. Headless drivers call [`ManualClock::advance`] to produce ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    running: bool,
    starts: u32,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self {
            running: false,
            starts: 0,
        }
    }

    /// How many times the clock has been (re)started.
    pub const fn starts(&self) -> u32 {
        self.starts
    }

    /// Delivers `seconds` ticks to `session`, stopping early if the session asks for it.
    ///
    /// Returns the number of ticks delivered.
    pub fn advance<G: NumberGridGenerator>(&mut self, session: &mut GameSession<G>, seconds: u32) -> u32 {
        let mut delivered = 0;
        while delivered < seconds && self.running {
            let transition = session.tick();
            transition.timer.apply_to(self);
            delivered += 1;
        }
        delivered
    }
}

impl TickSource for ManualClock {
    fn start(&mut self) {
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_from_tick_interest() {
        assert_eq!(TimerDirective::between(false, true), TimerDirective::Start);
        assert_eq!(TimerDirective::between(true, false), TimerDirective::Stop);
        assert_eq!(TimerDirective::between(true, true), TimerDirective::Keep);
        assert_eq!(TimerDirective::between(false, false), TimerDirective::Keep);
    }

    #[test]
    fn start_is_idempotent() {
        let mut clock = ManualClock::new();

        TimerDirective::Start.apply_to(&mut clock);
        TimerDirective::Start.apply_to(&mut clock);
        assert!(clock.is_running());
        assert_eq!(clock.starts(), 1);

        TimerDirective::Keep.apply_to(&mut clock);
        assert!(clock.is_running());
        TimerDirective::Stop.apply_to(&mut clock);
        assert!(!clock.is_running());
    }

    #[test]
    fn advance_stops_when_memorizing_ends() {
        let mut session = GameSession::with_seed(3);
        let mut clock = ManualClock::new();

        session.select_difficulty(Difficulty::Easy).timer.apply_to(&mut clock);
        let delivered = clock.advance(&mut session, 100);

        assert_eq!(delivered, 30);
        assert!(!clock.is_running());
        assert_eq!(session.phase(), GamePhase::Answering);
    }

    #[test]
    fn idle_clock_delivers_nothing() {
        let mut session = GameSession::with_seed(3);
        let mut clock = ManualClock::new();

        assert_eq!(clock.advance(&mut session, 5), 0);
        assert_eq!(session.phase(), GamePhase::Home);
    }
}
