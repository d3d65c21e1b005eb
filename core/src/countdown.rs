use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CountdownOutcome {
    Ticked,
    Expired,
}

/// Colour band for the remaining memorize time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Calm,
    Warning,
    Critical,
}

impl Urgency {
    pub fn from_progress(progress: f32) -> Self {
        if progress > 0.6 {
            Self::Calm
        } else if progress > 0.3 {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

/// Seconds left of the memorize phase. Ticking is driven from outside, one call per second.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    total: u32,
    left: u32,
}

impl Countdown {
    pub const fn new(total: u32) -> Self {
        Self { total, left: total }
    }

    pub const fn time_left(&self) -> u32 {
        self.left
    }

    pub const fn total(&self) -> u32 {
        self.total
    }

    pub const fn is_expired(&self) -> bool {
        self.left == 0
    }

    pub fn tick(&mut self) -> CountdownOutcome {
        self.left = self.left.saturating_sub(1);
        if self.left == 0 {
            CountdownOutcome::Expired
        } else {
            CountdownOutcome::Ticked
        }
    }

    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.left as f32 / self.total as f32
        }
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::from_progress(self.progress())
    }
}
