/// Seed for the number generator, drawn from JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

/// CSS class for how much memorize time is left.
pub(crate) const fn urgency_class(urgency: memoria_core::Urgency) -> &'static str {
    use memoria_core::Urgency::*;
    match urgency {
        Calm => "calm",
        Warning => "warning",
        Critical => "critical",
    }
}

/// CSS class for one cell of the answer comparison.
pub(crate) const fn verdict_class(verdict: memoria_core::CellVerdict) -> &'static str {
    use memoria_core::CellVerdict::*;
    match verdict {
        Empty => "empty",
        Correct => "correct",
        Wrong => "wrong",
    }
}

pub(crate) const fn difficulty_title(difficulty: memoria_core::Difficulty) -> &'static str {
    use memoria_core::Difficulty::*;
    match difficulty {
        Easy => "Easy",
        Medium => "Medium",
        Hard => "Hard",
    }
}
