//! Static mood → health goal mapping.
//!
//! Each mood id maps to a fixed ordered list of goals; the first entry is
//! primary. Unknown moods resolve to an explicit fallback goal, tagged so
//! callers can warn instead of silently degrading.

use catalog::HealthGoal;
use serde::Serialize;

/// Goal used when the mood id is not in the mapping table.
pub const FALLBACK_GOAL: HealthGoal = HealthGoal::MealReplacement;

/// Ordered goals for a mood id, primary first. Unknown moods return the
/// empty slice. Lookup is on the trimmed, lowercased id.
pub fn goals_for_mood(mood: &str) -> &'static [HealthGoal] {
    use HealthGoal::*;

    match mood.trim().to_lowercase().as_str() {
        "foggy" => &[BrainHealth, EnergyBoost],
        "stressed" => &[CalmStomach, BrainHealth],
        "sluggish" => &[EnergyBoost, MealReplacement],
        "queasy" => &[CalmStomach],
        "run-down" => &[ImmuneSupport, EnergyBoost],
        "hungry" => &[MealReplacement, EnergyBoost],
        "balanced" => &[ImmuneSupport, BrainHealth],
        _ => &[],
    }
}

/// Outcome of goal resolution, tagged so the degraded path is observable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalResolution {
    /// The mood was recognized; goals are ordered, primary first.
    Mapped { goals: Vec<HealthGoal> },
    /// The mood was not recognized; the fixed fallback goal applies.
    UnknownMood { mood: String, fallback: HealthGoal },
}

impl GoalResolution {
    pub fn primary(&self) -> HealthGoal {
        match self {
            // `resolve_goal` never builds an empty Mapped, but the variant
            // is public; an empty list degrades to the fallback goal.
            GoalResolution::Mapped { goals } => goals.first().copied().unwrap_or(FALLBACK_GOAL),
            GoalResolution::UnknownMood { fallback, .. } => *fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GoalResolution::UnknownMood { .. })
    }
}

/// Resolve a check-in mood (plus sleep quality, 1..=4) to goals.
///
/// A very poor night (quality 1) promotes EnergyBoost to primary when the
/// mood's list contains it at all; the mapping itself is otherwise static.
pub fn resolve_goal(mood: &str, sleep_quality: u8) -> GoalResolution {
    let mapped = goals_for_mood(mood);
    if mapped.is_empty() {
        return GoalResolution::UnknownMood {
            mood: mood.to_string(),
            fallback: FALLBACK_GOAL,
        };
    }

    let mut goals = mapped.to_vec();
    if sleep_quality <= 1 {
        if let Some(pos) = goals.iter().position(|g| *g == HealthGoal::EnergyBoost) {
            let boost = goals.remove(pos);
            goals.insert(0, boost);
        }
    }

    GoalResolution::Mapped { goals }
}
