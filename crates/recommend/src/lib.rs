pub mod engine;
pub mod error;
pub mod events;
pub mod matching;
pub mod mood;
pub mod selector;
pub mod substitution;

pub use engine::{CheckIn, Recommendation, Recommender};
pub use error::RecommendError;
pub use events::{EventSink, RecommendationEvent, TracingSink};
pub use matching::{match_shops, MatchWeights, ShopMatch};
pub use mood::{goals_for_mood, resolve_goal, GoalResolution, FALLBACK_GOAL};
pub use selector::{select_recipe, RecipeSelection, SelectionOutcome};
pub use substitution::{apply_substitutions, Restrictions, Safety, SubstitutionReport, Swap};
