pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{
    LevelLabels, RawScores, Trait, TraitLevels, LEVEL_COUNT, MAX_LEVEL, MAX_RAW_SCORE,
    RAW_SCORE_COUNT,
};
