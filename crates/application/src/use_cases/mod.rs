pub mod collect_stats;

pub use collect_stats::{CollectStatsUseCase, CollectionOutcome};
