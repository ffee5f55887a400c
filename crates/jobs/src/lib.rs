pub mod runner;
pub mod stats_collection;

pub use runner::JobRunner;
pub use stats_collection::StatsCollectionJob;
