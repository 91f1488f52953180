//! Training orchestration: the episodic loop and its observers.

pub mod observers;
pub mod training;

pub use observers::{MetricsObserver, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};
