// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod progress;

pub use orchestrator::{ImageSurvey, SurveyPipeline, VideoSurvey};
pub use progress::{FetchStats, ProgressTracker};
