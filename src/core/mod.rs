pub mod config;
pub mod pipeline;

pub use config::{load_config, resolve_config, save_config, Config};
pub use pipeline::{run_pipeline, AlignmentPipeline, PipelineReport};
