mod prompt;
mod service;
mod types;

pub use prompt::build_prompt;
pub use service::AnalysisService;
pub use types::*;
