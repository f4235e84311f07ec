use std::sync::Arc;

use nb_pipeline::PipelineManager;

pub struct AppState {
    pub pipeline: Arc<PipelineManager>,
}
