use std::sync::Arc;

use crate::scoring::ProfileScorer;

#[derive(Clone)]
pub struct HandlerState {
    pub scorer: Arc<ProfileScorer>,
}

impl HandlerState {
    pub fn new(scorer: Arc<ProfileScorer>) -> Self {
        Self { scorer }
    }
}
