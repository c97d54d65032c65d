use crate::models::HospitalStats;
use crate::predictor::Predictor;

#[derive(Clone)]
pub struct AppState {
    pub stats: HospitalStats,
    pub predictor: Predictor,
}

impl AppState {
    pub fn new(stats: HospitalStats, predictor: Predictor) -> Self {
        Self { stats, predictor }
    }
}
