//! Shared application state for axum handlers.

use std::sync::Arc;

use tubctl_app::ports::{Actuator, GreetingRepository, MeasureRepository};
use tubctl_app::services::measure_service::MeasureService;
use tubctl_app::services::tub_service::TubService;
use tubctl_domain::time::DisplayZone;

use crate::auth::IdentityProvider;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types, the actuator and the identity
/// provider to avoid dynamic dispatch. Built once at startup and never
/// mutated. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<GR, MR, A, IP> {
    /// Relay toggling and toggle log.
    pub tub_service: Arc<TubService<GR, A>>,
    /// Sample ingestion and history.
    pub measure_service: Arc<MeasureService<MR>>,
    /// Who is calling.
    pub identity: Arc<IP>,
    /// Zone used when rendering dates.
    pub zone: DisplayZone,
}

impl<GR, MR, A, IP> Clone for AppState<GR, MR, A, IP> {
    fn clone(&self) -> Self {
        Self {
            tub_service: Arc::clone(&self.tub_service),
            measure_service: Arc::clone(&self.measure_service),
            identity: Arc::clone(&self.identity),
            zone: self.zone,
        }
    }
}

impl<GR, MR, A, IP> AppState<GR, MR, A, IP>
where
    GR: GreetingRepository + Send + Sync + 'static,
    MR: MeasureRepository + Send + Sync + 'static,
    A: Actuator + Send + Sync + 'static,
    IP: IdentityProvider + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        tub_service: TubService<GR, A>,
        measure_service: MeasureService<MR>,
        identity: IP,
        zone: DisplayZone,
    ) -> Self {
        Self {
            tub_service: Arc::new(tub_service),
            measure_service: Arc::new(measure_service),
            identity: Arc::new(identity),
            zone,
        }
    }
}
