use crate::api::{ApiError, ClusterApi};
use crate::domain::constants::{MAP_PATH, MISSING_DATE_ALERT, TRANSPORT_FAILURE_PREFIX};
use crate::domain::models::{ClusterResult, MapVariant, PatientRecord};
use crate::services::cache_bust::cache_busted;
use crate::services::page::PageView;
use crate::services::sequence::{StatusSequencer, Ticket};
use crate::services::submission::validate_record;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Success envelope rendered.
    Completed,
    /// Server answered with `erro`; rendered like any other message.
    ServerError,
    /// A newer request already wrote the status element.
    Superseded,
    /// Required input missing; alert raised, nothing sent.
    InputMissing,
    /// Request or decode failed; failure message rendered.
    TransportFailure,
}

impl Outcome {
    pub fn is_ok(self) -> bool {
        !matches!(self, Outcome::InputMissing | Outcome::TransportFailure)
    }
}

/// Drives clustering runs and keeps the page in step with their results.
pub struct MapRefreshClient<A, V> {
    api: A,
    page: Mutex<V>,
    map_base: String,
    sequence: StatusSequencer,
}

impl<A: ClusterApi, V: PageView> MapRefreshClient<A, V> {
    pub fn new(api: A, page: V, server: &str) -> Self {
        Self {
            api,
            page: Mutex::new(page),
            map_base: format!("{}{}", server.trim_end_matches('/'), MAP_PATH),
            sequence: StatusSequencer::default(),
        }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_page(self) -> V {
        self.page.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn page(&self) -> MutexGuard<'_, V> {
        self.page.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn run_clustering(&self) -> Outcome {
        let ticket = self.sequence.issue();
        let result = self.api.run();
        self.finish(ticket, result, MapVariant::Geral)
    }

    pub fn run_clustering_for_date(&self) -> Outcome {
        let filter = self.page().date_filter();
        let Some(data_ref) = filter.value() else {
            self.page().alert(MISSING_DATE_ALERT);
            return Outcome::InputMissing;
        };
        let ticket = self.sequence.issue();
        let result = self.api.run_for_date(data_ref);
        self.finish(ticket, result, MapVariant::Data)
    }

    /// Returns the new image source.
    pub fn refresh_map(&self, variant: MapVariant) -> String {
        let mut page = self.page();
        let src = cache_busted(&self.map_base, &page.map_source(variant));
        debug!(element = %variant.element_id(), %src, "map refreshed");
        page.show_map(variant, src.clone());
        src
    }

    pub fn submit_record(&self, record: &PatientRecord) -> Outcome {
        if let Err(e) = validate_record(record) {
            self.page().alert(&e.to_string());
            return Outcome::InputMissing;
        }
        let ticket = self.sequence.issue();
        match self.api.submit(record) {
            Ok(env) => {
                let outcome = if env.mensagem.is_none() && env.erro.is_some() {
                    Outcome::ServerError
                } else {
                    Outcome::Completed
                };
                if self.write_status(ticket, env.message()) {
                    outcome
                } else {
                    Outcome::Superseded
                }
            }
            Err(e) => self.fail(ticket, e),
        }
    }

    fn finish(
        &self,
        ticket: Ticket,
        result: Result<ClusterResult, ApiError>,
        variant: MapVariant,
    ) -> Outcome {
        let env = match result {
            Ok(env) => env,
            Err(e) => return self.fail(ticket, e),
        };
        let outcome = if env.is_error() {
            Outcome::ServerError
        } else {
            Outcome::Completed
        };
        let applied = self.write_status(ticket, env.message());
        self.refresh_map(variant);
        if applied {
            outcome
        } else {
            Outcome::Superseded
        }
    }

    // The map is left alone: nothing was regenerated.
    fn fail(&self, ticket: Ticket, err: ApiError) -> Outcome {
        warn!(error = %err, "clustering service request failed");
        let message = format!("{}: {}", TRANSPORT_FAILURE_PREFIX, err);
        self.write_status(ticket, &message);
        Outcome::TransportFailure
    }

    fn write_status(&self, ticket: Ticket, text: &str) -> bool {
        let mut page = self.page();
        if self.sequence.try_apply(ticket) {
            page.set_status(text);
            true
        } else {
            debug!(?ticket, "stale status write dropped");
            false
        }
    }
}
