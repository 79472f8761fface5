use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use http::{request, response};

use crate::config::Config;
use crate::error::Result;
use crate::models::appointment::patient_participant_refs;
use crate::models::patient::set_integer_extension;
use crate::models::Resource;
use crate::search::SearchQuery;
use crate::store::ResourceStore;

use super::{RequestDetails, ResponseDetails, ResponseInterceptor};

/// Keeps every patient's future-appointment-count extension in step with the
/// appointments that reference them.
///
/// Attached to the outgoing-response hook, so the count is recomputed whenever
/// an appointment leaves the server after a write. The recount runs on the
/// request context producing the response; the response is held until the
/// affected patients are updated, but never fails because of them.
pub struct AppointmentCountInterceptor {
    store: Arc<dyn ResourceStore>,
    count_extension_url: String,
    excluded_operations: Vec<String>,
}

impl AppointmentCountInterceptor {
    pub fn new(store: Arc<dyn ResourceStore>, config: &Config) -> Self {
        Self {
            store,
            count_extension_url: config.count_extension_url.clone(),
            excluded_operations: config.excluded_operations.clone(),
        }
    }

    /// Recount the patient's future appointments and persist the result.
    ///
    /// Counts appointments whose start lies strictly after the current
    /// instant and whose participant list references the patient. Store
    /// errors are returned to the caller without retry.
    pub async fn update_future_appointment_count(&self, patient_ref: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let query = SearchQuery::new()
            .with_prefixed_param("date", "gt", &now)
            .with_param("actor", patient_ref);

        let matches = self.store.search("Appointment", &query).await?;

        self.set_future_appointment_count(patient_ref, matches.len() as i64)
            .await
    }

    async fn set_future_appointment_count(&self, patient_ref: &str, count: i64) -> Result<()> {
        let mut patient = self
            .store
            .read("Patient", reference_id(patient_ref))
            .await?;

        set_integer_extension(&mut patient, &self.count_extension_url, count);

        self.store.update(&patient).await?;
        Ok(())
    }
}

/// Bare id of a `Patient/<id>` style reference.
fn reference_id(reference: &str) -> &str {
    match reference.split_once('/') {
        Some((_, id)) => id,
        None => reference,
    }
}

#[async_trait]
impl ResponseInterceptor for AppointmentCountInterceptor {
    async fn outgoing_response(
        &self,
        request: &RequestDetails,
        response: &ResponseDetails,
        raw_request: &request::Parts,
        _raw_response: &mut response::Parts,
    ) -> bool {
        if let Some(operation) = &request.operation {
            if self.excluded_operations.iter().any(|op| op == operation) {
                return true;
            }
        }

        let appointment = match &response.resource {
            None => {
                tracing::warn!(
                    method = %raw_request.method,
                    uri = %raw_request.uri,
                    "Unable to get resource data for request"
                );
                return true;
            }
            Some(Resource::Appointment(content)) => content,
            Some(_) => return true, // not an appointment, nothing to do
        };

        for patient_ref in patient_participant_refs(appointment) {
            match self.update_future_appointment_count(&patient_ref).await {
                Ok(()) => {
                    tracing::info!(
                        patient = %patient_ref,
                        "Updated future appointment count"
                    );
                }
                Err(error) => {
                    tracing::error!(
                        patient = %patient_ref,
                        %error,
                        "Failed to update future appointment count"
                    );
                }
            }
        }

        true
    }
}
