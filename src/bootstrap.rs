use crate::config::Config;
use crate::error::Result;
use crate::models::SearchParameterDef;
use crate::search::SearchQuery;
use crate::store::{ResourceStore, SearchParamRegistry};

/// Number parameter exposing the future-appointment-count extension on
/// Patient searches.
pub fn future_appointment_count_parameter(extension_url: &str) -> SearchParameterDef {
    SearchParameterDef {
        name: "Future Appointment Count".to_string(),
        code: "future-appointment-count".to_string(),
        description: "Count of future appointments for the patient".to_string(),
        url: extension_url.to_string(),
        base: "Patient".to_string(),
        param_type: "number".to_string(),
        xpath: format!("Patient.extension('{}')", extension_url),
    }
}

/// Token parameter exposing the eye colour extension on Patient searches.
pub fn eye_colour_parameter(extension_url: &str) -> SearchParameterDef {
    SearchParameterDef {
        name: "Eye Colour".to_string(),
        code: "eyecolour".to_string(),
        description: "Eye colour of the patient".to_string(),
        url: extension_url.to_string(),
        base: "Patient".to_string(),
        param_type: "token".to_string(),
        xpath: format!("Patient.extension('{}')", extension_url),
    }
}

/// Register the custom search parameters and refresh the registry.
///
/// Runs once at startup. Creation is guarded by a canonical-url existence
/// check so repeated startups do not pile up duplicate definitions. Errors
/// propagate to the caller as ordinary startup failures.
pub async fn register_search_parameters(
    store: &dyn ResourceStore,
    registry: &dyn SearchParamRegistry,
    config: &Config,
) -> Result<()> {
    let definitions = [
        future_appointment_count_parameter(&config.count_extension_url),
        eye_colour_parameter(&config.eye_colour_extension_url),
    ];

    for definition in &definitions {
        ensure_search_parameter(store, definition).await?;
    }

    registry.force_refresh().await
}

async fn ensure_search_parameter(
    store: &dyn ResourceStore,
    definition: &SearchParameterDef,
) -> Result<()> {
    let query = SearchQuery::new().with_param("url", &definition.url);
    let existing = store.search("SearchParameter", &query).await?;

    if existing.is_empty() {
        store.create(&definition.to_resource()).await?;
        tracing::info!(code = %definition.code, "Registered search parameter");
    } else {
        tracing::debug!(code = %definition.code, "Search parameter already registered");
    }

    Ok(())
}
