//! Scenario state and runtime/server initialisation for the note extraction
//! BDD tests.

use mr_notes::ExtractionError;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::SharedRuntime;

/// Scenario state for note extraction tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ExtractionState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) ids: Slot<Vec<String>>,
    pub(crate) output: Slot<String>,
    pub(crate) error: Slot<ExtractionError>,
}

/// Ensures the runtime and server are initialised in `ExtractionState`.
pub(crate) fn ensure_runtime_and_server(
    state: &ExtractionState,
) -> Result<SharedRuntime, ExtractionError> {
    super::runtime::ensure_runtime_and_server(&state.runtime, &state.server).map_err(|error| {
        ExtractionError::Api {
            message: format!("failed to create Tokio runtime: {error}"),
        }
    })
}
