//! Scenario state for the review session BDD tests.

use camino::Utf8PathBuf;
use fiscal_review::tui::ReviewApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;

/// Scenario state for review session tests.
#[derive(ScenarioState, Default)]
pub(crate) struct ReviewScenarioState {
    pub(crate) app: Slot<ReviewApp>,
    pub(crate) workspace: Slot<TempDir>,
    pub(crate) log_path: Slot<Utf8PathBuf>,
    pub(crate) rendered_view: Slot<String>,
}
