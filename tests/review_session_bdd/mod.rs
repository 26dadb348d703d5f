//! Support modules for the review session BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{ReviewRows, write_articles};
pub(crate) use state::ReviewScenarioState;
