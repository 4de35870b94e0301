use crate::{CodeSpace, Outcome};

use serde::Serialize;

/// One row of the registry: an outcome name and its wire code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    #[serde(skip)]
    pub outcome: Outcome,
    pub name: &'static str,
    pub value: u16,
    pub space: CodeSpace,
}

impl StatusEntry {
    pub(crate) const fn new(outcome: Outcome, value: u16) -> Self {
        Self {
            outcome,
            name: outcome.name(),
            value,
            space: outcome.code_space(),
        }
    }
}
