use crate::{CodeSpace, Outcome, Result as RegistryResult, StatusEntry};

use std::str::FromStr;

/// Entries are listed in `Outcome` discriminant order.
const TABLE: [StatusEntry; 7] = [
    // HTTP response status codes
    StatusEntry::new(Outcome::Success, 200),
    StatusEntry::new(Outcome::BadRequest, 400),
    StatusEntry::new(Outcome::Unauthorized, 401),
    StatusEntry::new(Outcome::NotFound, 404),
    StatusEntry::new(Outcome::Conflict, 409),
    StatusEntry::new(Outcome::InternalServerError, 500),
    // Custom WebSocket close codes
    StatusEntry::new(Outcome::ClientAlreadyConnected, 3001),
];

const _: () = assert!(table_is_well_formed(&TABLE), "malformed status table");

static REGISTRY: StatusRegistry = StatusRegistry { entries: &TABLE };

/// Immutable mapping from outcome to wire status code.
///
/// Obtain the process-wide instance once with [`StatusRegistry::global`] and
/// pass the reference to whatever needs to translate outcomes into codes.
#[derive(Debug)]
pub struct StatusRegistry {
    entries: &'static [StatusEntry],
}

impl StatusRegistry {
    pub fn global() -> &'static StatusRegistry {
        &REGISTRY
    }

    pub fn entry(&self, outcome: Outcome) -> &StatusEntry {
        &self.entries[outcome.index()]
    }

    pub fn code(&self, outcome: Outcome) -> u16 {
        self.entry(outcome).value
    }

    /// Resolve an outcome name to its outcome
    #[track_caller]
    pub fn resolve(&self, name: &str) -> RegistryResult<Outcome> {
        Outcome::from_str(name).inspect_err(|e| log::debug!("{}", e))
    }

    /// Look up the code registered for an outcome name
    #[track_caller]
    pub fn lookup(&self, name: &str) -> RegistryResult<u16> {
        let outcome = self.resolve(name)?;
        Ok(self.code(outcome))
    }

    pub fn entries(&self) -> &[StatusEntry] {
        self.entries
    }

    pub fn in_space(&self, space: CodeSpace) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter().filter(move |entry| entry.space == space)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One entry per outcome at its index, every value inside its code space,
/// and no value used twice.
const fn table_is_well_formed(table: &[StatusEntry]) -> bool {
    if table.len() != Outcome::ALL.len() {
        return false;
    }

    let mut i = 0;
    while i < table.len() {
        let entry = &table[i];
        if entry.outcome.index() != i || !entry.space.contains(entry.value) {
            return false;
        }

        let mut j = i + 1;
        while j < table.len() {
            if table[j].value == entry.value {
                return false;
            }
            j += 1;
        }
        i += 1;
    }

    true
}
