use std::collections::BTreeSet;

/// Read-only view of the farm's registered services.
///
/// Queried during layer resolution and never mutated by it. Lookups for unknown services
/// must not fail; callers treat a missing answer as "not threadable".
pub trait ServiceRegistry {
    /// Names of every registered service.
    fn service_names(&self) -> BTreeSet<String>;

    /// The configured threadable flag for `name`, or `None` when the service is unknown.
    fn service_threadable(&self, name: &str) -> Option<bool>;
}

/// A registry with no services; every layer falls back to "not threadable" unless it
/// overrides cores.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoServices;

impl ServiceRegistry for NoServices {
    fn service_names(&self) -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn service_threadable(&self, _name: &str) -> Option<bool> {
        None
    }
}
