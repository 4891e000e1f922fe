//! Versioned container for the resources a console session works with.

use amapi::device::Device;
use amapi::enterprise::Enterprise;
use amapi::policy::Policy;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

/// A write that arrived carrying a version older than the slot's current one.
/// The store discarded it; the caller should refetch and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stale write to {slot}: observed version {observed}, current is {current}")]
pub struct StaleWrite {
    pub slot: &'static str,
    pub observed: u64,
    pub current: u64,
}

/// A value plus the bookkeeping needed to order writes against it.
///
/// `version` advances by one on every accepted write, whether it came from a
/// server sync or a local optimistic edit. `synced_at` records the last
/// server sync only.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub value: T,
    pub version: u64,
    pub synced_at: DateTime<Utc>,
}

impl<T> Versioned<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            synced_at: Utc::now(),
        }
    }
}

/// Session-scoped cache of the selected enterprise and its policies and
/// devices.
///
/// Server syncs are two-phase: read the slot's version before fetching, then
/// hand that version back with the fetched value. If anything else wrote the
/// slot in between (an optimistic edit, a faster sync), the slow write is
/// rejected with [`StaleWrite`] instead of clobbering newer state. Optimistic
/// edits apply immediately and bump the version, which is exactly what
/// invalidates any fetch that was already in flight.
///
/// All mutation goes through `&mut self`; one writer per store is the
/// caller's contract.
#[derive(Debug)]
pub struct SessionStore {
    enterprise: Versioned<Option<Enterprise>>,
    policies: Versioned<Vec<Policy>>,
    devices: Versioned<Vec<Device>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            enterprise: Versioned::new(None),
            policies: Versioned::new(Vec::new()),
            devices: Versioned::new(Vec::new()),
        }
    }

    pub fn enterprise(&self) -> &Versioned<Option<Enterprise>> {
        &self.enterprise
    }

    pub fn policies(&self) -> &Versioned<Vec<Policy>> {
        &self.policies
    }

    pub fn devices(&self) -> &Versioned<Vec<Device>> {
        &self.devices
    }

    /// Commits a fetched enterprise. `observed` is the slot version read
    /// before the fetch started.
    pub fn sync_enterprise(
        &mut self,
        observed: u64,
        value: Option<Enterprise>,
    ) -> Result<u64, StaleWrite> {
        Self::sync_slot(&mut self.enterprise, "enterprise", observed, value)
    }

    /// Commits a fetched policy list. `observed` is the slot version read
    /// before the fetch started.
    pub fn sync_policies(&mut self, observed: u64, value: Vec<Policy>) -> Result<u64, StaleWrite> {
        Self::sync_slot(&mut self.policies, "policies", observed, value)
    }

    /// Commits a fetched device list. `observed` is the slot version read
    /// before the fetch started.
    pub fn sync_devices(&mut self, observed: u64, value: Vec<Device>) -> Result<u64, StaleWrite> {
        Self::sync_slot(&mut self.devices, "devices", observed, value)
    }

    fn sync_slot<T>(
        slot: &mut Versioned<T>,
        name: &'static str,
        observed: u64,
        value: T,
    ) -> Result<u64, StaleWrite> {
        if observed < slot.version {
            debug!(slot = name, observed, current = slot.version, "discarding stale write");
            return Err(StaleWrite {
                slot: name,
                observed,
                current: slot.version,
            });
        }
        slot.value = value;
        slot.version += 1;
        slot.synced_at = Utc::now();
        Ok(slot.version)
    }

    /// Optimistically inserts or replaces a policy, matching on `name`.
    /// Replacement happens in place so the list order is stable.
    pub fn upsert_policy(&mut self, policy: Policy) {
        upsert_by(&mut self.policies.value, policy, |p| p.name.as_deref());
        self.policies.version += 1;
    }

    /// Optimistically removes a policy by resource name. Returns whether
    /// anything was removed.
    pub fn remove_policy(&mut self, name: &str) -> bool {
        let removed = remove_by(&mut self.policies.value, name, |p| p.name.as_deref());
        if removed {
            self.policies.version += 1;
        }
        removed
    }

    /// Optimistically inserts or replaces a device, matching on `name`.
    pub fn upsert_device(&mut self, device: Device) {
        upsert_by(&mut self.devices.value, device, |d| d.name.as_deref());
        self.devices.version += 1;
    }

    /// Optimistically removes a device by resource name. Returns whether
    /// anything was removed.
    pub fn remove_device(&mut self, name: &str) -> bool {
        let removed = remove_by(&mut self.devices.value, name, |d| d.name.as_deref());
        if removed {
            self.devices.version += 1;
        }
        removed
    }

    /// Drops all cached state, e.g. on logout or a 401. Versions keep
    /// advancing so writes from fetches started before the clear are
    /// rejected as stale.
    pub fn clear(&mut self) {
        self.enterprise.value = None;
        self.enterprise.version += 1;
        self.policies.value.clear();
        self.policies.version += 1;
        self.devices.value.clear();
        self.devices.version += 1;
    }
}

fn upsert_by<T>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> Option<&str>) {
    let item_key = key(&item).map(str::to_string);
    match items
        .iter_mut()
        .find(|existing| item_key.is_some() && key(existing) == item_key.as_deref())
    {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

fn remove_by<T>(items: &mut Vec<T>, name: &str, key: impl Fn(&T) -> Option<&str>) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != Some(name));
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(name: &str) -> Policy {
        Policy {
            name: Some(name.to_string()),
            ..Policy::default()
        }
    }

    fn device(name: &str) -> Device {
        Device {
            name: Some(name.to_string()),
            ..Device::default()
        }
    }

    #[test]
    fn test_sync_advances_version() {
        let mut store = SessionStore::new();
        let observed = store.policies().version;
        let committed = store.sync_policies(observed, vec![policy("p1")]).unwrap();
        assert_eq!(committed, observed + 1);
        assert_eq!(store.policies().value.len(), 1);
    }

    #[test]
    fn test_stale_sync_discarded() {
        let mut store = SessionStore::new();
        let observed = store.devices().version;
        store
            .sync_devices(observed, vec![device("d1"), device("d2")])
            .unwrap();

        // An optimistic delete lands while a refetch is in flight.
        let mid_flight = store.devices().version;
        assert!(store.remove_device("d2"));
        let err = store
            .sync_devices(mid_flight, vec![device("d1"), device("d2")])
            .unwrap_err();
        assert_eq!(err.slot, "devices");
        assert!(err.observed < err.current);
        // The optimistic state survives.
        assert!(store.devices().value.iter().all(|d| d.name.as_deref() != Some("d2")));
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut store = SessionStore::new();
        let observed = store.policies().version;
        store
            .sync_policies(observed, vec![policy("a"), policy("b"), policy("c")])
            .unwrap();

        let mut updated = policy("b");
        updated.version = Some("7".to_string());
        store.upsert_policy(updated);

        let names: Vec<_> = store
            .policies()
            .value
            .iter()
            .filter_map(|p| p.name.as_deref())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(store.policies().value[1].version.as_deref(), Some("7"));
    }

    #[test]
    fn test_upsert_unknown_appends() {
        let mut store = SessionStore::new();
        store.upsert_device(device("d1"));
        store.upsert_device(device("d2"));
        assert_eq!(store.devices().value.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = SessionStore::new();
        store.upsert_policy(policy("a"));
        let version = store.policies().version;
        assert!(!store.remove_policy("zzz"));
        assert_eq!(store.policies().version, version);
    }

    #[test]
    fn test_clear_invalidates_in_flight_sync() {
        let mut store = SessionStore::new();
        let observed = store.policies().version;
        store.clear();
        assert!(store.sync_policies(observed, vec![policy("late")]).is_err());
        assert!(store.policies().value.is_empty());
    }
}
