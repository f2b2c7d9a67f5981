//! Working set produced by a directory search.

use std::collections::HashSet;

use serde::Serialize;
use ward_core::entities::UserDetail;
use ward_core::ids::normalize_identity_key;

/// Search results together with the keys that produced them.
///
/// `keys[i]` is the input that produced `entries[i]`, so the set can be
/// re-run after a mutation without the caller keeping the raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    keys: Vec<String>,
    entries: Vec<UserDetail>,
}

impl ResultSet {
    pub(crate) fn new(keys: Vec<String>, entries: Vec<UserDetail>) -> Self {
        debug_assert_eq!(keys.len(), entries.len());
        Self { keys, entries }
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn entries(&self) -> &[UserDetail] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Found entry for `email`, if the set holds one.
    #[must_use]
    pub fn find(&self, email: &str) -> Option<&UserDetail> {
        let email = normalize_identity_key(email);
        self.entries
            .iter()
            .find(|entry| entry.is_found() && entry.display_email() == email)
    }

    /// Drop every entry shown under `email` from the set. The directory is
    /// not touched. Returns how many entries were removed.
    pub fn remove(&mut self, email: &str) -> usize {
        let email = normalize_identity_key(email);
        let before = self.entries.len();
        let (keys, entries): (Vec<_>, Vec<_>) = std::mem::take(&mut self.keys)
            .into_iter()
            .zip(std::mem::take(&mut self.entries))
            .filter(|(_, entry)| normalize_identity_key(entry.display_email()) != email)
            .unzip();
        self.keys = keys;
        self.entries = entries;
        before - self.entries.len()
    }

    /// Ids of found users, first occurrence order, no duplicates.
    #[must_use]
    pub fn found_user_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter_map(UserDetail::user_id)
            .filter(|id| seen.insert(*id))
            .map(String::from)
            .collect()
    }

    /// Queries that matched nobody, in order.
    #[must_use]
    pub fn missing_queries(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_found())
            .map(UserDetail::display_email)
            .collect()
    }

    pub(crate) fn replace_entries(&mut self, entries: Vec<UserDetail>) {
        debug_assert_eq!(self.keys.len(), entries.len());
        self.entries = entries;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ward_core::entities::{CapabilityView, FoundUser, UserDetail, UserRecord};
    use ward_core::enums::UserStatus;

    use super::ResultSet;

    fn found(id: &str, email: &str) -> UserDetail {
        UserDetail::Found(FoundUser {
            user: UserRecord {
                id: id.into(),
                name: id.into(),
                email: email.into(),
                tenants: Vec::new(),
                assigned_roles: Vec::new(),
                group_ids: Vec::new(),
                status: UserStatus::Active,
                global_visibility: false,
            },
            role_groups: Vec::new(),
            capabilities: CapabilityView::default(),
        })
    }

    fn set() -> ResultSet {
        ResultSet::new(
            vec!["a@x.com".into(), "A@x.com".into(), "ghost@y.com".into(), "b@x.com".into()],
            vec![
                found("1", "a@x.com"),
                found("1", "a@x.com"),
                UserDetail::missing("ghost@y.com"),
                found("2", "b@x.com"),
            ],
        )
    }

    #[test]
    fn found_ids_are_unique_in_order() {
        let set = set();
        assert_eq!(set.found_user_ids(), ["1", "2"]);
        assert_eq!(set.missing_queries(), ["ghost@y.com"]);
    }

    #[test]
    fn remove_drops_all_entries_for_email() {
        let mut set = set();
        assert_eq!(set.remove("A@X.com"), 2);
        assert_eq!(set.len(), 2);
        assert_eq!(set.keys(), ["ghost@y.com", "b@x.com"]);
        assert_eq!(set.remove("a@x.com"), 0);
    }

    #[test]
    fn find_ignores_missing_entries() {
        let set = set();
        assert!(set.find("ghost@y.com").is_none());
        assert_eq!(set.find(" B@x.com ").and_then(UserDetail::user_id), Some("2"));
    }
}
