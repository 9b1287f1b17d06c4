//! # Table state
//!
//! [`UserTableState`] is the in-memory model behind the rendered user table.
//! Each row gets a [`RowKey`] when it is inserted; handlers capture that key
//! when a click starts a request, so a late response always acts on the row it
//! was issued for, whatever happened to the table in the meantime.
//!
//! Fields are bound by name from the server's [`UserRecord`]; nothing depends on
//! the position of a cell inside a row.

use std::fmt;

use api::{TableSettings, UserRecord};
use dioxus::prelude::*;

/// Client-side identity of a rendered row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// One rendered user.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub key: RowKey,
    pub record: UserRecord,
    /// Resource URL both action links point to.
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserTableState {
    rows: Vec<UserRow>,
    next_key: u64,
}

impl UserTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row for `record` at the end of the table.
    pub fn append(&mut self, record: UserRecord, settings: &TableSettings) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        let href = settings.record_url(&record.id);
        self.rows.push(UserRow { key, record, href });
        key
    }

    /// Drop every row and insert `records` in order. Keys are never reused.
    pub fn replace_all(
        &mut self,
        records: impl IntoIterator<Item = UserRecord>,
        settings: &TableSettings,
    ) {
        self.rows.clear();
        for record in records {
            self.append(record, settings);
        }
    }

    /// Remove the row with `key`. Returns `false` if it is already gone.
    pub fn remove(&mut self, key: RowKey) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.key != key);
        self.rows.len() != before
    }

    pub fn get(&self, key: RowKey) -> Option<&UserRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Mutable access to a table, whether owned directly or held in a signal.
///
/// Handlers take this instead of a `&mut UserTableState` so that the borrow is
/// only taken once the response is in, never across an `.await`.
pub trait TableHandle {
    fn with_table<R>(&mut self, f: impl FnOnce(&mut UserTableState) -> R) -> R;
}

impl TableHandle for UserTableState {
    fn with_table<R>(&mut self, f: impl FnOnce(&mut UserTableState) -> R) -> R {
        f(self)
    }
}

impl TableHandle for Signal<UserTableState> {
    fn with_table<R>(&mut self, f: impl FnOnce(&mut UserTableState) -> R) -> R {
        let mut table = self.write();
        f(&mut *table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::RecordId;

    fn record(id: &str, first: &str, last: &str) -> UserRecord {
        UserRecord {
            id: RecordId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_append_assigns_fresh_keys_and_links() {
        let settings = TableSettings::default();
        let mut table = UserTableState::new();

        let a = table.append(record("1", "Ada", "Lovelace"), &settings);
        let b = table.append(record("1", "Ada", "Lovelace"), &settings);

        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(a).unwrap().href, "/user/1");
    }

    #[test]
    fn test_remove_only_touches_its_row() {
        let settings = TableSettings::default();
        let mut table = UserTableState::new();
        let first = table.append(record("1", "A", "A"), &settings);
        let second = table.append(record("2", "B", "B"), &settings);
        let third = table.append(record("3", "C", "C"), &settings);

        assert!(table.remove(second));
        assert!(!table.remove(second));

        let keys: Vec<RowKey> = table.rows().iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![first, third]);
    }

    #[test]
    fn test_replace_all_keeps_order_and_never_reuses_keys() {
        let settings = TableSettings::default();
        let mut table = UserTableState::new();
        let stale = table.append(record("9", "Old", "Row"), &settings);

        table.replace_all(
            vec![record("1", "A", "A"), record("2", "B", "B")],
            &settings,
        );

        assert!(table.get(stale).is_none());
        let ids: Vec<&str> = table.rows().iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(table.rows().iter().all(|r| r.key != stale));
    }
}
