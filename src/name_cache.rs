use std::collections::{HashMap, HashSet};

/// Author display names, filled in lazily as reviews are rendered.
/// Entries live for the whole page session and are never evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserNameCache {
    names: HashMap<String, String>,
    // Lookups that have been issued but not answered yet.
    pending: HashSet<String>,
}

impl UserNameCache {
    /// Marks every id that has neither a name nor a lookup in flight as
    /// pending and returns them. Each id is handed out at most once.
    pub fn claim<'a, I>(&mut self, user_ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claimed = Vec::new();
        for user_id in user_ids {
            if self.names.contains_key(user_id) || self.pending.contains(user_id) {
                continue;
            }
            self.pending.insert(user_id.to_string());
            claimed.push(user_id.to_string());
        }
        claimed
    }

    pub fn resolve(&mut self, user_id: &str, name: String) {
        self.pending.remove(user_id);
        self.names.insert(user_id.to_string(), name);
    }

    /// The id doubles as the name when the lookup failed.
    pub fn resolve_with_id(&mut self, user_id: &str) {
        self.resolve(user_id, user_id.to_string());
    }

    pub fn display_name<'a>(&'a self, user_id: &'a str) -> &'a str {
        self.names.get(user_id).map(String::as_str).unwrap_or(user_id)
    }
}
