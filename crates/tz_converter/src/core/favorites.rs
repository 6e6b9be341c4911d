/// In-memory favorites, unique and kept in insertion order
///
/// Entries are stored as typed; nothing here consults the resolver.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    zones: Vec<String>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`; returns `false` when it was already present
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            tracing::debug!("Favorite '{}' already present", id);
            return false;
        }

        tracing::debug!("Adding favorite '{}'", id);
        self.zones.push(id.to_string());
        true
    }

    /// Remove `id` by exact match; returns `false` when it was absent
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.zones.len();
        self.zones.retain(|zone| zone != id);
        let removed = self.zones.len() != before;

        tracing::debug!("Removing favorite '{}' (present: {})", id, removed);
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.zones.iter().any(|zone| zone == id)
    }

    pub fn list(&self) -> &[String] {
        &self.zones
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
