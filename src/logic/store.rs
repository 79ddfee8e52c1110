use crate::models::{PlantProfile, PLANT_CATALOG};

/// Read-only lookup over a compiled-in profile table.
///
/// Iteration order is the table order. There is no mutation API.
#[derive(Debug, Clone, Copy)]
pub struct PlantProfileStore {
    profiles: &'static [PlantProfile],
}

impl PlantProfileStore {
    pub const fn new(profiles: &'static [PlantProfile]) -> Self {
        Self { profiles }
    }

    pub const fn builtin() -> Self {
        Self::new(PLANT_CATALOG)
    }

    /// Exact-key lookup. Callers branch on `None`.
    pub fn get_profile(&self, id: &str) -> Option<&'static PlantProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn list_all(&self) -> &'static [PlantProfile] {
        self.profiles
    }

    pub fn list_by_category(&self, category: &str) -> Vec<&'static PlantProfile> {
        self.profiles
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for profile in self.profiles {
            if !categories.contains(&profile.category) {
                categories.push(profile.category);
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for PlantProfileStore {
    fn default() -> Self {
        Self::builtin()
    }
}
