//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All mutation goes through the operations below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::CoordinatePolicy;
use crate::draft::{Field, FormDraft};
use crate::models::Place;

/// Screens reachable from the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Map,
    AddForm,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Map, Tab::AddForm];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Map => "Favorites",
            Tab::AddForm => "Place",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Map => "★",
            Tab::AddForm => "📍",
        }
    }
}

/// Root application state: the place list, the active tab and the form draft
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Append-only, insertion ordered
    pub places: Vec<Place>,
    pub active_tab: Tab,
    pub draft: FormDraft,
}

impl AppState {
    pub fn new(seed: Vec<Place>) -> Self {
        Self {
            places: seed,
            ..Default::default()
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Append a validated place. Never rejects.
    pub fn add_place(&mut self, place: Place) {
        self.places.push(place);
    }

    pub fn update_field(&mut self, field: Field, raw: impl Into<String>) {
        self.draft.update_field(field, raw);
    }

    /// Validate the draft; on success the place is returned for emission.
    pub fn submit_draft(&mut self, policy: CoordinatePolicy) -> Option<Place> {
        self.draft.submit(policy)
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a place to the store
pub fn store_add_place(store: &AppStore, place: Place) {
    store.write().add_place(place);
}

/// Switch the visible screen
pub fn store_select_tab(store: &AppStore, tab: Tab) {
    store.write().select_tab(tab);
}

/// Store raw field text in the draft
pub fn store_update_field(store: &AppStore, field: Field, raw: String) {
    store.write().update_field(field, raw);
}

/// Run submit-time validation on the draft
pub fn store_submit_draft(store: &AppStore, policy: CoordinatePolicy) -> Option<Place> {
    store.write().submit_draft(policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    /// Run against a seeded store inside a reactive owner
    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(AppState::new(AppConfig::default().seed))));
    }

    fn fill(store: &AppStore, name: &str, latitude: &str, longitude: &str) {
        store_update_field(store, Field::Name, name.to_string());
        store_update_field(store, Field::Latitude, latitude.to_string());
        store_update_field(store, Field::Longitude, longitude.to_string());
    }

    /// Submit the draft and route a valid place back through the add path
    fn submit(store: &AppStore) -> bool {
        match store_submit_draft(store, AppConfig::default().validation.policy) {
            Some(place) => {
                store_add_place(store, place);
                true
            }
            None => false,
        }
    }

    #[test]
    fn test_new_store_starts_on_map_with_seed() {
        with_store(|store| {
            assert_eq!(store.active_tab().get_untracked(), Tab::Map);
            assert_eq!(store.places().get_untracked().len(), 3);
            assert_eq!(store.draft().get_untracked(), FormDraft::default());
        });
    }

    #[test]
    fn test_submit_appends_library() {
        with_store(|store| {
            fill(&store, "Library", "12.97", "77.60");

            assert!(submit(&store));
            let places = store.places().get_untracked();
            assert_eq!(places.len(), 4);
            assert_eq!(places[3], Place::new("Library", 12.97, 77.60));
        });
    }

    #[test]
    fn test_missing_name_leaves_list_unchanged() {
        with_store(|store| {
            fill(&store, "", "10", "20");

            assert!(!submit(&store));
            assert_eq!(store.places().get_untracked().len(), 3);
            let draft = store.draft().get_untracked();
            assert!(!draft.error_message(Field::Name).is_empty());
            assert!(draft.error_message(Field::Latitude).is_empty());
            assert!(draft.error_message(Field::Longitude).is_empty());
        });
    }

    #[test]
    fn test_all_empty_never_adds() {
        with_store(|store| {
            assert!(!submit(&store));
            assert_eq!(store.places().get_untracked(), AppConfig::default().seed);
            let draft = store.draft().get_untracked();
            for field in Field::ALL {
                assert!(!draft.error_message(field).is_empty());
            }
        });
    }

    #[test]
    fn test_out_of_range_coordinates_are_added() {
        with_store(|store| {
            fill(&store, "North", "95", "10");
            assert!(submit(&store));
            assert_eq!(store.places().get_untracked()[3], Place::new("North", 95.0, 10.0));
        });
    }

    #[test]
    fn test_append_only_order_preserved() {
        with_store(|store| {
            let seed = AppConfig::default().seed;
            let submitted = ["A", "B", "C", "D"];
            for (i, name) in submitted.iter().enumerate() {
                fill(&store, name, &format!("1{}", i), "77");
                assert!(submit(&store));
            }

            let places = store.places().get_untracked();
            assert_eq!(places.len(), seed.len() + submitted.len());
            assert_eq!(&places[..seed.len()], &seed[..]);
            let tail: Vec<&str> = places[seed.len()..].iter().map(|p| p.name.as_str()).collect();
            assert_eq!(tail, submitted);
        });
    }

    #[test]
    fn test_tab_switch_keeps_list_and_draft() {
        with_store(|store| {
            fill(&store, "Half typed", "12.", "");
            let places = store.places().get_untracked();
            let draft = store.draft().get_untracked();

            store_select_tab(&store, Tab::AddForm);
            assert_eq!(store.active_tab().get_untracked(), Tab::AddForm);
            store_select_tab(&store, Tab::Map);
            assert_eq!(store.active_tab().get_untracked(), Tab::Map);

            assert_eq!(store.places().get_untracked(), places);
            assert_eq!(store.draft().get_untracked(), draft);
        });
    }

    #[test]
    fn test_add_place_does_not_revalidate() {
        with_store(|store| {
            store_add_place(&store, Place::new("Dup", 1.0, 2.0));
            store_add_place(&store, Place::new("Dup", 1.0, 2.0));
            assert_eq!(store.places().get_untracked().len(), 5);
        });
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Map.label(), "Favorites");
        assert_eq!(Tab::AddForm.label(), "Place");
    }
}
