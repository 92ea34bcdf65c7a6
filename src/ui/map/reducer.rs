use crate::ui::mvi::Reducer;

use super::filter::Filter;
use super::intent::MapIntent;
use super::state::MapState;

pub struct MapReducer;

impl Reducer for MapReducer {
    type State = MapState;
    type Intent = MapIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let next = match intent {
            MapIntent::UserChanged { user_id } => {
                let filter = match (state.filter, &user_id) {
                    (Filter::MineOnly, None) => Filter::All,
                    (filter, _) => filter,
                };
                MapState {
                    filter,
                    user_id,
                    ..state
                }
            }
            MapIntent::PetsLoaded { pets } => MapState { pets, ..state },
            MapIntent::PetUpdated { pet } => {
                let mut pets = state.pets;
                if let Some(slot) = pets.iter_mut().find(|p| p.id == pet.id) {
                    *slot = pet;
                }
                MapState { pets, ..state }
            }
            MapIntent::SetFilterStatus { selector } => MapState {
                filter: selector.into(),
                ..state
            },
            MapIntent::SetOnlyMine { enabled: true } if state.user_id.is_none() => state,
            MapIntent::SetOnlyMine { enabled: true } => MapState {
                filter: Filter::MineOnly,
                ..state
            },
            MapIntent::SetOnlyMine { enabled: false } => {
                let filter = match state.filter {
                    Filter::MineOnly => Filter::All,
                    other => other,
                };
                MapState { filter, ..state }
            }
            MapIntent::Select { pet_id } => {
                let selected = state.visible().find(|pet| pet.id == pet_id).cloned();
                match selected {
                    Some(pet) => MapState {
                        selected: Some(pet),
                        ..state
                    },
                    None => state,
                }
            }
            MapIntent::Dismiss => MapState {
                selected: None,
                ..state
            },
        };
        drop_hidden_selection(next)
    }
}

/// A selection that is no longer on the map is cleared. The overlay
/// also picks up the fresh copy of the record after a reload.
fn drop_hidden_selection(mut state: MapState) -> MapState {
    if let Some(selected) = state.selected.take() {
        let fresh = state.visible().find(|pet| pet.id == selected.id).cloned();
        state.selected = fresh;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewPet, PetRecord, PetStatus};
    use crate::ui::map::StatusSelector;

    fn pet(id: &str, status: PetStatus, user: &str) -> PetRecord {
        PetRecord::new(
            id,
            NewPet {
                status,
                user_id: user.to_string(),
                ..Default::default()
            },
        )
    }

    fn loaded(user: Option<&str>) -> MapState {
        let state = MapReducer::reduce(
            MapState::default(),
            MapIntent::UserChanged {
                user_id: user.map(String::from),
            },
        );
        MapReducer::reduce(
            state,
            MapIntent::PetsLoaded {
                pets: vec![
                    pet("1", PetStatus::Lost, "A"),
                    pet("2", PetStatus::Found, "B"),
                    pet("3", PetStatus::Resolved, "A"),
                ],
            },
        )
    }

    fn visible_ids(state: &MapState) -> Vec<&str> {
        state.visible().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn default_shows_all() {
        let state = loaded(Some("A"));
        assert_eq!(state.filter(), Filter::All);
        assert_eq!(visible_ids(&state), ["1", "2", "3"]);
    }

    #[test]
    fn status_selection_turns_mine_only_off() {
        let state = MapReducer::reduce(loaded(Some("A")), MapIntent::SetOnlyMine { enabled: true });
        let state = MapReducer::reduce(
            state,
            MapIntent::SetFilterStatus {
                selector: StatusSelector::Status(PetStatus::Lost),
            },
        );
        assert!(!state.filter().is_mine_only());
        assert_eq!(visible_ids(&state), ["1"]);
    }

    #[test]
    fn mine_only_resets_status_to_all() {
        let state = MapReducer::reduce(
            loaded(Some("A")),
            MapIntent::SetFilterStatus {
                selector: StatusSelector::Status(PetStatus::Found),
            },
        );
        let state = MapReducer::reduce(state, MapIntent::SetOnlyMine { enabled: true });
        assert_eq!(state.filter(), Filter::MineOnly);
        assert_eq!(state.filter().status_selector(), StatusSelector::All);
        assert_eq!(visible_ids(&state), ["1", "3"]);

        let state = MapReducer::reduce(state, MapIntent::SetOnlyMine { enabled: false });
        assert_eq!(state.filter(), Filter::All);
    }

    #[test]
    fn mine_only_ignored_when_signed_out() {
        let state = MapReducer::reduce(loaded(None), MapIntent::SetOnlyMine { enabled: true });
        assert_eq!(state.filter(), Filter::All);
        assert!(!state.can_filter_mine());
    }

    #[test]
    fn sign_out_leaves_mine_only() {
        let state = MapReducer::reduce(loaded(Some("A")), MapIntent::SetOnlyMine { enabled: true });
        let state = MapReducer::reduce(state, MapIntent::UserChanged { user_id: None });
        assert_eq!(state.filter(), Filter::All);
    }

    #[test]
    fn select_requires_visible_pet() {
        let state = MapReducer::reduce(
            loaded(Some("A")),
            MapIntent::SetFilterStatus {
                selector: StatusSelector::Status(PetStatus::Lost),
            },
        );
        let state = MapReducer::reduce(
            state,
            MapIntent::Select {
                pet_id: "2".to_string(),
            },
        );
        assert!(state.selected().is_none());

        let state = MapReducer::reduce(
            state,
            MapIntent::Select {
                pet_id: "1".to_string(),
            },
        );
        assert_eq!(state.selected().map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn dismiss_clears_selection() {
        let state = MapReducer::reduce(
            loaded(Some("A")),
            MapIntent::Select {
                pet_id: "2".to_string(),
            },
        );
        let state = MapReducer::reduce(state, MapIntent::Dismiss);
        assert!(state.selected().is_none());
    }

    #[test]
    fn filter_change_hiding_selection_clears_it() {
        let state = MapReducer::reduce(
            loaded(Some("A")),
            MapIntent::Select {
                pet_id: "2".to_string(),
            },
        );
        let state = MapReducer::reduce(state, MapIntent::SetOnlyMine { enabled: true });
        assert!(state.selected().is_none());
    }

    #[test]
    fn reload_refreshes_selected_record() {
        let state = MapReducer::reduce(
            loaded(Some("A")),
            MapIntent::Select {
                pet_id: "1".to_string(),
            },
        );
        let state = MapReducer::reduce(
            state,
            MapIntent::PetsLoaded {
                pets: vec![pet("1", PetStatus::Resolved, "A")],
            },
        );
        assert_eq!(state.selected().map(|p| p.status()), Some(PetStatus::Resolved));
    }

    #[test]
    fn markers_use_status_color() {
        let state = loaded(Some("A"));
        let markers = state.markers();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].color, "#007FFF");
        assert_eq!(markers[0].icon, "🐾");
    }

    #[test]
    fn updated_record_is_replaced_in_place() {
        let state = MapReducer::reduce(
            loaded(Some("A")),
            MapIntent::SetFilterStatus {
                selector: StatusSelector::Status(PetStatus::Lost),
            },
        );
        let state = MapReducer::reduce(
            state,
            MapIntent::Select {
                pet_id: "1".to_string(),
            },
        );
        let state = MapReducer::reduce(
            state,
            MapIntent::PetUpdated {
                pet: pet("1", PetStatus::Resolved, "A"),
            },
        );
        assert_eq!(state.pets()[0].status(), PetStatus::Resolved);
        assert!(visible_ids(&state).is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn update_for_unknown_record_is_ignored() {
        let state = MapReducer::reduce(
            loaded(None),
            MapIntent::PetUpdated {
                pet: pet("9", PetStatus::Lost, "A"),
            },
        );
        assert_eq!(state.pets().len(), 3);
    }
}
