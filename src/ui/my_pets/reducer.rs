use crate::ui::mvi::Reducer;

use super::intent::MyPetsIntent;
use super::state::MyPetsState;

pub struct MyPetsReducer;

impl Reducer for MyPetsReducer {
    type State = MyPetsState;
    type Intent = MyPetsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MyPetsIntent::Load => MyPetsState::Loading,
            MyPetsIntent::Loaded { pets, limit } => MyPetsState::Loaded { pets, limit },
            MyPetsIntent::Failed { message } => MyPetsState::Failed { message },
            MyPetsIntent::StatusChanged { pet_id, status } => match state {
                MyPetsState::Loaded { mut pets, limit } => {
                    if let Some(pet) = pets.iter_mut().find(|pet| pet.id == pet_id) {
                        pet.details.status = status;
                    }
                    MyPetsState::Loaded { pets, limit }
                }
                other => other,
            },
        }
    }
}
