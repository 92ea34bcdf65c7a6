use std::str::FromStr;

use thiserror::Error;

use crate::domain::{PetRecord, PetStatus, StatusStyle, ALL_CHIP_COLOR, MINE_CHIP_COLOR};
use crate::services::PetQuery;

/// Which markers the map shows.
///
/// "Mine only" and a status are a single selector: picking one replaces
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    ByStatus(PetStatus),
    MineOnly,
}

impl Filter {
    pub fn matches(&self, pet: &PetRecord, current_user: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::ByStatus(status) => pet.status() == *status,
            Filter::MineOnly => current_user.is_some_and(|user| pet.is_owned_by(user)),
        }
    }

    /// Store query for a server-side filtered fetch.
    ///
    /// Without a signed-in user "mine only" degrades to an unfiltered
    /// query; [`visible_pets`] still hides everything in that case.
    pub fn to_query(&self, current_user: Option<&str>) -> PetQuery {
        match self {
            Filter::All => PetQuery::default(),
            Filter::ByStatus(status) => PetQuery::with_status(*status),
            Filter::MineOnly => match current_user {
                Some(user) => PetQuery::for_user(user),
                None => PetQuery::default(),
            },
        }
    }

    pub fn is_mine_only(&self) -> bool {
        matches!(self, Filter::MineOnly)
    }

    /// Selector shown as active in the status chip row.
    pub fn status_selector(&self) -> StatusSelector {
        match self {
            Filter::ByStatus(status) => StatusSelector::Status(*status),
            Filter::All | Filter::MineOnly => StatusSelector::All,
        }
    }

    /// Accent color of the active chip.
    pub fn chip_color(&self) -> &'static str {
        match self {
            Filter::All => ALL_CHIP_COLOR,
            Filter::ByStatus(status) => StatusStyle::for_status(*status).main,
            Filter::MineOnly => MINE_CHIP_COLOR,
        }
    }
}

/// Value of the status chip row: "all" or one known status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSelector {
    All,
    Status(PetStatus),
}

impl From<StatusSelector> for Filter {
    fn from(selector: StatusSelector) -> Self {
        match selector {
            StatusSelector::All => Filter::All,
            StatusSelector::Status(status) => Filter::ByStatus(status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown status filter '{0}' (expected all, lost, found or resolved)")]
pub struct UnknownSelector(pub String);

impl FromStr for StatusSelector {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(StatusSelector::All),
            other => match PetStatus::parse(other) {
                PetStatus::Unrecognized => Err(UnknownSelector(s.to_string())),
                status => Ok(StatusSelector::Status(status)),
            },
        }
    }
}

/// Records the map should show for `filter`.
///
/// Recomputed from the full list on every call; there is no incremental
/// diffing.
pub fn visible_pets<'a>(
    all: &'a [PetRecord],
    filter: Filter,
    current_user: Option<&'a str>,
) -> impl Iterator<Item = &'a PetRecord> + 'a {
    all.iter().filter(move |pet| filter.matches(pet, current_user))
}
