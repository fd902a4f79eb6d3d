use crate::domain::model::Vacation;
use crate::utils::error::{FerienError, Result};

/// Where `current_vacation` / `next_vacation` take their vacations from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacationSource<'a> {
    /// Fetch the full list of this state first.
    State(&'a str),
    /// Search a list the caller already holds.
    Vacations(&'a [Vacation]),
    /// Use the list unless it is empty, then fall back to fetching the state.
    Both {
        state_code: &'a str,
        vacations: &'a [Vacation],
    },
}

/// What a [`VacationSource`] boils down to once the fallback rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolved<'a> {
    Fetch(&'a str),
    Use(&'a [Vacation]),
}

impl<'a> VacationSource<'a> {
    /// Builds the call mode from two optional arguments. At least one must be given.
    pub fn from_options(
        state_code: Option<&'a str>,
        vacations: Option<&'a [Vacation]>,
    ) -> Result<Self> {
        match (state_code, vacations) {
            (Some(state_code), Some(vacations)) => Ok(Self::Both {
                state_code,
                vacations,
            }),
            (Some(state_code), None) => Ok(Self::State(state_code)),
            (None, Some(vacations)) => Ok(Self::Vacations(vacations)),
            (None, None) => Err(missing_source()),
        }
    }

    pub(crate) fn resolve(self) -> Result<Resolved<'a>> {
        match self {
            Self::Vacations(vacations) | Self::Both { vacations, .. } if !vacations.is_empty() => {
                Ok(Resolved::Use(vacations))
            }
            Self::State(state_code) | Self::Both { state_code, .. } => {
                Ok(Resolved::Fetch(state_code))
            }
            Self::Vacations(_) => Err(missing_source()),
        }
    }
}

impl<'a> From<&'a [Vacation]> for VacationSource<'a> {
    fn from(vacations: &'a [Vacation]) -> Self {
        Self::Vacations(vacations)
    }
}

impl<'a> From<&'a Vec<Vacation>> for VacationSource<'a> {
    fn from(vacations: &'a Vec<Vacation>) -> Self {
        Self::Vacations(vacations.as_slice())
    }
}

impl<'a> From<&'a str> for VacationSource<'a> {
    fn from(state_code: &'a str) -> Self {
        Self::State(state_code)
    }
}

fn missing_source() -> FerienError {
    FerienError::invalid_argument(
        "You have to either specify argument 'state_code' or argument 'vacations'",
    )
}
