//! Defines the route handlers for the page that lists the transactions of
//! one dataset, filtered by month, year and frequency.
use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{AppState, Error, timezone::current_local_date};

use super::{
    core::Frequency,
    dataset::{DatasetKind, Datasets, select_dataset},
    filters::{
        FrequencySet, SelectOption, TransactionRow, apply_filters, derive_month_options,
        derive_year_options, toggle_frequency,
    },
    view::list_view,
};

/// The filters as they arrive in the URL. Any of them may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// The month to show, from 1 to 12.
    pub month: Option<u8>,
    /// The year to show.
    pub year: Option<i32>,
    /// Comma separated frequencies to show, see [FrequencySet::from_query_value].
    pub frequencies: Option<String>,
}

/// Validated filters with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListFilters {
    pub month: u8,
    /// `None` only when the dataset has no transactions to take a year from.
    pub year: Option<i32>,
    pub frequencies: FrequencySet,
}

impl ListFilters {
    pub(crate) fn to_query_string(&self) -> String {
        let mut query = format!("month={}", self.month);

        if let Some(year) = self.year {
            query.push_str(&format!("&year={year}"));
        }

        query.push_str(&format!(
            "&frequencies={}",
            self.frequencies.to_query_value()
        ));
        query
    }

    pub(crate) fn to_url(&self, route: &str) -> String {
        format!("{route}?{}", self.to_query_string())
    }

    fn with_toggled(&self, frequency: Frequency) -> Self {
        Self {
            frequencies: toggle_frequency(&self.frequencies, frequency),
            ..self.clone()
        }
    }
}

#[derive(Debug, PartialEq)]
enum QueryDecision {
    Redirect(String),
    Normalized(ListFilters),
}

/// A filter button for one frequency.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FrequencyToggle {
    pub frequency: Frequency,
    pub is_active: bool,
    /// The URL of the page with this frequency toggled.
    pub url: String,
}

/// Everything the list page displays.
pub(crate) struct ListViewModel {
    pub kind: DatasetKind,
    pub title: &'static str,
    pub accent_color: &'static str,
    pub month_options: Vec<SelectOption<u8>>,
    pub year_options: Vec<SelectOption<i32>>,
    pub filters: ListFilters,
    pub toggles: Vec<FrequencyToggle>,
    pub rows: Vec<TransactionRow>,
}

/// The state needed for the list page.
#[derive(Debug, Clone)]
pub struct ListViewState {
    /// The entry and exit datasets.
    datasets: Arc<Datasets>,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    local_timezone: String,
}

impl FromRef<AppState> for ListViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            datasets: state.datasets.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the transactions of the dataset named by the `kind` route parameter.
pub async fn get_list_page(
    State(state): State<ListViewState>,
    Path(kind): Path<String>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let Query(query) = query.map_err(reject_query)?;
    render_list_page(&state, DatasetKind::from_route_param(Some(&kind)), query)
}

/// Render the list page when no dataset is named, which shows the exits.
pub async fn get_default_list_page(
    State(state): State<ListViewState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, Error> {
    let Query(query) = query.map_err(reject_query)?;
    render_list_page(&state, DatasetKind::from_route_param(None), query)
}

fn reject_query(rejection: QueryRejection) -> Error {
    tracing::debug!("rejected list query: {rejection}");
    Error::InvalidQuery(rejection.body_text())
}

fn render_list_page(
    state: &ListViewState,
    kind: DatasetKind,
    query: ListQuery,
) -> Result<Response, Error> {
    let dataset = select_dataset(&state.datasets, kind);
    let endpoint = kind.endpoint();
    let year_options = derive_year_options(dataset.records);
    let current_month = u8::from(current_local_date(&state.local_timezone)?.month());

    let filters = match normalize_query(query, &year_options, current_month)
        .inspect_err(|error| tracing::debug!("rejected list filters: {error}"))?
    {
        QueryDecision::Normalized(filters) => filters,
        QueryDecision::Redirect(query_string) => {
            let redirect_url = format!("{endpoint}?{query_string}");
            return Ok(Redirect::to(&redirect_url).into_response());
        }
    };

    let rows = match filters.year {
        Some(year) if !filters.frequencies.is_empty() => {
            apply_filters(dataset.records, filters.month, year, &filters.frequencies)
        }
        _ => Vec::new(),
    };

    tracing::debug!(
        "showing {} of {} {kind:?} transactions for {}",
        rows.len(),
        dataset.records.len(),
        filters.to_query_string()
    );

    let toggles = Frequency::ALL
        .into_iter()
        .map(|frequency| FrequencyToggle {
            frequency,
            is_active: filters.frequencies.contains(frequency),
            url: filters.with_toggled(frequency).to_url(&endpoint),
        })
        .collect();

    Ok(list_view(ListViewModel {
        kind,
        title: dataset.title,
        accent_color: dataset.accent_color,
        month_options: derive_month_options(),
        year_options,
        filters,
        toggles,
        rows,
    })
    .into_response())
}

/// Validate `query` and fill in its missing filters.
///
/// If anything had to be filled in or corrected, the client should be
/// redirected to the returned query string so the URL always carries the
/// complete filter state.
fn normalize_query(
    query: ListQuery,
    year_options: &[SelectOption<i32>],
    current_month: u8,
) -> Result<QueryDecision, Error> {
    let month = match query.month {
        Some(month) if (1..=12).contains(&month) => month,
        Some(month) => return Err(Error::InvalidMonth(month)),
        None => current_month,
    };

    let frequencies = match &query.frequencies {
        Some(value) => FrequencySet::from_query_value(value)?,
        None => FrequencySet::all(),
    };

    let first_year = year_options.first().map(|option| option.value);
    let year = match query.year {
        Some(year) if year_options.is_empty() => Some(year),
        Some(year) if year_options.iter().any(|option| option.value == year) => Some(year),
        Some(_) | None => first_year,
    };

    let filters = ListFilters {
        month,
        year,
        frequencies,
    };

    if query.month.is_none() || query.frequencies.is_none() || query.year != year {
        return Ok(QueryDecision::Redirect(filters.to_query_string()));
    }

    Ok(QueryDecision::Normalized(filters))
}
