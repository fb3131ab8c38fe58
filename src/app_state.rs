//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::{Error, timezone::get_local_offset, transaction::Datasets};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,

    /// The read-only entry and exit datasets shared by all requests.
    pub datasets: Arc<Datasets>,
}

impl AppState {
    /// Create a new [AppState] serving `datasets`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "America/Sao_Paulo".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(datasets: Datasets, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            datasets: Arc::new(datasets),
        })
    }
}
