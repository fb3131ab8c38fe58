//! Minha Carteira is a web app for keeping an eye on your income and expenses.
//!
//! This library provides a small HTTP server that directly serves HTML pages:
//! a dashboard landing page and filterable lists of entries (income) and
//! exits (expenses).

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod endpoints;
mod error_page;
mod html;
mod logging;
mod navigation;
mod routing;
mod sign_out;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;
pub use transaction::{Datasets, Frequency, Transaction, TransactionBuilder};

use crate::error_page::ErrorPage;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A month outside of 1 to 12 was requested in the list filters.
    #[error("{0} is not a valid month, expected a number from 1 to 12")]
    InvalidMonth(u8),

    /// A frequency other than "recorrente" or "eventual" was requested in the
    /// list filters.
    #[error("\"{0}\" is not a valid frequency")]
    InvalidFrequency(String),

    /// The list filters in the query string could not be parsed, e.g. a month
    /// that is not a number.
    #[error("invalid list query: {0}")]
    InvalidQuery(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The dataset file could not be read.
    ///
    /// Callers should pass in the original IO error as a string.
    #[error("could not read the dataset file: {0}")]
    DatasetRead(String),

    /// The dataset file was read but its contents are not a valid dataset.
    #[error("could not parse the dataset file: {0}")]
    DatasetParse(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            Error::InvalidMonth(month) => {
                ErrorPage::bad_request(&format!("{month} não é um mês válido.")).into_response()
            }
            Error::InvalidFrequency(frequency) => ErrorPage::bad_request(&format!(
                "\"{frequency}\" não é uma frequência válida."
            ))
            .into_response(),
            Error::InvalidQuery(_) => {
                ErrorPage::bad_request("Os filtros da página são inválidos.").into_response()
            }
            Error::InvalidTimezoneError(timezone) => ErrorPage::internal(
                "Fuso horário inválido.",
                &format!(
                    "Não foi possível obter o fuso horário \"{timezone}\". Verifique as \
                    configurações do servidor e use um nome de fuso horário canônico."
                ),
            )
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::default().into_response()
            }
        }
    }
}
