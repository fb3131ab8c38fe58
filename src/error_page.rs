//! The full-page views shown when a request cannot be served: bad filters,
//! unknown routes and internal server errors.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// An error page with a short `description` of what went wrong and a `fix`
/// telling the user what to do next.
pub struct ErrorPage<'a> {
    pub status: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    /// The page for a request with invalid parameters.
    pub fn bad_request(description: &'a str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            description,
            fix: "Escolha os filtros a partir das opções da página.",
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Página não encontrada.",
            fix: "Confira o endereço ou volte para o início.",
        }
    }

    /// The page for an internal server error with a custom explanation.
    pub fn internal(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description,
            fix,
        }
    }

    fn title(&self) -> &'static str {
        match self.status {
            StatusCode::BAD_REQUEST => "Requisição inválida",
            StatusCode::NOT_FOUND => "Página não encontrada",
            _ => "Erro interno",
        }
    }
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self::internal(
            "Desculpe, algo deu errado.",
            "Tente novamente mais tarde ou verifique os logs do servidor.",
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let body = error_view(
            self.title(),
            self.status.as_str(),
            self.description,
            self.fix,
        );

        (self.status, Html(body.into_string())).into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}
