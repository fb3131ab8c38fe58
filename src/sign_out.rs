//! Signing out from the side menu.
//!
//! The app has no accounts, so signing out only sends the client back to the
//! root page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::{HxRedirect, HxRequest};

use crate::endpoints;

/// Redirect the client to the root page.
///
/// Requests made by htmx get the redirect in the `HX-Redirect` header, plain
/// form submissions get a `303 See Other`.
pub async fn post_sign_out(HxRequest(is_htmx): HxRequest) -> Response {
    tracing::info!("Signing out");

    if is_htmx {
        (HxRedirect(endpoints::ROOT.to_owned()), StatusCode::OK).into_response()
    } else {
        Redirect::to(endpoints::ROOT).into_response()
    }
}

#[cfg(test)]
mod sign_out_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_htmx::HX_REDIRECT;
    use axum_test::TestServer;

    use crate::endpoints;

    use super::post_sign_out;

    fn get_test_server() -> TestServer {
        let app = Router::new().route(endpoints::SIGN_OUT, post(post_sign_out));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn form_sign_out_redirects_to_root() {
        let response = get_test_server().post(endpoints::SIGN_OUT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), endpoints::ROOT);
    }

    #[tokio::test]
    async fn htmx_sign_out_uses_hx_redirect() {
        let response = get_test_server()
            .post(endpoints::SIGN_OUT)
            .add_header("HX-Request", "true")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header(HX_REDIRECT), endpoints::ROOT);
    }
}
