//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/list/{kind}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page listing the transactions of a dataset selected by `kind`.
pub const LIST_VIEW: &str = "/list/{kind}";
/// The list page without a dataset parameter, which falls back to the exits.
pub const LIST_VIEW_DEFAULT: &str = "/list";
/// The list page for entries (income).
pub const ENTRY_LIST_VIEW: &str = "/list/entry-balance";
/// The list page for exits (expenses).
pub const EXIT_LIST_VIEW: &str = "/list/exit-balance";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for the client to sign out.
pub const SIGN_OUT: &str = "/api/sign_out";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/list/{kind}', '{kind}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_static` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::LIST_VIEW);
        assert_endpoint_is_valid_uri(endpoints::LIST_VIEW_DEFAULT);
        assert_endpoint_is_valid_uri(endpoints::ENTRY_LIST_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EXIT_LIST_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
        assert_endpoint_is_valid_uri(endpoints::SIGN_OUT);
    }

    #[test]
    fn list_endpoints_match_route_template() {
        assert_eq!(
            format_endpoint(endpoints::LIST_VIEW, "entry-balance"),
            endpoints::ENTRY_LIST_VIEW
        );
        assert_eq!(
            format_endpoint(endpoints::LIST_VIEW, "exit-balance"),
            endpoints::EXIT_LIST_VIEW
        );
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", "there");

        assert_eq!(formatted_path, "/hello/there/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", "there");

        assert_eq!(formatted_path, "/hello/world");
    }
}
