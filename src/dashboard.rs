//! The dashboard landing page.
//!
//! The dashboard is a placeholder for future summaries: it shows the page
//! header, a static selector and links to the entry and exit lists.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{FORM_SELECT_STYLE, LINK_STYLE, ORANGE, content_header, page_with_menu},
};

/// The placeholder options of the dashboard's selector.
const PLACEHOLDER_OPTIONS: [&str; 3] = ["Pedro", "João", "Maria"];

/// Display the dashboard page.
pub async fn get_dashboard_page() -> Response {
    dashboard_view().into_response()
}

fn dashboard_view() -> Markup {
    let controls = html! {
        select name="placeholder" aria-label="Selecionar" class=(FORM_SELECT_STYLE)
        {
            @for name in PLACEHOLDER_OPTIONS {
                option value=(name) { (name) }
            }
        }
    };

    let content = html! {
        (content_header("Dashboard", ORANGE, &controls))

        p
        {
            "Veja suas "
            a href=(endpoints::ENTRY_LIST_VIEW) class=(LINK_STYLE) { "entradas" }
            " e "
            a href=(endpoints::EXIT_LIST_VIEW) class=(LINK_STYLE) { "saídas" }
            "."
        }
    };

    page_with_menu("Dashboard", endpoints::DASHBOARD_VIEW, &content)
}
