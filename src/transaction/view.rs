//! HTML rendering for the list page.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::html::{BUTTON_PRIMARY_STYLE, FORM_SELECT_STYLE, content_header, page_with_menu};

use super::{
    filters::{SelectOption, TransactionRow},
    list_page::{FrequencyToggle, ListViewModel},
};

/// The max number of graphemes to display in a card before truncating and
/// displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 40;

pub(crate) fn list_view(model: ListViewModel) -> Markup {
    let endpoint = model.kind.endpoint();
    let frequencies = model.filters.frequencies.to_query_value();

    let controls = html! {
        form
            method="get"
            action=(&endpoint)
            hx-get=(&endpoint)
            hx-trigger="change, submit"
            hx-select="#page-content"
            hx-target="#page-content"
            hx-swap="outerHTML"
            hx-push-url="true"
            class="flex gap-2"
        {
            (select_input("month", "Mês", &model.month_options, Some(model.filters.month)))
            (select_input("year", "Ano", &model.year_options, model.filters.year))

            input type="hidden" name="frequencies" value=(frequencies);

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Filtrar" }
        }
    };

    let content = html! {
        (content_header(model.title, model.accent_color, &controls))

        section class="flex gap-4 mb-6" aria-label="Filtrar por frequência"
        {
            @for toggle in &model.toggles {
                (frequency_toggle_view(toggle))
            }
        }

        section class="space-y-3"
        {
            @if model.rows.is_empty() {
                p data-empty-state="true" class="text-gray-500 dark:text-gray-400"
                {
                    "Nenhum dado encontrado."
                }
            } @else {
                @for row in &model.rows {
                    (finance_card_view(row))
                }
            }
        }
    };

    page_with_menu(model.title, &endpoint, &content)
}

fn select_input<T>(
    name: &str,
    label: &str,
    options: &[SelectOption<T>],
    selected: Option<T>,
) -> Markup
where
    T: Copy + PartialEq + ToString,
{
    html! {
        label class="sr-only" for=(name) { (label) }

        select id=(name) name=(name) class=(FORM_SELECT_STYLE)
        {
            @for option in options {
                option value=(option.value.to_string()) selected[Some(option.value) == selected]
                {
                    (option.label)
                }
            }
        }
    }
}

fn frequency_toggle_view(toggle: &FrequencyToggle) -> Markup {
    let style = if toggle.is_active {
        "text-lg font-medium pb-1 border-b-4 opacity-100"
    } else {
        "text-lg font-medium pb-1 border-b-4 opacity-40 hover:opacity-70"
    };

    html! {
        a
            href=(toggle.url)
            class=(style)
            style={ "border-bottom-color: " (toggle.frequency.tag_color()) ";" }
            data-frequency=(toggle.frequency.as_query_value())
            aria-pressed=(if toggle.is_active { "true" } else { "false" })
        {
            (toggle.frequency.label())
        }
    }
}

fn finance_card_view(row: &TransactionRow) -> Markup {
    let (description, tooltip) = format_description(&row.description);

    html! {
        div
            class="flex items-center justify-between rounded bg-white dark:bg-gray-800
                shadow-sm px-4 py-3"
            data-transaction-card="true"
            data-row-id=(row.id.0)
        {
            div class="flex items-center gap-3 min-w-0"
            {
                span
                    class="w-2 h-10 rounded shrink-0"
                    style={ "background-color: " (row.tag_color) ";" }
                    data-tag-color=(row.tag_color)
                    title=(row.frequency.label())
                {}

                div class="min-w-0"
                {
                    p class="truncate font-medium" title=[tooltip] { (description) }
                    small class="text-gray-500 dark:text-gray-400" { (row.formatted_date) }
                }
            }

            p class="shrink-0 font-semibold tabular-nums" { (row.formatted_amount) }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        (truncated + "...", Some(description))
    }
}
