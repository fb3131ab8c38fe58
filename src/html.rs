use maud::{DOCTYPE, Markup, html};

use time::Date;

use crate::navigation::SideMenu;

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 bg-blue-500
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

// Form styles
pub const FORM_SELECT_STYLE: &str = "block p-2.5 rounded text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-gray-700 \
    border border-gray-300 dark:border-gray-600 focus:ring-blue-600 \
    focus:border-blue-600 focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col flex-1 px-6 py-8 mx-auto lg:py-5 w-full max-w-5xl text-gray-900 dark:text-white";

/// The accent colour used for entries and the dashboard.
pub const ORANGE: &str = "#F7931B";
/// The accent colour used for exits.
pub const RED: &str = "#E44C4E";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Minha Carteira" }
                link rel="icon" type="image/svg+xml" href="/static/logo.svg";
                link href="/static/main.css" rel="stylesheet";

                script
                    src="https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js"
                    integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz"
                    crossorigin="anonymous"
                    {}
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// A page with the side menu on the left and `content` filling the rest of
/// the screen.
///
/// `active_endpoint` selects the menu item that is highlighted.
pub fn page_with_menu(title: &str, active_endpoint: &str, content: &Markup) -> Markup {
    let menu = SideMenu::new(active_endpoint).into_html();

    let layout = html! {
        div class="flex flex-col lg:flex-row min-h-screen"
        {
            (menu)

            main id="page-content" class=(PAGE_CONTAINER_STYLE)
            {
                (content)
            }
        }
    };

    base(title, &layout)
}

/// The page header with a `title` underlined in `line_color`, followed by
/// `controls` on the right.
pub fn content_header(title: &str, line_color: &str, controls: &Markup) -> Markup {
    html! {
        header class="flex flex-wrap justify-between items-end gap-4 mb-6"
        {
            h1
                class="text-2xl font-bold pb-1 border-b-4"
                style={ "border-bottom-color: " (line_color) ";" }
                data-accent-color=(line_color)
            {
                (title)
            }

            div class="flex gap-2" { (controls) }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Voltar ao início"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// Format `number` as Brazilian reais, e.g. "R$ 1.234,50".
///
/// The amount is rounded to the nearest cent and never written in
/// scientific notation.
pub fn format_currency(number: f64) -> String {
    // Saturates for amounts too large for u128, NaN becomes zero.
    let cents = (number.abs() * 100.0).round() as u128;
    let sign = if number < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{sign}R$ {},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Write `whole` with a dot between each group of three digits.
fn group_thousands(whole: u128) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

/// Format `date` as "DD/MM/YYYY".
pub fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod format_tests {
    use time::macros::date;

    use super::{format_currency, format_date};

    #[test]
    fn formats_date_with_padding() {
        assert_eq!(format_date(date!(2024 - 03 - 15)), "15/03/2024");
        assert_eq!(format_date(date!(2023 - 11 - 05)), "05/11/2023");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn formats_whole_amount_with_cents() {
        assert_eq!(format_currency(100.0), "R$ 100,00");
    }

    #[test]
    fn formats_amount_with_decimal_comma() {
        assert_eq!(format_currency(12.3), "R$ 12,30");
        assert_eq!(format_currency(99.99), "R$ 99,99");
    }

    #[test]
    fn formats_negative_amount() {
        assert_eq!(format_currency(-50.0), "-R$ 50,00");
        assert_eq!(format_currency(-1234.5), "-R$ 1.234,50");
    }

    #[test]
    fn formats_thousands_with_dots() {
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn rounds_to_the_nearest_cent() {
        assert_eq!(format_currency(999.999), "R$ 1.000,00");
        assert_eq!(format_currency(0.05), "R$ 0,05");
        assert_eq!(format_currency(0.004), "R$ 0,00");
        assert_eq!(format_currency(0.0001), "R$ 0,00");
    }

    #[test]
    fn amounts_that_round_to_zero_have_no_sign() {
        assert_eq!(format_currency(-0.004), "R$ 0,00");
    }

    #[test]
    fn large_amounts_are_not_in_scientific_notation() {
        assert_eq!(format_currency(1e15), "R$ 1.000.000.000.000.000,00");
    }
}
