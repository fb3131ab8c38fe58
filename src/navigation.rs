//! This file defines the side menu shown on every page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the side menu.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    /// An arrow or grid glyph shown before the title.
    icon: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "flex items-center gap-3 py-2 px-3 rounded-sm text-white bg-blue-700
            lg:bg-transparent lg:text-orange-400"
        } else {
            "flex items-center gap-3 py-2 px-3 rounded-sm text-gray-300
            hover:text-white hover:bg-gray-700 lg:hover:bg-transparent"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                span aria-hidden="true" { (self.icon) }
                (self.title)
            }
        )
    }
}

/// The menu on the left side of the screen with the app's logo and its
/// navigation links.
pub struct SideMenu<'a> {
    links: Vec<Link<'a>>,
}

impl SideMenu<'_> {
    /// Get the side menu.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> SideMenu<'_> {
        let links = vec![
            Link {
                url: endpoints::DASHBOARD_VIEW,
                title: "Dashboard",
                icon: "▦",
                is_current: active_endpoint == endpoints::DASHBOARD_VIEW,
            },
            Link {
                url: endpoints::ENTRY_LIST_VIEW,
                title: "Entradas",
                icon: "↑",
                is_current: active_endpoint == endpoints::ENTRY_LIST_VIEW,
            },
            Link {
                url: endpoints::EXIT_LIST_VIEW,
                title: "Saídas",
                icon: "↓",
                is_current: active_endpoint == endpoints::EXIT_LIST_VIEW,
            },
        ];

        SideMenu { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            aside class="bg-gray-800 text-white lg:w-60 lg:min-h-screen p-4"
            {
                header class="flex items-center gap-3 mb-6"
                {
                    img src="/static/logo.svg" alt="Logo Minha Carteira" class="h-10";

                    span class="text-xl font-semibold whitespace-nowrap"
                    {
                        "Minha Carteira"
                    }
                }

                nav
                {
                    ul class="flex flex-row lg:flex-col gap-2 font-medium"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }

                        li
                        {
                            form method="post" action=(endpoints::SIGN_OUT)
                            {
                                button
                                    type="submit"
                                    hx-post=(endpoints::SIGN_OUT)
                                    class="flex items-center gap-3 py-2 px-3 rounded-sm
                                    text-gray-300 hover:text-white bg-transparent
                                    border-none cursor-pointer"
                                {
                                    span aria-hidden="true" { "⇥" }
                                    "Sair"
                                }
                            }
                        }
                    }
                }
            }
        )
    }
}
