use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-indigo-600 \
    hover:bg-indigo-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "px-4 py-2 text-sm font-medium \
    text-gray-900 bg-white rounded border border-gray-200 hover:bg-gray-100";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 bg-gray-50 border border-gray-300 focus:ring-indigo-600 \
    focus:border-indigo-600";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase bg-gray-50";
pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Card
pub const CARD_STYLE: &str = "w-full bg-white rounded-lg shadow p-6";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }
                link href={ (endpoints::STATIC) "/main.css" } rel="stylesheet";

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class="container max-w-full min-h-screen bg-gray-50"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="bg-white"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1 class="mb-4 text-7xl tracking-tight font-extrabold text-indigo-600"
                    {
                        (header)
                    }

                    p class="mb-4 text-3xl tracking-tight font-bold text-gray-900"
                    {
                        (description)
                    }

                    p class="mb-4 text-2xl tracking-tight text-gray-900"
                    {
                        (fix)
                    }

                    a href=(endpoints::ROOT) class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}
