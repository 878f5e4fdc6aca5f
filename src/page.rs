//! The single page that hosts the expense tracker UI.
//!
//! The page is a shell: the script in `static/app.js` fills in the expense
//! table, chart and monthly total from the JSON endpoints.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, HeadElement, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, base,
    },
};

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// The categories offered in the form. Any other text is accepted by the API.
const SUGGESTED_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Other",
];

/// A route handler for the expense tracker page.
pub async fn get_index_page() -> Response {
    Html(index_view().into_string()).into_response()
}

fn index_view() -> Markup {
    let content = html! {
        main class="flex flex-col items-center px-6 py-8 mx-auto max-w-5xl gap-6 text-gray-900"
        {
            h1 class="text-3xl font-bold" { "Expense Tracker" }

            div class="grid w-full gap-6 lg:grid-cols-2"
            {
                (expense_form())

                section class=(CARD_STYLE)
                {
                    h2 class="text-xl font-semibold mb-4" { "This Month" }
                    p class="text-3xl font-bold" { span id="monthly-total" { "0.00" } }

                    div class="relative h-64 mt-6" { canvas id="expense-chart" {} }
                }
            }

            section class=(CARD_STYLE)
            {
                div class="flex justify-between items-center mb-4"
                {
                    h2 class="text-xl font-semibold" { "Expenses" }
                    button
                        id="export-btn"
                        type="button"
                        data-export-url=(endpoints::EXPORT)
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Export CSV"
                    }
                }

                table class="w-full text-sm text-left"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Note" }
                        }
                    }
                    tbody id="expense-list" {}
                }
            }

            div id="notification" class="notification" role="status"
            {
                span id="notification-message" {}
            }
        }
    };

    base(
        "Expenses",
        &[
            HeadElement::ScriptLink(CHART_JS_URL.to_owned()),
            HeadElement::ScriptLink(format!("{}/app.js", endpoints::STATIC)),
        ],
        &content,
    )
}

fn expense_form() -> Markup {
    html! {
        form
            id="expense-form"
            class={ (CARD_STYLE) " space-y-4" }
            data-add-url=(endpoints::ADD_EXPENSE)
            data-data-url=(endpoints::EXPENSE_DATA)
        {
            h2 class="text-xl font-semibold" { "Add Expense" }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    type="number"
                    name="amount"
                    id="amount"
                    step="0.01"
                    min="0.01"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                select name="category" id="category" required class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in SUGGESTED_CATEGORIES
                    {
                        option value=(category) { (category) }
                    }
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input type="date" name="date" id="date" required class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="note" class=(FORM_LABEL_STYLE) { "Note" }
                input type="text" name="note" id="note" class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}
