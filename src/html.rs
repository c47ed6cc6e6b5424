//! Shared page layout, styles and number formatting for HTML views.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-gray-700 border \
    border-gray-300 dark:border-gray-600 focus:ring-blue-600 focus:border-blue-600";

pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 bg-blue-500 dark:bg-blue-600 \
    hover:bg-blue-600 hover:dark:bg-blue-700 text-white rounded";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";
pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";
pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Card style
pub const CARD_STYLE: &str = "rounded-lg shadow bg-white dark:bg-gray-800 p-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col gap-6 px-6 py-8 mx-auto \
    max-w-screen-xl text-gray-900 dark:text-white";

/// Elements that a page adds to the `head` of [base].
pub enum HeadElement {
    /// The URL of a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

/// Wrap `content` in a complete HTML document titled `title`.
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
                script src="https://cdn.tailwindcss.com" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

fn currency_formatter() -> Option<&'static Formatter> {
    static FORMATTER: OnceLock<Option<Formatter>> = OnceLock::new();

    FORMATTER
        .get_or_init(|| {
            Formatter::currency("$")
                .map(|formatter| formatter.precision(Precision::Decimals(2)))
                .ok()
        })
        .as_ref()
}

/// Format `number` as dollars with two decimal places, e.g. "$12.50".
pub fn format_currency(number: f64) -> String {
    let sign = if number < 0.0 { "-" } else { "" };
    let number = number.abs();

    let Some(formatter) = currency_formatter().filter(|_| number > 0.0) else {
        // numfmt writes zero as "0".
        return format!("{sign}${number:.2}");
    };

    let mut formatted_string = formatter.fmt_string(number);

    // numfmt drops trailing zeros, e.g. "12.30" is written as "12.3".
    if !formatted_string.contains('.') {
        formatted_string.push_str(".00");
    } else if formatted_string.as_bytes()[formatted_string.len() - 2] == b'.' {
        formatted_string.push('0');
    }

    format!("{sign}{formatted_string}")
}
