use axum::{body::Body, response::Response};
use scraper::Html;

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

const STYLESHEET: &str = include_str!("../../static/main.css");

/// Assert that every class used in `html` has a rule in `static/main.css`.
#[track_caller]
pub(crate) fn assert_classes_have_styles(html: &Html) {
    let mut missing: Vec<String> = html
        .root_element()
        .descendants()
        .filter_map(scraper::ElementRef::wrap)
        .flat_map(|element| element.value().classes())
        .filter(|class| {
            let selector = format!(".{}", class.replace(':', "\\:").replace('.', "\\."));
            !STYLESHEET.contains(&selector)
        })
        .map(str::to_owned)
        .collect();
    missing.sort();
    missing.dedup();

    assert!(missing.is_empty(), "Classes without a style rule: {missing:?}");
}
