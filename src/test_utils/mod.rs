#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod storage;

pub(crate) use html::{assert_classes_have_styles, assert_valid_html, parse_html_document};
pub(crate) use http::{assert_content_type, assert_status_ok};
pub(crate) use storage::get_test_storage;
