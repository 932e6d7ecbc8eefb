//! HTTP response building module
//!
//! Builders for the handful of responses the server emits.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_html_response, build_options_response,
};
