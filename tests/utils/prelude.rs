#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{plant_form, setup, with_photo, Env};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use http::StatusCode;
pub use plant_guide::{error, utils::DEFAULT_PHOTO_PATH};
pub use serde_json::{json, Value};
