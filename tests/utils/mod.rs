pub mod macros;
pub mod prelude;
mod request;
mod response;
mod setup;

pub use request::*;
pub use response::*;
pub use setup::*;

use reqwest::multipart::{Form, Part};

/// Multipart body with the given text fields.
#[allow(unused)]
pub fn plant_form(fields: &[(&'static str, &str)]) -> Form {
    fields.iter().fold(Form::new(), |form, (name, value)| {
        form.text(*name, (*value).to_owned())
    })
}

/// Adds a photo part to a plant form.
#[allow(unused)]
pub fn with_photo(form: Form, file_name: &str, content: &[u8]) -> Form {
    form.part(
        "photo",
        Part::bytes(content.to_vec()).file_name(file_name.to_owned()),
    )
}
