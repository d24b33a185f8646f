mod plant_form;

pub use plant_form::*;
