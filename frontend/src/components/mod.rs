//! Reusable view components

pub mod alert;
pub mod form_field;
pub mod location_card;
pub mod navbar;
pub mod rating;
