//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is built from:
//! names, phone numbers and birthdays. Each value object validates at
//! construction time, renders through `Display`, and never changes after
//! it is built.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
