//! The contact book and its birthday-window query.

mod address_book;
pub mod birthdays;

pub use address_book::{AddOutcome, ContactBook};
pub use birthdays::{
    next_occurrence, next_weekday, roll_to_weekday, UpcomingBirthday, DEFAULT_WINDOW_DAYS,
};
