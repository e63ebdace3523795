pub mod constants;
pub mod generation;
pub mod locale;
pub mod records;
pub mod slug;
pub mod test_helpers;
pub mod types;
pub mod validation;
