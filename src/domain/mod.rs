pub mod article;
pub mod errors;
pub mod outcome;
pub mod user;
pub mod value_object;
