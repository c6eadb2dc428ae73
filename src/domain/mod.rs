pub mod article;
pub mod audit;
pub mod comment;
pub mod errors;
