// Business domains
pub mod catalog;
pub mod reference;
