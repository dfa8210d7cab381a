pub mod constellation;
pub mod spacing;
