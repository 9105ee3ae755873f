pub mod aggregate;
pub mod index;

pub use aggregate::{department_average, department_averages};
pub use index::ceo_index;
