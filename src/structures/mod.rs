pub mod poly;
pub mod terms;
