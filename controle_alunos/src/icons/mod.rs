pub mod close;
pub mod trash;
