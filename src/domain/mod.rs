pub mod branch;
pub mod description;
pub mod ticket;
