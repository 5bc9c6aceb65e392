pub mod exercise;
pub mod routines;
