pub mod graph6;
pub mod hierarchy;
