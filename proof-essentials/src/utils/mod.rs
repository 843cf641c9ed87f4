pub mod ladder;
pub mod rand;
