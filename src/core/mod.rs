pub mod calculator;
pub mod machine;
pub mod summary;
