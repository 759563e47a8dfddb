pub mod controls;
pub mod plan;
pub mod process;
