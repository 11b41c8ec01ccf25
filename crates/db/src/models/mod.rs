pub mod role;
pub mod submission;
