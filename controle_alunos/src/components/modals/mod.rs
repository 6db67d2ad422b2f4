pub mod delete_student;
pub mod register;
pub mod report;
pub mod student;
