pub mod dashboard;
pub mod login_page;
