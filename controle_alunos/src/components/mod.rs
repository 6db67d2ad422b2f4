pub mod alert;
pub mod modal;
pub mod modals;
pub mod snackbar;
pub mod turma_select;
