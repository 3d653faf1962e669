//! Modal dialogs

pub mod alert;
pub mod budget;
