//! UI Components
//!
//! One view per screen plus the board building blocks.

mod board_view;
mod delete_confirm;
mod feed_view;
mod forgot_password;
mod login;
mod new_task_form;
mod register;
mod reset_password;
mod task_card;
mod task_column;

pub use board_view::BoardView;
pub use delete_confirm::DeleteConfirm;
pub use feed_view::FeedView;
pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use new_task_form::NewTaskForm;
pub use register::Register;
pub use reset_password::ResetPassword;
pub use task_card::TaskCard;
pub use task_column::TaskColumn;
