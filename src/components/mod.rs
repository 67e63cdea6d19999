//! UI Components

mod delete_confirm_button;
mod login_page;
mod main_layout;
mod task_form;
mod task_item;
mod tasks_page;
mod toast_host;

// Re-export all public items
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_page::LoginPage;
pub use main_layout::MainLayout;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use tasks_page::TasksPage;
pub use toast_host::ToastHost;
