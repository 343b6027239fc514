//! This crate contains all shared UI for the workspace.

pub mod presenter;

mod auth;
pub use auth::{
    redirect_to_login, use_auth, use_session, AuthState, LogoutButton, RequireAuth,
    SessionProvider,
};

mod category_table;
pub use category_table::CategoryTable;

mod confirm_dialog;
pub use confirm_dialog::{ConfirmDialog, ModalOverlay};

mod header;
pub use header::Header;

mod sidebar;
pub use sidebar::Sidebar;
