//! Views of the admin app, one module per route, plus the shared shell
//! layout wrapping everything behind the session guard.

mod shell;
pub use shell::Shell;

mod login;
pub use login::Login;

mod categories;
pub use categories::Categories;

mod category_detail;
pub use category_detail::CategoryDetail;

mod category_create;
pub use category_create::CategoryCreate;

mod category_edit;
pub use category_edit::CategoryEdit;
