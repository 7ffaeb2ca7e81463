mod confirm_delete;

pub use confirm_delete::confirm_delete_dialog;
