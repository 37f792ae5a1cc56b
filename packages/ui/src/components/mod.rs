//! Styled wrappers over `dioxus-primitives`.

mod dialog;
pub use dialog::{Dialog, DialogDescription, DialogTitle};

mod toast;
pub use toast::{use_toast, ToastLevel, ToastOptions, ToastProvider};
