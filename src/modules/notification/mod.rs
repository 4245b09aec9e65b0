pub mod toast;

pub use toast::{Toast, ToastChannel, ToastId, ToastVariant};
