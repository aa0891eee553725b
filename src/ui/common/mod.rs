//! Common reusable UI components
//!
//! Building blocks shared by the entity pages: form fields, dialogs, message
//! banners and spinners.

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::{FormField, SelectField};
pub use message::{ErrorMessage, WarningMessageStatic};
pub use modal::{BaseModal, ConfirmDialog};
pub use spinner::{InlineSpinner, LoadingSpinner};
