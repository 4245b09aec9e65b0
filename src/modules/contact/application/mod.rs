pub mod contact_message;
pub mod contact_use_cases;
pub mod submit_contact;
pub mod templates;
