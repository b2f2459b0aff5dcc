pub mod register_form;
pub mod registration_submission;
