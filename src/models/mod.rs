pub mod custom_form;
pub mod job_post;
pub mod option;
