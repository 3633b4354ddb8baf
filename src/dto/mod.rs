pub mod job_post_dto;
pub mod wizard_dto;
