pub mod job_board_service;
pub mod session_service;
