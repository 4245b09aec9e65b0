pub mod introduction;
pub mod studies;
pub mod technical_skills;
pub mod work_experience;
