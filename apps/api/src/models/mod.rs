pub mod advice;
pub mod career;
pub mod profile;
