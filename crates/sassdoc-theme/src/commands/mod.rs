pub mod annotations;
pub mod build;
