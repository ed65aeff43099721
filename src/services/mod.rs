pub mod context;
pub mod projects_service;

pub use context::SubmitContext;
pub use projects_service::ProjectsService;
