pub mod auth;
pub mod job;
pub mod persona;

pub use auth::{AuthEvent, AuthEventKind, AuthUser, TokenResponse};
pub use job::{Application, ApplicationPatch, ApplicationStatus, JobCandidate, Salary, ViewMode};
pub use persona::{
    MarketDemand, PersonaPatch, PersonaProfile, ResumeMeta, SalaryRange, WorkHistoryItem,
};
