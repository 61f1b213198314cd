//! Domain model for skills.

mod error;
mod ids;
mod kinds;
mod skill;

pub use error::SkillDomainError;
pub use ids::SkillId;
pub use kinds::{Proficiency, SkillCategory};
pub use skill::{PersistedSkillData, Skill, SkillDetails};
