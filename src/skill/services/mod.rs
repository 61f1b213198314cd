//! Skill management services.

mod skills;

pub use skills::{
    CreateSkillRequest, SkillService, SkillServiceError, SkillServiceResult, UpdateSkillRequest,
};
