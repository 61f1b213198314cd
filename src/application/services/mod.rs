//! Application services for recording and managing job applications.

mod applications;

pub use applications::{
    ApplicationService, ApplicationServiceError, ApplicationServiceResult,
    RecordApplicationRequest, UpdateApplicationRequest,
};
