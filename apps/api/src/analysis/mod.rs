// Matching flows built on the skill engine: single-resume analysis and
// job-to-candidates ranking. Handlers only shape requests and responses.

pub mod handlers;
pub mod ranking;
pub mod resume;
