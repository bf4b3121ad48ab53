pub mod candidate;
pub mod job;
pub mod result;

pub use candidate::CandidateProfile;
pub use job::{JobPosting, JobPostingInput};
pub use result::{MatchReport, MatchResult, ScoringFormula};
