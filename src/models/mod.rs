// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, Candidate, CandidateOptions, CandidateQuery, CandidateWeights, Degree, Dimension,
    Education, RankedCandidate, WorkExperience,
};
pub use requests::{QueryText, RankRequest, SummaryRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse};
