pub mod corpus;
pub mod dataset;
pub mod rank;
pub mod search;
pub mod types;
