//! PostgreSQL adapters.

mod proposal_repository;

pub use proposal_repository::PostgresProposalRepository;
