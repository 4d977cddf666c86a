//! Storage adapters that need no external service.

mod in_memory_proposal_repository;

pub use in_memory_proposal_repository::InMemoryProposalRepository;
