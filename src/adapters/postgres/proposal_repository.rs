//! PostgreSQL implementation of ProposalRepository.
//!
//! Free-text sections are plain columns; pricing plans and success criteria
//! are stored as JSONB.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ProposalId, Timestamp};
use crate::domain::proposal::{
    NewProposal, PricingPlan, Proposal, ProposalDocument, ProposalStatus, SuccessCriteriaGroup,
};
use crate::ports::{ProposalOrder, ProposalRepository};

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, client_name, client_email, project_overview, problems_faced,
           our_solution, objectives, timeline, budget_range, technical_requirements,
           pricing_plans, success_criteria, status, created_at, updated_at
    FROM proposals
"#;

/// PostgreSQL implementation of ProposalRepository.
#[derive(Clone)]
pub struct PostgresProposalRepository {
    pool: PgPool,
}

impl PostgresProposalRepository {
    /// Creates a new PostgresProposalRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProposalRepository for PostgresProposalRepository {
    async fn insert(&self, proposal: &NewProposal) -> Result<Proposal, DomainError> {
        let doc = &proposal.document;

        let row = sqlx::query(
            r#"
            INSERT INTO proposals (
                title, client_name, client_email, project_overview, problems_faced,
                our_solution, objectives, timeline, budget_range, technical_requirements,
                pricing_plans, success_criteria, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id
            "#,
        )
        .bind(&doc.title)
        .bind(&doc.client_name)
        .bind(&doc.client_email)
        .bind(&doc.project_overview)
        .bind(&doc.problems_faced)
        .bind(&doc.our_solution)
        .bind(&doc.objectives)
        .bind(&doc.timeline)
        .bind(&doc.budget_range)
        .bind(&doc.technical_requirements)
        .bind(Json(&doc.pricing_plans))
        .bind(Json(&doc.success_criteria))
        .bind(doc.status.as_str())
        .bind(proposal.created_at.as_datetime())
        .bind(proposal.updated_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert proposal", e))?;

        let id: Uuid = row
            .try_get("id")
            .map_err(|e| DomainError::database("Failed to read proposal id", e))?;

        tracing::debug!(proposal_id = %id, "proposal inserted");
        Ok(proposal.clone().into_proposal(ProposalId::from_uuid(id)))
    }

    async fn find_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch proposal", e))?;

        row.map(row_to_proposal).transpose()
    }

    async fn find_all(&self, order: ProposalOrder) -> Result<Vec<Proposal>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY {}", SELECT_COLUMNS, order_clause(order)))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list proposals", e))?;

        rows.into_iter().map(row_to_proposal).collect()
    }
}

fn order_clause(order: ProposalOrder) -> &'static str {
    match order {
        ProposalOrder::CreatedAtDesc => "created_at DESC",
        ProposalOrder::CreatedAtAsc => "created_at ASC",
        ProposalOrder::UpdatedAtDesc => "updated_at DESC",
    }
}

fn row_to_proposal(row: PgRow) -> Result<Proposal, DomainError> {
    let map_err = |e: sqlx::Error| DomainError::database("Failed to decode proposal row", e);

    let id: Uuid = row.try_get("id").map_err(map_err)?;
    let status: String = row.try_get("status").map_err(map_err)?;
    let Json(pricing_plans): Json<Vec<PricingPlan>> =
        row.try_get("pricing_plans").map_err(map_err)?;
    let Json(success_criteria): Json<Vec<SuccessCriteriaGroup>> =
        row.try_get("success_criteria").map_err(map_err)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_err)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_err)?;

    let status = ProposalStatus::parse(&status).unwrap_or_else(|| {
        tracing::warn!(proposal_id = %id, %status, "unknown proposal status, reading as draft");
        ProposalStatus::Draft
    });

    let document = ProposalDocument {
        title: row.try_get("title").map_err(map_err)?,
        client_name: row.try_get("client_name").map_err(map_err)?,
        client_email: row.try_get("client_email").map_err(map_err)?,
        project_overview: row.try_get("project_overview").map_err(map_err)?,
        problems_faced: row.try_get("problems_faced").map_err(map_err)?,
        our_solution: row.try_get("our_solution").map_err(map_err)?,
        objectives: row.try_get("objectives").map_err(map_err)?,
        timeline: row.try_get("timeline").map_err(map_err)?,
        budget_range: row.try_get("budget_range").map_err(map_err)?,
        technical_requirements: row.try_get("technical_requirements").map_err(map_err)?,
        pricing_plans,
        success_criteria,
        status,
    };

    Ok(Proposal {
        id: ProposalId::from_uuid(id),
        document,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_clause_matches_each_variant() {
        assert_eq!(order_clause(ProposalOrder::CreatedAtDesc), "created_at DESC");
        assert_eq!(order_clause(ProposalOrder::CreatedAtAsc), "created_at ASC");
        assert_eq!(order_clause(ProposalOrder::UpdatedAtDesc), "updated_at DESC");
    }

    #[test]
    fn select_lists_every_document_column() {
        for column in crate::domain::proposal::SCALAR_FIELDS {
            assert!(SELECT_COLUMNS.contains(column), "missing column {}", column);
        }
        assert!(SELECT_COLUMNS.contains("pricing_plans"));
        assert!(SELECT_COLUMNS.contains("success_criteria"));
    }
}
