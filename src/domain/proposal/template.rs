//! Fully populated sample document offered as an import starting point.

use super::{PricingPlan, ProposalDocument, ProposalStatus, SuccessCriteriaGroup};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ProposalDocument {
    /// A three-tier customer service automation proposal.
    ///
    /// Serialized with `serde_json`, this is a valid import payload.
    pub fn sample_template() -> Self {
        Self {
            title: "AI-Powered Customer Service Automation Platform".to_string(),
            client_name: "TechCorp Solutions".to_string(),
            client_email: "contact@techcorp.com".to_string(),
            project_overview: "Build a customer service automation platform that plugs into \
                existing business systems and answers routine inquiries with human oversight."
                .to_string(),
            problems_faced: "Response times above four hours, uneven answer quality and no \
                coverage outside business hours."
                .to_string(),
            our_solution: "An assistant that answers instantly, escalates complex cases to \
                agents and reports on every conversation."
                .to_string(),
            objectives: "Cut response time by 80%, reach 95% satisfaction and halve support cost."
                .to_string(),
            timeline: "4 months (16 weeks)".to_string(),
            budget_range: "$75,000 - $125,000".to_string(),
            technical_requirements: "PostgreSQL 15+, Redis, container deployment, CI/CD pipeline"
                .to_string(),
            pricing_plans: vec![
                PricingPlan {
                    title: "Starter".to_string(),
                    price: "$25,000".to_string(),
                    description: "Core automation with basic integrations.".to_string(),
                    deliverables: strings(&[
                        "Chatbot with natural language processing",
                        "Integration with 2 existing systems",
                        "User documentation and setup guide",
                    ]),
                    features: strings(&[
                        "Natural language processing",
                        "Email notifications",
                        "Basic analytics dashboard",
                        "Standard business hours support",
                    ]),
                },
                PricingPlan {
                    title: "Professional".to_string(),
                    price: "$55,000".to_string(),
                    description: "Custom training, full CRM integration and advanced analytics."
                        .to_string(),
                    deliverables: strings(&[
                        "Chatbot with custom training",
                        "Full CRM integration",
                        "Advanced reporting dashboard",
                        "Team training sessions",
                    ]),
                    features: strings(&[
                        "Natural language processing",
                        "Email notifications",
                        "Advanced analytics dashboard",
                        "Escalation to human agents",
                        "API access and webhooks",
                        "Priority support (4-hour response)",
                    ]),
                },
                PricingPlan {
                    title: "Enterprise".to_string(),
                    price: "$95,000".to_string(),
                    description: "Enterprise-grade deployment with dedicated support.".to_string(),
                    deliverables: strings(&[
                        "Custom architecture and unlimited integrations",
                        "SOC 2 aligned security review",
                        "6-month post-launch support",
                    ]),
                    features: strings(&[
                        "Natural language processing",
                        "Email notifications",
                        "Advanced analytics dashboard",
                        "Escalation to human agents",
                        "API access and webhooks",
                        "Dedicated support engineer",
                        "White-label branding",
                    ]),
                },
            ],
            success_criteria: vec![
                SuccessCriteriaGroup {
                    title: "Performance Metrics".to_string(),
                    criteria: strings(&[
                        "Average first response under 2 seconds",
                        "99.9% monthly uptime",
                    ]),
                },
                SuccessCriteriaGroup {
                    title: "Business Impact".to_string(),
                    criteria: strings(&[
                        "50% reduction in support cost within 6 months",
                        "95% customer satisfaction score",
                    ]),
                },
            ],
            status: ProposalStatus::Draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proposal::SCALAR_FIELDS;

    #[test]
    fn template_fills_every_scalar_field() {
        let doc = ProposalDocument::sample_template();
        for name in SCALAR_FIELDS {
            assert!(!doc.scalar_field(name).unwrap().is_empty(), "{} is empty", name);
        }
    }

    #[test]
    fn template_has_three_plans_sharing_core_features() {
        let doc = ProposalDocument::sample_template();
        assert_eq!(doc.pricing_plans.len(), 3);
        assert!(doc
            .pricing_plans
            .iter()
            .all(|p| p.offers("Natural language processing")));
    }
}
