//! List snippets use case

use crate::domain::{ListRequest, Pagination, QueryPlan, Snippet};
use crate::error::Result;
use crate::infrastructure::SnippetStore;

/// One page of results plus pagination metadata.
#[derive(Debug, Clone)]
pub struct SnippetPage {
    pub items: Vec<Snippet>,
    pub pagination: Pagination,
}

/// Plan and execute a list query for the owner.
pub fn list_snippets(
    store: &impl SnippetStore,
    owner_id: &str,
    request: &ListRequest,
) -> Result<SnippetPage> {
    let plan = QueryPlan::build(owner_id, request)?;
    let items = store.find(&plan)?;
    let total = store.count(&plan.filter)?;
    Ok(SnippetPage {
        items,
        pagination: plan.pagination(total),
    })
}
