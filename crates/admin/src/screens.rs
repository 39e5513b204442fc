//! Generic screen state. List, detail, and delete-confirmation behave
//! identically for every entity type, so one implementation covers all five;
//! only the edit screens are entity-specific (see `features`).
//!
//! Each screen owns its local mutable state and nothing else; gateways come
//! in as borrowed collaborators per action.

use domain::{Entity, Persisted};
use gateway::{QueryOptions, RestGateway, SearchQuery};

/// Page size the list screens request by default.
pub const ITEMS_PER_PAGE: u32 = 20;

/// Outcome of a save attempt. A failure leaves the screen where it is; no
/// retry happens on its own.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    Failed(gateway::GatewayError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// Save ordering every edit screen shares: raise the saving flag, issue the
/// one request the record's variant calls for, clear the flag whichever way
/// the request came back. Success ends the screen by navigating back; a
/// failure leaves the form as it was.
pub(crate) async fn run_save<E: Entity>(
    api: &RestGateway<E>,
    navigator: &mut dyn crate::navigation::Navigator,
    record: domain::Record<E>,
    saving: &mut bool,
) -> SaveOutcome {
    *saving = true;
    let result = match record {
        domain::Record::Persisted(record) => api.update(&record).await,
        domain::Record::Draft(draft) => api.create(&draft).await,
    };
    *saving = false;
    match result {
        Ok(_) => {
            navigator.back();
            SaveOutcome::Saved
        }
        Err(error) => {
            tracing::error!(entity = E::SINGULAR, %error, "save failed");
            SaveOutcome::Failed(error)
        }
    }
}

/// Paged list of one entity type plus its pagination/sort/search state.
pub struct ListScreen<E: Entity> {
    pub items: Vec<Persisted<E>>,
    pub total_count: Option<u64>,
    pub page: u32,
    pub size: u32,
    pub sort: Vec<String>,
    pub search_term: Option<String>,
}

impl<E: Entity> Default for ListScreen<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> ListScreen<E> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total_count: None,
            page: 1,
            size: ITEMS_PER_PAGE,
            sort: vec!["id,asc".to_string()],
            search_term: None,
        }
    }

    fn options(&self) -> QueryOptions {
        let mut options = QueryOptions::new().page(self.page).size(self.size);
        for sort in &self.sort {
            options = options.sort(sort.clone());
        }
        options
    }

    /// Reload the current page, through `_search` when a term is active.
    pub async fn load(&mut self, api: &RestGateway<E>) -> gateway::Result<()> {
        let page = match &self.search_term {
            Some(term) => {
                api.search(&SearchQuery::new(term.clone()).with_options(self.options()))
                    .await
            }
            None => api.query(&self.options()).await?,
        };
        self.items = page.items;
        self.total_count = page.total_count;
        Ok(())
    }

    /// Switch to free-text search (or back to the plain list with `None`)
    /// and reload from the first page.
    pub async fn search(
        &mut self,
        api: &RestGateway<E>,
        term: Option<String>,
    ) -> gateway::Result<()> {
        self.search_term = term.filter(|t| !t.is_empty());
        self.page = 1;
        self.load(api).await
    }

    /// Drop a row after its record was deleted elsewhere (delete dialog).
    pub fn remove(&mut self, id: &E::Id) {
        self.items.retain(|item| item.id() != id);
    }
}

/// Read-only view of one resolved record.
pub struct DetailScreen<E: Entity> {
    pub record: Option<Persisted<E>>,
}

impl<E: Entity> DetailScreen<E> {
    pub fn mount(record: Option<Persisted<E>>) -> Self {
        Self { record }
    }
}

/// What a closed delete dialog reported.
#[derive(Debug, PartialEq)]
pub enum DialogOutcome<Id> {
    Deleted(Id),
    Dismissed,
}

/// Confirmation step in front of a DELETE.
pub struct DeleteDialog<E: Entity> {
    pub record: Persisted<E>,
}

impl<E: Entity> DeleteDialog<E> {
    pub fn new(record: Persisted<E>) -> Self {
        Self { record }
    }

    pub fn cancel(self) -> DialogOutcome<E::Id> {
        DialogOutcome::Dismissed
    }

    pub async fn confirm(self, api: &RestGateway<E>) -> gateway::Result<DialogOutcome<E::Id>> {
        api.delete(self.record.id()).await?;
        Ok(DialogOutcome::Deleted(self.record.id().clone()))
    }
}
