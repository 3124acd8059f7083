//! # Resource List Hook
//!
//! Binds a [`ListController`] to a Dioxus signal. The controller owns the
//! fetch/mutate/refetch cycle; the hook mirrors its state into a signal after
//! every step so the panel re-renders.

use std::future::Future;
use std::sync::Arc;

use dioxus::prelude::*;
use pedidos_api::{FetchTicket, ListController, ListState};
use pedidos_core::{AdminResult, ListResource, Order, Product, ProductForm};
use tracing::debug;

use crate::context::AdminContext;
use crate::state::{notify_error, notify_success};

/// Handle to a panel's list, cheap to copy into event handlers
pub struct UseResourceList<R: ListResource> {
    controller: CopyValue<Arc<ListController<R>>>,
    state: Signal<ListState<R>>,
}

impl<R: ListResource> Clone for UseResourceList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for UseResourceList<R> {}

impl<R: ListResource> PartialEq for UseResourceList<R> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

/// Product panel list
pub type ProductList = UseResourceList<Product>;

/// Order panel list
pub type OrderList = UseResourceList<Order>;

/// Create the list for `R` and fetch it once on mount
pub fn use_resource_list<R: ListResource>() -> UseResourceList<R> {
    let context = use_context::<AdminContext>();
    let controller = use_hook(|| {
        CopyValue::new(Arc::new(ListController::<R>::new(
            context.client.clone(),
            context.page_size(),
        )))
    });
    let state = use_signal(|| controller.read().snapshot());
    let list = UseResourceList { controller, state };
    use_effect(move || list.refresh());
    list
}

impl<R: ListResource> UseResourceList<R> {
    fn controller(&self) -> Arc<ListController<R>> {
        self.controller.read().clone()
    }

    /// Current state; reading it subscribes the calling component
    pub fn snapshot(&self) -> ListState<R> {
        self.state.read().clone()
    }

    /// Filters of the latest issued fetch
    pub fn filters(&self) -> R::Filters {
        self.controller().snapshot().filters
    }

    fn sync(mut self) {
        let snapshot = self.controller().snapshot();
        self.state.set(snapshot);
    }

    fn run(self, ticket: FetchTicket<R>) {
        self.sync();
        let controller = self.controller();
        spawn(async move {
            // A failure is kept in the list state and rendered by the panel
            if let Err(e) = controller.complete_refresh(ticket).await {
                debug!("{} fetch ended with error: {}", R::LABEL, e);
            }
            self.sync();
        });
    }

    /// Fetch with the current filters and page
    pub fn refresh(self) {
        let ticket = self.controller().begin_refresh();
        self.run(ticket);
    }

    /// Edit the filters and fetch again
    pub fn update_filters(self, edit: impl FnOnce(&mut R::Filters)) {
        let mut filters = self.filters();
        edit(&mut filters);
        let ticket = self.controller().begin_with_filters(filters);
        self.run(ticket);
    }

    pub fn set_page(self, page: u32) {
        let ticket = self.controller().begin_page(page);
        self.run(ticket);
    }

    /// Run one mutation in the background
    ///
    /// Failures raise a notice with the server message or `fallback`; the
    /// controller has already refetched on success.
    pub fn mutate<F, Fut>(self, done: &'static str, fallback: &'static str, action: F)
    where
        F: FnOnce(Arc<ListController<R>>) -> Fut + 'static,
        Fut: Future<Output = AdminResult<()>> + 'static,
    {
        let controller = self.controller();
        spawn(async move {
            match action(controller).await {
                Ok(()) => notify_success(done),
                Err(e) => notify_error(e.mutation_message(fallback)),
            }
            self.sync();
        });
    }
}

impl UseResourceList<Product> {
    /// Create or update a product from the form
    ///
    /// The error is returned to the form instead of raising a notice.
    pub async fn save(self, id: Option<String>, form: ProductForm) -> AdminResult<()> {
        let result = self.controller().save(id.as_deref(), &form).await;
        self.sync();
        result
    }
}
