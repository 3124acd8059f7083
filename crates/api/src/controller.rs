//! Resource list controller
//!
//! Every list panel runs the same cycle: fetch with the current filters,
//! render, mutate one record, fetch again. [`ListController`] owns that cycle
//! for one resource type.
//!
//! ## Fetch ordering
//!
//! Each fetch takes a [`FetchTicket`] stamped with a generation number. A
//! completed fetch is applied only when its ticket is still the latest one
//! issued; older responses are dropped, so the list always shows the most
//! recently requested filters and page.
//!
//! ## Mutations
//!
//! A mutation is one request. When it succeeds the controller refetches the
//! list exactly once; local rows are never patched.

use parking_lot::Mutex;
use pedidos_core::validation::parse_stock;
use pedidos_core::{
    AdminResult, ListResource, Order, OrderStatus, Pagination, Product, ProductForm, Validatable,
};
use tracing::{debug, error, info, warn};

use crate::client::ApiClient;

// ============================================================================
// List State
// ============================================================================

/// What a panel renders
#[derive(Debug, Clone)]
pub struct ListState<R: ListResource> {
    /// Rows of the last applied fetch
    pub items: Vec<R>,
    pub filters: R::Filters,
    pub pagination: Pagination,
    /// A fetch is in flight
    pub loading: bool,
    /// Operator-facing message of the last applied failure
    pub error: Option<String>,
    /// Generation of the latest issued ticket
    pub generation: u64,
}

impl<R: ListResource> ListState<R> {
    fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            filters: R::Filters::default(),
            pagination: Pagination::with_limit(page_size),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Nothing to show and nothing pending
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.loading
    }
}

/// A claim on the next fetch, carrying the query it was issued for
#[derive(Debug, Clone)]
pub struct FetchTicket<R: ListResource> {
    pub generation: u64,
    pub filters: R::Filters,
    pub pagination: Pagination,
}

/// How a completed fetch was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was shown
    Applied,
    /// A newer fetch had been issued; the response was dropped
    Stale,
}

// ============================================================================
// List Controller
// ============================================================================

/// Fetch/filter/paginate/mutate cycle for one resource type
///
/// State sits behind a `parking_lot::Mutex` that is never held across an
/// await, so a controller can be shared between tasks.
#[derive(Debug)]
pub struct ListController<R: ListResource> {
    client: ApiClient,
    state: Mutex<ListState<R>>,
}

impl<R: ListResource> ListController<R> {
    /// Create a controller; `page_size` only matters for paginated resources
    pub fn new(client: ApiClient, page_size: u32) -> Self {
        Self {
            client,
            state: Mutex::new(ListState::new(page_size)),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ListState<R> {
        self.state.lock().clone()
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    /// Issue a new ticket, marking the list as loading
    pub fn begin_refresh(&self) -> FetchTicket<R> {
        let mut state = self.state.lock();
        state.generation += 1;
        state.loading = true;
        state.error = None;
        FetchTicket {
            generation: state.generation,
            filters: state.filters.clone(),
            pagination: state.pagination,
        }
    }

    /// Run the fetch for `ticket` and apply it if it is still the latest
    ///
    /// A failure that is applied is also stored as the state's error.
    pub async fn complete_refresh(&self, ticket: FetchTicket<R>) -> AdminResult<FetchOutcome> {
        let page = R::PAGINATED.then_some(&ticket.pagination);
        let result = self.client.list::<R>(&ticket.filters, page).await;

        let mut state = self.state.lock();
        if ticket.generation != state.generation {
            debug!(
                "Discarding stale {} response (ticket {}, latest {})",
                R::LABEL,
                ticket.generation,
                state.generation
            );
            return Ok(FetchOutcome::Stale);
        }

        state.loading = false;
        match result {
            Ok(page) => {
                if R::PAGINATED {
                    let len = page.items.len() as u64;
                    let total = page.page_info.total.unwrap_or(len);
                    let total_pages = page
                        .page_info
                        .total_pages
                        .unwrap_or_else(|| state.pagination.pages_for(len));
                    state.pagination.apply_totals(total, total_pages);
                }
                state.items = page.items;
                state.error = None;
                Ok(FetchOutcome::Applied)
            }
            Err(e) => {
                error!("Failed to fetch {}: {}", R::LABEL, e);
                state.error = Some(e.user_message(R::LOAD_ERROR));
                Err(e)
            }
        }
    }

    /// Fetch with the current filters and page
    pub async fn refresh(&self) -> AdminResult<FetchOutcome> {
        let ticket = self.begin_refresh();
        self.complete_refresh(ticket).await
    }

    /// Replace the filters and issue a ticket for them
    ///
    /// Paginated lists go back to page 1.
    pub fn begin_with_filters(&self, filters: R::Filters) -> FetchTicket<R> {
        {
            let mut state = self.state.lock();
            state.filters = filters;
            if R::PAGINATED {
                state.pagination.reset();
            }
        }
        self.begin_refresh()
    }

    /// Replace the filters and refetch
    pub async fn set_filters(&self, filters: R::Filters) -> AdminResult<FetchOutcome> {
        let ticket = self.begin_with_filters(filters);
        self.complete_refresh(ticket).await
    }

    /// Move to `page` and issue a ticket for it
    ///
    /// Pages below 1, or past the last known page, are clamped.
    pub fn begin_page(&self, page: u32) -> FetchTicket<R> {
        {
            let mut state = self.state.lock();
            let last = state.pagination.total_pages.max(1);
            state.pagination.page = page.clamp(1, last);
        }
        self.begin_refresh()
    }

    /// Move to `page` and refetch
    pub async fn set_page(&self, page: u32) -> AdminResult<FetchOutcome> {
        let ticket = self.begin_page(page);
        self.complete_refresh(ticket).await
    }

    /// Fetch `page` with `filters` before any totals are known
    ///
    /// Used by one-shot callers; only pages below 1 are corrected.
    pub async fn load_page(&self, filters: R::Filters, page: u32) -> AdminResult<FetchOutcome> {
        {
            let mut state = self.state.lock();
            state.filters = filters;
            state.pagination.page = page.max(1);
        }
        self.refresh().await
    }

    /// Refetch after a successful mutation
    ///
    /// The mutation already happened, so a failed refetch is only recorded
    /// in the state.
    async fn refetch_after_mutation(&self) {
        if let Err(e) = self.refresh().await {
            warn!("Refetch of {} after mutation failed: {}", R::LABEL, e);
        }
    }
}

// ============================================================================
// Product Mutations
// ============================================================================

impl ListController<Product> {
    /// Validate the form, then create (`id` is `None`) or update the product
    pub async fn save(&self, id: Option<&str>, form: &ProductForm) -> AdminResult<()> {
        let payload = form.validate()?;
        match id {
            Some(id) => self.client.update_product(id, &payload).await?,
            None => self.client.create_product(&payload).await?,
        }
        info!("Saved product '{}'", payload.nombre);
        self.refetch_after_mutation().await;
        Ok(())
    }

    /// Delete a product; the caller is responsible for confirming first
    pub async fn delete(&self, id: &str) -> AdminResult<()> {
        self.client.delete_product(id).await?;
        self.refetch_after_mutation().await;
        Ok(())
    }

    /// Flip a product's `activo` flag
    pub async fn toggle_active(&self, id: &str) -> AdminResult<()> {
        self.client.toggle_product_active(id).await?;
        self.refetch_after_mutation().await;
        Ok(())
    }

    /// Set the stock from raw input
    ///
    /// Input that is not a number is ignored and nothing is sent; the return
    /// value says whether a request was made.
    pub async fn update_stock(&self, id: &str, input: &str) -> AdminResult<bool> {
        let Some(stock) = parse_stock(input) else {
            debug!("Ignoring non-numeric stock input for product {id}");
            return Ok(false);
        };
        self.client.update_product_stock(id, stock).await?;
        self.refetch_after_mutation().await;
        Ok(true)
    }
}

// ============================================================================
// Order Mutations
// ============================================================================

impl ListController<Order> {
    /// Change an order's status
    pub async fn update_status(&self, id: &str, estado: &OrderStatus) -> AdminResult<()> {
        self.client.update_order_status(id, estado).await?;
        self.refetch_after_mutation().await;
        Ok(())
    }
}
