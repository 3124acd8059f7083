//! Core traits for Pedidos Admin
//!
//! This module defines the seams shared by the API client, the list
//! controller and the front-ends: form validation, query-string filters,
//! and the description of a list resource served by the catalog API.

use crate::error::AdminResult;
use serde::de::DeserializeOwned;
use std::fmt;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for forms that are checked before anything is sent
///
/// Validation short-circuits: the returned error carries the first failing
/// rule's operator-facing message.
///
/// # Example
///
/// ```rust,ignore
/// use pedidos_core::{Validatable, LoginForm};
///
/// let form = LoginForm::new("ops@example.com", "");
/// assert!(!form.is_valid());
/// ```
pub trait Validatable {
    /// Validated output of the form
    type Output;

    /// Validate the form, producing the value to submit
    fn validate(&self) -> AdminResult<Self::Output>;

    /// Check if the form is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The first validation message, if any
    fn validation_message(&self) -> Option<String> {
        self.validate().err().map(|e| e.to_string())
    }
}

// ============================================================================
// Query Filters
// ============================================================================

/// Filters that serialize to query-string pairs
pub trait QueryFilters {
    /// Pairs for the non-empty fields only
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Whether no filter is set
    fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

// ============================================================================
// List Resource
// ============================================================================

/// A record type listed by the catalog API
///
/// Implemented by [`Product`](crate::Product) and [`Order`](crate::Order);
/// the list controller is generic over this trait.
pub trait ListResource: DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Filter state for this resource
    type Filters: QueryFilters + Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static;

    /// Collection path, e.g. `/api/products`
    const PATH: &'static str;

    /// Key of the named envelope shape, e.g. `productos`
    const ENVELOPE_KEY: &'static str;

    /// Whether the server pages this list (`page`/`limit` are sent)
    const PAGINATED: bool;

    /// Human label used in logs and messages
    const LABEL: &'static str;

    /// Message shown when fetching the list fails
    const LOAD_ERROR: &'static str;

    /// The record's `_id`
    fn id(&self) -> &str;
}
