//! Form validation for Pedidos Admin
//!
//! Forms hold raw input strings exactly as typed. Validation runs before any
//! request is built and stops at the first failing rule.

use serde::Serialize;

use crate::error::{AdminError, AdminResult};
use crate::traits::Validatable;
use crate::types::{Category, Product, ProductPayload};

/// Shown when a required auth field is blank
pub const REQUIRED_FIELDS: &str = "Todos los campos son obligatorios";
/// Shown when the registration password is too short
pub const PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 6 caracteres";
/// Shown when the confirmation differs from the password
pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";
/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

pub const NAME_REQUIRED: &str = "El nombre es requerido";
pub const PRICE_NOT_POSITIVE: &str = "El precio debe ser mayor a 0";
pub const STOCK_NEGATIVE: &str = "El stock no puede ser negativo";

// ============================================================================
// Login
// ============================================================================

/// Login form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Validatable for LoginForm {
    type Output = LoginRequest;

    fn validate(&self) -> AdminResult<LoginRequest> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AdminError::validation(REQUIRED_FIELDS));
        }
        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

// ============================================================================
// Registration
// ============================================================================

/// Registration form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of `POST /api/registro`; the confirmation is never sent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

impl Validatable for RegisterForm {
    type Output = RegisterRequest;

    fn validate(&self) -> AdminResult<RegisterRequest> {
        let blank = [
            &self.nombre,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.is_empty());
        if blank {
            return Err(AdminError::validation(REQUIRED_FIELDS));
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AdminError::validation(PASSWORD_TOO_SHORT));
        }

        if self.password != self.confirm_password {
            return Err(AdminError::validation(PASSWORD_MISMATCH));
        }

        Ok(RegisterRequest {
            nombre: self.nombre.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

// ============================================================================
// Product
// ============================================================================

/// Product edit form input
///
/// `precio` and `stock` stay as typed so that blank and malformed input can
/// be reported with the right message.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub nombre: String,
    pub descripcion: String,
    pub precio: String,
    pub stock: String,
    pub imagen: String,
    pub categoria: Category,
    pub activo: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            descripcion: String::new(),
            precio: String::new(),
            stock: String::new(),
            imagen: String::new(),
            categoria: Category::Hamburguesas,
            activo: true,
        }
    }
}

impl ProductForm {
    /// Pre-fill the form from an existing product
    pub fn from_product(product: &Product) -> Self {
        Self {
            nombre: product.nombre.clone(),
            descripcion: product.descripcion.clone(),
            precio: product.precio.to_string(),
            stock: product.stock.to_string(),
            imagen: product.imagen.clone().unwrap_or_default(),
            categoria: product.categoria.clone(),
            activo: product.activo,
        }
    }

    /// Image URL for the preview, when one was entered
    pub fn image_preview(&self) -> Option<&str> {
        let url = self.imagen.trim();
        if url.is_empty() { None } else { Some(url) }
    }
}

impl Validatable for ProductForm {
    type Output = ProductPayload;

    fn validate(&self) -> AdminResult<ProductPayload> {
        if self.nombre.trim().is_empty() {
            return Err(AdminError::validation(NAME_REQUIRED));
        }

        let precio = match self.precio.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => value,
            _ => return Err(AdminError::validation(PRICE_NOT_POSITIVE)),
        };

        let stock = parse_stock(&self.stock)
            .filter(|value| *value >= 0)
            .ok_or_else(|| AdminError::validation(STOCK_NEGATIVE))?;

        Ok(ProductPayload {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            precio,
            stock,
            imagen: self.imagen.trim().to_string(),
            categoria: self.categoria.clone(),
            activo: self.activo,
        })
    }
}

/// Parse a stock entry as an integer
///
/// Decimal input is truncated; blank or non-numeric input yields `None`.
pub fn parse_stock(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(value) = input.parse::<i64>() {
        return Some(value);
    }
    input
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i64)
}

// ============================================================================
// Tests
// ============================================================================
