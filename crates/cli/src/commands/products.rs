//! `products` subcommands
//!
//! Mutations go through the same list controller as the console's product
//! panel, so validation, fallbacks and the refetch after each change behave
//! the same.

use std::io::{self, BufRead, Write};

use anyhow::anyhow;
use pedidos_api::ProductController;
use pedidos_api::client::{
    DELETE_PRODUCT_FAILED, SAVE_PRODUCT_FAILED, TOGGLE_PRODUCT_FAILED, UPDATE_STOCK_FAILED,
};
use pedidos_core::display::NO_PRODUCTS;
use pedidos_core::{AdminError, Category, Product, ProductFilters, ProductForm};
use tracing::warn;

use super::{CliContext, fail};
use crate::output::{self, PRODUCT_HEADERS};
use crate::{ProductCommand, ProductFields};

/// Fallback when fetching the product list fails
const LOAD_PRODUCTS_FAILED: &str = "Error al cargar productos";

pub async fn run(ctx: &CliContext, command: ProductCommand) -> anyhow::Result<()> {
    ctx.require_session()?;
    let controller = ProductController::new(ctx.client.clone(), ctx.config.orders_page_size);

    match command {
        ProductCommand::List {
            categoria,
            activo,
            search,
        } => {
            let filters = ProductFilters {
                categoria: categoria.map(Category::from),
                activo,
                search: search.unwrap_or_default(),
            };
            controller
                .set_filters(filters)
                .await
                .map_err(|e| fail(e, LOAD_PRODUCTS_FAILED))?;
            print_products(ctx, &controller.snapshot().items)
        }

        ProductCommand::Categories => {
            let categories = ctx
                .client
                .categories()
                .await
                .map_err(|e| fail(e, LOAD_PRODUCTS_FAILED))?;
            if ctx.json {
                return ctx.print_json(&categories);
            }
            for category in categories {
                println!("{category}");
            }
            Ok(())
        }

        ProductCommand::Create(fields) => {
            let form = apply_fields(ProductForm::default(), &fields);
            controller
                .save(None, &form)
                .await
                .map_err(|e| fail(e, SAVE_PRODUCT_FAILED))?;
            output::success(format!("Producto '{}' creado", form.nombre.trim()));
            Ok(())
        }

        ProductCommand::Update { id, fields } => {
            controller
                .refresh()
                .await
                .map_err(|e| fail(e, LOAD_PRODUCTS_FAILED))?;
            let current = find_product(&controller.snapshot().items, &id)?;
            let form = apply_fields(ProductForm::from_product(&current), &fields);
            controller
                .save(Some(&id), &form)
                .await
                .map_err(|e| fail(e, SAVE_PRODUCT_FAILED))?;
            output::success(format!("Producto '{}' actualizado", form.nombre.trim()));
            Ok(())
        }

        ProductCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!(
                "¿Estás seguro de que quieres eliminar este producto? ({id}) [s/N] "
            ))? {
                return Err(AdminError::Cancelled.into());
            }
            controller
                .delete(&id)
                .await
                .map_err(|e| fail(e, DELETE_PRODUCT_FAILED))?;
            output::success("Producto eliminado");
            Ok(())
        }

        ProductCommand::Toggle { id } => {
            controller
                .toggle_active(&id)
                .await
                .map_err(|e| fail(e, TOGGLE_PRODUCT_FAILED))?;
            output::success("Estado del producto actualizado");
            Ok(())
        }

        ProductCommand::Stock { id, stock } => {
            let sent = controller
                .update_stock(&id, &stock)
                .await
                .map_err(|e| fail(e, UPDATE_STOCK_FAILED))?;
            if sent {
                output::success(format!("Stock actualizado a {}", stock.trim()));
            } else {
                warn!("Ignoring stock value '{}'", stock);
                output::note(format!("'{stock}' no es un número entero; no se envió nada"));
            }
            Ok(())
        }
    }
}

fn print_products(ctx: &CliContext, products: &[Product]) -> anyhow::Result<()> {
    if ctx.json {
        return ctx.print_json(products);
    }
    if products.is_empty() {
        println!("{NO_PRODUCTS}");
        return Ok(());
    }
    print!(
        "{}",
        output::render_table(&PRODUCT_HEADERS, &output::product_rows(products))
    );
    Ok(())
}

/// Overlay the given fields on a form
pub fn apply_fields(mut form: ProductForm, fields: &ProductFields) -> ProductForm {
    if let Some(nombre) = &fields.nombre {
        form.nombre = nombre.clone();
    }
    if let Some(descripcion) = &fields.descripcion {
        form.descripcion = descripcion.clone();
    }
    if let Some(precio) = &fields.precio {
        form.precio = precio.clone();
    }
    if let Some(stock) = &fields.stock {
        form.stock = stock.clone();
    }
    if let Some(imagen) = &fields.imagen {
        form.imagen = imagen.clone();
    }
    if let Some(categoria) = &fields.categoria {
        form.categoria = Category::from(categoria.as_str());
    }
    if let Some(activo) = fields.activo {
        form.activo = activo;
    }
    form
}

fn find_product(products: &[Product], id: &str) -> anyhow::Result<Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| anyhow!("Producto no encontrado: {id}"))
}

/// Ask a yes/no question on the terminal; anything but `s`/`si`/`y` is no
fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_fields_keeps_omitted_values() {
        let base = ProductForm {
            nombre: "Combo".to_string(),
            precio: "12".to_string(),
            stock: "3".to_string(),
            ..ProductForm::default()
        };
        let fields = ProductFields {
            precio: Some("15.5".to_string()),
            categoria: Some("Bebidas".to_string()),
            activo: Some(false),
            ..ProductFields::default()
        };

        let form = apply_fields(base, &fields);

        assert_eq!(form.nombre, "Combo");
        assert_eq!(form.precio, "15.5");
        assert_eq!(form.stock, "3");
        assert_eq!(form.categoria, Category::Bebidas);
        assert!(!form.activo);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("s\n"));
        assert!(is_yes(" Sí "));
        assert!(is_yes("y"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }

    #[test]
    fn test_find_product_missing() {
        let err = find_product(&[], "zzz").unwrap_err();
        assert_eq!(err.to_string(), "Producto no encontrado: zzz");
    }
}
