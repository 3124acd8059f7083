mod common;

use common::{API, ONE_PRODUCT, ScriptedTransport, client};
use pedidos_api::{FetchOutcome, OrderController, ProductController};
use pedidos_core::{OrderFilters, OrderStatus, ProductFilters, ProductForm};
use serde_json::json;

const TWO_ORDERS: &str = r#"{"ordenes":[{"_id":"a","total":5},{"_id":"b","total":7}],"pagination":{"totalItems":25,"totalPages":3}}"#;

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_refresh_applies_wrapped_response() {
    let transport = ScriptedTransport::new();
    transport.reply(200, ONE_PRODUCT);
    let controller = ProductController::new(client(&transport), 10);

    let outcome = controller.refresh().await.unwrap();

    assert_eq!(outcome, FetchOutcome::Applied);
    let state = controller.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].precio, 10.0);
}

#[tokio::test]
async fn test_confirmed_delete_then_refetch() {
    let transport = ScriptedTransport::new();
    transport.reply(200, r#"{"success":true}"#);
    transport.reply(200, r#"{"success":true,"data":[]}"#);
    let controller = ProductController::new(client(&transport), 10);

    controller.delete("1").await.unwrap();

    assert_eq!(
        transport.log(),
        vec![
            format!("DELETE {API}/api/products/1"),
            format!("GET {API}/api/products"),
        ]
    );
    assert!(controller.snapshot().items.is_empty());
}

#[tokio::test]
async fn test_each_mutation_refetches_exactly_once() {
    let transport = ScriptedTransport::new();
    // toggle + refetch
    transport.reply(200, r#"{"success":true}"#).reply(200, ONE_PRODUCT);
    // stock + refetch
    transport.reply(200, "").reply(200, ONE_PRODUCT);
    // create + refetch
    transport.reply(201, r#"{"_id":"2"}"#).reply(200, ONE_PRODUCT);
    let controller = ProductController::new(client(&transport), 10);

    controller.toggle_active("1").await.unwrap();
    assert!(controller.update_stock("1", "9").await.unwrap());
    let form = ProductForm {
        nombre: "Combo".to_string(),
        precio: "12.5".to_string(),
        stock: "3".to_string(),
        ..ProductForm::default()
    };
    controller.save(None, &form).await.unwrap();

    let log = transport.log();
    assert_eq!(log.len(), 6);
    assert_eq!(log[0], format!("PATCH {API}/api/products/1/toggle-activo"));
    assert_eq!(log[2], format!("PATCH {API}/api/products/1/stock"));
    assert_eq!(log[4], format!("POST {API}/api/products"));
    for index in [1, 3, 5] {
        assert_eq!(log[index], format!("GET {API}/api/products"));
    }
    assert_eq!(controller.snapshot().items[0].nombre, "X");
}

#[tokio::test]
async fn test_each_stock_keystroke_sends_its_own_update() {
    let transport = ScriptedTransport::new();
    transport.reply(200, "").reply(200, ONE_PRODUCT);
    transport.reply(200, "").reply(200, ONE_PRODUCT);
    let controller = ProductController::new(client(&transport), 10);

    // Typing "12" reports "1", then "12"; clearing the field reports ""
    assert!(controller.update_stock("1", "1").await.unwrap());
    assert!(controller.update_stock("1", "12").await.unwrap());
    assert!(!controller.update_stock("1", "").await.unwrap());

    let requests = transport.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].body.clone().unwrap()["stock"], json!(1));
    assert_eq!(requests[2].body.clone().unwrap()["stock"], json!(12));
}

#[tokio::test]
async fn test_failed_mutation_does_not_refetch() {
    let transport = ScriptedTransport::new();
    transport.reply(404, r#"{"message":"Producto no encontrado"}"#);
    let controller = ProductController::new(client(&transport), 10);

    let err = controller.toggle_active("zzz").await.unwrap_err();

    assert_eq!(
        err.user_message("Error al cambiar estado del producto"),
        "Producto no encontrado"
    );
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let transport = ScriptedTransport::new();
    let controller = ProductController::new(client(&transport), 10);

    let form = ProductForm {
        nombre: "Combo".to_string(),
        precio: "0".to_string(),
        stock: "3".to_string(),
        ..ProductForm::default()
    };
    let err = controller.save(Some("1"), &form).await.unwrap_err();

    assert_eq!(err.to_string(), "El precio debe ser mayor a 0");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_update_uses_put_with_coerced_numbers() {
    let transport = ScriptedTransport::new();
    transport.reply(200, r#"{"success":true}"#).reply(200, ONE_PRODUCT);
    let controller = ProductController::new(client(&transport), 10);

    let form = ProductForm {
        nombre: "Combo".to_string(),
        precio: "12.50".to_string(),
        stock: "4".to_string(),
        ..ProductForm::default()
    };
    controller.save(Some("1"), &form).await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.url, format!("{API}/api/products/1"));
    let body = request.body.clone().unwrap();
    assert_eq!(body["precio"], json!(12.5));
    assert_eq!(body["stock"], json!(4));
    assert_eq!(body["categoria"], json!("Hamburguesas"));
    assert_eq!(body["activo"], json!(true));
}

#[tokio::test]
async fn test_non_numeric_stock_is_ignored() {
    let transport = ScriptedTransport::new();
    let controller = ProductController::new(client(&transport), 10);

    assert!(!controller.update_stock("1", "abc").await.unwrap());
    assert!(!controller.update_stock("1", "").await.unwrap());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_failed_fetch_sets_panel_error() {
    let transport = ScriptedTransport::new();
    transport.fail("timeout");
    let controller = ProductController::new(client(&transport), 10);

    assert!(controller.refresh().await.is_err());

    let state = controller.snapshot();
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Error de conexión. Verifica que el servidor esté funcionando.")
    );
}

#[tokio::test]
async fn test_product_filters_build_query() {
    let transport = ScriptedTransport::new();
    transport.reply(200, "[]");
    let controller = ProductController::new(client(&transport), 10);

    let filters = ProductFilters {
        activo: Some(true),
        search: "papas".to_string(),
        ..ProductFilters::default()
    };
    controller.set_filters(filters.clone()).await.unwrap();

    assert_eq!(
        transport.log(),
        vec![format!("GET {API}/api/products?activo=true&buscar=papas")]
    );
    assert_eq!(controller.snapshot().filters, filters);
}

// ============================================================================
// Fetch Ordering
// ============================================================================

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let transport = ScriptedTransport::new();
    // The newer fetch completes first
    transport.reply(200, r#"[{"_id":"new"}]"#);
    transport.reply(200, r#"[{"_id":"old"}]"#);
    let controller = ProductController::new(client(&transport), 10);

    let older = controller.begin_refresh();
    let newer = controller.begin_refresh();
    assert!(newer.generation > older.generation);

    let first = controller.complete_refresh(newer).await.unwrap();
    let second = controller.complete_refresh(older).await.unwrap();

    assert_eq!(first, FetchOutcome::Applied);
    assert_eq!(second, FetchOutcome::Stale);
    let state = controller.snapshot();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "new");
}

#[tokio::test]
async fn test_stale_failure_does_not_overwrite() {
    let transport = ScriptedTransport::new();
    transport.reply(200, ONE_PRODUCT);
    transport.fail("late failure");
    let controller = ProductController::new(client(&transport), 10);

    let older = controller.begin_refresh();
    let newer = controller.begin_refresh();
    controller.complete_refresh(newer).await.unwrap();

    assert_eq!(
        controller.complete_refresh(older).await.unwrap(),
        FetchOutcome::Stale
    );
    assert_eq!(controller.snapshot().error, None);
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_orders_pagination_and_filter_reset() {
    let transport = ScriptedTransport::new();
    transport.reply(200, TWO_ORDERS);
    transport.reply(200, TWO_ORDERS);
    transport.reply(200, TWO_ORDERS);
    let controller = OrderController::new(client(&transport), 10);

    controller.refresh().await.unwrap();
    let state = controller.snapshot();
    assert_eq!(state.pagination.total, 25);
    assert_eq!(state.pagination.total_pages, 3);

    controller.set_page(3).await.unwrap();
    assert_eq!(controller.snapshot().pagination.page, 3);

    let filters = OrderFilters {
        search: "luis".to_string(),
        ..OrderFilters::default()
    };
    controller.set_filters(filters).await.unwrap();
    assert_eq!(controller.snapshot().pagination.page, 1);

    assert_eq!(
        transport.log(),
        vec![
            format!("GET {API}/api/orders?page=1&limit=10"),
            format!("GET {API}/api/orders?page=3&limit=10"),
            format!("GET {API}/api/orders?page=1&limit=10&search=luis"),
        ]
    );
}

#[tokio::test]
async fn test_page_is_clamped() {
    let transport = ScriptedTransport::new();
    transport.reply(200, TWO_ORDERS);
    transport.reply(200, TWO_ORDERS);
    transport.reply(200, TWO_ORDERS);
    let controller = OrderController::new(client(&transport), 10);

    controller.refresh().await.unwrap();
    controller.set_page(0).await.unwrap();
    assert_eq!(controller.snapshot().pagination.page, 1);
    controller.set_page(99).await.unwrap();
    assert_eq!(controller.snapshot().pagination.page, 3);
}

#[tokio::test]
async fn test_totals_derived_from_length_without_pagination() {
    let transport = ScriptedTransport::new();
    transport.reply(200, r#"[{"_id":"a"},{"_id":"b"},{"_id":"c"}]"#);
    let controller = OrderController::new(client(&transport), 2);

    controller.refresh().await.unwrap();

    let state = controller.snapshot();
    assert_eq!(state.pagination.total, 3);
    assert_eq!(state.pagination.total_pages, 2);
}

#[tokio::test]
async fn test_status_change_then_refetch() {
    let transport = ScriptedTransport::new();
    transport.reply(200, r#"{"success":true}"#);
    transport.reply(200, TWO_ORDERS);
    let controller = OrderController::new(client(&transport), 10);

    controller
        .update_status("a", &OrderStatus::Cancelado)
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, Some(json!({"estado": "cancelado"})));
    assert_eq!(requests[1].url, format!("{API}/api/orders?page=1&limit=10"));
    assert_eq!(controller.snapshot().items.len(), 2);
}

#[tokio::test]
async fn test_load_page_before_totals() {
    let transport = ScriptedTransport::new();
    transport.reply(200, TWO_ORDERS);
    let controller = OrderController::new(client(&transport), 10);

    let filters = OrderFilters {
        estado: Some(OrderStatus::Enviado),
        ..OrderFilters::default()
    };
    controller.load_page(filters, 2).await.unwrap();

    assert_eq!(
        transport.log(),
        vec![format!("GET {API}/api/orders?page=2&limit=10&estado=enviado")]
    );
    let state = controller.snapshot();
    assert_eq!(state.pagination.page, 2);
    assert_eq!(state.pagination.total_pages, 3);
}
