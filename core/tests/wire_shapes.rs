use gemdesk_core::protocol::{OrderStatus, OrderSummary, ProductRecord};

#[test]
fn product_record_defaults_optional_columns() {
    let record: ProductRecord = serde_json::from_str(
        r#"{
            "id": 7,
            "name": "Ruby",
            "category": "gemstones",
            "actual_price": 100.0,
            "sale_price": 150.0
        }"#,
    )
    .unwrap();
    assert_eq!(record.quantity, 0);
    assert_eq!(record.description, "");
    assert!(record.image_urls.is_empty());
    assert_eq!(record.video_url, None);
}

#[test]
fn order_status_uses_snake_case_on_the_wire() {
    let summary: OrderSummary = serde_json::from_str(
        r#"{
            "id": 3,
            "customer_name": "Asha",
            "total": 4200.0,
            "items": 2,
            "status": "shipped",
            "placed_at": "2025-11-02"
        }"#,
    )
    .unwrap();
    assert_eq!(summary.status, OrderStatus::Shipped);

    let encoded = serde_json::to_string(&OrderStatus::Delivered).unwrap();
    assert_eq!(encoded, "\"delivered\"");
}

#[test]
fn status_slug_round_trips() {
    for &status in OrderStatus::ALL {
        assert_eq!(OrderStatus::from_slug(status.slug()), Some(status));
    }
    assert_eq!(OrderStatus::from_slug("returned"), None);
}
