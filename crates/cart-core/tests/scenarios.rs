//! Cart Scenario Tests
//!
//! Page-level flows driven through the controller with a recording page.

mod common;

use cart_core::{CartError, CheckoutOutcome, MemoryStorage, NewCartItem};
use common::{boot, Rendered, RecordingPage};
use rust_decimal::Decimal;

fn sofa() -> NewCartItem {
    NewCartItem::new("p1", "Sofa", Decimal::new(19999, 2), "sofa.jpg")
}

fn seeded_storage() -> MemoryStorage {
    MemoryStorage::with_item(
        "furniCart",
        r#"[{"id":"p1","name":"Sofa","price":"10","image":"sofa.jpg","quantity":2},
            {"id":"p2","name":"Lamp","price":"5","image":"lamp.jpg","quantity":1}]"#,
    )
}

#[test]
fn test_add_sofa_to_empty_cart() {
    let storage = MemoryStorage::new();
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);
    assert_eq!(page.display(), Some(Rendered::Empty));

    cart.add_to_cart(sofa());

    let item = cart.cart().get("p1").expect("sofa in cart");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.price, Decimal::new(19999, 2));
    assert_eq!(page.badge(), Some(1));
    match page.display() {
        Some(Rendered::Items { lines, subtotal, total }) => {
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].unit_price, "$199.99");
            assert_eq!(lines[0].line_total, "$199.99");
            assert_eq!(subtotal, "$199.99");
            assert_eq!(total, "$199.99");
        }
        other => panic!("expected rows, got {:?}", other),
    }
    assert_eq!(page.messages(), vec!["Sofa added to cart!".to_string()]);
    assert!(storage.raw("furniCart").unwrap().contains(r#""id":"p1""#));
}

#[test]
fn test_decrease_last_unit_shows_empty_state() {
    let storage = MemoryStorage::new();
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);
    cart.add_to_cart(sofa());

    cart.decrease_quantity("p1");

    assert!(cart.cart().is_empty());
    assert_eq!(page.display(), Some(Rendered::Empty));
    assert_eq!(page.badge(), Some(0));
    assert_eq!(storage.raw("furniCart").as_deref(), Some("[]"));
}

#[test]
fn test_restored_cart_totals() {
    let storage = seeded_storage();
    let page = RecordingPage::cart_page();
    let _cart = boot(&storage, &page);

    assert_eq!(page.badge(), Some(3));
    match page.display() {
        Some(Rendered::Items { lines, subtotal, total }) => {
            let ids: Vec<&str> = lines.iter().map(|l| l.id.as_str()).collect();
            assert_eq!(ids, vec!["p1", "p2"]);
            assert_eq!(subtotal, "$25.00");
            assert_eq!(total, "$25.00");
        }
        other => panic!("expected rows, got {:?}", other),
    }
}

#[test]
fn test_checkout_empty_cart_only_notifies() {
    let storage = MemoryStorage::new();
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);

    assert_eq!(cart.checkout(), CheckoutOutcome::Empty);
    assert_eq!(
        page.messages(),
        vec!["Your cart is empty. Add items before checkout.".to_string()]
    );
    assert!(page.confirmations().is_empty());
}

#[test]
fn test_checkout_with_items_shows_confirmation() {
    let storage = seeded_storage();
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);

    assert_eq!(cart.checkout(), CheckoutOutcome::Confirmed);
    assert_eq!(page.confirmations(), vec!["Proceeding to checkout...".to_string()]);
    assert!(page.messages().is_empty());
    assert_eq!(cart.cart().item_count(), 3);
}

#[test]
fn test_unknown_ids_are_silent_but_still_render() {
    let storage = seeded_storage();
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);
    let before = cart.cart().clone();
    let renders = page.renders();

    cart.increase_quantity("ghost");
    cart.decrease_quantity("ghost");
    cart.remove_item("ghost");

    assert_eq!(cart.cart(), &before);
    assert!(page.messages().is_empty());
    assert_eq!(page.renders(), renders + 3);
}

#[test]
fn test_remove_announces_stored_name() {
    let storage = seeded_storage();
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);

    cart.remove_item("p1");

    assert!(cart.cart().get("p1").is_none());
    assert_eq!(page.messages(), vec!["Sofa removed from cart".to_string()]);
    assert_eq!(page.badge(), Some(1));
}

#[test]
fn test_product_page_updates_badge_only() {
    let storage = MemoryStorage::new();
    let page = RecordingPage::product_page();
    let mut cart = boot(&storage, &page);

    cart.add_to_cart(sofa());
    cart.add_to_cart(sofa());

    assert_eq!(page.badge(), Some(2));
    assert_eq!(page.display(), None);
}

#[test]
fn test_corrupted_storage_starts_empty() {
    let storage = MemoryStorage::with_item("furniCart", "{oops");
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);

    assert!(cart.cart().is_empty());
    assert_eq!(page.display(), Some(Rendered::Empty));

    cart.add_to_cart(sofa());
    assert_eq!(cart.repository().load().item_count(), 1);
}

#[test]
fn test_render_is_idempotent() {
    let storage = seeded_storage();
    let page = RecordingPage::cart_page();
    let cart = boot(&storage, &page);

    let first = page.display();
    cart.render();
    assert_eq!(page.display(), first);
}

#[test]
fn test_add_button_attributes() {
    let storage = MemoryStorage::new();
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);

    let request = NewCartItem::from_attributes(
        Some("p9".into()),
        Some("Stool".into()),
        Some("49.5".into()),
        Some("stool.jpg".into()),
    )
    .expect("valid attributes");
    cart.add_to_cart(request);
    assert_eq!(cart.cart().get("p9").unwrap().image, "stool.jpg");

    let bad = NewCartItem::from_attributes(Some("p9".into()), None, Some("free".into()), None);
    assert!(matches!(bad, Err(CartError::InvalidPrice { .. })));
}

#[test]
fn test_oversized_price_is_never_added() {
    let storage = MemoryStorage::new();
    let page = RecordingPage::cart_page();
    let mut cart = boot(&storage, &page);

    let huge = NewCartItem::from_attributes(
        Some("vault".into()),
        Some("Vault".into()),
        Some("79228162514264337593543950335".into()),
        None,
    );
    assert!(matches!(huge, Err(CartError::InvalidPrice { .. })));

    let capped = NewCartItem::from_attributes(
        Some("vault".into()),
        Some("Vault".into()),
        Some("1000000000".into()),
        None,
    )
    .unwrap();
    cart.add_to_cart(capped.clone());
    cart.add_to_cart(capped);

    assert_eq!(cart.cart().item_count(), 2);
    match page.display() {
        Some(Rendered::Items { subtotal, .. }) => assert_eq!(subtotal, "$2000000000.00"),
        other => panic!("expected rows, got {:?}", other),
    }
}

#[test]
fn test_overflowing_snapshot_boots_without_panic() {
    let storage = MemoryStorage::with_item(
        "furniCart",
        r#"[{"id":"vault","name":"Vault","price":"79228162514264337593543950335","image":"","quantity":2},
            {"id":"p2","name":"Lamp","price":"5","image":"lamp.jpg","quantity":1}]"#,
    );
    let page = RecordingPage::cart_page();
    let cart = boot(&storage, &page);

    assert!(cart.cart().get("vault").is_none());
    assert_eq!(page.badge(), Some(1));
    match page.display() {
        Some(Rendered::Items { subtotal, total, .. }) => {
            assert_eq!(subtotal, "$5.00");
            assert_eq!(total, "$5.00");
        }
        other => panic!("expected rows, got {:?}", other),
    }
}
