// storefront-client/tests/orders_sync.rs
// Orders synchronizer: pagination bookkeeping and checkout

mod common;

use common::{Harness, cart_line, order};
use storefront_client::{
    Decimal, OrdersStorage, RejectionPolicy, StoreEvent, SumBaseline, SyncOp,
};

fn seed_orders(h: &Harness, count: usize) {
    h.server().orders = (0..count)
        .map(|i| {
            let id = format!("p{i}");
            order(&[(id.as_str(), 100.0, 1)])
        })
        .collect();
}

#[tokio::test]
async fn test_first_page_scenario() {
    let h = Harness::new();
    seed_orders(&h, 42);
    let orders_sync = h.client.orders();

    orders_sync.fetch_page(1, 10).await.unwrap();

    let orders = h.client.store().orders().await;
    assert_eq!(orders.pages.len(), 1);
    assert_eq!(orders.total, 42);
    assert_eq!(orders.visited_pages.iter().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(orders.orders().count(), 10);
    assert!(orders_sync.is_visited(1).await);
    assert!(!orders_sync.is_visited(2).await);
}

#[tokio::test]
async fn test_refetching_a_page_does_not_duplicate() {
    let h = Harness::new();
    seed_orders(&h, 42);
    let orders_sync = h.client.orders();

    orders_sync.fetch_page(3, 10).await.unwrap();
    orders_sync.fetch_page(3, 10).await.unwrap();

    let orders = h.client.store().orders().await;
    assert_eq!(orders.visited_pages.len(), 1);
    assert!(orders.is_visited(3));
    assert_eq!(orders.pages.len(), 1);
    assert_eq!(orders.orders().count(), 10);
    let first = &orders.page(3).unwrap().data[0];
    assert_eq!(first.lines[0].product.id, "p20");
}

#[tokio::test]
async fn test_append_storage_stacks_refetched_envelopes() {
    let h = Harness::with_orders_storage(OrdersStorage::Append);
    seed_orders(&h, 42);
    let orders_sync = h.client.orders();

    orders_sync.fetch_page(3, 10).await.unwrap();
    orders_sync.fetch_page(3, 10).await.unwrap();

    let orders = h.client.store().orders().await;
    assert_eq!(orders.pages.len(), 2);
    assert!(orders.pages.iter().all(|(page, _)| *page == 3));
    assert_eq!(orders.visited_pages.iter().copied().collect::<Vec<_>>(), vec![3]);
    assert_eq!(orders.orders().count(), 20);
    assert_eq!(orders.total, 42);
}

#[tokio::test]
async fn test_pages_fetched_concurrently_are_both_kept() {
    let h = Harness::new();
    seed_orders(&h, 15);
    let orders_sync = h.client.orders();

    let (first, second) = tokio::join!(orders_sync.fetch_page(1, 10), orders_sync.fetch_page(2, 10));
    first.unwrap();
    second.unwrap();

    let orders = h.client.store().orders().await;
    assert_eq!(orders.visited_pages.len(), 2);
    assert_eq!(orders.orders().count(), 15);
    assert_eq!(orders.total, 15);
}

#[tokio::test]
async fn test_fetch_failure_mutates_nothing() {
    let h = Harness::new();
    h.server().fail_orders = true;
    let before = h.client.store().snapshot().await;

    let err = h.client.orders().fetch_page(1, 10).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(h.client.store().snapshot().await, before);
    assert_eq!(h.client.store().revision().await, 0);
}

#[tokio::test]
async fn test_submit_success_clears_cart_and_history() {
    let h = Harness::with(SumBaseline::Legacy, RejectionPolicy::RestoreSnapshot);
    h.server().cart = vec![cart_line("a", 250.0, 2)];
    seed_orders(&h, 3);

    h.client.cart().fetch_cart().await.unwrap();
    h.client.orders().fetch_page(1, 10).await.unwrap();
    assert_eq!(h.client.store().cart().await.sum, Decimal::from(500));

    h.client.orders().submit_order().await.unwrap();

    let state = h.client.store().snapshot().await;
    assert!(state.cart.products.is_empty());
    assert_eq!(state.cart.sum, Decimal::ONE);
    assert!(state.orders.pages.is_empty());
    assert_eq!(state.orders.total, 1);
    assert!(state.orders.visited_pages.is_empty());

    let server = h.server();
    assert_eq!(server.submits, 1);
    assert!(server.cart.is_empty());
    assert_eq!(server.updates.last().unwrap()["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_submit_failure_changes_nothing() {
    let h = Harness::new();
    h.server().cart = vec![cart_line("a", 10.0, 1)];
    h.server().reject_submit = true;
    seed_orders(&h, 2);
    h.client.cart().fetch_cart().await.unwrap();
    h.client.orders().fetch_page(1, 10).await.unwrap();
    let before = h.client.store().snapshot().await;

    let err = h.client.orders().submit_order().await.unwrap_err();

    assert!(err.is_rejection());
    assert_eq!(h.client.store().snapshot().await, before);
    assert!(h.server().updates.is_empty());
}

#[tokio::test]
async fn test_submit_resets_history_even_if_remote_clear_fails() {
    let h = Harness::new();
    h.server().cart = vec![cart_line("a", 10.0, 1)];
    seed_orders(&h, 2);
    h.client.cart().fetch_cart().await.unwrap();
    h.client.orders().fetch_page(1, 10).await.unwrap();
    h.server().reject_clean = Some(500);
    let mut events = h.client.store().subscribe();

    h.client.orders().submit_order().await.unwrap();

    let state = h.client.store().snapshot().await;
    assert!(state.cart.products.is_empty());
    assert!(state.orders.pages.is_empty());

    let mut saw_clean_failure = false;
    while let Ok(event) = events.try_recv() {
        if let StoreEvent::SyncFailed { operation, .. } = event {
            assert_eq!(operation, SyncOp::CleanCart);
            saw_clean_failure = true;
        }
    }
    assert!(saw_clean_failure);
}

#[tokio::test]
async fn test_reset_twice_equals_reset_once() {
    let h = Harness::new();
    seed_orders(&h, 4);
    let orders_sync = h.client.orders();
    orders_sync.fetch_page(1, 2).await.unwrap();

    orders_sync.reset().await;
    let once = h.client.store().orders().await;
    orders_sync.reset().await;

    assert_eq!(h.client.store().orders().await, once);
    assert_eq!(once.total, 1);
    assert!(once.visited_pages.is_empty());
}
