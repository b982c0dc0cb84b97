//! End-to-end tests of the per-screen query state layer over the sample
//! data, the way the dashboard screens drive it.

use chrono::{TimeZone, Utc};
use grader::fixtures;
use grader::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn orders_query() -> ListQuery<Order> {
    let screens = ScreensConfig::default_config();
    let config = screens
        .screen("orders")
        .expect("orders screen is part of the default config")
        .to_list_config::<Order>();
    ListQuery::new(config)
}

#[test]
fn test_text_search_narrows_orders() {
    init_tracing();
    let orders = fixtures::sample_orders();
    let mut query = orders_query();

    query.set_text_query("OAK");
    let view = query.apply(&orders);

    assert_eq!(view.total, 2);
    assert!(view.items.iter().all(|o| o.species == "Red Oak"));
}

#[test]
fn test_category_and_text_combine_with_and() {
    init_tracing();
    let orders = fixtures::sample_orders();
    let mut query = orders_query();

    query.set_text_query("cascade");
    query.toggle_category_value("status", "pending");
    let view = query.apply(&orders);

    let ids: Vec<&str> = view.items.iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec!["ORD-1004"]);
}

#[test]
fn test_toggle_hides_cancelled_until_enabled() {
    init_tracing();
    let orders = fixtures::sample_orders();
    let screens = ScreensConfig::default_config();
    let config = screens
        .screen("orders")
        .expect("orders screen is part of the default config")
        .to_list_config::<Order>()
        .with_toggle("show_cancelled", |order: &Order| {
            order.status != OrderStatus::Cancelled
        });
    let mut query = ListQuery::new(config);

    // Toggle off by default: cancelled orders hidden
    let view = query.apply(&orders);
    assert_eq!(view.total, 4);
    assert!(view.items.iter().all(|o| o.status != OrderStatus::Cancelled));

    query.set_toggle("show_cancelled", true);
    let view = query.apply(&orders);
    assert_eq!(view.total, 5);
}

#[test]
fn test_date_range_bounds_are_inclusive() {
    init_tracing();
    let claims = fixtures::sample_claims();
    let screens = ScreensConfig::default_config();
    let config = screens
        .screen("claims")
        .expect("claims screen is part of the default config")
        .to_list_config::<Claim>();
    let mut query = ListQuery::new(config);

    // CLM-3002 was filed 2024-03-05 08:00; a range ending exactly there
    // still includes it
    let from = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap();
    query.set_date_range(DateRange::new(Some(from), Some(to)));

    let view = query.apply(&claims);
    let ids: Vec<&str> = view.items.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["CLM-3002"]);
}

#[test]
fn test_badge_counts_come_from_the_full_set() {
    init_tracing();
    let claims = fixtures::sample_claims();
    let screens = ScreensConfig::default_config();
    let config = screens
        .screen("claims")
        .expect("claims screen is part of the default config")
        .to_list_config::<Claim>();
    let mut query = ListQuery::new(config);

    query.toggle_category_value("status", "new");
    let view = query.apply(&claims);
    assert_eq!(view.total, 2);

    // Badges stay computed over the unfiltered set
    let counts = query.counts(&claims, "status");
    assert_eq!(counts.get("new"), Some(&2));
    assert_eq!(counts.get("in_review"), Some(&1));
    assert_eq!(counts.get("closed"), Some(&1));
}

#[test]
fn test_narrowing_a_filter_clamps_a_deep_page() {
    init_tracing();
    let boards = fixtures::sample_boards();
    let screens = ScreensConfig::default_config();
    let mut screen = screens
        .screen("boards")
        .expect("boards screen is part of the default config")
        .clone();
    screen.page_size = 2;
    let mut query = ListQuery::new(screen.to_list_config::<Board>());

    query.set_page(2);
    let view = query.apply(&boards);
    assert_eq!(view.page_index, 2);
    assert_eq!(view.total_pages, 3);

    // Filtering down to three FAS boards leaves only two pages; a criteria
    // change resets to the first page outright
    query.toggle_category_value("grade", "FAS");
    assert_eq!(query.page_index(), 0);

    query.set_page(5); // stale request past the end
    let view = query.apply(&boards);
    assert_eq!(view.total, 3);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.page_index, 1);
    assert_eq!(view.items.len(), 1);
}

#[test]
fn test_sort_by_due_date_descending_keeps_page_state() {
    init_tracing();
    let orders = fixtures::sample_orders();
    let mut query = orders_query();

    query.set_sort(Some(SortSpec::descending("due_date")));
    let view = query.apply(&orders);

    // ORD-1004 has no due date; Null orders first ascending, so it lands
    // last when descending
    assert_eq!(view.items.last().map(|o| o.id()), Some("ORD-1004"));
    assert_eq!(view.items.first().map(|o| o.id()), Some("ORD-1002"));
}

#[test]
fn test_manual_reorder_is_separate_from_the_pipeline() {
    let mut orders = fixtures::sample_orders();
    move_item(&mut orders, 4, 0);
    assert_eq!(orders[0].id(), "ORD-1005");

    // criteria-driven queries still see the caller's manual order
    let query = orders_query();
    let view = query.apply(&orders);
    assert_eq!(view.items[0].id(), "ORD-1005");
}
