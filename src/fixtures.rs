//! Deterministic sample data for the four list screens
//!
//! The dashboard mocks its backend with in-browser sample data; these
//! fixtures are that data's stand-in, minus the randomness, so tests and
//! demos are reproducible. Seed an
//! [`InMemoryRecordSource`](crate::source::InMemoryRecordSource) with them
//! or feed them straight to a [`ListQuery`](crate::query::ListQuery).

use crate::entities::{Board, BoardStatus, Claim, ClaimStatus, Holiday, Order, OrderStatus};
use chrono::{DateTime, TimeZone, Utc};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 8, 0, 0)
        .earliest()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(
            "ORD-1001",
            "NG-1001".to_string(),
            "Cascade Timber".to_string(),
            "Red Oak".to_string(),
            OrderStatus::InProduction,
            240,
            day(2024, 3, 4),
            Some(day(2024, 3, 18)),
        ),
        Order::new(
            "ORD-1002",
            "NG-1002".to_string(),
            "Blue Ridge Flooring".to_string(),
            "Hard Maple".to_string(),
            OrderStatus::Pending,
            120,
            day(2024, 3, 6),
            Some(day(2024, 3, 27)),
        ),
        Order::new(
            "ORD-1003",
            "NG-1003".to_string(),
            "Lakeshore Millwork".to_string(),
            "Black Walnut".to_string(),
            OrderStatus::Completed,
            85,
            day(2024, 2, 19),
            Some(day(2024, 3, 1)),
        ),
        Order::new(
            "ORD-1004",
            "NG-1004".to_string(),
            "Cascade Timber".to_string(),
            "Red Oak".to_string(),
            OrderStatus::Pending,
            310,
            day(2024, 3, 11),
            None,
        ),
        Order::new(
            "ORD-1005",
            "NG-1005".to_string(),
            "Pioneer Cabinets".to_string(),
            "White Ash".to_string(),
            OrderStatus::Cancelled,
            60,
            day(2024, 1, 29),
            Some(day(2024, 2, 12)),
        ),
    ]
}

pub fn sample_boards() -> Vec<Board> {
    vec![
        Board::new(
            "BRD-2001",
            "BATCH-31".to_string(),
            "Red Oak".to_string(),
            "FAS".to_string(),
            BoardStatus::Graded,
            1,
            8.5,
            day(2024, 3, 12),
        ),
        Board::new(
            "BRD-2002",
            "BATCH-31".to_string(),
            "Red Oak".to_string(),
            "1 Common".to_string(),
            BoardStatus::Graded,
            4,
            6.0,
            day(2024, 3, 12),
        ),
        Board::new(
            "BRD-2003",
            "BATCH-31".to_string(),
            "Red Oak".to_string(),
            "FAS".to_string(),
            BoardStatus::Graded,
            0,
            9.25,
            day(2024, 3, 12),
        ),
        Board::new(
            "BRD-2004",
            "BATCH-32".to_string(),
            "Hard Maple".to_string(),
            "Select".to_string(),
            BoardStatus::Pending,
            2,
            7.5,
            day(2024, 3, 13),
        ),
        Board::new(
            "BRD-2005",
            "BATCH-32".to_string(),
            "Hard Maple".to_string(),
            "2 Common".to_string(),
            BoardStatus::Rejected,
            9,
            5.0,
            day(2024, 3, 13),
        ),
        Board::new(
            "BRD-2006",
            "BATCH-33".to_string(),
            "Black Walnut".to_string(),
            "FAS".to_string(),
            BoardStatus::Graded,
            1,
            8.0,
            day(2024, 3, 14),
        ),
    ]
}

pub fn sample_claims() -> Vec<Claim> {
    vec![
        Claim::new(
            "CLM-3001",
            "NG-C-3001".to_string(),
            "Cascade Timber".to_string(),
            ClaimStatus::New,
            day(2024, 3, 8),
            "moisture content above spec in bundle 2".to_string(),
        ),
        Claim::new(
            "CLM-3002",
            "NG-C-3002".to_string(),
            "Blue Ridge Flooring".to_string(),
            ClaimStatus::InReview,
            day(2024, 3, 5),
            "grade mix short on FAS".to_string(),
        ),
        Claim::new(
            "CLM-3003",
            "NG-C-3003".to_string(),
            "Pioneer Cabinets".to_string(),
            ClaimStatus::New,
            day(2024, 3, 10),
            "warped boards in bundle 4".to_string(),
        ),
        Claim::new(
            "CLM-3004",
            "NG-C-3004".to_string(),
            "Lakeshore Millwork".to_string(),
            ClaimStatus::Closed,
            day(2024, 2, 2),
            "short count, credited".to_string(),
        ),
    ]
}

pub fn sample_holidays() -> Vec<Holiday> {
    vec![
        Holiday::new(
            "HOL-4001",
            "New Year's Day".to_string(),
            day(2024, 1, 1),
            true,
            None,
        ),
        Holiday::new(
            "HOL-4002",
            "Mill Maintenance Shutdown".to_string(),
            day(2024, 7, 8),
            false,
            Some("north yard".to_string()),
        ),
        Holiday::new(
            "HOL-4003",
            "Thanksgiving".to_string(),
            day(2024, 11, 28),
            true,
            None,
        ),
    ]
}
