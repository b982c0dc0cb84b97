//! Record types backing the dashboard's list screens

pub mod board;
pub mod claim;
pub mod holiday;
pub mod macros;
pub mod order;

pub use board::{Board, BoardStatus};
pub use claim::{Claim, ClaimStatus};
pub use holiday::Holiday;
pub use order::{Order, OrderStatus};
