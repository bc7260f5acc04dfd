//! Order-domain primitives for the KORE food-ordering service.
//!
//! This crate holds the pure, I/O-free parts of the system: the menu
//! category vocabulary, the client-style cart reducer, order-total
//! pricing, and the order status state machine. Persistence and HTTP
//! concerns live in the `kore-app` and `kore-json` crates.

pub mod cart;
pub mod category;
pub mod pricing;
pub mod snapshot;
pub mod status;

pub use cart::Cart;
pub use category::Category;
pub use pricing::{order_total, round_total};
pub use snapshot::{MenuItemSnapshot, OrderLine};
pub use status::{Actor, OrderStatus, TransitionError, check_transition};
