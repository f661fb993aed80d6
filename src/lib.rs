// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod item;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use config::{load_config, ConfigError, StockroomConfig};
pub use item::{
    derive_sku, Inventory, Item, ItemCreator, ItemField, ItemManager, ItemPatch, RawQuantity,
    ValidationError, ValidationRules,
};
pub use logging::{init_logging, LogConfig};
pub use report::{ItemInfo, ItemReporter, ReportManager};
