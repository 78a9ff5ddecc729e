//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with automatic cleanup
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.product_name("main");
//!     let price = builder.price(0);
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Longest product name the schema accepts
const MAX_NAME_LEN: usize = 20;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A product name unique to this seed and suffix, always 3 to 20 chars.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(42).product_name("main");
    /// assert_eq!(name, "p42-main");
    /// ```
    pub fn product_name(&self, suffix: &str) -> String {
        let mut name = format!("p{}-{}", self.seed % 100_000, suffix);
        if let Some((cut, _)) = name.char_indices().nth(MAX_NAME_LEN) {
            name.truncate(cut);
        }
        name
    }

    /// A price of at least 1.0 with two decimals, distinct per index
    pub fn price(&self, index: u32) -> f64 {
        let cents = 100 + (self.seed % 9_000) + u64::from(index) * 250;
        cents as f64 / 100.0
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that two prices are equal up to floating-point noise (`1e-9`)
    pub fn assert_price_eq(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{}: expected price {}, got {}",
            context,
            expected,
            actual
        );
    }
}
