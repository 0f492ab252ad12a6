//! Database operations: connection pool, schema, row mapping, and queries.

pub mod pool;
pub mod queries;
pub mod row;
pub mod schema;
#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use pool::{init_db_pool_with_path, init_memory_pool};
pub use queries::{
    delete_qr_code, increment_scans, insert_qr_code, select_qr_codes_by_id,
    select_qr_codes_by_shop, update_qr_code,
};
pub use row::record_from_row;
pub use schema::{create_qr_codes_table, has_qr_codes_table};
