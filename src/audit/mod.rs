pub mod audit_codec;
pub mod row_key;

pub use audit_codec::{encode, partition_key_for, FALLBACK_PARTITION};
pub use row_key::{RowKeyGenerator, UuidRowKeyGenerator};
