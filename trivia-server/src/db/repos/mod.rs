//! Postgres repositories
//!
//! Each repository borrows the pool and maps rows into core types.
//! Ids are `SERIAL` (int4) columns; ids outside that range cannot exist.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

/// Narrow an API id to the column type. `None` means no row can match.
pub(crate) fn db_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_ids() {
        assert_eq!(db_id(7), Some(7));
        assert_eq!(db_id(i64::from(i32::MAX) + 1), None);
        assert_eq!(db_id(i64::MIN), None);
    }
}
