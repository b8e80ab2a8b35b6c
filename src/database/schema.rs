//! Table declarations
//!
//! Tables are registered explicitly: callers hand a slice of `TableDef`
//! to `Database::init`, which creates them in order.

/// A table the bootstrap is able to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    /// `CREATE TABLE IF NOT EXISTS` statement for this table
    pub ddl: &'static str,
}

/// Implemented by row types that own a table
pub trait Table {
    const TABLE: TableDef;
}
