//! Database schema definitions

/// SQL to create the parcel table
pub const CREATE_PARCEL_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS parcel (
    number INTEGER PRIMARY KEY AUTOINCREMENT,
    client INTEGER NOT NULL,
    status TEXT NOT NULL,
    address TEXT NOT NULL,
    created_at TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_parcel_client ON parcel(client)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_PARCEL_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
