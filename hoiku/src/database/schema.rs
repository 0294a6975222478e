//! Database schema definitions and SQL constants.

/// Current schema version, stored in the metadata table.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Key-value table holding the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// One row per reservation.
///
/// Dates are `YYYY-MM-DD`, times `HH:MM`, timestamps RFC 3339 in UTC.
/// `type` holds the ASCII slug and `allergies` a JSON array. Rows are
/// listed in insertion order (`rowid`).
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY NOT NULL,
        date TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        child_id TEXT NOT NULL,
        child_name TEXT NOT NULL,
        child_age INTEGER,
        child_birth_date TEXT,
        parent_id TEXT NOT NULL,
        parent_name TEXT NOT NULL,
        parent_phone TEXT,
        parent_email TEXT,
        status TEXT NOT NULL,
        type TEXT NOT NULL,
        allergies TEXT NOT NULL DEFAULT '[]',
        medical_notes TEXT,
        special_requests TEXT,
        notes TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        checked_in_at TEXT,
        checked_out_at TEXT
    )";

/// Index for date-range lookups.
pub const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations(date)";

/// Index for status lookups.
pub const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_status ON reservations(status)";

/// Reads the schema version.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// Writes the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Column list shared by every reservation SELECT, in row-decoding order.
macro_rules! reservation_columns {
    () => {
        "id, date, start_time, end_time, \
         child_id, child_name, child_age, child_birth_date, \
         parent_id, parent_name, parent_phone, parent_email, \
         status, type, allergies, medical_notes, special_requests, notes, \
         created_at, updated_at, checked_in_at, checked_out_at"
    };
}

/// Inserts a reservation. Parameters follow the column order.
pub const INSERT_RESERVATION: &str = concat!(
    "INSERT INTO reservations (",
    reservation_columns!(),
    ") VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22)"
);

/// Rewrites every column except the id, matched on `?1`.
pub const UPDATE_RESERVATION: &str = r"
    UPDATE reservations SET
        date = ?2, start_time = ?3, end_time = ?4,
        child_id = ?5, child_name = ?6, child_age = ?7, child_birth_date = ?8,
        parent_id = ?9, parent_name = ?10, parent_phone = ?11, parent_email = ?12,
        status = ?13, type = ?14, allergies = ?15,
        medical_notes = ?16, special_requests = ?17, notes = ?18,
        created_at = ?19, updated_at = ?20, checked_in_at = ?21, checked_out_at = ?22
    WHERE id = ?1
";

/// Selects one reservation by id.
pub const SELECT_RESERVATION: &str = concat!(
    "SELECT ",
    reservation_columns!(),
    " FROM reservations WHERE id = ?"
);

/// Selects every reservation in insertion order.
pub const LIST_RESERVATIONS: &str = concat!(
    "SELECT ",
    reservation_columns!(),
    " FROM reservations ORDER BY rowid"
);

/// Deletes a reservation by id.
pub const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

/// Deletes every reservation.
pub const DELETE_ALL_RESERVATIONS: &str = "DELETE FROM reservations";
