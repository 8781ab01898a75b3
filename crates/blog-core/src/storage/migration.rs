//! Record file format and schema checks

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current schema version
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// On-disk envelope around a stored record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFile<T> {
    /// Schema version for migration
    pub schema_version: u32,
    /// The stored record
    pub record: T,
    /// Extra fields for forward compatibility
    #[serde(flatten, default)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl<T> RecordFile<T> {
    /// Wrap a record with the current schema version
    pub fn new(record: T) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            record,
            extra: HashMap::new(),
        }
    }

    /// Check the schema version and unwrap the record.
    ///
    /// Files written by a newer release are refused; older versions are
    /// read as-is since version 1 is the first format.
    pub fn into_record(self) -> Result<T> {
        if self.schema_version == 0 || self.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(BlogError::UnsupportedSchemaVersion(self.schema_version));
        }
        Ok(self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_file_creation() {
        let file = RecordFile::new("payload".to_string());
        assert_eq!(file.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(file.into_record().unwrap(), "payload");
    }

    #[test]
    fn test_future_version_rejected() {
        let mut file = RecordFile::new(1u32);
        file.schema_version = CURRENT_SCHEMA_VERSION + 1;
        assert!(matches!(
            file.into_record(),
            Err(BlogError::UnsupportedSchemaVersion(_))
        ));
    }

    #[test]
    fn test_extra_fields_preserved() {
        let json = r#"{"schema_version":1,"record":5,"written_by":"0.2.0"}"#;
        let file: RecordFile<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(file.extra.get("written_by").unwrap(), "0.2.0");
        assert_eq!(file.into_record().unwrap(), 5);
    }
}
