//! AOD reader/writer descriptor documents consumed by the DPL executables
//! through `--aod-reader-json` and `--aod-writer-json`.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use util::HashMap;

use crate::{Error, REDUCED_TABLES};

/// Fixed name of the reader document.
pub const READER_CONFIG: &str = "aodReaderTempConfig.json";
/// Fixed name of the writer document.
pub const WRITER_CONFIG: &str = "aodWriterTempConfig.json";

const RESFILE_MODE: &str = "RECREATE";
const NTF_MERGE: u32 = 1;

/// Descriptor objects keyed by logical table name.
/// Descriptors are opaque: whatever is stored is copied into the documents as-is.
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    tables: HashMap<String, Value>,
}

impl TableCatalog {
    /// Catalog of the DQ reduced data model.
    pub fn reduced() -> Self {
        let mut catalog = Self::default();
        for (name, origin) in REDUCED_TABLES {
            catalog.insert(
                name,
                json!({ "table": format!("AOD/{origin}/0"), "treename": name }),
            );
        }
        catalog
    }

    pub fn insert(&mut self, name: &str, descriptor: Value) {
        self.tables.insert(name.to_owned(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.tables.get(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Descriptors for `names`, in the given order.
    fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Value>, Error> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| Error::UnknownTable(name.to_owned()))
            })
            .collect()
    }
}

/// `{"InputDirector": {...}}` listing the tables to read.
pub fn reader_document<S: AsRef<str>>(
    tables: &[S],
    catalog: &TableCatalog,
    debug: bool,
) -> Result<Value, Error> {
    Ok(json!({
        "InputDirector": {
            "debugmode": debug,
            "InputDescriptors": catalog.select(tables)?,
        }
    }))
}

/// `{"OutputDirector": {...}}` listing the tables to write into `resfile`.
pub fn writer_document<S: AsRef<str>>(
    tables: &[S],
    catalog: &TableCatalog,
    resfile: &str,
    debug: bool,
) -> Result<Value, Error> {
    Ok(json!({
        "OutputDirector": {
            "debugmode": debug,
            "resfile": resfile,
            "resfilemode": RESFILE_MODE,
            "ntfmerge": NTF_MERGE,
            "OutputDescriptors": catalog.select(tables)?,
        }
    }))
}

/// Write `doc` to `path`, replacing any existing file.
pub fn write_document(path: &Path, doc: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, text).with_context(|| format!("while writing {path:?}"))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_writer_document() -> Result<()> {
        let mut catalog = TableCatalog::default();
        catalog.insert("A", json!({ "table": "A", "treename": "TA" }));
        let doc = writer_document(&["A"], &catalog, "reducedAod", false)?;
        let director = &doc["OutputDirector"];
        assert_eq!(
            director["OutputDescriptors"],
            json!([{ "table": "A", "treename": "TA" }])
        );
        assert_eq!(director["resfilemode"], "RECREATE");
        assert_eq!(director["ntfmerge"], 1);
        assert_eq!(director["debugmode"], false);
        assert_eq!(director["resfile"], "reducedAod");
        Ok(())
    }

    #[test]
    fn test_reader_document_keeps_selection_order() -> Result<()> {
        let catalog = TableCatalog::reduced();
        let doc = reader_document(&["ReducedTracks", "ReducedEvents"], &catalog, true)?;
        let descriptors = doc["InputDirector"]["InputDescriptors"].as_array().unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0]["treename"], "ReducedTracks");
        assert_eq!(descriptors[0]["table"], "AOD/REDUCEDTRACK/0");
        assert_eq!(descriptors[1]["table"], "AOD/REDUCEDEVENT/0");
        assert_eq!(doc["InputDirector"]["debugmode"], true);
        Ok(())
    }

    #[test]
    fn test_unknown_table() {
        let catalog = TableCatalog::reduced();
        assert!(matches!(
            writer_document(&["NotATable"], &catalog, "out", false),
            Err(Error::UnknownTable(name)) if name == "NotATable"
        ));
    }

    #[test]
    fn test_malformed_descriptor_passes_through() -> Result<()> {
        let mut catalog = TableCatalog::default();
        catalog.insert("Odd", json!(["not", "an", "object"]));
        let doc = reader_document(&["Odd"], &catalog, false)?;
        assert_eq!(
            doc["InputDirector"]["InputDescriptors"][0],
            json!(["not", "an", "object"])
        );
        Ok(())
    }

    #[test]
    fn test_write_overwrites() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(WRITER_CONFIG);
        std::fs::write(&path, "stale")?;
        let doc = writer_document::<&str>(&[], &TableCatalog::default(), "x", false)?;
        write_document(&path, &doc)?;
        let back: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(back, doc);
        Ok(())
    }
}
