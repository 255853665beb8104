use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single playable entry in the games catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl GameRecord {
    /// A record is playable when `id`, `title`, and `url` survive trimming.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }
}

/// Why a catalogue payload could not be turned into a usable catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("Invalid games data: expected array")]
    NotArray,
    #[error("No games available")]
    EmptyInput,
    #[error("No valid games found")]
    NoValidRecords,
}

/// An ordered sequence of valid game records, as served by the static
/// catalogue resource. Order reflects source order; duplicate ids are
/// permitted and never collapsed here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalogue {
    records: Vec<GameRecord>,
}

impl Catalogue {
    /// Build a catalogue from already-validated records (fixtures, tests).
    #[must_use]
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    /// Parse a raw JSON payload into a catalogue.
    ///
    /// Elements that are not objects, or whose `id`/`title`/`url` are
    /// missing, non-textual, or blank after trimming, are dropped; the
    /// survivors keep their source order. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload is not a JSON array, when the
    /// array is empty, or when no element survives validation.
    pub fn from_payload(payload: &str) -> Result<Self, CatalogueError> {
        let Ok(Value::Array(elements)) = serde_json::from_str::<Value>(payload) else {
            return Err(CatalogueError::NotArray);
        };
        if elements.is_empty() {
            return Err(CatalogueError::EmptyInput);
        }
        let records: Vec<GameRecord> = elements.iter().filter_map(record_from_value).collect();
        if records.is_empty() {
            return Err(CatalogueError::NoValidRecords);
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GameRecord> {
        self.records.get(index)
    }

    /// First record with the given id, if any.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&GameRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Extract a valid record from one payload element. Optional fields are
/// kept only when textual; a malformed optional never disqualifies an
/// otherwise valid record.
fn record_from_value(value: &Value) -> Option<GameRecord> {
    let object = value.as_object()?;
    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);

    let id = text("id").filter(|id| !id.trim().is_empty())?;
    let title = text("title").filter(|title| !title.trim().is_empty())?;
    let url = text("url").filter(|url| !url.trim().is_empty())?;

    Some(GameRecord {
        id,
        title,
        url,
        description: text("description"),
        category: text("category"),
        thumb: text("thumb"),
        image: text("image"),
    })
}
