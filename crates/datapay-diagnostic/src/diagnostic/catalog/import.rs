use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::super::domain::{Dimension, QuestionId};
use super::{AnswerOption, CatalogError, Question, QuestionCatalog};

/// One option row: `id,dimension,text,points,label`.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u16,
    dimension: String,
    text: String,
    points: u8,
    label: String,
}

/// Read a catalog from CSV. Rows sharing an id form one question, options in file order.
pub fn parse_catalog<R: Read>(
    reader: R,
    version: impl Into<String>,
) -> Result<QuestionCatalog, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut drafts: BTreeMap<QuestionId, Question> = BTreeMap::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        let row = record?;
        let id = QuestionId(row.id);
        let dimension =
            Dimension::from_name(&row.dimension).ok_or_else(|| CatalogError::UnknownDimension {
                id,
                value: row.dimension.clone(),
            })?;
        let option = AnswerOption {
            points: row.points,
            label: row.label,
        };

        match drafts.get_mut(&id) {
            Some(question) => {
                if question.dimension != dimension {
                    return Err(CatalogError::InconsistentRows {
                        id,
                        column: "dimension",
                    });
                }
                if question.text != row.text {
                    return Err(CatalogError::InconsistentRows { id, column: "text" });
                }
                question.options.push(option);
            }
            None => {
                drafts.insert(
                    id,
                    Question {
                        id,
                        dimension,
                        text: row.text,
                        options: vec![option],
                    },
                );
            }
        }
    }

    QuestionCatalog::new(version, drafts.into_values().collect())
}

impl QuestionCatalog {
    /// Load a CSV catalog from disk; the file stem becomes the catalog version.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        let version = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom")
            .to_string();
        parse_catalog(file, version)
    }
}
