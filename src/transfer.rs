//! CSV import and export of the trivia tables.
//!
//! A data directory holds `categories.csv` and `questions.csv`, one row per
//! record with a header line named after the JSON fields.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::{get_all_categories, import_categories};
use crate::db::queries::questions::{get_all_questions, import_questions};
use crate::db::{Category, Question};

pub const CATEGORIES_FILE: &str = "categories.csv";
pub const QUESTIONS_FILE: &str = "questions.csv";

fn write_to(path: &Path, data: Vec<impl Serialize>) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_from<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record.with_context(|| format!("Malformed row in {}", path.display()))?;
        out.push(record);
    }
    Ok(out)
}

pub async fn export_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<()> {
    let categories = get_all_categories(pool).await?;
    let questions = get_all_questions(pool).await?;
    if !dir.exists() {
        std::fs::create_dir_all(dir)?
    }
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Exporting to {}",
        dir.display()
    );
    write_to(&dir.join(CATEGORIES_FILE), categories)?;
    write_to(&dir.join(QUESTIONS_FILE), questions)?;
    Ok(())
}

/// Categories are imported first so question rows reference known ids.
pub async fn import_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<()> {
    let categories: Vec<Category> = read_from(&dir.join(CATEGORIES_FILE))?;
    let questions: Vec<Question> = read_from(&dir.join(QUESTIONS_FILE))?;
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Importing from {}",
        dir.display()
    );
    import_categories(pool, categories).await?;
    import_questions(pool, questions).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::establish_in_memory;
    use crate::db::queries::{categories::create_category, questions::create_question};

    #[tokio::test]
    async fn exported_directory_imports_into_empty_database() {
        let source = establish_in_memory().await.unwrap();
        let science = create_category(&source, "Science").await.unwrap();
        create_question(
            &source,
            Some("What is the heaviest organ in the human body?"),
            Some("The Liver"),
            Some(science),
            Some(4),
        )
        .await
        .unwrap();
        create_question(&source, Some("Uncategorized, with comma"), Some("yes"), None, None)
            .await
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        export_data(&source, dir.path()).await.unwrap();

        let target = establish_in_memory().await.unwrap();
        import_data(&target, dir.path()).await.unwrap();

        assert_eq!(
            get_all_categories(&target).await.unwrap(),
            get_all_categories(&source).await.unwrap()
        );
        assert_eq!(
            get_all_questions(&target).await.unwrap(),
            get_all_questions(&source).await.unwrap()
        );
    }

    #[tokio::test]
    async fn missing_files_fail_import() {
        let pool = establish_in_memory().await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        assert!(import_data(&pool, dir.path()).await.is_err());
    }

    #[test]
    fn categories_file_uses_type_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CATEGORIES_FILE);
        write_to(
            &path,
            vec![Category {
                id: 1,
                kind: "Science".to_owned(),
            }],
        )
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "id,type\n1,Science\n");
    }
}
