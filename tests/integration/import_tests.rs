//! DB-backed import pipeline tests
//!
//! Run against a migrated Postgres instance:
//! DATABASE_URL=... cargo test -- --ignored

use std::sync::Arc;

use curata_server::services::import::{
    CustomListImporter, STATUS_MATCHED, STATUS_NO_MATCH,
};

use crate::support;

fn butler_lookup() -> Arc<support::FixedTableLookup> {
    Arc::new(support::FixedTableLookup::new(&[(
        "Octavia Butler",
        "Butler, Octavia",
    )]))
}

#[tokio::test]
#[ignore]
async fn test_round_trip_new_work() {
    let repo = support::repository().await;
    let list = support::create_list(&repo).await;
    let data_source = support::librarians(&repo).await;
    let config = support::import_config(false);
    let mut importer =
        CustomListImporter::new(repo.clone(), butler_lookup(), &config, data_source)
            .expect("valid field mapping");

    let title = support::unique("title");
    let isbn = support::unique("isbn");
    let row = support::complete_row(&title, "Octavia Butler", &isbn);
    let now = support::import_time();

    let outcome = importer.row_to_list_item(&list, now, &row).await.unwrap();

    assert_eq!(outcome.status, STATUS_NO_MATCH);
    assert!(outcome.warnings.is_empty());
    let entry = outcome.entry.expect("row should be attached");

    let edition = repo.editions_get_by_id(entry.edition_id).await.unwrap();
    assert_eq!(edition.title.as_deref(), Some(title.as_str()));
    assert_eq!(edition.author.as_deref(), Some("Octavia Butler"));
    assert_eq!(edition.sort_author.as_deref(), Some("Butler, Octavia"));
    assert_eq!(edition.language.as_deref(), Some("eng"));
    assert_eq!(
        edition.published.unwrap().to_rfc3339(),
        "2014-03-15T06:00:00+00:00"
    );
    assert_eq!(
        edition.first_appearance.unwrap().to_rfc3339(),
        "2014-04-01T12:30:00+00:00"
    );
    assert_eq!(edition.most_recent_appearance, Some(now));

    // The identifier is the row's ISBN
    let (id_type, id_value): (String, String) =
        sqlx::query_as("SELECT type, identifier FROM identifiers WHERE id = $1")
            .bind(edition.primary_identifier_id)
            .fetch_one(&repo.pool)
            .await
            .unwrap();
    assert_eq!(id_type, "isbn");
    assert_eq!(id_value, isbn);

    // One annotation, suffixed with the citation
    let contents = support::annotation_contents(&repo, edition.primary_identifier_id).await;
    assert_eq!(contents.len(), 1);
    assert_eq!(
        contents[0],
        format!("{} \u{2014}Alice, 2nd Street Branch", row["annotation"])
    );

    // Six classifications: two tags, four audiences
    assert_eq!(
        repo.classifications_count(edition.primary_identifier_id)
            .await
            .unwrap(),
        6
    );
    assert_eq!(
        classification_count_by_type(&repo, edition.primary_identifier_id, "tag").await,
        2
    );
    assert_eq!(
        classification_count_by_type(
            &repo,
            edition.primary_identifier_id,
            "freeform-audience"
        )
        .await,
        4
    );

    // Entry timestamps follow the same appearance rules
    assert_eq!(
        entry.first_appearance.unwrap().to_rfc3339(),
        "2014-04-01T12:30:00+00:00"
    );
    assert_eq!(entry.most_recent_appearance, Some(now));
}

#[tokio::test]
#[ignore]
async fn test_matching_cataloged_work_found() {
    let repo = support::repository().await;
    let list = support::create_list(&repo).await;
    let data_source = support::librarians(&repo).await;
    let config = support::import_config(false);
    let mut importer =
        CustomListImporter::new(repo.clone(), butler_lookup(), &config, data_source)
            .expect("valid field mapping");

    let title = support::unique("title");
    let cataloged = support::create_cataloged_work(&repo, &title, "Butler, Octavia").await;

    let row = support::complete_row(&title, "Octavia Butler", &support::unique("isbn"));
    let outcome = importer
        .row_to_list_item(&list, support::import_time(), &row)
        .await
        .unwrap();

    assert_eq!(outcome.status, STATUS_MATCHED);
    let entry = outcome.entry.expect("row should be attached");
    assert_eq!(entry.edition_id, cataloged.id);

    // The matched edition keeps its canonical bibliographic facts
    let edition = repo.editions_get_by_id(cataloged.id).await.unwrap();
    assert_eq!(edition.title.as_deref(), Some(title.as_str()));
    assert_eq!(edition.most_recent_appearance, Some(support::import_time()));
}

#[tokio::test]
#[ignore]
async fn test_overwrite_then_additive() {
    let repo = support::repository().await;
    let list = support::create_list(&repo).await;
    let data_source = support::librarians(&repo).await;
    let now = support::import_time();

    let title = support::unique("title");
    let isbn = support::unique("isbn");
    let row1 = support::complete_row(&title, "Octavia Butler", &isbn);
    let row2 = support::complete_row(&title, "Octavia Butler", &isbn);
    let row3 = support::complete_row(&title, "Octavia Butler", &isbn);

    // Two imports with overwrite: the second replaces the first's
    // annotation and classifications.
    let config = support::import_config(true);
    let mut importer = CustomListImporter::new(
        repo.clone(),
        butler_lookup(),
        &config,
        data_source.clone(),
    )
    .unwrap();
    let outcome1 = importer.row_to_list_item(&list, now, &row1).await.unwrap();
    let entry1 = outcome1.entry.unwrap();

    let mut importer = CustomListImporter::new(
        repo.clone(),
        butler_lookup(),
        &config,
        data_source.clone(),
    )
    .unwrap();
    let outcome2 = importer.row_to_list_item(&list, now, &row2).await.unwrap();
    let entry2 = outcome2.entry.unwrap();

    // Same logical book, same list entry
    assert_eq!(entry1.id, entry2.id);

    let edition = repo.editions_get_by_id(entry1.edition_id).await.unwrap();
    let identifier_id = edition.primary_identifier_id;

    let contents = support::annotation_contents(&repo, identifier_id).await;
    assert_eq!(contents.len(), 1);
    assert!(contents[0].starts_with(&row2["annotation"]));
    assert_eq!(repo.classifications_count(identifier_id).await.unwrap(), 6);

    // A third import in additive mode accumulates instead
    let config = support::import_config(false);
    let mut importer =
        CustomListImporter::new(repo.clone(), butler_lookup(), &config, data_source).unwrap();
    let outcome3 = importer.row_to_list_item(&list, now, &row3).await.unwrap();
    assert_eq!(outcome3.entry.unwrap().id, entry1.id);

    let contents = support::annotation_contents(&repo, identifier_id).await;
    assert_eq!(contents.len(), 2);
    assert_eq!(repo.classifications_count(identifier_id).await.unwrap(), 12);
}

#[tokio::test]
#[ignore]
async fn test_non_default_language() {
    let repo = support::repository().await;
    let list = support::create_list(&repo).await;
    let data_source = support::librarians(&repo).await;
    let config = support::import_config(false);
    let mut importer =
        CustomListImporter::new(repo.clone(), butler_lookup(), &config, data_source).unwrap();

    let mut row = support::complete_row(
        &support::unique("title"),
        "Octavia Butler",
        &support::unique("isbn"),
    );
    row.insert("language".to_string(), "Spanish".to_string());

    let outcome = importer
        .row_to_list_item(&list, support::import_time(), &row)
        .await
        .unwrap();
    let entry = outcome.entry.unwrap();
    let edition = repo.editions_get_by_id(entry.edition_id).await.unwrap();
    assert_eq!(edition.language.as_deref(), Some("spa"));
}

#[tokio::test]
#[ignore]
async fn test_bad_date_is_warning_not_failure() {
    let repo = support::repository().await;
    let list = support::create_list(&repo).await;
    let data_source = support::librarians(&repo).await;
    let config = support::import_config(false);
    let mut importer =
        CustomListImporter::new(repo.clone(), butler_lookup(), &config, data_source).unwrap();

    let mut row = support::complete_row(
        &support::unique("title"),
        "Octavia Butler",
        &support::unique("isbn"),
    );
    row.insert("publication date".to_string(), "not a date".to_string());

    let outcome = importer
        .row_to_list_item(&list, support::import_time(), &row)
        .await
        .unwrap();
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("not a date"));

    // The row is still attached, just without a publication date
    let entry = outcome.entry.expect("row should be attached");
    let edition = repo.editions_get_by_id(entry.edition_id).await.unwrap();
    assert_eq!(edition.published, None);
}

#[tokio::test]
#[ignore]
async fn test_row_without_isbn_is_skipped() {
    let repo = support::repository().await;
    let list = support::create_list(&repo).await;
    let data_source = support::librarians(&repo).await;
    let config = support::import_config(false);
    let mut importer =
        CustomListImporter::new(repo.clone(), butler_lookup(), &config, data_source).unwrap();

    let mut row = support::complete_row(
        &support::unique("title"),
        "Octavia Butler",
        &support::unique("isbn"),
    );
    row.remove("isbn");

    let outcome = importer
        .row_to_list_item(&list, support::import_time(), &row)
        .await
        .unwrap();
    assert_eq!(outcome.status, STATUS_NO_MATCH);
    assert!(outcome.entry.is_none());
    assert!(outcome.warnings.iter().any(|w| w.contains("no ISBN")));
    assert_eq!(repo.lists_count_entries(list.id).await.unwrap(), 0);
}

async fn classification_count_by_type(
    repo: &curata_server::repository::Repository,
    identifier_id: i32,
    subject_type: &str,
) -> i64 {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)::bigint FROM classifications c
        JOIN subjects s ON s.id = c.subject_id
        WHERE c.identifier_id = $1 AND s.type = $2
        "#,
    )
    .bind(identifier_id)
    .bind(subject_type)
    .fetch_one(&repo.pool)
    .await
    .unwrap()
}
