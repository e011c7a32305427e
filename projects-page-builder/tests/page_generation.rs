use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use projects_page_builder::{
    load_projects, PageTemplate, RepositoryMetadata, TemplateError, END_MARKER, START_MARKER,
};
use url::Url;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn repository(name: &str, description: &str, language: &str, year: i32) -> RepositoryMetadata {
    RepositoryMetadata {
        name: name.to_string(),
        html_url: Url::parse(&format!("https://github.com/someone/{name}")).unwrap(),
        description: Some(description.to_string()),
        language: Some(language.to_string()),
        stargazers_count: 128,
        forks_count: 16,
        updated_at: Utc.with_ymd_and_hms(year, 4, 2, 12, 0, 0).unwrap(),
    }
}

#[test]
fn load_projects_from_fixture() {
    let projects = load_projects(&fixtures_root().join("projects.json")).unwrap();

    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].full_name(), "rust-lang/rust");
    assert_eq!(projects[1].full_name(), "tokio-rs/tokio");
    assert_eq!(projects[2].full_name(), "serde-rs/serde");
}

#[test]
fn generate_page_from_fixture_template() {
    let template = PageTemplate::load(&fixtures_root().join("projects-template.html")).unwrap();

    let repositories = [
        repository("newer", "Recently updated", "Rust", 2024),
        repository("older", "Updated a while ago", "Go", 2021),
    ];
    let page = template.render_page(&repositories);

    // One card per repository, example card gone
    assert_eq!(page.matches("class=\"project-card\"").count(), 2);
    assert!(!page.contains("{{PROJECT_NAME}}"));

    // Slice order is preserved
    assert!(page.find("newer").unwrap() < page.find("older").unwrap());

    // Everything outside the markers passes through, markers included
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(START_MARKER));
    assert!(page.contains(END_MARKER));
    assert!(page.contains("<h1>Projects</h1>"));
    assert!(page.ends_with("</html>\n"));

    assert!(page.contains("background-color: #dea584"));
    assert!(page.contains("background-color: #00ADD8"));
    assert!(page.contains("Updated Apr 2, 2024"));
}

#[test]
fn generated_page_escapes_repository_metadata() {
    let template = PageTemplate::load(&fixtures_root().join("projects-template.html")).unwrap();

    let mut repo = repository("quirky", "Plain", "Rust", 2024);
    repo.name = "<b>bold</b> & co".to_string();
    let page = template.render_page(&[repo]);

    assert!(page.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
    assert!(!page.contains("<b>bold</b>"));
}

#[test]
fn template_without_end_marker_is_rejected() {
    let result = PageTemplate::load(&fixtures_root().join("projects-template-missing-end.html"));

    match result {
        Err(TemplateError::MissingMarker { marker }) => assert_eq!(marker, END_MARKER),
        other => panic!("expected missing end marker, got {other:?}"),
    }
}
