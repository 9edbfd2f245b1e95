//! End-to-end relationship query tests against a fresh service per case.
//!
//! - Registration boundaries for magazine names and article titles
//! - Derived author/magazine queries over the article registry
//! - "No data" results versus empty sequences
//! - Silent setters versus failing constructors

use mast_core::entities::{Article, Author, Magazine};
use mast_index::error::IndexError;
use mast_index::service::MastService;
use pretty_assertions::assert_eq;
use rstest::rstest;

struct Fixture {
    svc: MastService,
    ada: Author,
    tech: Magazine,
}

fn fixture() -> Fixture {
    let mut svc = MastService::new();
    let ada = svc.create_author("Ada").unwrap();
    let tech = svc.create_magazine("Tech Weekly", "Tech").unwrap();
    Fixture { svc, ada, tech }
}

fn write(f: &mut Fixture, count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| {
            f.svc
                .add_article(f.ada.id(), f.tech.id(), &format!("Engine notes {i}"))
                .unwrap()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Construction boundaries
// ---------------------------------------------------------------------------

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(16, true)]
#[case(17, false)]
fn magazine_name_length_boundaries(#[case] len: usize, #[case] ok: bool) {
    let mut svc = MastService::new();
    let result = svc.create_magazine(&"n".repeat(len), "Tech");
    assert_eq!(result.is_ok(), ok);
    assert_eq!(svc.magazines().len(), usize::from(ok));
}

#[rstest]
#[case(4, false)]
#[case(5, true)]
#[case(50, true)]
#[case(51, false)]
fn article_title_length_boundaries(#[case] len: usize, #[case] ok: bool) {
    let mut f = fixture();
    let result = f.svc.add_article(f.ada.id(), f.tech.id(), &"t".repeat(len));
    match result {
        Ok(article) => {
            assert!(ok, "length {len} should be rejected");
            assert_eq!(article.title().chars().count(), len);
        }
        Err(err) => {
            assert!(!ok, "length {len} should be accepted");
            assert!(matches!(err, IndexError::Core(_)));
        }
    }
    assert_eq!(f.svc.articles().len(), usize::from(ok));
}

// ---------------------------------------------------------------------------
// Derived queries
// ---------------------------------------------------------------------------

#[test]
fn author_articles_match_registry_filter() {
    let mut f = fixture();
    let grace = f.svc.create_author("Grace").unwrap();
    let arts = f.svc.create_magazine("Arts Monthly", "Arts").unwrap();

    f.svc.add_article(f.ada.id(), f.tech.id(), "Ada on engines").unwrap();
    f.svc.add_article(grace.id(), arts.id(), "Grace on compilers").unwrap();
    f.svc.add_article(f.ada.id(), arts.id(), "Ada on poetry").unwrap();

    let expected: Vec<&Article> = f
        .svc
        .articles()
        .iter()
        .filter(|a| a.author_id() == f.ada.id())
        .collect();
    assert_eq!(f.svc.articles_by_author(f.ada.id()), expected);
    assert_eq!(expected.len(), 2);
}

#[test]
fn three_articles_make_a_contributing_author() {
    let mut f = fixture();
    write(&mut f, 3);

    let prolific = f.svc.contributing_authors(f.tech.id()).unwrap();
    assert_eq!(prolific, vec![&f.ada]);
}

#[test]
fn two_articles_are_no_data() {
    let mut f = fixture();
    write(&mut f, 2);

    assert_eq!(f.svc.contributing_authors(f.tech.id()), None);
    // The author still contributes; only the aggregate is empty.
    assert_eq!(f.svc.contributors(f.tech.id()), vec![&f.ada]);
}

#[test]
fn author_without_articles_has_no_topic_areas() {
    let f = fixture();
    assert_eq!(f.svc.topic_areas(f.ada.id()), None);
    assert!(f.svc.magazines_for_author(f.ada.id()).is_empty());
    assert!(f.svc.articles_by_author(f.ada.id()).is_empty());
}

#[test]
fn top_publisher_needs_articles() {
    let mut f = fixture();
    assert!(f.svc.top_publisher().is_none());

    write(&mut f, 1);
    assert_eq!(f.svc.top_publisher(), Some(&f.tech));
}

#[test]
fn queries_on_unknown_ids_are_total() {
    let f = fixture();
    assert!(f.svc.articles_by_author("ath-deadbeef").is_empty());
    assert!(f.svc.contributors("mag-deadbeef").is_empty());
    assert_eq!(f.svc.article_titles("mag-deadbeef"), None);
    assert_eq!(f.svc.contributing_authors("mag-deadbeef"), None);
}

// ---------------------------------------------------------------------------
// Setters
// ---------------------------------------------------------------------------

#[test]
fn article_title_assignment_has_no_effect() {
    let mut f = fixture();
    let article = write(&mut f, 1).remove(0);

    f.svc
        .set_article_title(article.id(), "new valid title")
        .unwrap();
    assert_eq!(f.svc.get_article(article.id()).unwrap().title(), "Engine notes 0");
}

#[test]
fn magazine_name_assignment_validates_silently() {
    let mut f = fixture();

    f.svc.set_magazine_name(f.tech.id(), "x").unwrap();
    assert_eq!(f.svc.get_magazine(f.tech.id()).unwrap().name(), "Tech Weekly");

    f.svc.set_magazine_name(f.tech.id(), "Valid Name").unwrap();
    assert_eq!(f.svc.get_magazine(f.tech.id()).unwrap().name(), "Valid Name");
}

#[test]
fn registered_article_keeps_its_links_and_title() {
    let mut f = fixture();
    let grace = f.svc.create_author("Grace").unwrap();
    let arts = f.svc.create_magazine("Arts Monthly", "Arts").unwrap();
    let article = write(&mut f, 1).remove(0);

    f.svc
        .set_article_title(article.id(), "Rewritten title")
        .unwrap();
    f.svc.set_magazine_name(f.tech.id(), "Tech Daily").unwrap();
    f.svc.set_magazine_category(f.tech.id(), "Science").unwrap();

    let stored = f.svc.get_article(article.id()).unwrap();
    assert_eq!(stored.title(), "Engine notes 0");
    assert_eq!(stored.author_id(), f.ada.id());
    assert_eq!(stored.magazine_id(), f.tech.id());
    assert_eq!(f.svc.get_magazine(f.tech.id()).unwrap().id(), f.tech.id());

    assert_eq!(f.svc.articles_by_author(f.ada.id()).len(), 1);
    assert!(f.svc.articles_by_author(grace.id()).is_empty());
    assert!(f.svc.articles_in_magazine(arts.id()).is_empty());
    let magazines = f.svc.magazines_for_author(f.ada.id());
    assert_eq!(magazines.len(), 1);
    assert_eq!(magazines[0].id(), f.tech.id());
}

#[test]
fn renamed_magazine_is_still_the_same_magazine() {
    let mut f = fixture();
    write(&mut f, 1);
    f.svc.set_magazine_name(f.tech.id(), "Tech Daily").unwrap();

    let magazines = f.svc.magazines_for_author(f.ada.id());
    assert_eq!(magazines.len(), 1);
    assert_eq!(magazines[0].id(), f.tech.id());
    assert_eq!(magazines[0].name(), "Tech Daily");
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn profile_json_distinguishes_no_data_from_empty() {
    let f = fixture();
    let profile = f.svc.author_profile(f.ada.id()).unwrap();
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["topic_areas"], serde_json::Value::Null);
    assert_eq!(json["articles"], serde_json::json!([]));

    let report = f.svc.magazine_report(f.tech.id()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["article_titles"], serde_json::Value::Null);
    assert_eq!(json["contributing_authors"], serde_json::Value::Null);
    assert_eq!(json["contributors"], serde_json::json!([]));
}
