//! Error Handling and Edge Case Tests
//!
//! Empty and unreadable inputs, unsupported files, multibyte text, and the
//! offset guarantees that replacement relies on.

use crate::common::{assert_all_offsets, texts, TestRepo};
use textsift::{
    extract_fragments, parse_content, parse_directory, parse_file, parse_path, replace_extracted,
    replace_with, sanitize, summarize, Dialect, ScanOptions,
};

const DIALECTS: [Dialect; 4] = [
    Dialect::Script,
    Dialect::Component,
    Dialect::Template,
    Dialect::Markup,
];

// ============================================================================
// EMPTY AND DEGENERATE INPUT
// ============================================================================

#[test]
fn test_empty_buffer_every_dialect() {
    for dialect in DIALECTS {
        assert!(extract_fragments("", dialect).is_empty(), "{:?}", dialect);
    }
}

#[test]
fn test_whitespace_only_markup() {
    assert!(extract_fragments("<div>   \n\t  </div>", Dialect::Markup).is_empty());
}

#[test]
fn test_unterminated_literal() {
    let fragments = extract_fragments("const s = \"never closed", Dialect::Script);
    assert!(fragments.is_empty());
}

#[test]
fn test_unclosed_return_block() {
    let source = "function A() {\n  return (\n    <p>Dangling markup text\n";
    let fragments = extract_fragments(source, Dialect::Component);
    assert!(fragments.is_empty());
}

#[test]
fn test_short_texts_dropped() {
    let source = r#"<p>OK</p><b>Hi</b><i>Yes please</i>"#;
    assert_eq!(texts(&extract_fragments(source, Dialect::Markup)), vec!["Yes please"]);
}

// ============================================================================
// FILE SYSTEM
// ============================================================================

#[test]
fn test_empty_file() {
    let repo = TestRepo::new();
    repo.add_empty_file("src/empty.jsx");

    let result = parse_file(&repo.file_path("src/empty.jsx")).expect("supported file");
    assert_eq!(result.fragment_count(), 0);
    assert_eq!(result.extracted_text.len(), 3);
}

#[test]
fn test_unsupported_extension() {
    let repo = TestRepo::new();
    repo.add_file("notes.md", "# Some heading");

    assert!(parse_file(&repo.file_path("notes.md")).is_none());
    assert!(parse_content("# Some heading", "md", None, None).is_none());
}

#[test]
fn test_non_utf8_file_skipped() {
    let repo = TestRepo::new();
    repo.add_bytes("src/bad.js", &[0x63, 0x6f, 0xff, 0xfe, 0x22]);
    repo.add_file("src/good.js", "const s = 'Readable message';");

    assert!(parse_file(&repo.file_path("src/bad.js")).is_none());

    let results = parse_directory(repo.path(), &ScanOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].file_name.as_deref(), Some("good.js"));
}

#[test]
fn test_empty_directory() {
    let repo = TestRepo::new();
    std::fs::create_dir_all(repo.path().join("src")).unwrap();

    let results = parse_path(&repo.path().join("src"), &ScanOptions::default());
    assert!(results.is_empty());

    let summary = summarize(&results);
    assert_eq!(summary.total_files, 0);
    assert_eq!(summary.total_texts, 0);
    assert!(summary.all_texts.is_empty());
}

#[test]
fn test_directory_order_is_stable() {
    let repo = TestRepo::new();
    repo.add_file("b/second.js", "const b = 'Second file text';")
        .add_file("a/first.js", "const a = 'First file text';")
        .add_file("c/third.html", "<p>Third file text</p>");

    let names: Vec<_> = parse_directory(repo.path(), &ScanOptions::default())
        .into_iter()
        .filter_map(|r| r.file_name)
        .collect();
    assert_eq!(names, vec!["first.js", "second.js", "third.html"]);
}

#[test]
fn test_custom_skip_dirs() {
    let repo = TestRepo::new();
    repo.add_file("generated/out.js", "const s = 'Generated message';")
        .add_file("src/in.js", "const s = 'Source message';");

    let options = ScanOptions {
        skip_dirs: vec!["generated".to_string()],
        ..ScanOptions::default()
    };
    let results = parse_directory(repo.path(), &options);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].file_name.as_deref(), Some("in.js"));
}

// ============================================================================
// OFFSETS AND REPLACEMENT
// ============================================================================

const MIXED_COMPONENT: &str = r#"const intro = "Welcome to the dashboard";
const pattern = /[a-z]+/i;

export default function Dashboard() {
  return (
    <main>
      <h1>Quarterly numbers</h1>
      <img alt="Revenue chart" />
      <p>Prices shown in €, updated daily</p>
    </main>
  );
}
"#;

#[test]
fn test_offsets_hold_with_regex_and_multibyte() {
    let fragments = extract_fragments(MIXED_COMPONENT, Dialect::Component);
    assert_eq!(
        texts(&fragments),
        vec![
            "Quarterly numbers",
            "Prices shown in €, updated daily",
            "Revenue chart",
            "Welcome to the dashboard"
        ]
    );
    assert_all_offsets(&sanitize(MIXED_COMPONENT), &fragments);
    for fragment in &fragments {
        assert_eq!(&MIXED_COMPONENT[fragment.span()], fragment.text);
    }
}

#[test]
fn test_extraction_is_idempotent() {
    for dialect in DIALECTS {
        let first = extract_fragments(MIXED_COMPONENT, dialect);
        let second = extract_fragments(MIXED_COMPONENT, dialect);
        assert_eq!(first, second, "{:?}", dialect);
    }
}

#[test]
fn test_replace_preserves_everything_else() {
    let fragments = extract_fragments(MIXED_COMPONENT, Dialect::Component);
    let masked = replace_extracted(MIXED_COMPONENT, &fragments);

    assert_eq!(masked.len(), MIXED_COMPONENT.len());
    for fragment in &fragments {
        assert_ne!(&masked[fragment.span()], fragment.text);
    }
    assert!(masked.contains("const pattern = /[a-z]+/i;"));
    assert!(masked.contains("<img alt=\""));

    let mut cursor = 0;
    let mut sorted: Vec<_> = fragments.iter().map(|f| f.span()).collect();
    sorted.sort_by_key(|span| span.start);
    for span in sorted {
        assert_eq!(&masked[cursor..span.start], &MIXED_COMPONENT[cursor..span.start]);
        cursor = span.end;
    }
    assert_eq!(&masked[cursor..], &MIXED_COMPONENT[cursor..]);
}

#[test]
fn test_replace_with_translation_keys() {
    let source = r#"<p title="Click here">Welcome</p>"#;
    let fragments = extract_fragments(source, Dialect::Markup);
    let replaced = replace_with(source, &fragments, |f| {
        Some(format!("{{t('{}')}}", f.text.to_lowercase().replace(' ', "_")))
    });
    assert_eq!(replaced, r#"<p title="{t('click_here')}">{t('welcome')}</p>"#);
}

#[test]
fn test_summary_entries_ordered_by_position() {
    let result = parse_content(MIXED_COMPONENT, "jsx", Some("Dashboard.jsx"), Some("Dashboard.jsx"))
        .expect("supported");
    let summary = summarize(std::slice::from_ref(&result));

    assert_eq!(summary.total_texts, 4);
    let positions: Vec<_> = summary
        .all_texts
        .iter()
        .map(|e| (e.fragment.line_number, e.fragment.column_start))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert_eq!(summary.all_texts[0].fragment.text, "Welcome to the dashboard");
}
