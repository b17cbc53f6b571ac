//! Markup family integration tests
//!
//! Tests for JSX/TSX components, Vue single-file components and HTML
//! documents, where markup text and attributes are extracted alongside
//! script literals.

use crate::common::{assert_all_offsets, texts};
use textsift::{
    extract_fragments, parse_content, Dialect, FragmentCategory, FragmentKind, TextContext,
};

// =============================================================================
// HTML TESTS
// =============================================================================

mod html_tests {
    use super::*;

    #[test]
    fn test_paragraph_with_title() {
        let source = r#"<p title="Click here">Welcome</p>"#;
        let fragments = extract_fragments(source, Dialect::Markup);

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].kind, FragmentKind::MarkupText);
        assert_eq!(fragments[0].text, "Welcome");
        assert_eq!(fragments[1].kind, FragmentKind::AttributeValue);
        assert_eq!(fragments[1].attribute_name.as_deref(), Some("title"));
        assert_eq!(fragments[1].text, "Click here");
        assert_all_offsets(source, &fragments);
    }

    #[test]
    fn test_full_document() {
        let source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Order history</title>
    <style>
        body { font-family: sans-serif; }
    </style>
</head>
<body>
    <main>
        <h1>Your recent orders</h1>
        <input type="search" placeholder="Search your orders">
        <p>&copy;</p>
    </main>
    <script>
        const empty = "You have not placed any orders yet";
    </script>
</body>
</html>
"#;
        let result = parse_content(source, "html", None, Some("orders.html")).expect("supported");
        let html = &result.extracted_text[&FragmentCategory::HtmlText];
        let attributes = &result.extracted_text[&FragmentCategory::NaturalLanguageAttributes];
        let strings = &result.extracted_text[&FragmentCategory::Strings];

        assert_eq!(texts(html), vec!["Order history", "Your recent orders"]);
        assert_eq!(texts(attributes), vec!["Search your orders"]);
        assert_eq!(texts(strings), vec!["You have not placed any orders yet"]);
        assert_eq!(strings[0].line_number, 17);
        assert_eq!(strings[0].context, TextContext::Script);
        assert_all_offsets(source, html);
        assert_all_offsets(source, attributes);
        assert_all_offsets(source, strings);
    }

    #[test]
    fn test_multiline_inner_text_normalized() {
        let source = "<p>\n    Thanks for\n    signing up\n</p>";
        let fragments = extract_fragments(source, Dialect::Markup);
        assert_eq!(texts(&fragments), vec!["Thanks for signing up"]);
        assert_eq!(fragments[0].line_number, 2);
        assert_all_offsets(source, &fragments);
    }
}

// =============================================================================
// JSX / TSX TESTS
// =============================================================================

mod component_tests {
    use super::*;

    #[test]
    fn test_logo_component() {
        let source = r#"import x from 'y';

export function Header() {
  return (
    <header>
      <img alt="Logo" />
    </header>
  );
}
"#;
        let fragments = extract_fragments(source, Dialect::Component);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].kind, FragmentKind::AttributeValue);
        assert_eq!(fragments[0].attribute_name.as_deref(), Some("alt"));
        assert_eq!(fragments[0].text, "Logo");
        assert_all_offsets(source, &fragments);
    }

    #[test]
    fn test_markup_before_script_literals() {
        let source = r#"const message = "Please sign in first";

function Login() {
  return (
    <form>
      <button>Sign in now</button>
    </form>
  );
}
"#;
        let fragments = extract_fragments(source, Dialect::Component);
        assert_eq!(texts(&fragments), vec!["Sign in now", "Please sign in first"]);
        assert_eq!(fragments[0].context, TextContext::Markup);
        assert_eq!(fragments[1].context, TextContext::Script);
        assert_all_offsets(source, &fragments);
    }

    #[test]
    fn test_constants_above_markup_extracted() {
        let source = r#"const title = "Welcome to our store";
const value = "Your basket is empty";
const dataNotice = "Prices include all taxes";
const message = "Thanks for shopping with us";

export default function Store() {
  return (
    <div>
      <h1>{title}</h1>
      <input placeholder="Search products" />
    </div>
  );
}
"#;
        let fragments = extract_fragments(source, Dialect::Component);
        assert_eq!(
            texts(&fragments),
            vec![
                "Search products",
                "Welcome to our store",
                "Your basket is empty",
                "Prices include all taxes",
                "Thanks for shopping with us"
            ]
        );
        assert_all_offsets(source, &fragments);
    }

    #[test]
    fn test_interpolated_text_skipped() {
        let source = r#"function Hello({ name }) {
  return (
    <p>Hello {name} friend</p>
  );
}
"#;
        assert!(extract_fragments(source, Dialect::Component).is_empty());
    }

    #[test]
    fn test_component_categories() {
        let source = r#"function A() {
  return (
    <span title="More details">Read more</span>
  );
}
"#;
        let result = parse_content(source, "tsx", None, None).expect("supported");
        assert_eq!(result.dialect, Dialect::Component);
        assert_eq!(result.extension, ".tsx");
        assert_eq!(result.fragment_count(), 2);
        assert_eq!(
            texts(&result.extracted_text[&FragmentCategory::HtmlText]),
            vec!["Read more"]
        );
        assert_eq!(
            texts(&result.extracted_text[&FragmentCategory::NaturalLanguageAttributes]),
            vec!["More details"]
        );
    }
}

// =============================================================================
// VUE TESTS
// =============================================================================

mod vue_tests {
    use super::*;

    const SFC: &str = r#"<template>
  <section>
    <h2>Notification preferences</h2>
    <button :title="tooltip" aria-label="Save preferences">{{ label }}</button>
  </section>
</template>

<script>
export default {
  data() {
    return { saved: 'Preferences updated' };
  },
};
</script>
"#;

    #[test]
    fn test_sections_extracted() {
        let fragments = extract_fragments(SFC, Dialect::Template);
        let found: Vec<_> = fragments
            .iter()
            .map(|f| (f.kind, f.context, f.text.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (
                    FragmentKind::MarkupText,
                    TextContext::Template,
                    "Notification preferences"
                ),
                (
                    FragmentKind::AttributeValue,
                    TextContext::Template,
                    "Save preferences"
                ),
                (
                    FragmentKind::QuotedLiteral,
                    TextContext::Script,
                    "Preferences updated"
                ),
            ]
        );
        assert_eq!(fragments[2].line_number, 11);
        assert_all_offsets(SFC, &fragments);
    }

    #[test]
    fn test_all_three_categories_present() {
        let result = parse_content(SFC, ".vue", Some("src/Prefs.vue"), Some("Prefs.vue"))
            .expect("supported");
        assert_eq!(result.extracted_text.len(), 3);
        assert_eq!(result.file_path.as_deref(), Some("src/Prefs.vue"));
    }
}
