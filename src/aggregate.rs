//! Summary statistics over parsed files

use crate::schema::{FragmentCategory, ParsedFileResult, Summary, SummaryEntry};

/// Build a [`Summary`] from parsed files.
///
/// Pure function of its input: counts by extension, dialect and category,
/// plus every fragment stamped with its file and sorted by line then column.
/// The sort is stable, so ties keep file order and extraction order.
pub fn summarize(results: &[ParsedFileResult]) -> Summary {
    let mut summary = Summary {
        total_files: results.len(),
        text_types: FragmentCategory::ALL.iter().map(|c| (*c, 0)).collect(),
        ..Default::default()
    };

    for result in results {
        *summary
            .file_types
            .entry(result.extension.clone())
            .or_insert(0) += 1;
        *summary.dialects.entry(result.dialect).or_insert(0) += 1;

        for (category, fragments) in &result.extracted_text {
            *summary.text_types.entry(*category).or_insert(0) += fragments.len();
            summary.total_texts += fragments.len();
            summary
                .all_texts
                .extend(fragments.iter().map(|fragment| SummaryEntry {
                    fragment: fragment.clone(),
                    file: result.file_name.clone(),
                    file_path: result.file_path.clone(),
                }));
        }
    }

    summary
        .all_texts
        .sort_by_key(|entry| (entry.fragment.line_number, entry.fragment.column_start));

    summary
}
