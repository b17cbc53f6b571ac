//! Plain markup dialect (.html)

use crate::detectors::common::element_bodies;
use crate::detectors::markup::{self, MarkupFlavor};
use crate::detectors::script;
use crate::detectors::template::SCRIPT_SECTION;
use crate::schema::ExtractedFragment;
use crate::scope::Scope;

/// Markup over the whole document, then each inline `<script>` body on its own
pub fn extract(scope: Scope<'_>) -> Vec<ExtractedFragment> {
    let source = scope.source();
    let mut fragments = markup::extract(scope, MarkupFlavor::Document);

    for body in element_bodies(&SCRIPT_SECTION, scope) {
        fragments.extend(script::extract(Scope::region(source, body)));
    }

    fragments
}
