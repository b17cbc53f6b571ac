//! Template dialect (.vue single-file components)
//!
//! Only the first `<template>` and the first `<script>` section are read;
//! `<style>` is never scanned.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::element_bodies;
use crate::detectors::markup::{self, MarkupFlavor};
use crate::detectors::script;
use crate::schema::ExtractedFragment;
use crate::scope::Scope;

static TEMPLATE_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<template[^>]*>(.*?)</template>").expect("template section pattern is valid")
});

pub(crate) static SCRIPT_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script[^>]*>(.*?)</script>").expect("script section pattern is valid")
});

pub fn extract(scope: Scope<'_>) -> Vec<ExtractedFragment> {
    let source = scope.source();
    let mut fragments = Vec::new();

    if let Some(body) = element_bodies(&TEMPLATE_SECTION, scope).into_iter().next() {
        fragments.extend(markup::extract(
            Scope::region(source, body),
            MarkupFlavor::Template,
        ));
    }

    if let Some(body) = element_bodies(&SCRIPT_SECTION, scope).into_iter().next() {
        fragments.extend(script::extract(Scope::region(source, body)));
    }

    fragments
}
