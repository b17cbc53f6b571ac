//! Dialect-specific text extractors
//!
//! Each dialect is a short fixed pipeline built from the same pieces: the
//! literal scanner and context guards for script, the markup sub-pipeline
//! for anything with tags, and the classifier for both.
//!
//! # Dialects
//!
//! - `script`: string literals from `.js` / `.ts`
//! - `component`: `return ( ... )` markup plus surrounding script (`.jsx` / `.tsx`)
//! - `template`: first `<template>` and `<script>` section (`.vue`)
//! - `document`: whole-document markup plus every inline `<script>` (`.html`)
//!
//! Embedded regions are re-entered through [`Scope`](crate::scope::Scope),
//! so positions always refer to the whole buffer.

pub mod common;
pub mod component;
pub mod document;
pub mod markup;
pub mod script;
pub mod template;

pub use markup::MarkupFlavor;
pub use script::ScriptFilter;
