use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "tempo_ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Comments, terms (`-` prefix),
/// attributes and continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.starts_with('-') && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!(...)` calls under `src_root`.
///
/// Dynamic IDs (catalog labels) are not visible here; they are added from
/// `catalog::label_keys` by the caller.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        found.extend(scan_macro_keys(&content));
    }

    found
}

fn scan_macro_keys(content: &str) -> Vec<String> {
    const NEEDLE: &str = "t!(\"";
    let mut keys = Vec::new();
    let mut rest = content;

    while let Some(pos) = rest.find(NEEDLE) {
        // `format!(`, `assert!(` and friends end in the same bytes.
        let standalone = rest[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        let after = &rest[pos + NEEDLE.len()..];
        if let Some(end) = after.find('"') {
            let key = &after[..end];
            if standalone && !key.is_empty() && key.chars().all(valid_key_char) {
                keys.push(key.to_string());
            }
        }
        rest = after;
    }

    keys
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn read_keys(path: &Path) -> BTreeSet<String> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn scanner_skips_lookalike_macros() {
    let src = r#"let a = t!("common-back"); let b = format!("pref-x"); crate::t!("common-skip");"#;
    assert_eq!(scan_macro_keys(src), vec!["common-back", "common-skip"]);
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_keys = read_keys(&fallback_file);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {}",
        fallback_file.display()
    );

    let mut referenced = extract_translation_keys_from_source(&crate_root.join("src"));
    referenced.extend(catalog::label_keys());

    let missing_in_fallback: Vec<_> = referenced.difference(&fallback_keys).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing_in_fallback.len(),
        missing_in_fallback.join("\n")
    );

    let mut per_locale_missing: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        assert!(path.exists(), "Locale folder {locale} has no {FTL_FILENAME}");
        let keys = read_keys(&path);
        let missing: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (loc, miss) in &per_locale_missing {
            report.push_str(&format!("  {loc} ({} missing)\n", miss.len()));
            for k in miss {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }

    // Unused fallback keys are reported, not failed.
    let unused: Vec<_> = fallback_keys.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} fallback keys unused in Rust sources: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}
