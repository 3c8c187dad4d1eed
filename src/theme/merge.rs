//! Merge user theme settings into the default theme.
//!
//! Raw values are validated into a [`ThemeMap`] first, then merged:
//! `theme.<category>` replaces a default category wholesale, and
//! `theme.extend.<category>` adds or overrides individual tokens.

use crate::domain::{RawTheme, ThemeConfig, ThemeMap, TokenMap};
use crate::error::ResolveError;
use serde_json::Value;
use tracing::debug;

/// Merge a `theme.extend` object into `default_theme`.
///
/// Tokens named in `extension` are added to their category, replacing a
/// default value of the same name; default tokens not mentioned are kept.
/// Categories unknown to the default theme are added as they are.
pub fn merge_theme(default_theme: &ThemeMap, extension: &RawTheme) -> Result<ThemeMap, ResolveError> {
    let extension = parse_raw_theme(extension)?;
    Ok(default_theme.extended_with(&extension))
}

/// Replace default categories with those set directly under `theme`.
pub fn apply_overrides(default_theme: &ThemeMap, overrides: &RawTheme) -> Result<ThemeMap, ResolveError> {
    let overrides = parse_raw_theme(overrides)?;
    Ok(default_theme.overridden_by(&overrides))
}

/// Resolve the effective theme: overrides first, then extensions.
pub fn resolve_theme(default_theme: &ThemeMap, theme: &ThemeConfig) -> Result<ThemeMap, ResolveError> {
    let base = apply_overrides(default_theme, &theme.overrides)?;
    let resolved = merge_theme(&base, &theme.extend)?;
    debug!(
        overrides = theme.overrides.len(),
        extensions = theme.extend.len(),
        categories = resolved.len(),
        "resolved theme"
    );
    Ok(resolved)
}

/// Validate loosely typed theme categories into a [`ThemeMap`].
pub fn parse_raw_theme(raw: &RawTheme) -> Result<ThemeMap, ResolveError> {
    let mut theme = ThemeMap::new();
    for (category, value) in raw {
        theme.set_category(category.clone(), parse_category(category, value)?);
    }
    Ok(theme)
}

fn parse_category(category: &str, value: &Value) -> Result<TokenMap, ResolveError> {
    let Value::Object(tokens) = value else {
        return Err(ResolveError::malformed(
            category,
            None,
            format!("expected a mapping of tokens, found {}", describe(value)),
        ));
    };

    tokens
        .iter()
        .map(|(token, value)| parse_stack(category, token, value).map(|stack| (token.clone(), stack)))
        .collect()
}

fn parse_stack(category: &str, token: &str, value: &Value) -> Result<Vec<String>, ResolveError> {
    let Value::Array(items) = value else {
        return Err(ResolveError::malformed(
            category,
            Some(token),
            format!("expected a sequence of strings, found {}", describe(value)),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
            Value::String(_) => {
                Err(ResolveError::malformed(category, Some(token), format!("entry {idx} is empty")))
            }
            other => Err(ResolveError::malformed(
                category,
                Some(token),
                format!("entry {idx} is {}, expected a string", describe(other)),
            )),
        })
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
