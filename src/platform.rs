//! Platform default encoding
//!
//! The fallback reported when no BOM matches. On the host it comes from
//! the locale environment (`LC_ALL`, then `LC_CTYPE`, then `LANG`), e.g.
//! `de_DE.ISO-8859-15@euro` yields the codeset `ISO-8859-15`.

use encoding_rs::Encoding;

/// Used when the locale names no codeset
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Reported for the `C` and `POSIX` locales (glibc's codeset name)
pub const ASCII_ENCODING: &str = "ANSI_X3.4-1968";

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Default encoding of the current process
pub fn default_encoding() -> String {
    default_encoding_with(|name| std::env::var(name).ok())
}

/// Default encoding using `lookup` to read locale variables
pub fn default_encoding_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let locale = LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty());

    match locale {
        Some(locale) => encoding_for_locale(&locale),
        None => DEFAULT_ENCODING.to_string(),
    }
}

/// Encoding name for a POSIX locale string such as `en_US.UTF-8`
pub fn encoding_for_locale(locale: &str) -> String {
    if locale == "C" || locale == "POSIX" {
        return ASCII_ENCODING.to_string();
    }

    let codeset = locale
        .split_once('.')
        .map(|(_, rest)| rest.split('@').next().unwrap_or(rest))
        .filter(|codeset| !codeset.is_empty());

    match codeset {
        Some(codeset) => canonical_name(codeset),
        None => DEFAULT_ENCODING.to_string(),
    }
}

/// Canonical spelling of a codeset label (`utf8` -> `UTF-8`)
///
/// `encoding_rs` only respells the label. Where its WHATWG mapping names a
/// different charset (`ISO-8859-1` -> `windows-1252`, `UTF-16` -> `UTF-16LE`)
/// the label is kept as the platform names it.
pub fn canonical_name(label: &str) -> String {
    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) if fold(encoding.name()) == fold(label) => encoding.name().to_string(),
        _ => label.to_ascii_uppercase(),
    }
}

/// Lower-case alphanumerics only, so `utf8` and `UTF-8` compare equal
fn fold(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
