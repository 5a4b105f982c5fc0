//! The documentation site's built-in allow-list.
//!
//! Four naming-convention patterns catch identifiers that a prose dictionary
//! will never contain, and a list of known words covers the technical
//! vocabulary used throughout the guides.

use std::sync::LazyLock;

use crate::allowlist::entry::EntrySpec;
use crate::allowlist::provider::AllowList;

/// Built-in patterns as `(source, description)` pairs.
pub const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    (r"^[A-Z].*", "e.g. FooBar"),
    (r"^\.?[a-z0-9].*[A-Z0-9].*", "e.g. fooBar or .fooBar"),
    (r"^[a-z]*[-_][a-z]+.*", "e.g. foo_bar or foo-bar-baz"),
    (r"^package:.*", "e.g. package:melos"),
];

/// Built-in known words.
///
/// Matching is case-sensitive, so a word that appears both lowercase and
/// capitalised in the guides is listed in both forms.
pub const BUILTIN_WORDS: &[&str] = &[
    "&raquo",
    ".dex",
    "ai",
    "acs",
    "adb",
    "alloc",
    "analytics",
    "applinks",
    "apns",
    "aps",
    "async",
    "auth",
    "authenticator",
    "backend",
    "backoff",
    "bool",
    "br",
    "buildscript",
    "cd",
    "chainable",
    "changelog",
    "charset",
    "classpath",
    "classpaths",
    "cocoapods",
    "codelab",
    "config",
    "const",
    "crashlytics",
    "crypto",
    "cryptographically",
    "datastore",
    "deprecations",
    "dev",
    "dex",
    "downloader",
    "dropdown",
    "filesystem",
    "facebook",
    "firebase",
    "firestore",
    "flutterfire",
    "FlutterFire",
    "func",
    "getter",
    "getters",
    "globals",
    "gradle",
    "gradlew",
    "href",
    "html",
    "http",
    "https",
    "img",
    "init",
    "installable",
    "ios",
    "javascript",
    "js",
    "json",
    "keychain",
    "localhost",
    "macos",
    "multidex",
    "natively",
    "objectivec",
    "passwordless",
    "plist",
    "realtime",
    "reauthenticate",
    "repo",
    "roadmap",
    "safelist",
    "scalable",
    "sdk",
    "setprop",
    "src",
    "timeframe",
    "twittersdk",
    "unencrypted",
    "unlink",
    "unlinked",
    "unlinking",
    "untampered",
    "untrusted",
    "url",
    "uri",
    "verifications",
    "web.firebase_cdn",
    "xml",
    "yaml",
    "fiam",
    "ecommerce",
    "programmatically",
    "postfix",
    "validator",
    "validators",
    "schemas",
    "subcollection",
    "subcollections",
    "dartpad",
    "customizable",
    "ui",
];

/// The built-in list, compiled on first use.
static BUILTIN_ALLOWLIST: LazyLock<AllowList> = LazyLock::new(|| {
    AllowList::new(BuiltinAllowList::entries())
        .expect("Built-in allow-list patterns should be valid")
});

/// Accessors for the built-in list.
pub struct BuiltinAllowList;

impl BuiltinAllowList {
    /// The built-in entries, patterns first, in their original order.
    pub fn entries() -> Vec<EntrySpec> {
        BUILTIN_PATTERNS
            .iter()
            .map(|&(source, description)| EntrySpec::described_pattern(source, description))
            .chain(BUILTIN_WORDS.iter().map(|&word| EntrySpec::literal(word)))
            .collect()
    }

    /// Get the built-in allow-list. Every call shares the same compiled list.
    pub fn allowlist() -> AllowList {
        BUILTIN_ALLOWLIST.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowlist::entry::EntryKind;

    #[test]
    fn test_builtin_compiles() {
        let allowlist = AllowList::new(BuiltinAllowList::entries()).unwrap();
        assert_eq!(allowlist.patterns().count(), BUILTIN_PATTERNS.len());
        assert_eq!(allowlist.literals().count(), BUILTIN_WORDS.len());
    }

    #[test]
    fn test_builtin_words_are_unique() {
        let mut words = BUILTIN_WORDS.to_vec();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), BUILTIN_WORDS.len());
    }

    #[test]
    fn test_builtin_is_compiled_once() {
        let first = BuiltinAllowList::allowlist();
        let second = AllowList::builtin();
        let third = AllowList::default();
        assert!(first.ptr_eq(&second));
        assert!(first.ptr_eq(&third));
    }

    #[test]
    fn test_every_builtin_word_is_allowed() {
        let allowlist = BuiltinAllowList::allowlist();
        for word in BUILTIN_WORDS {
            assert!(allowlist.is_allowed(word), "{word} should be allowed");
        }
    }

    #[test]
    fn test_naming_conventions() {
        let allowlist = BuiltinAllowList::allowlist();
        assert!(allowlist.is_allowed("FooBar"));
        assert!(allowlist.is_allowed("fooBar"));
        assert!(allowlist.is_allowed(".fooBar"));
        assert!(allowlist.is_allowed("foo_bar"));
        assert!(allowlist.is_allowed("foo-bar-baz"));
        assert!(allowlist.is_allowed("package:melos"));
        assert!(!allowlist.is_allowed("randomlowercaseword"));
    }

    #[test]
    fn test_patterns_come_first() {
        let entries = BuiltinAllowList::entries();
        assert!(entries[..BUILTIN_PATTERNS.len()]
            .iter()
            .all(|e| e.kind() == EntryKind::Pattern));
        assert_eq!(entries[BUILTIN_PATTERNS.len()], EntrySpec::literal("&raquo"));
    }
}
