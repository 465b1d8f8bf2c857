//! Allow-list grammars for operation targets.
//!
//! Pure functions only — no I/O, no async. A [`PackageName`] or [`DebPath`]
//! can only be obtained through its `parse` constructor, so holding one is
//! proof that the string passed its grammar.

use std::fmt;

use crate::domain::error::GatewayError;

/// Punctuation allowed in a package name besides ASCII alphanumerics.
const PACKAGE_NAME_PUNCT: &[char] = &['+', '-', '.'];

/// Punctuation allowed in a `.deb` path besides ASCII alphanumerics.
///
/// Space is allowed because paths may come from a decoded `file://` URI.
const DEB_PATH_PUNCT: &[char] = &['/', '_', '.', '+', ' ', '-'];

const DEB_SUFFIX: &str = ".deb";

/// A package name accepted by the grammar `[A-Za-z0-9+\-.]+` without a leading `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    /// Validate `raw` as a package name.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidPackageName` if `raw` is empty, starts
    /// with `-`, or contains a character outside the allow-list.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        let reject = |reason| Err(GatewayError::InvalidPackageName(raw.to_string(), reason));

        if raw.is_empty() {
            return reject("name is empty");
        }
        if raw.starts_with('-') {
            return reject("name must not start with '-'");
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PACKAGE_NAME_PUNCT.contains(&c))
        {
            return reject("only letters, digits, '+', '-' and '.' are allowed");
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An absolute path to a `.deb` archive accepted by the path grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DebPath(String);

impl DebPath {
    /// Validate `raw` as a `.deb` path.
    ///
    /// Structural checks run before the character check so the rejection
    /// reason names the most specific problem.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidDebPath` if `raw` is not absolute, does
    /// not end in `.deb`, is too short, contains `/../` or `//`, or contains
    /// a character outside the allow-list.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        let reject = |reason| Err(GatewayError::InvalidDebPath(raw.to_string(), reason));

        if !raw.starts_with('/') {
            return reject("path must be absolute");
        }
        if raw.len() <= DEB_SUFFIX.len() || !raw.ends_with(DEB_SUFFIX) {
            return reject("path must name a .deb file");
        }
        if raw.contains("/../") {
            return reject("path must not contain '/../'");
        }
        if raw.contains("//") {
            return reject("path must not contain '//'");
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || DEB_PATH_PUNCT.contains(&c))
        {
            return reject("only letters, digits, '/', '_', '.', '+', '-' and space are allowed");
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DebPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The validated operand of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Package(PackageName),
    Deb(DebPath),
}

impl Target {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Package(name) => name.as_str(),
            Self::Deb(path) => path.as_str(),
        }
    }
}
