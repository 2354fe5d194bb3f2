//! Content Security Policy directive parsing.
//!
//! Used to check that the shipped policy is well formed: a `;`-separated
//! list of directives, each a name followed by whitespace-separated sources.

use thiserror::Error;

/// A single CSP directive, e.g. `img-src 'self' data: blob:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CspError {
    #[error("duplicate directive: {0}")]
    DuplicateDirective(String),

    #[error("invalid directive name: {0}")]
    InvalidDirectiveName(String),
}

/// Parse a serialized policy into its directives, in order.
pub fn parse_policy(policy: &str) -> Result<Vec<Directive>, CspError> {
    let mut directives: Vec<Directive> = Vec::new();

    for token in policy.split(';') {
        let mut parts = token.split_ascii_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };

        let name = name.to_ascii_lowercase();
        if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(CspError::InvalidDirectiveName(name));
        }
        if directives.iter().any(|d| d.name == name) {
            return Err(CspError::DuplicateDirective(name));
        }

        directives.push(Directive {
            name,
            sources: parts.map(str::to_string).collect(),
        });
    }

    Ok(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::policy::CONTENT_SECURITY_POLICY;

    #[test]
    fn test_shipped_policy_has_ten_directives() {
        let directives = parse_policy(CONTENT_SECURITY_POLICY).unwrap();
        let names: Vec<&str> = directives.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(
            names,
            [
                "default-src",
                "script-src",
                "style-src",
                "img-src",
                "connect-src",
                "font-src",
                "object-src",
                "base-uri",
                "form-action",
                "frame-ancestors",
            ]
        );
    }

    #[test]
    fn test_shipped_policy_sources() {
        let directives = parse_policy(CONTENT_SECURITY_POLICY).unwrap();

        assert_eq!(
            directives[1].sources,
            [
                "'self'",
                "https://cdn.tailwindcss.com",
                "https://unpkg.com",
                "https://cdnjs.cloudflare.com",
                "'unsafe-inline'",
            ]
        );
        assert_eq!(directives[3].sources, ["'self'", "data:", "blob:"]);
        assert_eq!(directives[6].sources, ["'none'"]);
        assert_eq!(directives[9].sources, ["'none'"]);
    }

    #[test]
    fn test_empty_tokens_and_whitespace_skipped() {
        let directives = parse_policy(" ;default-src  'self' ;; \t").unwrap();
        assert_eq!(
            directives,
            vec![Directive {
                name: "default-src".into(),
                sources: vec!["'self'".into()],
            }]
        );
    }

    #[test]
    fn test_names_are_lowercased() {
        let directives = parse_policy("Default-Src 'self'").unwrap();
        assert_eq!(directives[0].name, "default-src");
    }

    #[test]
    fn test_directive_without_sources() {
        let directives = parse_policy("upgrade-insecure-requests").unwrap();
        assert!(directives[0].sources.is_empty());
    }

    #[test]
    fn test_duplicate_directive_rejected() {
        let err = parse_policy("img-src 'self'; img-src data:").unwrap_err();
        assert_eq!(err, CspError::DuplicateDirective("img-src".into()));
    }

    #[test]
    fn test_invalid_name_rejected() {
        let err = parse_policy("img_src 'self'").unwrap_err();
        assert_eq!(err, CspError::InvalidDirectiveName("img_src".into()));
    }
}
