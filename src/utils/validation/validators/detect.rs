//! Heuristic injection detectors.
//!
//! These only flag input so it can be rejected outright; they never clean
//! anything. Both lists trade false positives (prose that reads like a query)
//! for a cheap first gate in front of every field kind.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

static SQL_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        // UNION [ALL] SELECT
        r"(?i)\bunion\b(\s+all)?\s+select\b",
        // SELECT <columns> FROM <table>
        r"(?i)\bselect\s+(\*|[\w.]+(\s*,\s*[\w.]+)*)\s+from\s+\w+",
        r"(?i)\b(insert\s+into|delete\s+from|drop\s+(table|database)|truncate\s+table|alter\s+table)\b",
        r"(?i)\bupdate\s+\w+\s+set\b",
        // Tautologies such as OR 1=1 or ' OR 'a'='a
        r#"(?i)\b(or|and)\s+['"]?\w+['"]?\s*=\s*['"]?\w+"#,
        // Quote followed by a comment opener
        r#"['"]\s*(--|#|/\*)"#,
        // Stacked statements
        r"(?i);\s*(drop|delete|insert|update|select|truncate|shutdown|exec)\b",
        r"(?i)\b(exec|execute)\s*\(|\bxp_cmdshell\b|\bwaitfor\s+delay\b|\bsleep\s*\(\s*\d+\s*\)|\bbenchmark\s*\(",
    ])
    .expect("Failed to compile SQL injection patterns")
});

static XSS_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)<\s*/?\s*script\b",
        r"(?i)<\s*(iframe|frame|object|embed|applet|meta|link|style|base|form|svg|math)\b",
        // Inline event handlers: onclick=, onerror =, ...
        r"(?i)\bon[a-z]+\s*=",
        r"(?i)\b(javascript|vbscript|livescript)\s*:",
        r"(?i)\bdata\s*:\s*text/html",
        r"(?i)\bexpression\s*\(",
    ])
    .expect("Failed to compile XSS patterns")
});

/// Returns true when the input looks like an SQL injection attempt
pub fn detect_sql_injection(input: &str) -> bool {
    SQL_PATTERNS.is_match(input)
}

/// Returns true when the input looks like a script injection attempt
pub fn detect_xss(input: &str) -> bool {
    XSS_PATTERNS.is_match(input)
}

// Used by the sanitizer's residual pass.
pub(crate) static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bon[a-z]+\s*=\s*("[^"<>]*"|'[^'<>]*'|[^\s<>]*)"#)
        .expect("Failed to compile event handler regex")
});

pub(crate) static SCRIPT_SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(javascript|vbscript)\s*:").expect("Failed to compile script scheme regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_injection_detected() {
        let cases = vec![
            "1 OR 1=1",
            "a@b.com' OR '1'='1",
            "admin' --",
            "' UNION SELECT password FROM users",
            "x'; DROP TABLE students; --",
            "SELECT * FROM reviews",
            "select name, email from admissions",
            "1; shutdown",
            "WAITFOR DELAY '0:0:5'",
            "update users set role='admin'",
        ];

        for input in cases {
            assert!(detect_sql_injection(input), "Should flag as SQL injection: {}", input);
        }
    }

    #[test]
    fn test_sql_benign_text_passes() {
        let cases = vec![
            "I love dance",
            "Jane Doe",
            "user@example.com",
            "https://example.com/path?order=1&sort=asc",
            "Please select a class from the list of courses",
            "Salsa and bachata are my favourites",
            "Don't miss the spring recital!",
        ];

        for input in cases {
            assert!(!detect_sql_injection(input), "Should not flag: {}", input);
        }
    }

    #[test]
    fn test_xss_detected() {
        let cases = vec![
            "<script>alert(1)</script>",
            "< SCRIPT src=//evil>",
            "<iframe src=x>",
            r#"<img src=x onerror="alert(1)">"#,
            "<body onload = steal()>",
            "javascript:alert(1)",
            "VBScript:msgbox",
            "<svg/onload=alert(1)>",
            "data:text/html;base64,PHNjcmlwdD4=",
            "width: expression(alert(1))",
        ];

        for input in cases {
            assert!(detect_xss(input), "Should flag as XSS: {}", input);
        }
    }

    #[test]
    fn test_xss_benign_text_passes() {
        let cases = vec![
            "I love dance",
            "<b>Great</b> teachers, <em>lovely</em> studio",
            "Classes on Monday = fun",
            "https://example.com/gallery/1.jpg",
        ];

        for input in cases {
            assert!(!detect_xss(input), "Should not flag: {}", input);
        }
    }
}
