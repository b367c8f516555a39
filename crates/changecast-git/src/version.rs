//! Version ordering for tag names
//!
//! Release tags are not always valid semver (four-component versions such as
//! `9.0.0.17` are common), so every name is reduced to one sort key: the
//! leading dot-separated numeric components, then what follows them. A `-`
//! suffix marks a pre-release and sorts below the bare release; any other
//! suffix sorts above it. Suffixes compare naturally, with digit runs
//! compared by numeric value.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two tag names by version.
///
/// This is a total order, so sorting a set of tags gives the same result
/// whatever order the tags arrive in.
pub fn version_cmp(a: &str, b: &str) -> Ordering {
    VersionKey::parse(a).cmp(&VersionKey::parse(b))
}

/// Sort key for a tag name. Field order is comparison order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct VersionKey<'a> {
    release: Vec<Numeric<'a>>,
    suffix: Suffix<'a>,
    raw: &'a str,
}

/// Where a name ranks relative to its bare release components.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Suffix<'a> {
    PreRelease(Natural<'a>),
    Release,
    Other(Natural<'a>),
}

impl<'a> VersionKey<'a> {
    fn parse(raw: &'a str) -> Self {
        let body = match raw.strip_prefix('v') {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
            _ => raw,
        };

        let mut release = Vec::new();
        let mut rest = body;
        loop {
            let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 {
                break;
            }
            release.push(Numeric(&rest[..digits]));
            rest = &rest[digits..];

            match rest.strip_prefix('.') {
                Some(next) if next.starts_with(|c: char| c.is_ascii_digit()) => rest = next,
                _ => break,
            }
        }

        let suffix = if rest.is_empty() {
            Suffix::Release
        } else if let Some(pre) = rest.strip_prefix('-') {
            Suffix::PreRelease(Natural(pre))
        } else {
            Suffix::Other(Natural(rest))
        };

        Self {
            release,
            suffix,
            raw,
        }
    }
}

/// A run of ASCII digits, ordered by value.
#[derive(Debug, PartialEq, Eq)]
struct Numeric<'a>(&'a str);

impl Ord for Numeric<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_digit_runs(self.0, other.0)
    }
}

impl PartialOrd for Numeric<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Free-form text, ordered naturally.
#[derive(Debug, PartialEq, Eq)]
struct Natural<'a>(&'a str);

impl Ord for Natural<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(self.0, other.0)
    }
}

impl PartialOrd for Natural<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Natural ordering: digit runs compare numerically, everything else bytewise.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_digits(&mut left);
                let rn = take_digits(&mut right);
                let ord = compare_digit_runs(&ln, &rn);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit strings by value without overflow; leading zeros only
/// break ties.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let at = a.trim_start_matches('0');
    let bt = b.trim_start_matches('0');

    at.len()
        .cmp(&bt.len())
        .then_with(|| at.cmp(bt))
        .then_with(|| a.len().cmp(&b.len()))
}
