use std::collections::HashSet;

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Trims every entry, drops blanks and keeps the first occurrence of each value.
pub(crate) fn dedup_trimmed<I, S>(values: I, ignore_case: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut deduped = Vec::new();

    for value in values {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            continue;
        }

        let key = if ignore_case {
            trimmed.to_lowercase()
        } else {
            trimmed.clone()
        };

        if seen.insert(key) {
            deduped.push(trimmed);
        }
    }

    deduped
}

/// Splits a comma separated configuration value into trimmed, non-empty entries.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
