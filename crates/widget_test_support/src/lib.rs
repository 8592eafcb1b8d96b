use std::fmt::Write;

pub mod fixtures;

/// Turns an expected-snapshot block from a fixture into lines, dropping
/// trailing whitespace and blank lines.
pub fn snapshot_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    let missing = "<missing>";
    let mismatch = (0..max).find(|&i| {
        let left = expected.get(i).map(String::as_str).unwrap_or(missing);
        let right = actual.get(i).map(String::as_str).unwrap_or(missing);
        left != right
    });
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for line_idx in start..end {
            let left = expected
                .get(line_idx)
                .map(String::as_str)
                .unwrap_or(missing);
            let right = actual.get(line_idx).map(String::as_str).unwrap_or(missing);
            let marker = if line_idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", line_idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", line_idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::{diff_lines, snapshot_lines};

    #[test]
    fn snapshot_lines_drop_blank_lines() {
        let lines = snapshot_lines("\n<tbody>\n  <tr>   \n\n");
        assert_eq!(lines, vec!["<tbody>".to_string(), "  <tr>".to_string()]);
    }

    #[test]
    fn diff_points_at_first_mismatch() {
        let expected = snapshot_lines("a\nb\nc");
        let actual = snapshot_lines("a\nx\nc\nd");
        let diff = diff_lines(&expected, &actual);
        assert!(diff.contains("first mismatch at line 2"));
        assert!(diff.contains(">    2    actual: x"));
        assert!(diff.contains("expected 3 lines, actual 4 lines"));
    }
}
