//! Reflow of fixed-width hex image lines.
//!
//! Memory images arrive as one 64-bit word per line ("narrow" lines, 16 hex
//! digits). The SRAM loaders want 128-bit entries ("wide" lines, 32 digits),
//! at most one SRAM's worth per file. [`merge`] pairs narrow lines into wide
//! ones, [`split`] cuts the wide stream into per-SRAM segments.

use std::fmt::{self, Display};

/// A 64-bit word rendered as hex digits.
pub const NARROW_DIGITS: usize = 16;
/// A 128-bit word rendered as hex digits.
pub const WIDE_DIGITS: usize = 32;
/// One wide entry occupies 16 bytes of SRAM.
pub const BYTES_PER_ENTRY: usize = 16;

/// A line of unexpected width somewhere other than the end of the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// Zero-based index into the comment-stripped input.
    pub index: usize,
    pub len: usize,
}

impl Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected line length {} at line {}",
            self.len,
            self.index + 1
        )
    }
}

/// A per-segment byte capacity too small to hold a single entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidCapacity {
    pub capacity_bytes: usize,
}

impl Display for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment capacity of {} bytes holds no {}-byte entry",
            self.capacity_bytes, BYTES_PER_ENTRY
        )
    }
}

/// Strips `//` comments and blank lines, trimming surrounding whitespace.
pub fn significant_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .collect()
}

/// Merges adjacent narrow (64-bit) lines into wide (128-bit) lines.
///
/// Two adjacent narrow lines pair little-endian: the second becomes the
/// high-order half. A narrow line with no narrow partner is zero-padded to
/// full width. A line that is neither narrow nor wide is tolerated only in
/// last position (also zero-padded); anywhere else it is a [`MalformedLine`].
pub fn merge(lines: &[&str]) -> Result<Vec<String>, MalformedLine> {
    let mut wide = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        match line.len() {
            WIDE_DIGITS => {
                wide.push(line.to_string());
                i += 1;
            }
            NARROW_DIGITS => match lines.get(i + 1) {
                Some(next) if next.len() == NARROW_DIGITS => {
                    // Little endian: the later line is the high half.
                    wide.push(format!("{next}{line}"));
                    i += 2;
                }
                _ => {
                    wide.push(pad_to_wide(line));
                    i += 1;
                }
            },
            len => {
                // An odd width is only acceptable as the trailing remainder.
                if i != lines.len() - 1 {
                    return Err(MalformedLine { index: i, len });
                }
                wide.push(pad_to_wide(line));
                i += 1;
            }
        }
    }
    Ok(wide)
}

fn pad_to_wide(line: &str) -> String {
    format!("{:0>width$}", line, width = WIDE_DIGITS)
}

/// One output unit worth of wide lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub entries: Vec<String>,
}

/// Partitions wide lines into consecutive segments of
/// `capacity_bytes / 16` entries; the last segment may be shorter and empty
/// segments are never emitted. Names are `<prefix><index>`, indices counting
/// emitted segments from 0.
pub fn split(
    lines: &[String],
    capacity_bytes: usize,
    prefix: &str,
) -> Result<Vec<Segment>, InvalidCapacity> {
    let entries_per_segment = capacity_bytes / BYTES_PER_ENTRY;
    if entries_per_segment == 0 {
        return Err(InvalidCapacity { capacity_bytes });
    }
    Ok(lines
        .chunks(entries_per_segment)
        .enumerate()
        .map(|(i, entries)| Segment {
            name: format!("{prefix}{i}"),
            entries: entries.to_vec(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow(digit: char) -> String {
        std::iter::repeat(digit).take(NARROW_DIGITS).collect()
    }

    fn wide(digit: char) -> String {
        std::iter::repeat(digit).take(WIDE_DIGITS).collect()
    }

    #[test]
    fn comments_and_blanks_are_stripped() {
        let text = "// boot image\n\naaaaaaaaaaaaaaaa\n  bbbbbbbbbbbbbbbb  \n\n// trailer\n";
        assert_eq!(
            significant_lines(text),
            vec!["aaaaaaaaaaaaaaaa", "bbbbbbbbbbbbbbbb"]
        );
    }

    #[test]
    fn narrow_pairs_merge_little_endian() {
        let merged = merge(&[&narrow('a'), &narrow('b')]).unwrap();
        assert_eq!(merged, vec![format!("{}{}", narrow('b'), narrow('a'))]);
    }

    #[test]
    fn trailing_narrow_is_zero_padded() {
        let merged = merge(&[&narrow('a')]).unwrap();
        assert_eq!(merged, vec![format!("{}{}", narrow('0'), narrow('a'))]);
    }

    #[test]
    fn wide_input_passes_through() {
        let merged = merge(&[&wide('x')]).unwrap();
        assert_eq!(merged, vec![wide('x')]);
    }

    #[test]
    fn narrow_before_wide_is_padded_not_paired() {
        let merged = merge(&[&narrow('a'), &wide('x'), &narrow('c'), &narrow('d')]).unwrap();
        assert_eq!(
            merged,
            vec![
                format!("{}{}", narrow('0'), narrow('a')),
                wide('x'),
                format!("{}{}", narrow('d'), narrow('c')),
            ]
        );
    }

    #[test]
    fn odd_width_at_end_is_padded() {
        let merged = merge(&[&narrow('a'), &narrow('b'), "beef"]).unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], format!("{:0>32}", "beef"));
    }

    #[test]
    fn odd_width_mid_sequence_is_rejected() {
        let err = merge(&[&narrow('a'), "beef", &narrow('b')]).unwrap_err();
        assert_eq!(err, MalformedLine { index: 1, len: 4 });
    }

    #[test]
    fn output_never_exceeds_input_length() {
        let lines: Vec<String> = (0..7).map(|_| narrow('5')).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let merged = merge(&refs).unwrap();
        assert_eq!(merged.len(), 4);
        assert!(merged.iter().all(|line| line.len() == WIDE_DIGITS));
    }

    #[test]
    fn split_fills_segments_evenly() {
        let lines: Vec<String> = (0..100).map(|_| wide('e')).collect();
        let segments = split(&lines, 32, "main_sram").unwrap();
        assert_eq!(segments.len(), 50);
        assert!(segments.iter().all(|s| s.entries.len() == 2));
        assert_eq!(segments[0].name, "main_sram0");
        assert_eq!(segments[49].name, "main_sram49");
    }

    #[test]
    fn split_leaves_a_short_tail() {
        let lines: Vec<String> = (0..101).map(|_| wide('e')).collect();
        let segments = split(&lines, 32, "main_sram").unwrap();
        assert_eq!(segments.len(), 51);
        assert_eq!(segments[50].entries.len(), 1);
    }

    #[test]
    fn split_emits_nothing_for_empty_input() {
        assert_eq!(split(&[], 16384, "main_sram").unwrap(), vec![]);
    }

    #[test]
    fn undersized_capacity_is_rejected() {
        let err = split(&[wide('e')], 15, "main_sram").unwrap_err();
        assert_eq!(err, InvalidCapacity { capacity_bytes: 15 });
    }

    #[test]
    fn split_round_trips_the_merge_output() {
        let lines: Vec<String> = (0..8)
            .map(|i| format!("{i:0>width$}", width = NARROW_DIGITS))
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let merged = merge(&refs).unwrap();
        let segments = split(&merged, 32, "s").unwrap();
        let rejoined: Vec<String> = segments.into_iter().flat_map(|s| s.entries).collect();
        assert_eq!(rejoined, merged);
    }
}
