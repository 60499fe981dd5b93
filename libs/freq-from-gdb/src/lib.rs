//! Extraction of sensor frequency readings from a gdb memory-dump log.
//!
//! The bring-up flow halts the core and dumps the sensor frequency buffer
//! with gdb's `x` command, two words per line:
//!
//! ```text
//! 0x60002338:     0x000001ad      0x000001b2
//! ```
//!
//! Everything else in the log (breakpoint banners, prompts, register
//! listings) is noise to be skipped. Matched values are collected in
//! document order and bucketed into one row per measurement iteration.

use nom::{
    bytes::complete::tag,
    character::complete::{hex_digit1, multispace1},
    combinator::map_res,
    sequence::preceded,
    IResult,
};

/// Sensors sampled per iteration.
pub const NUM_SENSORS: usize = 14;
/// Frequency readings per sensor per iteration.
pub const READINGS_PER_SENSOR: usize = 3;
/// Flat values that make up one complete iteration row.
pub const VALUES_PER_ITERATION: usize = NUM_SENSORS * READINGS_PER_SENSOR;

fn hex_value(input: &str) -> IResult<&str, u64> {
    preceded(
        tag("0x"),
        map_res(hex_digit1, |digits| u64::from_str_radix(digits, 16)),
    )(input)
}

/// One dump line: an address followed by two data words.
fn sample_pair(input: &str) -> IResult<&str, (u64, u64)> {
    let (input, _address) = hex_value(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, first) = hex_value(input)?;
    let (input, _) = multispace1(input)?;
    let (input, second) = hex_value(input)?;
    Ok((input, (first, second)))
}

/// Collects every dump pair in document order, skipping surrounding noise.
pub fn extract_values(text: &str) -> Vec<u64> {
    let mut values = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match sample_pair(rest) {
            Ok((tail, (first, second))) => {
                values.push(first);
                values.push(second);
                rest = tail;
            }
            Err(_) => {
                let step = rest.chars().next().map_or(1, char::len_utf8);
                rest = &rest[step..];
            }
        }
    }
    values
}

/// Slices the flat value sequence into contiguous rows of `row_width`.
///
/// A trailing remainder short of a full row is dropped, not an error: a
/// dump cut off mid-iteration still yields every complete iteration.
pub fn reshape(values: &[u64], row_width: usize) -> Vec<Vec<u64>> {
    let dropped = values.len() % row_width;
    if dropped != 0 {
        log::warn!("dropping {dropped} trailing values short of a full row of {row_width}");
    }
    values
        .chunks_exact(row_width)
        .map(<[u64]>::to_vec)
        .collect()
}

/// Full pipeline: scan the raw log, then bucket values into one row per
/// iteration (14 sensors, 3 readings each).
pub fn parse(text: &str) -> Vec<Vec<u64>> {
    let values = extract_values(text);
    let rows = reshape(&values, VALUES_PER_ITERATION);
    log::info!("{} values -> {} iterations", values.len(), rows.len());
    rows
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_dump_line_yields_both_values() {
        let text = "0x60002338:     0x000001ad      0x000001b2\n";
        assert_eq!(extract_values(text), vec![0x1ad, 0x1b2]);
    }

    #[test]
    fn noise_around_dump_lines_is_skipped() {
        let text = "Breakpoint 1, main () at main.c:42
42          store_sensor_data();
(gdb) x/4xw 0x60002338
0x60002338:     0x000001ad      0x000001b2
0x60002340:     0x000001a9      0x000001c0
(gdb) continue
";
        assert_eq!(extract_values(text), vec![0x1ad, 0x1b2, 0x1a9, 0x1c0]);
    }

    #[test]
    fn addresses_are_not_collected() {
        let text = "0xdeadbeef: 0x1 0x2";
        assert_eq!(extract_values(text), vec![0x1, 0x2]);
    }

    #[test]
    fn pair_may_wrap_across_whitespace() {
        // gdb pads columns with tabs depending on terminal width.
        let text = "0x60002338:\t0x0000000a\t0x0000000b";
        assert_eq!(extract_values(text), vec![0xa, 0xb]);
    }

    #[test]
    fn truncated_final_line_is_ignored() {
        let text = "(gdb) x/2xw 0x60002338\n0x60002338: 0x000001ad";
        assert_eq!(extract_values(text), vec![]);
    }

    #[test]
    fn short_dump_yields_no_iterations() {
        let text = "0x60002338: 0x1 0x2\n0x60002340: 0x3 0x4\n";
        assert_eq!(parse(text), Vec::<Vec<u64>>::new());
    }

    #[test]
    fn full_iteration_is_one_row_in_document_order() {
        let mut text = String::new();
        for i in 0..(VALUES_PER_ITERATION as u64 / 2) {
            text.push_str(&format!(
                "0x{:08x}:     0x{:08x}      0x{:08x}\n",
                0x60002338 + i * 8,
                2 * i,
                2 * i + 1
            ));
        }
        let rows = parse(&text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], (0..VALUES_PER_ITERATION as u64).collect::<Vec<_>>());
    }

    #[test]
    fn incomplete_tail_iteration_is_dropped() {
        let mut text = String::new();
        // One full iteration and one extra dump line.
        for i in 0..(VALUES_PER_ITERATION as u64 / 2 + 1) {
            text.push_str(&format!("0x60002338: 0x{i:x} 0x{i:x}\n"));
        }
        let rows = parse(&text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), VALUES_PER_ITERATION);
    }
}
