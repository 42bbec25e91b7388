//! Frame table text layout
//!
//! Tab-separated, newline-terminated:
//!
//! ```text
//! trial index:
//! 0\t12\t30\t
//!
//! fr_nr\t<header>
//! 0\t<field>\t<field>
//! 1\t<field>\t<field>
//! ```

use std::io::{self, Write};

use super::Record;

/// Label line preceding the trial start indices
pub const TRIAL_INDEX_LABEL: &str = "trial index:";

/// First column of the header row
pub const FRAME_NUMBER_COLUMN: &str = "fr_nr";

/// Separator between columns and after each trial index
pub const FIELD_SEPARATOR: char = '\t';

/// Write trial starts, header row and frame rows in the frame table layout
pub fn write_table<W, R>(
    out: &mut W,
    header: &str,
    trial_starts: &[usize],
    records: &[R],
) -> io::Result<()>
where
    W: Write + ?Sized,
    R: Record,
{
    writeln!(out, "{}", TRIAL_INDEX_LABEL)?;
    for start in trial_starts {
        write!(out, "{}{}", start, FIELD_SEPARATOR)?;
    }
    writeln!(out)?;
    writeln!(out)?;

    writeln!(out, "{}{}{}", FRAME_NUMBER_COLUMN, FIELD_SEPARATOR, header)?;
    for (frame, record) in records.iter().enumerate() {
        write!(out, "{}", frame)?;
        record.write_fields(out)?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<R: Record>(header: &str, trial_starts: &[usize], records: &[R]) -> String {
        let mut out = Vec::new();
        write_table(&mut out, header, trial_starts, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_table() {
        let records: Vec<(i32, i32)> = Vec::new();
        assert_eq!(render("", &[], &records), "trial index:\n\n\nfr_nr\t\n");
    }

    #[test]
    fn test_trial_indices_trailing_tab() {
        let text = render("a", &[0, 4, 9], &[(1,)]);
        assert_eq!(text, "trial index:\n0\t4\t9\t\n\nfr_nr\ta\n0\t1\n");
    }

    #[test]
    fn test_unit_rows_hold_frame_number_only() {
        let text = render("", &[], &[(), ()]);
        assert_eq!(text, "trial index:\n\n\nfr_nr\t\n0\n1\n");
    }
}
