use std::io::{self, Write};

use prj_model::{ProjectRecord, format_timestamp};

const HEADER: &str = "Name,Id,LastUpdated";

/// Write the audit table: two blank separator lines, the header, then one row per record.
pub fn write_report<W: Write>(mut out: W, records: &[ProjectRecord]) -> io::Result<()> {
    write!(out, "\n\n{HEADER}\n")?;
    for record in records {
        writeln!(
            out,
            "{},{},{}",
            record.name,
            record.id,
            format_timestamp(record.last_update_time)
        )?;
    }
    out.flush()
}
