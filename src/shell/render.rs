use crate::record::Teacher;
use std::io::{self, Write};

pub const SEPARATOR: &str = "----------------------------";

/// Four labelled lines plus a separator.
pub fn write_teacher<W: Write>(out: &mut W, teacher: &Teacher) -> io::Result<()> {
    writeln!(out, "Name: {}", teacher.name)?;
    writeln!(out, "Age: {}", teacher.age)?;
    writeln!(out, "Date of Birth: {}", teacher.date_of_birth)?;
    writeln!(out, "Number of Classes: {}", teacher.num_classes)?;
    writeln!(out, "{}", SEPARATOR)
}

/// Header line, then one block per teacher.
pub fn write_listing<W: Write>(out: &mut W, header: &str, teachers: &[Teacher]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", header)?;
    if teachers.is_empty() {
        writeln!(out, "No matching teachers.")?;
    }
    for t in teachers {
        write_teacher(out, t)?;
    }
    Ok(())
}
