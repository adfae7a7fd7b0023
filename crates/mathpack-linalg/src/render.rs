//! Fixed-width text rendering shared by the `Display` impls.

use std::fmt;

use crate::scalar::{DISPLAY_WIDTH, PRECISION};

/// Writes one element right-aligned in a [`DISPLAY_WIDTH`]-wide field with [`PRECISION`]
/// decimals, unless the formatter carries its own width or precision.
pub(crate) fn write_elem<T: fmt::Display>(f: &mut fmt::Formatter<'_>, elem: &T) -> fmt::Result {
    let width = f.width().unwrap_or(DISPLAY_WIDTH);
    let precision = f.precision().unwrap_or(PRECISION);
    write!(f, "{elem:>width$.precision$}")
}

/// Writes a row of elements on a single line.
pub(crate) fn write_row<'a, T, I>(f: &mut fmt::Formatter<'_>, row: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for elem in row {
        write_elem(f, elem)?;
    }
    Ok(())
}

/// Writes `rows` rows of `cols` elements taken from a row-major slice, one row per line.
pub(crate) fn write_rows<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    data: &[T],
    cols: usize,
) -> fmt::Result {
    if cols == 0 {
        return Ok(());
    }
    for (i, row) in data.chunks(cols).enumerate() {
        if i != 0 {
            writeln!(f)?;
        }
        write_row(f, row)?;
    }
    Ok(())
}
