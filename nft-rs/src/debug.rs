//! Interactive debugging helpers.

use std::io::{self, Write};

use itertools::Itertools;
use nalgebra::Complex;

/// Write `values` as a MATLAB-style assignment, `name = [a+bj, c+dj];`.
///
/// ```
/// use nalgebra::Complex;
/// use nft_rs::debug::write_buf;
///
/// let mut out = Vec::new();
/// write_buf(&mut out, "z", &[Complex::new(1.0, 2.0), Complex::new(0.5, -1.0)]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "z = [1+2j, 0.5+-1j];\n");
/// ```
pub fn write_buf<W, T>(mut writer: W, name: &str, values: &[Complex<T>]) -> io::Result<()>
where
    W: Write,
    T: core::fmt::Display,
{
    let body = values
        .iter()
        .map(|z| format!("{}+{}j", z.re, z.im))
        .join(", ");
    writeln!(writer, "{name} = [{body}];")
}

/// Print `values` to stdout in the format of [`write_buf`].
///
/// Write failures are ignored.
pub fn print_buf<T: core::fmt::Display>(name: &str, values: &[Complex<T>]) {
    let _ = write_buf(io::stdout().lock(), name, values);
}
