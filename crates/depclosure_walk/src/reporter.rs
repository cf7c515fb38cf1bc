use std::{
    io::{self, Write},
    path::PathBuf,
};

use log::trace;

/// Writes one path per line, nothing else.
pub fn print_files<W: Write>(out: &mut W, files: &[PathBuf]) -> io::Result<()> {
    trace!("Printing {} files", files.len());
    for file in files {
        writeln!(out, "{}", file.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_path_per_line() {
        let mut buf = Vec::new();
        let files = vec![PathBuf::from("/src/main.ts"), PathBuf::from("/src/util.ts")];
        print_files(&mut buf, &files).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "/src/main.ts\n/src/util.ts\n");
    }

    #[test]
    fn test_no_files_no_output() {
        let mut buf = Vec::new();
        print_files(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
