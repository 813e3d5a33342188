use std::fs::File;
use std::io;
use std::io::{stderr, stdout, BufWriter, Write};
use std::path::Path;

/// Creates a `Writer` object.
///
/// Attempts to create a file under a given name. However, if the name is `"stdout"`
/// or `"stderr"`, the returned `Writer` will be connected to either `stdout` or
/// `stderr` stream, respectively. An empty file name also results in writing to `stdout`.
///
/// # Arguments
/// * `out_fname` - file name, `"stdout"` or `"stderr"`
/// * `if_append` - existing file will be removed if false, otherwise the new content will be appended
pub fn out_writer(out_fname: &str, if_append: bool) -> io::Result<Box<dyn Write>> {
    match out_fname {
        "" | "stdout" => Ok(Box::new(stdout()) as Box<dyn Write>),
        "stderr" => Ok(Box::new(stderr()) as Box<dyn Write>),
        _ => {
            let path = Path::new(out_fname);
            let file = if if_append {
                File::options().append(true).create(true).open(path)?
            } else {
                File::create(path)?
            };
            return Ok(Box::new(BufWriter::new(file)) as Box<dyn Write>);
        }
    }
}
