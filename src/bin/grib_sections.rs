//! Prints the section layout of a GRIB message file.

use std::process::ExitCode;

use gribbit::cursor::BitCursor;
use gribbit::errors::DecodeError;
use gribbit::section::walk_sections;
use gribbit::source::FileSource;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: grib_sections <file.grb2>");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{path}: {:?}: {err}", err.operation());
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), DecodeError> {
    let mut source = FileSource::open(path)?;
    let mut cursor = BitCursor::new(&mut source);

    let marker = cursor.read_bytes(4)?;
    log::info!("marker: {}", String::from_utf8_lossy(&marker));

    cursor.reset();
    for header in walk_sections(&mut cursor)? {
        println!("section {} ({} bytes)", header.number, header.length);
    }

    Ok(())
}
