// Needs the `std` feature: `cargo test --features std`.
use std::cell::RefCell;
use std::io::{self, BufWriter, LineWriter, Write};
use std::rc::Rc;

use tinymap::{DisposeError, TinyMap, TinyMapError};

struct SharedSink {
    bytes: Rc<RefCell<Vec<u8>>>,
    broken: bool,
}

impl SharedSink {
    fn new(bytes: &Rc<RefCell<Vec<u8>>>) -> Self {
        Self {
            bytes: Rc::clone(bytes),
            broken: false,
        }
    }

    fn broken() -> Self {
        Self {
            bytes: Rc::new(RefCell::new(Vec::new())),
            broken: true,
        }
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer gone"));
        }
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_buffered_writer_is_flushed_on_reset() {
    let bytes = Rc::new(RefCell::new(Vec::new()));
    let mut map = TinyMap::new();
    map.set("out", BufWriter::new(SharedSink::new(&bytes)));

    if let Some(out) = map.get_mut("out") {
        out.write_all(b"response body").unwrap();
    }
    assert!(bytes.borrow().is_empty());

    map.reset();
    assert_eq!(bytes.borrow().as_slice(), b"response body");
}

#[test]
fn test_line_writer_is_flushed_on_reset() {
    let bytes = Rc::new(RefCell::new(Vec::new()));
    let mut map = TinyMap::new();
    map.set("log", LineWriter::new(SharedSink::new(&bytes)));

    if let Some(out) = map.get_mut("log") {
        out.write_all(b"no newline yet").unwrap();
    }
    assert!(bytes.borrow().is_empty());

    map.reset();
    assert_eq!(bytes.borrow().as_slice(), b"no newline yet");
}

#[test]
fn test_failed_flush_keeps_io_error_kind() {
    let mut map = TinyMap::new();
    map.set("out", BufWriter::new(SharedSink::broken()));
    if let Some(out) = map.get_mut("out") {
        out.write_all(b"lost").unwrap();
    }

    assert_eq!(
        map.try_reset(),
        Err(TinyMapError::ResetIncomplete {
            failed: 1,
            attempted: 1,
            first: DisposeError::Io {
                context: "flush of buffered writer",
                kind: io::ErrorKind::BrokenPipe,
            },
        })
    );
    assert!(map.is_empty());
}

#[test]
fn test_io_dispose_error_message() {
    let err = DisposeError::io(
        "flush of line writer",
        &io::Error::new(io::ErrorKind::BrokenPipe, "peer gone"),
    );

    assert_eq!(
        err.to_string(),
        format!(
            "Dispose failed: flush of line writer: {}",
            io::ErrorKind::BrokenPipe
        )
    );
}
