//! Document stream orchestration: decode, convert and encode each document.

use crate::convert::convert;
use crate::error::Error;
use crate::json::Encoder;
use crate::yaml::DocumentStream;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Convert every YAML document of `content` and write it to `writer`.
///
/// Returns the number of documents written. On a decode error, the
/// documents before the faulty one are written and flushed, then the
/// error is returned.
pub fn transcode<W: Write>(content: &str, writer: W) -> Result<usize, Error> {
    let mut encoder = Encoder::new(writer);

    for doc in DocumentStream::parse(content) {
        let doc = match doc {
            Ok(doc) => doc,
            Err(e) => {
                encoder.finish()?;
                return Err(e);
            }
        };
        let value = convert(&doc);
        log::debug!(
            "document #{}: {} converted",
            encoder.count() + 1,
            doc.kind_name()
        );
        encoder.encode(&value)?;
    }

    let count = encoder.count();
    encoder.finish()?;
    Ok(count)
}

/// Convert the YAML file at `input` into JSON written to `output`.
///
/// The input is opened before the output is created, so an unreadable
/// input leaves no output file behind.
pub fn transcode_file(input: &Path, output: &Path) -> Result<usize, Error> {
    let mut in_file = File::open(input).map_err(|e| Error::Open {
        path: input.to_path_buf(),
        source: e,
    })?;
    log::info!("reading {}", input.display());

    let out_file = File::create(output).map_err(|e| Error::Create {
        path: output.to_path_buf(),
        source: e,
    })?;
    log::info!("writing {}", output.display());

    let mut content = String::new();
    in_file.read_to_string(&mut content).map_err(Error::Read)?;

    let count = transcode(&content, BufWriter::new(out_file))?;
    log::info!("{} document(s) converted", count);
    Ok(count)
}
