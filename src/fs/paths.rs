use std::path::{Path, PathBuf};

use workflow::descriptor::{READER_CONFIG, WRITER_CONFIG};

use super::Fs;

/// Utility fns for making common types of paths.
impl Fs {
    /// $OUTPUT/tempConfig-<workflow>.json
    pub fn temp_config<'a>(&self, workflow: &str, buf: &'a mut PathBuf) -> &'a Path {
        buf.clear();
        buf.push(&self.output_prefix);
        buf.push(format!("tempConfig-{workflow}.json"));
        &*buf
    }

    /// $OUTPUT/aodReaderTempConfig.json
    pub fn reader_config<'a>(&self, buf: &'a mut PathBuf) -> &'a Path {
        self.parts2(&self.output_prefix, READER_CONFIG, buf)
    }

    /// $OUTPUT/aodWriterTempConfig.json
    pub fn writer_config<'a>(&self, buf: &'a mut PathBuf) -> &'a Path {
        self.parts2(&self.output_prefix, WRITER_CONFIG, buf)
    }

    /// $OUTPUT/<workflow>.log
    pub fn pipeline_log<'a>(&self, workflow: &str, buf: &'a mut PathBuf) -> &'a Path {
        buf.clear();
        buf.push(&self.output_prefix);
        buf.push(format!("{workflow}.log"));
        &*buf
    }

    fn parts2<'a, T, U>(&self, p1: T, p2: U, buf: &'a mut PathBuf) -> &'a Path
    where
        T: AsRef<Path>,
        U: AsRef<Path>,
    {
        buf.clear();
        buf.push(p1);
        buf.push(p2);
        &*buf
    }
}
