//! Where drained snapshots end up.
use crate::snapshot::Snapshot;
use crate::svg::write_svg_file;
use std::io;
use std::path::PathBuf;

/// A rendering surface. It receives each snapshot the front end drains,
/// including the unsorted numbers when they change.
pub trait ChartSink {
    /// Draw given snapshot.
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Keeps every rendered snapshot in memory.
impl ChartSink for Vec<Snapshot> {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.push(snapshot.clone());
        Ok(())
    }
}

/// Renders each snapshot to its own numbered svg file:
/// `<prefix>_000.svg`, `<prefix>_001.svg`...
#[derive(Debug)]
pub struct SvgChart {
    prefix: PathBuf,
    width: u32,
    height: u32,
    rendered: usize,
}

impl SvgChart {
    /// Files will be named after `prefix`, images are 1280x1024.
    pub fn new<P: Into<PathBuf>>(prefix: P) -> Self {
        SvgChart {
            prefix: prefix.into(),
            width: 1280,
            height: 1024,
            rendered: 0,
        }
    }

    /// Change image size.
    pub fn size(self, width: u32, height: u32) -> Self {
        SvgChart {
            width,
            height,
            ..self
        }
    }

    /// How many files were written so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Path of the `index`th file.
    pub fn path(&self, index: usize) -> PathBuf {
        let mut name = self
            .prefix
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!("_{:03}.svg", index));
        self.prefix.with_file_name(name)
    }
}

impl ChartSink for SvgChart {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let path = self.path(self.rendered);
        write_svg_file(snapshot, self.width, self.height, &path)?;
        self.rendered += 1;
        Ok(())
    }
}
