use folio_protocol::{Container, Figure, GalleryCommand};

/// A platform that can materialise gallery commands (the DOM, or an
/// in-memory tree in tests).
pub trait GallerySink {
    type Error;

    fn clear(&mut self, target: Container) -> Result<(), Self::Error>;
    fn begin_row(&mut self, row: usize, len: usize) -> Result<(), Self::Error>;
    fn figure(&mut self, target: Container, figure: &Figure) -> Result<(), Self::Error>;
    fn end_row(&mut self) -> Result<(), Self::Error>;
}

/// Feed `commands` to `sink` in order, stopping at the first error.
pub fn apply_commands<S: GallerySink>(
    sink: &mut S,
    commands: &[GalleryCommand],
) -> Result<(), S::Error> {
    for command in commands {
        match command {
            GalleryCommand::Clear { target } => sink.clear(*target)?,
            GalleryCommand::BeginRow { row, len } => sink.begin_row(*row, *len)?,
            GalleryCommand::Figure { target, figure } => sink.figure(*target, figure)?,
            GalleryCommand::EndRow => sink.end_row()?,
        }
    }
    Ok(())
}
