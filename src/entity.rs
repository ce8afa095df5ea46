//! Capability shared by the TRP file entities
use crate::{
    lines::{LineSink, LineSource},
    prelude::{Error, Session},
};

/// "EOF" sentinel that terminates the record section
pub(crate) const SENTINEL: &str = "EOF";

mod private {
    pub trait Sealed {}
    impl Sealed for crate::prelude::Header {}
    impl Sealed for crate::prelude::Record {}
}

/// [Entity] is implemented by the two kinds of TRP file content:
/// the [crate::prelude::Header] and the [crate::prelude::Record].
pub trait Entity: private::Sealed + Sized {
    /// Decodes next [Entity] from [LineSource], updating the [Session].
    /// Returns None when the end of the record section is reached.
    fn read<S: LineSource>(session: &mut Session, source: &mut S) -> Result<Option<Self>, Error>;
    /// Produces this [Entity] into [LineSink], updating the [Session].
    fn write<K: LineSink>(&self, session: &mut Session, sink: &mut K) -> Result<(), Error>;
}

/// Produces the "EOF" sentinel into [LineSink], once per [Session].
pub(crate) fn write_sentinel<K: LineSink>(
    session: &mut Session,
    sink: &mut K,
) -> Result<(), Error> {
    if !session.eof_written {
        sink.put_line(SENTINEL)?;
        session.eof_written = true;
    }
    Ok(())
}
