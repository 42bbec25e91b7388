//! Per-frame records
//!
//! A record is a fixed-shape tuple chosen once per table. Each field is
//! written with its default `Display` formatting, preceded by a tab.

use std::fmt::Display;
use std::io::{self, Write};

use super::format::FIELD_SEPARATOR;

/// A fixed-arity tuple of values logged once per frame
pub trait Record {
    /// Number of fields in every row
    const ARITY: usize;

    /// Write every field in order, each preceded by the field separator
    fn write_fields<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;
}

/// Rows that carry only the frame number
impl Record for () {
    const ARITY: usize = 0;

    fn write_fields<W: Write + ?Sized>(&self, _out: &mut W) -> io::Result<()> {
        Ok(())
    }
}

macro_rules! impl_record_for_tuple {
    ($arity:expr => $($field:ident . $idx:tt),+) => {
        impl<$($field: Display),+> Record for ($($field,)+) {
            const ARITY: usize = $arity;

            fn write_fields<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
                $(write!(out, "{}{}", FIELD_SEPARATOR, self.$idx)?;)+
                Ok(())
            }
        }
    };
}

impl_record_for_tuple!(1 => A.0);
impl_record_for_tuple!(2 => A.0, B.1);
impl_record_for_tuple!(3 => A.0, B.1, C.2);
impl_record_for_tuple!(4 => A.0, B.1, C.2, D.3);
impl_record_for_tuple!(5 => A.0, B.1, C.2, D.3, E.4);
impl_record_for_tuple!(6 => A.0, B.1, C.2, D.3, E.4, F.5);
impl_record_for_tuple!(7 => A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_record_for_tuple!(8 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_record_for_tuple!(9 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_record_for_tuple!(10 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_record_for_tuple!(11 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_record_for_tuple!(12 => A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);
