use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::datatype::{ByteOrder, ClassKind};

mod private {
    pub trait Sealed {}
}

/// A native value type which can be stored in a dataset.
///
/// Implemented for the fixed-width signed integers and the IEEE floats.
pub trait Element: Copy + Default + private::Sealed {
    const CLASS: ClassKind;
    const SIZE: usize;

    fn put<B: BufMut>(self, buf: &mut B, order: ByteOrder);

    fn get<B: Buf>(buf: &mut B, order: ByteOrder) -> Self;
}

macro_rules! impl_element {
    ($ty:ty, $class:expr, $put_le:ident, $put_be:ident, $get_le:ident, $get_be:ident) => {
        impl private::Sealed for $ty {}

        impl Element for $ty {
            const CLASS: ClassKind = $class;
            const SIZE: usize = size_of::<$ty>();

            fn put<B: BufMut>(self, buf: &mut B, order: ByteOrder) {
                match order {
                    ByteOrder::LittleEndian => buf.$put_le(self),
                    ByteOrder::BigEndian => buf.$put_be(self),
                }
            }

            fn get<B: Buf>(buf: &mut B, order: ByteOrder) -> Self {
                match order {
                    ByteOrder::LittleEndian => buf.$get_le(),
                    ByteOrder::BigEndian => buf.$get_be(),
                }
            }
        }
    };
}

// single bytes have no order
impl private::Sealed for i8 {}

impl Element for i8 {
    const CLASS: ClassKind = ClassKind::Integer;
    const SIZE: usize = 1;

    fn put<B: BufMut>(self, buf: &mut B, _order: ByteOrder) {
        buf.put_i8(self)
    }

    fn get<B: Buf>(buf: &mut B, _order: ByteOrder) -> Self {
        buf.get_i8()
    }
}

impl_element!(i16, ClassKind::Integer, put_i16_le, put_i16, get_i16_le, get_i16);
impl_element!(i32, ClassKind::Integer, put_i32_le, put_i32, get_i32_le, get_i32);
impl_element!(i64, ClassKind::Integer, put_i64_le, put_i64, get_i64_le, get_i64);
impl_element!(f32, ClassKind::Float, put_f32_le, put_f32, get_f32_le, get_f32);
impl_element!(f64, ClassKind::Float, put_f64_le, put_f64, get_f64_le, get_f64);

/// Encode elements into their stored representation.
pub fn encode<T: Element>(values: &[T], order: ByteOrder) -> Bytes {
    let mut buf = BytesMut::with_capacity(values.len() * T::SIZE);
    for &v in values {
        v.put(&mut buf, order);
    }
    buf.freeze()
}

/// Decode stored bytes into `out`.
///
/// The caller guarantees that `bytes` holds exactly `out.len()` elements.
pub fn decode_into<T: Element>(mut bytes: Bytes, order: ByteOrder, out: &mut [T]) {
    debug_assert_eq!(bytes.len(), out.len() * T::SIZE);
    for slot in out.iter_mut() {
        *slot = T::get(&mut bytes, order);
    }
}
