use zerocopy::{FromBytes, IntoBytes};

/// `true` if the target stores multi-byte values least-significant byte first.
///
/// Determined by laying out the 2-byte value `1` in memory and checking which byte holds it.
/// This is evaluated at compile time and can never change.
pub const NATIVE_IS_LITTLE_ENDIAN: bool = u16::from_ne_bytes([1, 0]) == 1;

/// Byte order of a multi-byte value.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Endian {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endian {
    /// The byte order of the platform this code runs on.
    pub const NATIVE: Endian = if NATIVE_IS_LITTLE_ENDIAN {
        Endian::Little
    } else {
        Endian::Big
    };

    /// Returns `true` if this is the platform's byte order.
    pub const fn is_native(self) -> bool {
        matches!(
            (self, NATIVE_IS_LITTLE_ENDIAN),
            (Endian::Little, true) | (Endian::Big, false)
        )
    }
}

/// Reverses the byte order of every element of `array`, in place.
///
/// Zero-sized and single-byte element types are left alone.
pub fn flip_array_endianness<T: IntoBytes + FromBytes>(array: &mut [T]) {
    let width = core::mem::size_of::<T>();
    if width < 2 {
        return;
    }
    for element in array.as_mut_bytes().chunks_exact_mut(width) {
        element.reverse();
    }
}

/// Converts `array`, whose elements were stored with byte order `from`, to native byte order.
/// Does nothing if `from` is already native.
pub fn array_to_native<T: IntoBytes + FromBytes>(array: &mut [T], from: Endian) {
    if !from.is_native() {
        flip_array_endianness(array);
    }
}

/// Converts `array` from native byte order to byte order `to`.
/// Does nothing if `to` is native.
pub fn native_to_endian<T: IntoBytes + FromBytes>(array: &mut [T], to: Endian) {
    if !to.is_native() {
        flip_array_endianness(array);
    }
}
