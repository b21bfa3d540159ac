//! AppMessage dictionary encoding
//!
//! An inbound message is a dictionary of keyed tuples. All integers are
//! little-endian:
//!
//! ```text
//! ┌───────┬──────────────────────────────────────────────┐
//! │ COUNT │ TUPLE × COUNT                                │
//! │ 1B    │ KEY 4B │ TYPE 1B │ LENGTH 2B │ VALUE LENGTHB │
//! └───────┴──────────────────────────────────────────────┘
//! ```
//!
//! Integer tuples are 1, 2 or 4 bytes wide. The whole buffer is validated
//! by [`Dictionary::parse`], so iterating afterwards cannot fail.

use heapless::Vec;

/// Size of the dictionary header (tuple count)
pub const DICT_HEADER_SIZE: usize = 1;

/// Size of a tuple header (key + type + length)
pub const TUPLE_HEADER_SIZE: usize = 7;

/// Tuple value type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TupleType {
    /// Raw bytes
    ByteArray = 0,
    /// NUL-terminated string
    CString = 1,
    /// Unsigned integer, 1/2/4 bytes
    Uint = 2,
    /// Signed integer, 1/2/4 bytes
    Int = 3,
}

impl TupleType {
    /// Parse a type tag from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(TupleType::ByteArray),
            1 => Some(TupleType::CString),
            2 => Some(TupleType::Uint),
            3 => Some(TupleType::Int),
            _ => None,
        }
    }
}

/// Errors from dictionary parsing or building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictionaryError {
    /// Buffer ended inside a header or value
    Truncated,
    /// Unknown tuple type tag
    InvalidType,
    /// Integer tuple that is not 1, 2 or 4 bytes wide
    InvalidIntegerWidth,
    /// Bytes left over after the last tuple
    TrailingBytes,
    /// More than 255 tuples
    TooManyTuples,
    /// Builder buffer is full
    BufferTooSmall,
}

/// A decoded tuple value, borrowing from the message buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue<'a> {
    /// Raw bytes
    ByteArray(&'a [u8]),
    /// String bytes as sent, including any NUL terminator
    CString(&'a [u8]),
    /// Unsigned integer, zero-extended
    Uint(u32),
    /// Signed integer, sign-extended
    Int(i32),
}

/// One keyed entry of a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple<'a> {
    /// Message key
    pub key: u32,
    /// Decoded value
    pub value: TupleValue<'a>,
}

impl<'a> Tuple<'a> {
    /// Read the value as a 32-bit signed integer
    ///
    /// Integer tuples are widened (a 4-byte uint keeps its bit pattern).
    /// Byte arrays and strings yield their first four bytes little-endian,
    /// zero-padded when shorter.
    pub fn as_i32(&self) -> i32 {
        match self.value {
            TupleValue::Int(v) => v,
            TupleValue::Uint(v) => v as i32,
            TupleValue::ByteArray(bytes) | TupleValue::CString(bytes) => {
                let mut raw = [0u8; 4];
                let len = bytes.len().min(4);
                raw[..len].copy_from_slice(&bytes[..len]);
                i32::from_le_bytes(raw)
            }
        }
    }

    /// The value as text, for string tuples holding valid UTF-8
    pub fn as_str(&self) -> Option<&'a str> {
        match self.value {
            TupleValue::CString(bytes) => {
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                core::str::from_utf8(&bytes[..end]).ok()
            }
            _ => None,
        }
    }
}

/// Read one tuple from the front of `data`
///
/// Returns the tuple and the number of bytes it occupied.
fn read_tuple(data: &[u8]) -> Result<(Tuple<'_>, usize), DictionaryError> {
    if data.len() < TUPLE_HEADER_SIZE {
        return Err(DictionaryError::Truncated);
    }

    let key = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let tuple_type = TupleType::from_byte(data[4]).ok_or(DictionaryError::InvalidType)?;
    let length = u16::from_le_bytes([data[5], data[6]]) as usize;

    let end = TUPLE_HEADER_SIZE + length;
    if data.len() < end {
        return Err(DictionaryError::Truncated);
    }
    let raw = &data[TUPLE_HEADER_SIZE..end];

    let value = match tuple_type {
        TupleType::ByteArray => TupleValue::ByteArray(raw),
        TupleType::CString => TupleValue::CString(raw),
        TupleType::Uint => TupleValue::Uint(match *raw {
            [a] => a as u32,
            [a, b] => u16::from_le_bytes([a, b]) as u32,
            [a, b, c, d] => u32::from_le_bytes([a, b, c, d]),
            _ => return Err(DictionaryError::InvalidIntegerWidth),
        }),
        TupleType::Int => TupleValue::Int(match *raw {
            [a] => a as i8 as i32,
            [a, b] => i16::from_le_bytes([a, b]) as i32,
            [a, b, c, d] => i32::from_le_bytes([a, b, c, d]),
            _ => return Err(DictionaryError::InvalidIntegerWidth),
        }),
    };

    Ok((Tuple { key, value }, end))
}

/// A validated dictionary borrowing its message buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary<'a> {
    count: u8,
    tuples: &'a [u8],
}

impl<'a> Dictionary<'a> {
    /// Parse and validate a dictionary
    ///
    /// Every tuple header and value must lie inside `bytes`, and nothing
    /// may follow the last tuple.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DictionaryError> {
        let (&count, tuples) = bytes.split_first().ok_or(DictionaryError::Truncated)?;

        let mut offset = 0;
        for _ in 0..count {
            let (_, used) = read_tuple(&tuples[offset..])?;
            offset += used;
        }
        if offset != tuples.len() {
            return Err(DictionaryError::TrailingBytes);
        }

        Ok(Self { count, tuples })
    }

    /// Number of tuples
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Whether the dictionary has no tuples
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over tuples in wire order
    pub fn iter(&self) -> DictionaryIter<'a> {
        DictionaryIter {
            remaining: self.count,
            data: self.tuples,
        }
    }

    /// Find the first tuple with the given key
    pub fn find(&self, key: u32) -> Option<Tuple<'a>> {
        self.iter().find(|t| t.key == key)
    }
}

impl<'a> IntoIterator for &Dictionary<'a> {
    type Item = Tuple<'a>;
    type IntoIter = DictionaryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the tuples of a validated [`Dictionary`]
#[derive(Debug, Clone)]
pub struct DictionaryIter<'a> {
    remaining: u8,
    data: &'a [u8],
}

impl<'a> Iterator for DictionaryIter<'a> {
    type Item = Tuple<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // Structure was validated in Dictionary::parse
        let (tuple, used) = read_tuple(self.data).ok()?;
        self.data = &self.data[used..];
        self.remaining -= 1;
        Some(tuple)
    }
}

/// Writes dictionaries into a fixed-capacity buffer
///
/// Used by the companion side and by host simulation; the watch itself
/// only ever parses.
#[derive(Debug, Clone)]
pub struct DictionaryBuilder<const N: usize> {
    buffer: Vec<u8, N>,
}

impl<const N: usize> Default for DictionaryBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DictionaryBuilder<N> {
    /// Start an empty dictionary
    pub fn new() -> Self {
        let mut buffer = Vec::new();
        // N == 0 leaves the header out; push_* and finish report it
        let _ = buffer.push(0);
        Self { buffer }
    }

    fn push_raw(
        &mut self,
        key: u32,
        tuple_type: TupleType,
        value: &[u8],
    ) -> Result<&mut Self, DictionaryError> {
        let count = *self.buffer.first().ok_or(DictionaryError::BufferTooSmall)?;
        if count == u8::MAX {
            return Err(DictionaryError::TooManyTuples);
        }
        let length = u16::try_from(value.len()).map_err(|_| DictionaryError::BufferTooSmall)?;
        if self.buffer.len() + TUPLE_HEADER_SIZE + value.len() > N {
            return Err(DictionaryError::BufferTooSmall);
        }

        // Capacity checked above
        let _ = self.buffer.extend_from_slice(&key.to_le_bytes());
        let _ = self.buffer.push(tuple_type as u8);
        let _ = self.buffer.extend_from_slice(&length.to_le_bytes());
        let _ = self.buffer.extend_from_slice(value);
        self.buffer[0] = count + 1;
        Ok(self)
    }

    /// Append a 4-byte signed integer
    pub fn push_int(&mut self, key: u32, value: i32) -> Result<&mut Self, DictionaryError> {
        self.push_raw(key, TupleType::Int, &value.to_le_bytes())
    }

    /// Append a 4-byte unsigned integer
    pub fn push_uint(&mut self, key: u32, value: u32) -> Result<&mut Self, DictionaryError> {
        self.push_raw(key, TupleType::Uint, &value.to_le_bytes())
    }

    /// Append a 1-byte unsigned integer
    pub fn push_u8(&mut self, key: u32, value: u8) -> Result<&mut Self, DictionaryError> {
        self.push_raw(key, TupleType::Uint, &[value])
    }

    /// Append raw bytes
    pub fn push_bytes(&mut self, key: u32, value: &[u8]) -> Result<&mut Self, DictionaryError> {
        self.push_raw(key, TupleType::ByteArray, value)
    }

    /// Append a string with a NUL terminator
    pub fn push_cstring(&mut self, key: u32, value: &str) -> Result<&mut Self, DictionaryError> {
        let bytes = value.as_bytes();
        let mut raw: Vec<u8, N> = Vec::new();
        raw.extend_from_slice(bytes).map_err(|_| DictionaryError::BufferTooSmall)?;
        raw.push(0).map_err(|_| DictionaryError::BufferTooSmall)?;
        self.push_raw(key, TupleType::CString, &raw)
    }

    /// Encoded size so far
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether no tuples have been added
    pub fn is_empty(&self) -> bool {
        self.buffer.first().map_or(true, |&count| count == 0)
    }

    /// Encoded bytes so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Finish and return the encoded dictionary
    pub fn finish(self) -> Result<Vec<u8, N>, DictionaryError> {
        if self.buffer.is_empty() {
            return Err(DictionaryError::BufferTooSmall);
        }
        Ok(self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::parse(&[0]).unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.iter().count(), 0);
        assert!(dict.find(1).is_none());
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(Dictionary::parse(&[]), Err(DictionaryError::Truncated));
    }

    #[test]
    fn test_int_tuple_layout() {
        let mut builder = DictionaryBuilder::<32>::new();
        builder.push_int(10000, -2).unwrap();
        let bytes = builder.finish().unwrap();

        assert_eq!(
            bytes.as_slice(),
            &[1, 0x10, 0x27, 0, 0, 3, 4, 0, 0xFE, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_find_returns_values() {
        let mut builder = DictionaryBuilder::<64>::new();
        builder
            .push_int(1, 42)
            .unwrap()
            .push_uint(2, 0xFFFF_FFFF)
            .unwrap()
            .push_cstring(3, "hi")
            .unwrap();
        let bytes = builder.finish().unwrap();
        let dict = Dictionary::parse(&bytes).unwrap();

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.find(1).unwrap().as_i32(), 42);
        assert_eq!(dict.find(2).unwrap().as_i32(), -1);
        assert_eq!(dict.find(3).unwrap().as_str(), Some("hi"));
        assert!(dict.find(4).is_none());
    }

    #[test]
    fn test_find_returns_first_duplicate() {
        let mut builder = DictionaryBuilder::<64>::new();
        builder.push_int(7, 1).unwrap().push_int(7, 2).unwrap();
        let bytes = builder.finish().unwrap();
        let dict = Dictionary::parse(&bytes).unwrap();

        assert_eq!(dict.find(7).unwrap().as_i32(), 1);
    }

    #[test]
    fn test_narrow_integers_are_widened() {
        // int8 -1, uint8 200, int16 -300
        let bytes = [
            3, //
            1, 0, 0, 0, 3, 1, 0, 0xFF, //
            2, 0, 0, 0, 2, 1, 0, 200, //
            3, 0, 0, 0, 3, 2, 0, 0xD4, 0xFE,
        ];
        let dict = Dictionary::parse(&bytes).unwrap();

        assert_eq!(dict.find(1).unwrap().as_i32(), -1);
        assert_eq!(dict.find(2).unwrap().as_i32(), 200);
        assert_eq!(dict.find(3).unwrap().as_i32(), -300);
    }

    #[test]
    fn test_byte_array_read_as_int() {
        let mut builder = DictionaryBuilder::<32>::new();
        builder.push_bytes(5, &[0x01]).unwrap();
        builder.push_bytes(6, &[0x78, 0x56, 0x34, 0x12, 0x99]).unwrap();
        let bytes = builder.finish().unwrap();
        let dict = Dictionary::parse(&bytes).unwrap();

        assert_eq!(dict.find(5).unwrap().as_i32(), 1);
        assert_eq!(dict.find(6).unwrap().as_i32(), 0x1234_5678);
    }

    #[test]
    fn test_invalid_integer_width() {
        let bytes = [1, 1, 0, 0, 0, 3, 3, 0, 1, 2, 3];
        assert_eq!(
            Dictionary::parse(&bytes),
            Err(DictionaryError::InvalidIntegerWidth)
        );
    }

    #[test]
    fn test_invalid_type() {
        let bytes = [1, 1, 0, 0, 0, 9, 1, 0, 1];
        assert_eq!(Dictionary::parse(&bytes), Err(DictionaryError::InvalidType));
    }

    #[test]
    fn test_truncated_value() {
        let bytes = [1, 1, 0, 0, 0, 3, 4, 0, 1, 2];
        assert_eq!(Dictionary::parse(&bytes), Err(DictionaryError::Truncated));
    }

    #[test]
    fn test_count_larger_than_tuples() {
        let bytes = [2, 1, 0, 0, 0, 2, 1, 0, 1];
        assert_eq!(Dictionary::parse(&bytes), Err(DictionaryError::Truncated));
    }

    #[test]
    fn test_trailing_bytes() {
        let bytes = [1, 1, 0, 0, 0, 2, 1, 0, 1, 0xEE];
        assert_eq!(Dictionary::parse(&bytes), Err(DictionaryError::TrailingBytes));
    }

    #[test]
    fn test_builder_capacity() {
        let mut builder = DictionaryBuilder::<8>::new();
        assert_eq!(
            builder.push_int(1, 1).map(|_| ()),
            Err(DictionaryError::BufferTooSmall)
        );
        assert!(builder.is_empty());
        assert_eq!(builder.len(), DICT_HEADER_SIZE);
    }
}
