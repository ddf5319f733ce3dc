//! Decoding helpers for checking emitted bytes; the crate itself only
//! encodes.

/// Decodes an unsigned *LEB128* 32-bit integer, returning the value and the
/// number of bytes consumed.
pub fn decode_u32(bytes: &[u8]) -> (u32, usize) {
    let mut value = 0u32;
    let mut shift = 0;
    for (i, byte) in bytes.iter().enumerate() {
        value |= u32::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return (value, i + 1);
        }
        shift += 7;
    }
    panic!("unterminated LEB128");
}

/// Decodes an unsigned *LEB128* 64-bit integer.
pub fn decode_u64(bytes: &[u8]) -> (u64, usize) {
    let mut value = 0u64;
    let mut shift = 0;
    for (i, byte) in bytes.iter().enumerate() {
        value |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return (value, i + 1);
        }
        shift += 7;
    }
    panic!("unterminated LEB128");
}

/// Decodes a signed *LEB128* 32-bit integer.
pub fn decode_s32(bytes: &[u8]) -> (i32, usize) {
    let (value, len) = decode_s64(bytes);
    (value as i32, len)
}

/// Decodes a signed *LEB128* 64-bit integer.
pub fn decode_s64(bytes: &[u8]) -> (i64, usize) {
    let mut value = 0i64;
    let mut shift = 0;
    for (i, byte) in bytes.iter().enumerate() {
        value |= i64::from(byte & 0x7F) << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            if shift < 64 && byte & 0x40 != 0 {
                value |= -1i64 << shift;
            }
            return (value, i + 1);
        }
    }
    panic!("unterminated LEB128");
}

/// The 8-byte module preamble.
pub const PREAMBLE: [u8; 8] = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

/// Splits an emitted module into `(section id, payload)` pairs.
pub fn sections(wasm: &[u8]) -> Vec<(u8, Vec<u8>)> {
    assert_eq!(&wasm[..8], &PREAMBLE, "module preamble");
    let mut rest = &wasm[8..];
    let mut out = Vec::new();
    while !rest.is_empty() {
        let id = rest[0];
        let (len, consumed) = decode_u32(&rest[1..]);
        let start = 1 + consumed;
        let end = start + len as usize;
        out.push((id, rest[start..end].to_vec()));
        rest = &rest[end..];
    }
    out
}

/// The payload of the section with the given id, if present.
pub fn section(wasm: &[u8], id: u8) -> Option<Vec<u8>> {
    sections(wasm)
        .into_iter()
        .find(|(section_id, _)| *section_id == id)
        .map(|(_, payload)| payload)
}

/// The instruction stream of the one and only function body in the code
/// section, local declarations and final `end` included.
pub fn sole_code_body(wasm: &[u8]) -> Vec<u8> {
    let code = section(wasm, 10).expect("code section");
    let (count, consumed) = decode_u32(&code);
    assert_eq!(count, 1, "one function body");
    let rest = &code[consumed..];
    let (size, consumed) = decode_u32(rest);
    let body = &rest[consumed..];
    assert_eq!(body.len(), size as usize);
    body.to_vec()
}

/// Whether `haystack` contains `needle` as a contiguous subsequence.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
