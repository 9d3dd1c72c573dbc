use derive_more::{Display, Error};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("base64 string provided is invalid at index {index}")]
pub struct InvalidBase64 {
    pub index: usize,
}

/// Encodes `input` with the standard base64 alphabet, padding the final group with `=`. No line
/// breaks are inserted.
///
/// # Examples
/// ```
/// # use gears::utility::base64;
/// assert_eq!(base64::encode("Hello"), "SGVsbG8=");
/// ```
pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let buffer = chunk
            .iter()
            .fold(0_u32, |acc, byte| (acc << 8) | u32::from(*byte))
            << (8 * (3 - chunk.len()));

        for i in 0..=chunk.len() {
            let sextet = (buffer >> (18 - 6 * i)) & 0x3F;
            output.push(char::from(ALPHABET[sextet as usize]));
        }
        for _ in chunk.len()..3 {
            output.push('=');
        }
    }

    output
}

/// Decodes base64 text. ASCII whitespace is skipped and padding may be left out.
///
/// # Errors
/// Returns [`InvalidBase64`] with the byte index of the problem if `input` contains a character
/// outside of the alphabet, misplaced padding, data after padding, or ends with a lone character
/// that can't make up a whole byte.
///
/// # Examples
/// ```
/// # use gears::utility::base64;
/// assert_eq!(base64::decode("SGVsbG8="), Ok(b"Hello".to_vec()));
/// assert!(base64::decode("SGVsbG8*").is_err());
/// ```
pub fn decode(input: &str) -> Result<Vec<u8>, InvalidBase64> {
    let mut output = Vec::with_capacity(input.len() / 4 * 3);
    let mut buffer = 0_u32;
    let mut sextets = 0;
    let mut padding = 0;

    for (index, byte) in input.bytes().enumerate() {
        if byte.is_ascii_whitespace() {
            continue;
        }

        if byte == b'=' {
            if sextets < 2 || sextets + padding >= 4 {
                return Err(InvalidBase64 { index });
            }
            padding += 1;
            continue;
        }

        if padding > 0 {
            return Err(InvalidBase64 { index });
        }

        let sextet = decode_sextet(byte).ok_or(InvalidBase64 { index })?;
        buffer = (buffer << 6) | u32::from(sextet);
        sextets += 1;

        if sextets == 4 {
            output.extend_from_slice(&buffer.to_be_bytes()[1..]);
            buffer = 0;
            sextets = 0;
        }
    }

    match sextets {
        1 => return Err(InvalidBase64 { index: input.len() }),
        2 => output.push((buffer >> 4) as u8),
        3 => output.extend_from_slice(&[(buffer >> 10) as u8, (buffer >> 2) as u8]),
        _ => (),
    }

    Ok(output)
}

const fn decode_sextet(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}
