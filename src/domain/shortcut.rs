//! Target extraction from Windows `.lnk` shortcut files.
//!
//! Only the fields needed to reach the local base path are read: the link flags in the
//! fixed header, the optional shell item ID list, and the file location info block.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use thiserror::Error;
use tracing::debug;

const FLAGS_OFFSET: u64 = 0x14;
const HEADER_END: u64 = 0x4C;
const HAS_ID_LIST: u32 = 1;
/// Bytes between the location info length and the base path offset.
const BASE_PATH_FIELD_SKIP: i64 = 0xC;
/// Terminating nulls after the base path, not part of the target.
const PATH_TERMINATORS: i64 = 2;

#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("supplied file must be a .lnk file")]
    NotShortcut,

    #[error("path region ends before it starts ({0} bytes)")]
    NegativeLength(i64),

    #[error("path region of {needed} bytes exceeds the {available} bytes left in the file")]
    Truncated { needed: u64, available: u64 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Resolve the target of the shortcut at `path`, or an empty string when it can't be read.
pub fn resolve(path: &Path) -> String {
    match read_target(path) {
        Ok(target) => target,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "shortcut target unresolved");
            String::new()
        }
    }
}

/// Fallible form of [`resolve`].
pub fn read_target(path: &Path) -> Result<String, ShortcutError> {
    if !is_shortcut(path) {
        return Err(ShortcutError::NotShortcut);
    }

    let mut reader = BufReader::new(File::open(path)?);
    parse_target(&mut reader)
}

/// Whether `path` carries the `.lnk` extension, in any case.
pub fn is_shortcut(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("lnk"))
}

/// Walk the fixed-offset layout of `reader` and return the embedded base path.
pub fn parse_target<R: Read + Seek>(reader: &mut R) -> Result<String, ShortcutError> {
    reader.seek(SeekFrom::Start(FLAGS_OFFSET))?;
    let flags = reader.read_u32::<LittleEndian>()?;

    if flags & HAS_ID_LIST == HAS_ID_LIST {
        reader.seek(SeekFrom::Start(HEADER_END))?;
        let id_list_len = reader.read_u16::<LittleEndian>()?;
        reader.seek(SeekFrom::Current(i64::from(id_list_len)))?;
    }

    let file_info_start = reader.stream_position()?;
    let total_struct_length = reader.read_u32::<LittleEndian>()?;
    reader.seek(SeekFrom::Current(BASE_PATH_FIELD_SKIP))?;
    let base_path_offset = reader.read_u32::<LittleEndian>()?;

    let position = reader.seek(SeekFrom::Start(file_info_start + u64::from(base_path_offset)))?;
    let path_length = i64::from(total_struct_length) + file_info_start as i64
        - position as i64
        - PATH_TERMINATORS;
    if path_length < 0 {
        return Err(ShortcutError::NegativeLength(path_length));
    }

    let end = reader.seek(SeekFrom::End(0))?;
    let available = end.saturating_sub(position);
    let needed = path_length as u64;
    if needed > available {
        return Err(ShortcutError::Truncated { needed, available });
    }
    reader.seek(SeekFrom::Start(position))?;

    let mut raw = vec![0u8; needed as usize];
    reader.read_exact(&mut raw)?;

    Ok(String::from_utf8_lossy(&rejoin_split_path(&raw)).into_owned())
}

/// Collapse a local path and a UNC fallback that were stored back to back.
///
/// When `\0\0` is present, the bytes before it are kept and joined with whatever
/// follows the first null after the next `\\` marker. A missing marker behaves as
/// index -1, so the arithmetic below mirrors that exactly.
fn rejoin_split_path(raw: &[u8]) -> Vec<u8> {
    let Some(begin) = find_from(raw, b"\0\0", 0) else {
        return raw.to_vec();
    };

    let end = find_from(raw, b"\\\\", begin + 2).map_or(1, |i| i + 2);
    let end = find_from(raw, b"\0", end).map_or(0, |i| i + 1);

    let mut joined = raw[..begin].to_vec();
    joined.extend_from_slice(&raw[end..]);
    joined
}

fn find_from(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    haystack
        .get(start..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + start)
}
