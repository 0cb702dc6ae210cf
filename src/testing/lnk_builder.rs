/// Builds minimal shortcut files with a local base path.
pub struct LnkBuilder {
    raw_path: Vec<u8>,
    id_list: Option<u16>,
    base_path_offset: Option<u32>,
    trailing: Vec<u8>,
}

const HEADER_SIZE: usize = 0x4C;
const LINK_INFO_HEADER_SIZE: u32 = 0x1C;

impl LnkBuilder {
    pub fn new(target: &str) -> Self {
        Self::from_raw(target.as_bytes())
    }

    /// Base path bytes stored as-is, embedded nulls included.
    pub fn from_raw(raw: &[u8]) -> Self {
        Self { raw_path: raw.to_vec(), id_list: None, base_path_offset: None, trailing: Vec::new() }
    }

    pub fn with_id_list(mut self, len: u16) -> Self {
        self.id_list = Some(len);
        self
    }

    pub fn with_base_path_offset(mut self, offset: u32) -> Self {
        self.base_path_offset = Some(offset);
        self
    }

    /// Bytes after the location info block (string data, extra blocks).
    pub fn with_trailing(mut self, trailing: Vec<u8>) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[..4].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        let flags: u32 = if self.id_list.is_some() { 0x1 | 0x2 } else { 0x2 };
        bytes[0x14..0x18].copy_from_slice(&flags.to_le_bytes());

        if let Some(len) = self.id_list {
            bytes.extend_from_slice(&len.to_le_bytes());
            bytes.extend(std::iter::repeat_n(0xAB, len as usize));
        }

        let total = LINK_INFO_HEADER_SIZE + self.raw_path.len() as u32 + 2;
        let base_path_offset = self.base_path_offset.unwrap_or(LINK_INFO_HEADER_SIZE);
        for field in [total, LINK_INFO_HEADER_SIZE, 0x1, 0x1C, base_path_offset, 0, total - 1] {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        bytes.extend_from_slice(&self.raw_path);
        bytes.extend_from_slice(&[0, 0]);
        bytes.extend_from_slice(&self.trailing);
        bytes
    }
}
