//! Zero-filled content

use super::ContentStrategy;
use crate::config::ContentKind;

/// Writes nothing but 0x00 bytes
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroContent;

impl ContentStrategy for ZeroContent {
    fn kind(&self) -> ContentKind {
        ContentKind::Zero
    }

    fn begin_file(&mut self, block: &mut [u8]) {
        block.fill(0);
    }

    #[inline]
    fn fill_chunk(&mut self, _chunk: &mut [u8]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentWriter;
    use tempfile::TempDir;

    #[test]
    fn test_zero_clears_dirty_buffer() {
        let mut block = vec![0xAAu8; 4096];
        let mut content = ZeroContent;
        content.begin_file(&mut block);
        assert!(block.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_file_all_zero_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("0.data");
        let mut writer = ContentWriter::new(ContentKind::Zero);

        writer.write(&path, 10, 4, false).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(data.len(), 10 * 1024);
        assert!(data.iter().all(|&b| b == 0));
    }
}
