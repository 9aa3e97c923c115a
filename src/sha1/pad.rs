pub(crate) fn pack_word(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

// one terminator bit plus the 64-bit length field must fit after the input
pub(crate) fn block_count(num_bytes: usize) -> usize {
    (8 * num_bytes as u64 + 1 + 64).div_ceil(512) as usize
}

pub(crate) fn pad_message(bytes: &[u8]) -> Vec<u32> {
    let message_length: u64 = bytes.len() as u64 * 8;
    let mut message: Vec<u8> = bytes.to_vec();
    message.reserve(1 + 63 + 8);
    message.push(0x80);
    while message.len() % 64 != 56 {
        message.push(0);
    }
    message.extend(message_length.to_be_bytes());

    let words: Vec<u32> = message.chunks_exact(4)
        .map(|chunk| pack_word(chunk.try_into().unwrap()))
        .collect();
    debug_assert_eq!(words.len(), 16 * block_count(bytes.len()));
    words
}
