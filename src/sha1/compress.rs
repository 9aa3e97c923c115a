use tracing::trace;

pub(crate) fn expand_schedule(block: &[u32]) -> [u32; 80] {
    let mut w: [u32; 80] = [0; 80];
    w[..16].copy_from_slice(block);
    for (i, word) in w[..16].iter().enumerate() {
        trace!("W[{i}] = {word:08X}");
    }
    // later entries depend on earlier ones, so i must increase
    for i in 16..80 {
        w[i] = (w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16]).rotate_left(1);
    }
    w
}

pub(crate) fn compress(seed: [u32; 5], schedule: &[u32; 80]) -> [u32; 5] {
    let [mut a, mut b, mut c, mut d, mut e] = seed;

    for (t, &word) in schedule.iter().enumerate() {
        let temp = a.rotate_left(5)
                         .wrapping_add(round_function(t, b, c, d))
                         .wrapping_add(e)
                         .wrapping_add(round_constant(t))
                         .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
        trace!("t = {t:2}: {a:08X} {b:08X} {c:08X} {d:08X} {e:08X}");
    }

    [a, b, c, d, e]
}

fn round_function(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..=19 => (b & c) | ((!b) & d),
        20..=39 => b ^ c ^ d,
        40..=59 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}

fn round_constant(t: usize) -> u32 {
    match t {
        0..=19 => 0x5A827999,
        20..=39 => 0x6ED9EBA1,
        40..=59 => 0x8F1BBCDC,
        _ => 0xCA62C1D6,
    }
}

#[cfg(test)]
mod tests {
    use super::{compress, expand_schedule, round_constant, round_function};

    #[test]
    fn schedule_copies_block_words() {
        let block: Vec<u32> = (0..16).map(|i| 0x01010101u32.wrapping_mul(i + 1)).collect();
        let w = expand_schedule(&block);
        assert_eq!(&w[..16], block.as_slice());
    }

    #[test]
    fn schedule_recurrence() {
        let block: Vec<u32> = (0..16).map(|i| 0xDEADBEEFu32.rotate_left(i)).collect();
        let w = expand_schedule(&block);
        assert_eq!(w[16], (w[13] ^ w[8] ^ w[2] ^ w[0]).rotate_left(1));
        assert_eq!(w[79], (w[76] ^ w[71] ^ w[65] ^ w[63]).rotate_left(1));
    }

    #[test]
    fn round_constants_change_at_range_boundaries() {
        assert_eq!(round_constant(0), 0x5A827999);
        assert_eq!(round_constant(19), 0x5A827999);
        assert_eq!(round_constant(20), 0x6ED9EBA1);
        assert_eq!(round_constant(39), 0x6ED9EBA1);
        assert_eq!(round_constant(40), 0x8F1BBCDC);
        assert_eq!(round_constant(59), 0x8F1BBCDC);
        assert_eq!(round_constant(60), 0xCA62C1D6);
        assert_eq!(round_constant(79), 0xCA62C1D6);
    }

    #[test]
    fn round_function_selects_choice_parity_majority() {
        assert_eq!(round_function(0, 0xFFFFFFFF, 0x12345678, 0x9ABCDEF0), 0x12345678);
        assert_eq!(round_function(0, 0x00000000, 0x12345678, 0x9ABCDEF0), 0x9ABCDEF0);
        assert_eq!(round_function(25, 0xFF00FF00, 0x00FF00FF, 0x0F0F0F0F), 0xF0F0F0F0);
        assert_eq!(round_function(45, 0xFFFF0000, 0xFF00FF00, 0x00FFFF00), 0xFFFFFF00);
        assert_eq!(round_function(70, 1, 2, 4), 7);
    }

    #[test]
    fn compress_depends_on_seed() {
        let w = expand_schedule(&[0u32; 16]);
        assert_ne!(compress([0, 0, 0, 0, 0], &w), compress([1, 0, 0, 0, 0], &w));
    }
}
