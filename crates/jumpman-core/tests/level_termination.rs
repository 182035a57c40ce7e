// crates/jumpman-core/tests/level_termination.rs

use jumpman_core::level::{encode_level, parse_level, LevelCommand};
use proptest::prelude::*;

proptest! {
    /// Decoding arbitrary bytes terminates, never reads out of bounds, and
    /// the command spans tile the consumed prefix of the input in order.
    #[test]
    fn decode_terminates_and_spans_tile(bytes in proptest::collection::vec(any::<u8>(), 0..800)) {
        let cmds = parse_level(&bytes);

        let mut at = 0usize;
        for cmd in &cmds {
            prop_assert_eq!(cmd.source_index(), at);
            prop_assert!(cmd.encoded_len() > 0);
            at += cmd.encoded_len();
        }
        prop_assert!(at <= bytes.len());

        // decode stops early only at an end marker
        if at < bytes.len() {
            let ends_with_end_marker = matches!(cmds.last(), Some(LevelCommand::End { .. }));
            prop_assert!(ends_with_end_marker);
        }
    }

    /// Re-encoding a decode is a fixed point: a second decode/encode pass
    /// reproduces the first encoding byte-for-byte.
    #[test]
    fn reencode_is_idempotent(bytes in proptest::collection::vec(any::<u8>(), 0..800)) {
        let once = encode_level(&parse_level(&bytes)).unwrap();
        let twice = encode_level(&parse_level(&once)).unwrap();
        prop_assert_eq!(once, twice);
    }
}
