// crates/jumpman-core/tests/level_roundtrip.rs

use jumpman_core::level::{encode_level, parse_level, Direction, LevelCommand};

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

#[test]
fn single_girder_with_trailing_end() {
    let bytes = [0xfe, 0x00, 0x04, 0xff];
    let cmds = parse_level(&bytes);
    assert_eq!(cmds.len(), 1, "fixed payload consumes the 0xff blindly");
    match &cmds[0] {
        LevelCommand::Girder(r) => {
            assert_eq!(r.source_index, 0);
            assert_eq!((r.col, r.row), (0, 4));
            assert_eq!(r.length, 127);
            assert_eq!(r.direction, Direction::Left);
        }
        other => panic!("expected girder, got {other:?}"),
    }
    assert_eq!(encode_level(&cmds).unwrap(), bytes);
}

#[test]
fn peanut_group_truncated_by_terminator() {
    // declared count 9, but the placement list stops at the reserved 0xff
    let bytes = [0xfd, 0x04, 0x09, 0x05, 0xff];
    let cmds = parse_level(&bytes);
    assert_eq!(cmds.len(), 2);
    match &cmds[0] {
        LevelCommand::Peanuts(g) => {
            assert_eq!(g.source_index, 0);
            assert_eq!((g.base_col(), g.base_row()), (4, 0));
            assert_eq!(g.placements.len(), 1);
            let p = &g.placements[0];
            assert_eq!(p.source_index, 3);
            assert_eq!((p.col, p.row, p.variant), (9, 0, 0));
        }
        other => panic!("expected peanuts, got {other:?}"),
    }
    assert!(matches!(cmds[1], LevelCommand::End { source_index: 4 }));

    // re-encode normalizes the count byte to the decoded placement count
    let reenc = encode_level(&cmds).unwrap();
    assert_eq!(reenc, [0xfd, 0x04, 0x01, 0x05, 0xff]);
}

#[test]
fn peanut_list_stops_at_next_opcode() {
    let bytes = [0xfd, 0x21, 0x09, 0x45, 0x03, 0xfe, 0x05, 0x0a, 0x03, 0xff];
    let cmds = parse_level(&bytes);
    assert_eq!(cmds.len(), 3);
    match &cmds[0] {
        LevelCommand::Peanuts(g) => {
            assert_eq!(g.placements.len(), 2);
            // 0x45: col off 5, row off 0, variant 1, against base (1, 2)
            assert_eq!(
                (g.placements[0].col, g.placements[0].row, g.placements[0].variant),
                (6, 2, 1)
            );
            assert_eq!(g.placements[1].source_index, 4);
        }
        other => panic!("expected peanuts, got {other:?}"),
    }
    match &cmds[1] {
        LevelCommand::Girder(r) => {
            assert_eq!(r.source_index, 5);
            assert_eq!((r.col, r.row), (5, 10));
            assert_eq!(r.length, 3);
            assert_eq!(r.direction, Direction::Right);
        }
        other => panic!("expected girder, got {other:?}"),
    }
}

#[test]
fn well_formed_mixed_stream_roundtrips_byte_exact() {
    let bytes = [
        0xfe, 0x02, 0x10, 0x05, // girder right 5
        0xfe, 0x26, 0x20, 0x85, // girder left 5
        0xfc, 0x08, 0x04, 0x0a, // ladder down 10
        0xfc, 0x08, 0x30, 0xc9, // rope up 9
        0xfd, 0x12, 0x02, 0x00, 0x3f, // two peanuts
        0x42, // unknown opcode, preserved
        0xff,
    ];
    let cmds = parse_level(&bytes);
    assert_eq!(cmds.len(), 7);

    // spans tile the stream: each command starts where the previous ended
    let mut at = 0usize;
    for cmd in &cmds {
        assert_eq!(cmd.source_index(), at);
        at += cmd.encoded_len();
    }
    assert_eq!(at, bytes.len());

    assert!(matches!(&cmds[2], LevelCommand::Ladder(r)
        if r.length == 10 && r.direction == Direction::Down));
    assert!(matches!(&cmds[3], LevelCommand::Rope(r)
        if r.length == 9 && r.direction == Direction::Up));
    assert!(matches!(&cmds[5], LevelCommand::Special(s) if s.opcode() == 0x42));

    assert_eq!(encode_level(&cmds).unwrap(), bytes);
}

#[test]
fn unknown_opcode_soup_is_preserved_verbatim() {
    let mut seed = 0x1234_5678_9abc_def0u64;
    let mut bytes = Vec::with_capacity(300);
    for _ in 0..300 {
        // keep below the opcode range so every byte is a 1-byte special
        bytes.push(((lcg_next(&mut seed) >> 56) as u8) % 0xfc);
    }
    let cmds = parse_level(&bytes);
    assert_eq!(cmds.len(), 300);
    assert!(cmds
        .iter()
        .all(|c| matches!(c, LevelCommand::Special(s) if s.raw.len() == 1)));
    assert_eq!(encode_level(&cmds).unwrap(), bytes);
}

#[test]
fn truncated_run_header_survives_as_special() {
    for bytes in [&[0xfe][..], &[0xfe, 0x01][..], &[0xfc, 0x01, 0x02][..], &[0xfd, 0x30][..]] {
        let cmds = parse_level(bytes);
        assert_eq!(cmds.len(), 1, "input {bytes:02x?}");
        match &cmds[0] {
            LevelCommand::Special(s) => assert_eq!(s.raw, bytes),
            other => panic!("expected special for {bytes:02x?}, got {other:?}"),
        }
        assert_eq!(encode_level(&cmds).unwrap(), bytes);
    }
}

#[test]
fn empty_input_decodes_to_nothing() {
    assert!(parse_level(&[]).is_empty());
}

#[test]
fn bytes_after_end_are_never_examined() {
    let bytes = [0xff, 0xfe, 0x00, 0x00];
    let cmds = parse_level(&bytes);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(cmds[0], LevelCommand::End { source_index: 0 }));
}
