// crates/jumpman-core/tests/builder.rs

use jumpman_core::builder::{LEVEL_TABLE_OFFSET, MAX_STREAM_LEN};
use jumpman_core::grid::{pick_len, screen_len, PICK_EMPTY};
use jumpman_core::harvest::HarvestRecord;
use jumpman_core::{JmError, LevelBuilder, LevelCommand, Segment};

fn buffers() -> (Vec<u8>, Vec<i32>) {
    (vec![0u8; screen_len()], vec![0i32; pick_len()])
}

/// A display segment whose 0x37/0x38 pointer holds `addr`.
fn display_segment(start_addr: u16, addr: u16) -> Segment {
    let mut data = vec![0u8; 0x60];
    data[LEVEL_TABLE_OFFSET] = (addr & 0xff) as u8;
    data[LEVEL_TABLE_OFFSET + 1] = (addr >> 8) as u8;
    Segment::new("level", start_addr, data)
}

#[test]
fn table_pointer_resolves_into_another_segment() {
    let stream = vec![0xfe, 2, 5, 0x03, 0xff];
    let segments = vec![
        display_segment(0x2800, 0x4000),
        Segment::new("data", 0x4000, stream),
    ];
    let builder = LevelBuilder::new(segments);

    let (mut screen, mut pick) = buffers();
    let view = builder.draw_level(&mut screen, &mut pick, 0).unwrap();
    assert_eq!(view.segment, 1);
    assert_eq!(view.origin, 0);
    assert_eq!(view.commands.len(), 2);

    // pick indices come back in the data segment's coordinate space
    let hit = builder.pick(&pick, 2 * 4, 5).unwrap();
    assert_eq!(hit, 0);
    let cmd = view
        .commands
        .iter()
        .find(|c| (c.source_index()..c.source_index() + c.encoded_len()).contains(&hit))
        .unwrap();
    assert!(matches!(cmd, LevelCommand::Girder(_)));
}

#[test]
fn small_pointer_is_a_segment_relative_offset() {
    let mut seg = display_segment(0x2800, 0x0050);
    seg.data[0x50..0x55].copy_from_slice(&[0xfc, 7, 0, 0x04, 0xff]);
    let builder = LevelBuilder::new(vec![seg]);

    let (mut screen, mut pick) = buffers();
    let view = builder.draw_level(&mut screen, &mut pick, 0).unwrap();
    assert_eq!(view.segment, 0);
    assert_eq!(view.origin, 0x50);
    assert!(matches!(view.commands[0], LevelCommand::Ladder(_)));

    // stamped index = source_index + origin, addressing the segment itself
    assert_eq!(builder.pick(&pick, 7 * 4, 0), Some(0x50));
}

#[test]
fn unmapped_pointer_reports_and_clears() {
    let builder = LevelBuilder::new(vec![display_segment(0x2800, 0x9000)]);

    let (mut screen, mut pick) = buffers();
    screen.fill(2);
    pick.fill(7);
    let err = builder.draw_level(&mut screen, &mut pick, 0).unwrap_err();
    assert!(matches!(err, JmError::UnmappedAddress(0x9000)));
    assert!(screen.iter().all(|&p| p == 0), "no stale pixels after a failed draw");
    assert!(pick.iter().all(|&p| p == PICK_EMPTY));
}

#[test]
fn short_segment_has_no_level_table() {
    let builder = LevelBuilder::new(vec![Segment::new("tiny", 0x2800, vec![0u8; 0x20])]);
    let (mut screen, mut pick) = buffers();
    let err = builder.draw_level(&mut screen, &mut pick, 0).unwrap_err();
    assert!(matches!(err, JmError::MissingLevelTable { len: 0x20 }));
}

#[test]
fn stream_is_capped() {
    let mut data = vec![0u8; 0x40 + MAX_STREAM_LEN + 100];
    data[LEVEL_TABLE_OFFSET] = 0x40;
    // bytes 0x40.. are all zero: 1-byte specials, no terminator
    let builder = LevelBuilder::new(vec![Segment::new("big", 0x2800, data)]);
    let view = builder.parse_level_table(0).unwrap();
    assert_eq!(view.commands.len(), MAX_STREAM_LEN);
}

#[test]
fn harvest_offsets_and_colors_come_from_fixed_offsets() {
    let mut seg = display_segment(0x2800, 0x0050);
    seg.data[0x46] = 0x11;
    seg.data[0x47] = 0x05;
    seg.data[0x2e..0x33].copy_from_slice(&[0x28, 0xc8, 0x1f, 0x00, 0x04]);
    let builder = LevelBuilder::new(vec![seg]);

    assert_eq!(builder.harvest_offsets(0), (0x11, 0x05));
    assert_eq!(builder.color_registers(0), Some([0x28, 0xc8, 0x1f, 0x00, 0x04]));

    let tiny = LevelBuilder::new(vec![Segment::new("tiny", 0, vec![0u8; 4])]);
    assert_eq!(tiny.harvest_offsets(0), (0, 0));
    assert_eq!(tiny.color_registers(0), None);
}

#[test]
fn harvest_scripts_resolve_across_segments() {
    let trigger_stream = vec![0xfe, 1, 1, 0x02, 0xff];
    let paint_stream = vec![0xfd, 0x11, 0x01, 0x00, 0xff];
    let builder = LevelBuilder::new(vec![
        Segment::new("scripts", 0x4b00, trigger_stream),
        Segment::new("paint", 0x4c00, paint_stream),
    ]);

    let record = HarvestRecord {
        source_index: 0,
        trigger: 0x22,
        dx: 0,
        dy: 0,
        script_addr: 0x4b00,
        paint_addr: 0x4c00,
    };
    let scripts = builder.harvest_scripts(&record).unwrap();
    assert!(matches!(scripts.trigger[0], LevelCommand::Girder(_)));
    assert!(matches!(scripts.paint[0], LevelCommand::Peanuts(_)));

    let bad = HarvestRecord { script_addr: 0x0100, ..record };
    assert!(matches!(
        builder.harvest_scripts(&bad),
        Err(JmError::UnmappedAddress(0x0100))
    ));
}

#[test]
fn pick_outside_owned_cells_is_none() {
    let builder = LevelBuilder::new(vec![]);
    let (mut screen, mut pick) = buffers();
    builder.draw_commands(&mut screen, &mut pick, &[0xfe, 0, 0, 0x01, 0xff], 0);
    assert_eq!(builder.pick(&pick, 0, 0), Some(0));
    assert_eq!(builder.pick(&pick, 3, 0), Some(0), "all four pixels of a cell hit");
    assert_eq!(builder.pick(&pick, 4, 0), None);
    assert_eq!(builder.pick(&pick, 0, 1), None);
}

#[test]
fn every_owned_pick_cell_maps_back_to_its_command() {
    // non-overlapping commands: every owned cell must hit-test to a byte
    // inside the span of a command that actually drew that cell
    let stream = [
        0xfe, 2, 10, 0x06, // girder
        0xfc, 20, 30, 0x08, // ladder
        0xfd, 0x53, 0x02, 0x00, 0x12, // peanuts at (3,5) and (5,7)
        0xff,
    ];
    let builder = LevelBuilder::new(vec![]);
    let (mut screen, mut pick) = buffers();
    let origin = 0x40;
    let cmds = builder.draw_commands(&mut screen, &mut pick, &stream, origin);

    let mut owned = 0usize;
    for y in 0..88usize {
        for x in 0..160usize {
            let Some(hit) = builder.pick(&pick, x, y) else { continue };
            owned += 1;
            let rel = hit - origin;
            let cmd = cmds
                .iter()
                .find(|c| (c.source_index()..c.source_index() + c.encoded_len()).contains(&rel))
                .unwrap_or_else(|| panic!("pick {hit} at ({x},{y}) has no command"));
            let cell = (x / 4, y);
            assert!(
                cells_of(cmd).contains(&cell),
                "command {cmd} does not occupy cell {cell:?}"
            );
        }
    }
    // 6 girder + 8 ladder + 2 peanut cells, 4 pixels each
    assert_eq!(owned, (6 + 8 + 2) * 4);
}

/// Cells a command draws, mirroring the renderer's wrap/clip rules.
fn cells_of(cmd: &LevelCommand) -> Vec<(usize, usize)> {
    use jumpman_core::Direction;
    let mut cells = Vec::new();
    match cmd {
        LevelCommand::Girder(r) | LevelCommand::Ladder(r) | LevelCommand::Rope(r) => {
            let (dc, dr) = match r.direction {
                Direction::Left => (-1i32, 0i32),
                Direction::Right => (1, 0),
                Direction::Up => (0, -1),
                Direction::Down => (0, 1),
            };
            let (mut col, mut row) = (r.col as i32, r.row as i32);
            for _ in 0..r.length {
                if (0..88).contains(&row) {
                    cells.push((col.rem_euclid(40) as usize, row as usize));
                }
                col += dc;
                row += dr;
            }
        }
        LevelCommand::Peanuts(g) => {
            for p in &g.placements {
                if (p.row as usize) < 88 {
                    cells.push(((p.col as usize) % 40, p.row as usize));
                }
            }
        }
        _ => {}
    }
    cells
}
