// crates/jumpman-core/src/render/screen.rs

use crate::grid::{pick_len, row_visible, screen_len, wrap_col, CELL_PIXELS, LEVEL_WIDTH, PICK_EMPTY};
use crate::level::command::LevelCommand;
use crate::render::tiles::{self, Tile};

/// Per-draw counters, reported by callers that want a summary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Cells stamped into the pixel buffer.
    pub cells: usize,
    /// Run steps skipped because their row was off screen.
    pub clipped: usize,
}

/// Reset a screen to background and a pick buffer to all-unowned.
pub fn clear_buffers(screen: &mut [u8], pick: &mut [i32]) {
    assert_eq!(screen.len(), screen_len(), "pixel buffer must be 160x88");
    assert_eq!(pick.len(), pick_len(), "pick buffer must be 40x88");
    screen.fill(0);
    pick.fill(PICK_EMPTY);
}

/// Draw a decoded command list.
///
/// Buffers are caller-owned and must be exactly sized (asserted; a size
/// mismatch is a caller contract violation, not a decode problem). Both are
/// cleared first so stale pixels and stale pick ownership never survive a
/// redraw of a different stream.
///
/// Runs step one cell per iteration in their direction; columns wrap modulo
/// 40 (arcade wraparound, never clipped), rows outside the screen are
/// skipped but the run keeps stepping. Every stamped cell records
/// `source_index + origin` in the pick buffer; peanut placements record
/// their own byte's index, so a click on a single peanut resolves to that
/// exact byte. Later commands overwrite earlier ones per cell.
pub fn draw_commands(
    screen: &mut [u8],
    pick: &mut [i32],
    commands: &[LevelCommand],
    origin: usize,
) -> DrawStats {
    clear_buffers(screen, pick);

    let mut stats = DrawStats::default();
    for cmd in commands {
        match cmd {
            LevelCommand::Girder(r) => {
                draw_run(screen, pick, r, tiles::GIRDER, origin, &mut stats);
            }
            LevelCommand::Ladder(r) => {
                draw_run(screen, pick, r, tiles::LADDER, origin, &mut stats);
            }
            LevelCommand::Rope(r) => {
                draw_run(screen, pick, r, tiles::ROPE, origin, &mut stats);
            }
            LevelCommand::Peanuts(g) => {
                for p in &g.placements {
                    let col = wrap_col(p.col as i32);
                    let row = p.row as i32;
                    if row_visible(row) {
                        stamp(screen, pick, col, row as usize, tiles::PEANUT, p.source_index + origin);
                        stats.cells += 1;
                    } else {
                        stats.clipped += 1;
                    }
                }
            }
            LevelCommand::Special(_) | LevelCommand::End { .. } => {}
        }
    }
    log::trace!("draw: {} cells, {} clipped", stats.cells, stats.clipped);
    stats
}

fn draw_run(
    screen: &mut [u8],
    pick: &mut [i32],
    run: &crate::level::command::RunCmd,
    tile: Tile,
    origin: usize,
    stats: &mut DrawStats,
) {
    let (dc, dr) = run.direction.step();
    let mut col = run.col as i32;
    let mut row = run.row as i32;
    for _ in 0..run.length {
        if row_visible(row) {
            stamp(screen, pick, wrap_col(col), row as usize, tile, run.source_index + origin);
            stats.cells += 1;
        } else {
            stats.clipped += 1;
        }
        col += dc;
        row += dr;
    }
}

#[inline]
fn stamp(screen: &mut [u8], pick: &mut [i32], col: usize, row: usize, tile: Tile, index: usize) {
    let px = tile.pixels();
    let base = row * LEVEL_WIDTH * CELL_PIXELS + col * CELL_PIXELS;
    screen[base..base + CELL_PIXELS].copy_from_slice(&px);
    pick[row * LEVEL_WIDTH + col] = index as i32;
}
