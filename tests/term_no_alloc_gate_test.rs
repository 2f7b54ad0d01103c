use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::Direction;

struct CountingAlloc;

// Per-thread so allocations made by other test-harness threads are not counted.
thread_local! {
    static COUNT_ENABLED: Cell<bool> = const { Cell::new(false) };
    static ALLOC_COUNT: Cell<usize> = const { Cell::new(0) };
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn note_alloc() {
    let _ = COUNT_ENABLED.try_with(|enabled| {
        if enabled.get() {
            let _ = ALLOC_COUNT.try_with(|n| n.set(n.get() + 1));
        }
    });
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        note_alloc();
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        note_alloc();
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.with(|n| n.set(0));
    COUNT_ENABLED.with(|e| e.set(true));
    f();
    COUNT_ENABLED.with(|e| e.set(false));
    ALLOC_COUNT.with(|n| n.get())
}

#[test]
fn term_game_view_render_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut gs = GameState::new(1);
    let mut snap = GameSnapshot::default();

    // Warm-up (resize/initial clears).
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let dir = if i % 10 < 5 { Direction::Up } else { Direction::Left };
            let _ = gs.advance(dir);
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert!(allocs == 0);
}
