use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use tui_cube::core::{Cube, FrameTimer, Spin};
use tui_cube::term::{CubeView, FrameBuffer, Viewport};
use tui_cube::types::SIDE_LENGTH;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn cube_view_render_is_allocation_free_after_warmup() {
    let view = CubeView::default();
    let viewport = Viewport::new(200, 60);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut cube = Cube::new(SIDE_LENGTH);
    cube.set_origin(viewport.cube_origin());
    let mut spin = Spin::default();
    let mut timer = FrameTimer::new();

    // Warm-up (initial sizing).
    cube.set_rotation(spin.rotation());
    view.render_into(&cube, &timer, viewport, &mut fb);

    let frame = Duration::from_micros(16_667);
    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            cube.set_rotation(spin.rotation());
            view.render_into(&cube, &timer, viewport, &mut fb);
            timer.record(frame);
            spin.advance(frame);
        }
    });

    assert!(allocs == 0);
}
