use std::cell::Cell;

thread_local! {
    static HOLDERS: Cell<u32> = Cell::new(0);
}

/// Holds the page-wide background-scroll lock while alive.
///
/// The body overflow style is only touched on the 0→1 and 1→0 holder
/// transitions, so the quote modal and the mobile menu can overlap without
/// fighting over it.
pub struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    pub fn acquire() -> Self {
        let holders = HOLDERS.with(|h| {
            let n = h.get() + 1;
            h.set(n);
            n
        });
        if holders == 1 {
            set_body_overflow("hidden");
        }
        ScrollLock { _private: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let holders = HOLDERS.with(|h| {
            let n = h.get().saturating_sub(1);
            h.set(n);
            n
        });
        if holders == 0 {
            set_body_overflow("auto");
        }
    }
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}
