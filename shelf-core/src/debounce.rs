use std::cell::Cell;
use std::rc::Rc;

/// Trailing-edge debounce for search input.
///
/// Each call to [`Debouncer::settle`] supersedes the previous ones; a call
/// resolves to `true` only if nothing newer happened during the delay.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u64,
    latest: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            latest: Rc::new(Cell::new(0)),
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub async fn settle(&self) -> bool {
        let mine = self.bump();
        sleep_ms(self.delay_ms).await;
        self.latest.get() == mine
    }

    /// Drop any pending call, e.g. when the input is cleared with a button
    pub fn cancel(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        next
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
