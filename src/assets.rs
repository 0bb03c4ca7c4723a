//! Background asset resolution for marquee badges.
//!
//! Badge art is prepared off the event loop so initialization never blocks
//! on it, mirroring how a page would wait for images before measuring a
//! strip. Results come back over a channel the event loop polls each tick;
//! the marquee holds its scroll clock until every requested badge has
//! reported in (success or failure both count).

use crossbeam::channel::{unbounded, Receiver, Sender};
use std::thread;

/// Result of one badge load: the rendered badge text, or why it failed.
pub type BadgeResult = (usize, Result<String, String>);

/// Channel-backed loader for marquee badge art.
pub struct AssetLoader {
    sender: Sender<BadgeResult>,
    receiver: Receiver<BadgeResult>,
    pending: usize,
}

impl AssetLoader {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            pending: 0,
        }
    }

    /// Spawns a background render of one badge.
    ///
    /// Returns immediately; the result is polled with `try_recv()`.
    pub fn spawn_badge(&mut self, id: usize, name: String) {
        self.pending += 1;
        let sender = self.sender.clone();

        thread::spawn(move || {
            let result = render_badge(&name);
            // Send result back to main thread
            let _ = sender.send((id, result));
        });
    }

    /// Check for one completed badge, without blocking.
    pub fn try_recv(&mut self) -> Option<BadgeResult> {
        if self.pending == 0 {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.pending -= 1;
                Some(result)
            }
            Err(_) => None,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending
    }

    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// "Decodes" a badge into its display form. A blank name is the one way
/// this fails, standing in for a broken asset reference.
fn render_badge(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("empty badge name".into());
    }
    Ok(format!("⟦ {trimmed} ⟧"))
}
