//! Random sampling of generated events for a quick look before download.

use rand::Rng;

use crate::event::CelebrationEvent;

/// Number of events shown in a preview.
pub const PREVIEW_SIZE: usize = 5;

/// Draw `count` events by independent uniform picks. Picks are made with
/// replacement, so the same event can show up more than once.
pub fn sample_preview<R: Rng + ?Sized>(
    events: &[CelebrationEvent],
    count: usize,
    rng: &mut R,
) -> Vec<CelebrationEvent> {
    if events.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|_| events[rng.gen_range(0..events.len())].clone())
        .collect()
}
