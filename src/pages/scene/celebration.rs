use strum::Display;

use crate::constants::scene::{CELEBRATION_CYCLES, CELEBRATION_GIFT_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CelebrationEvent {
    GiftExploded,
    /// The sleigh left the visible area and restarted from the left.
    SleighWrapped,
}

/// Banner and fireworks bookkeeping. Every fifth exploded gift starts a
/// celebration that lasts for a fixed number of sleigh passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Celebration {
    pub exploded_gifts: u32,
    pub banner_active: bool,
    pub banner_cycles: u32,
}

impl Celebration {
    pub fn transition(self, event: CelebrationEvent) -> Self {
        match event {
            CelebrationEvent::GiftExploded => {
                let exploded_gifts = self.exploded_gifts + 1;
                if exploded_gifts % CELEBRATION_GIFT_STEP == 0 {
                    Self { exploded_gifts, banner_active: true, banner_cycles: 0 }
                } else {
                    Self { exploded_gifts, ..self }
                }
            },
            CelebrationEvent::SleighWrapped if self.banner_active => {
                let banner_cycles = self.banner_cycles + 1;
                Self { banner_cycles, banner_active: banner_cycles < CELEBRATION_CYCLES, ..self }
            },
            CelebrationEvent::SleighWrapped => self,
        }
    }

    pub fn is_celebrating(&self) -> bool {
        self.banner_active
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_active && self.banner_cycles < CELEBRATION_CYCLES
    }
}
