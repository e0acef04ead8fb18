//! Target network synchronization schedule.

/// Decides at which episodes the target network is overwritten with the
/// policy network.
///
/// The schedule starts with a configured interval and shrinks it by a fixed
/// decay step at every synchronization, floored at one episode. Training thus
/// synchronizes sparsely at first, while the policy is still noisy, and
/// tracks the policy more closely later on.
///
/// A negative configured interval selects the degenerate mode in which every
/// single episode synchronizes, bypassing interval scheduling entirely.
#[derive(Debug, Clone)]
pub struct SyncScheduler {
    every_episode: bool,
    interval: i64,
    decay: i64,
    next_sync: usize,
}

impl SyncScheduler {
    /// Constructs a scheduler.
    ///
    /// The first synchronization happens at episode `1 + interval`.
    pub fn new(interval: i64, decay: i64) -> Self {
        if interval < 0 {
            Self {
                every_episode: true,
                interval: 0,
                decay,
                next_sync: 0,
            }
        } else {
            Self {
                every_episode: false,
                interval,
                decay,
                next_sync: 1 + interval as usize,
            }
        }
    }

    /// Reports whether the target network must be synchronized at the end of
    /// the given episode (1-based), advancing the schedule if so.
    pub fn should_sync(&mut self, episode: usize) -> bool {
        if self.every_episode {
            return true;
        }
        if episode < self.next_sync {
            return false;
        }
        self.interval = (self.interval - self.decay).max(1);
        self.next_sync = episode + self.interval as usize;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync_episodes(scheduler: &mut SyncScheduler, up_to: usize) -> Vec<usize> {
        (1..=up_to)
            .filter(|episode| scheduler.should_sync(*episode))
            .collect()
    }

    #[test]
    fn interval_shrinks_by_the_decay_step() {
        let mut scheduler = SyncScheduler::new(20, 5);
        let episodes = sync_episodes(&mut scheduler, 56);
        assert_eq!(episodes, vec![21, 36, 46, 51, 52, 53, 54, 55, 56]);
    }

    #[test]
    fn interval_is_floored_at_one() {
        let mut scheduler = SyncScheduler::new(2, 10);
        // First sync at 3, then the interval collapses to 1.
        assert_eq!(sync_episodes(&mut scheduler, 8), vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn zero_decay_keeps_the_interval_constant() {
        let mut scheduler = SyncScheduler::new(10, 0);
        assert_eq!(sync_episodes(&mut scheduler, 35), vec![11, 21, 31]);
    }

    #[test]
    fn negative_interval_syncs_every_episode() {
        let mut scheduler = SyncScheduler::new(-1, 5);
        assert_eq!(sync_episodes(&mut scheduler, 5), vec![1, 2, 3, 4, 5]);
    }
}
