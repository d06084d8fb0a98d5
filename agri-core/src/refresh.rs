//! Refresh requests queued for the polling view.

use futures::channel::mpsc::UnboundedReceiver;

/// What asked for a refresh.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RefreshTrigger {
    Scheduled,
    Manual,
}

/// Fold every trigger already waiting behind `first` into a single refresh.
///
/// Ticks and clicks that piled up while a request was in flight must not
/// replay as a burst of GETs once it settles. A manual trigger anywhere in the
/// backlog wins. Returns the merged trigger and how many queued ones it absorbed.
pub fn coalesce(
    first: RefreshTrigger,
    pending: &mut UnboundedReceiver<RefreshTrigger>,
) -> (RefreshTrigger, usize) {
    let mut merged = first;
    let mut absorbed = 0;
    while let Ok(Some(next)) = pending.try_next() {
        if next == RefreshTrigger::Manual {
            merged = RefreshTrigger::Manual;
        }
        absorbed += 1;
    }
    (merged, absorbed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc::unbounded;

    #[test]
    fn test_backlog_collapses_to_one_refresh() {
        let (tx, mut rx) = unbounded();
        for _ in 0..3 {
            tx.unbounded_send(RefreshTrigger::Scheduled).unwrap();
        }
        let (trigger, absorbed) = coalesce(RefreshTrigger::Scheduled, &mut rx);
        assert_eq!(trigger, RefreshTrigger::Scheduled);
        assert_eq!(absorbed, 3);
        // Nothing left to replay.
        assert!(rx.try_next().is_err());
    }

    #[test]
    fn test_manual_trigger_wins() {
        let (tx, mut rx) = unbounded();
        tx.unbounded_send(RefreshTrigger::Manual).unwrap();
        tx.unbounded_send(RefreshTrigger::Scheduled).unwrap();
        let (trigger, absorbed) = coalesce(RefreshTrigger::Scheduled, &mut rx);
        assert_eq!(trigger, RefreshTrigger::Manual);
        assert_eq!(absorbed, 2);
    }

    #[test]
    fn test_empty_backlog() {
        let (_tx, mut rx) = unbounded::<RefreshTrigger>();
        assert_eq!(
            coalesce(RefreshTrigger::Manual, &mut rx),
            (RefreshTrigger::Manual, 0)
        );
    }

    #[test]
    fn test_closed_channel_stops_draining() {
        let (tx, mut rx) = unbounded();
        tx.unbounded_send(RefreshTrigger::Scheduled).unwrap();
        drop(tx);
        assert_eq!(
            coalesce(RefreshTrigger::Scheduled, &mut rx),
            (RefreshTrigger::Scheduled, 1)
        );
    }
}
