// Periodic triggers (shrink every 15 s, countdown every 1 s) turned into
// plain events that the main loop consumes once per frame.
//
// Per-frame event order is fixed: Click, then Shrink, then Tick.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Click,  // left mouse button went down this frame
    Shrink, // razor shrink period elapsed
    Tick,   // one second of countdown elapsed
}

/// Fires once per elapsed `period`, keeping its phase across slow frames.
pub struct PeriodicTimer {
    period: Duration,
    next: Instant,
}

impl PeriodicTimer {
    pub fn new(period: Duration, start: Instant) -> Self {
        Self { period, next: start + period }
    }

    /// How many times the timer fired between the last poll and `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while self.next <= now {
            fired += 1;
            self.next += self.period;
        }
        fired
    }
}

/// Owns every game timer and produces the per-frame event queue.
pub struct EventClock {
    shrink: PeriodicTimer,
    tick: PeriodicTimer,
}

impl EventClock {
    pub fn new(shrink_period: Duration, tick_period: Duration, start: Instant) -> Self {
        Self {
            shrink: PeriodicTimer::new(shrink_period, start),
            tick: PeriodicTimer::new(tick_period, start),
        }
    }

    /// Events for this frame, in Click, Shrink, Tick order.
    pub fn collect(&mut self, clicked: bool, now: Instant) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if clicked {
            events.push(GameEvent::Click);
        }
        for _ in 0..self.shrink.poll(now) {
            events.push(GameEvent::Shrink);
        }
        for _ in 0..self.tick.poll(now) {
            events.push(GameEvent::Tick);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_once_per_period() {
        let t0 = Instant::now();
        let mut t = PeriodicTimer::new(Duration::from_secs(1), t0);
        assert_eq!(t.poll(t0 + Duration::from_millis(999)), 0);
        assert_eq!(t.poll(t0 + Duration::from_millis(1000)), 1);
        assert_eq!(t.poll(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(t.poll(t0 + Duration::from_millis(2000)), 1);
    }

    #[test]
    fn test_timer_catches_up_after_stall() {
        let t0 = Instant::now();
        let mut t = PeriodicTimer::new(Duration::from_secs(1), t0);
        assert_eq!(t.poll(t0 + Duration::from_millis(3500)), 3);
        // Phase is kept: next fire at 4 s, not 4.5 s.
        assert_eq!(t.poll(t0 + Duration::from_millis(4000)), 1);
    }

    #[test]
    fn test_events_are_in_fixed_order() {
        let t0 = Instant::now();
        let mut clock = EventClock::new(Duration::from_secs(15), Duration::from_secs(1), t0);
        let events = clock.collect(true, t0 + Duration::from_secs(15));
        assert_eq!(events.first(), Some(&GameEvent::Click));
        assert_eq!(events[1], GameEvent::Shrink);
        assert_eq!(events.iter().filter(|e| **e == GameEvent::Tick).count(), 15);
        assert!(events[2..].iter().all(|e| *e == GameEvent::Tick));
    }

    #[test]
    fn test_no_events_on_quiet_frame() {
        let t0 = Instant::now();
        let mut clock = EventClock::new(Duration::from_secs(15), Duration::from_secs(1), t0);
        assert!(clock.collect(false, t0 + Duration::from_millis(16)).is_empty());
    }
}
