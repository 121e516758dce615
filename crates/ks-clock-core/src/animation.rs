//! Entrance animation channels.
//!
//! Each channel is a one-shot state machine driven by the host clock:
//! `Idle` until its delay elapses, `Running` while eased progress climbs from
//! 0 to 1, then `Finished` for good. Channels never repeat or reset.

use heapless::Vec;
use log::debug;

/// Most events a single `advance` can emit: start, frame, stop.
pub const MAX_CHANNEL_EVENTS: usize = 3;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChannelId {
    /// Grows the face radius from 0 to its final value.
    Radius,
    /// Sweeps the hands from 12 o'clock to the current time.
    Hands,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Curve {
    Linear,
    EaseInOut,
}

impl Curve {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChannelTiming {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl ChannelTiming {
    pub const fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChannelPhase {
    Idle,
    Running,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelEvent {
    Started,
    /// Eased progress in `0.0..=1.0`.
    Frame(f32),
    /// `finished` is false when the channel was cancelled mid-run.
    Stopped { finished: bool },
}

pub type ChannelEvents = Vec<ChannelEvent, MAX_CHANNEL_EVENTS>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle { start_at_ms: u64 },
    Running { started_ms: u64 },
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationChannel {
    id: ChannelId,
    timing: ChannelTiming,
    curve: Curve,
    phase: Phase,
    progress: f32,
}

impl AnimationChannel {
    /// Creates an idle channel that starts `timing.delay_ms` after `now_ms`.
    pub fn schedule(id: ChannelId, timing: ChannelTiming, curve: Curve, now_ms: u64) -> Self {
        Self {
            id,
            timing,
            curve,
            phase: Phase::Idle {
                start_at_ms: now_ms.saturating_add(timing.delay_ms as u64),
            },
            progress: 0.0,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn timing(&self) -> ChannelTiming {
        self.timing
    }

    pub fn phase(&self) -> ChannelPhase {
        match self.phase {
            Phase::Idle { .. } => ChannelPhase::Idle,
            Phase::Running { .. } => ChannelPhase::Running,
            Phase::Finished => ChannelPhase::Finished,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Applies every transition due at `now_ms` and returns the resulting
    /// events in order.
    pub fn advance(&mut self, now_ms: u64) -> ChannelEvents {
        let mut events = ChannelEvents::new();

        if let Phase::Idle { start_at_ms } = self.phase {
            if now_ms < start_at_ms {
                return events;
            }
            // Progress is measured from the scheduled start, not from when
            // the host happened to poll.
            self.phase = Phase::Running {
                started_ms: start_at_ms,
            };
            debug!("anim: {:?} started at {}ms", self.id, start_at_ms);
            let _ = events.push(ChannelEvent::Started);
        }

        let Phase::Running { started_ms } = self.phase else {
            return events;
        };

        let elapsed = now_ms.saturating_sub(started_ms);
        let duration = self.timing.duration_ms as u64;

        if elapsed >= duration {
            self.progress = 1.0;
            self.phase = Phase::Finished;
            debug!("anim: {:?} finished at {}ms", self.id, now_ms);
            let _ = events.push(ChannelEvent::Frame(1.0));
            let _ = events.push(ChannelEvent::Stopped { finished: true });
        } else {
            let linear = elapsed as f32 / duration as f32;
            self.progress = self.curve.apply(linear).max(self.progress);
            let _ = events.push(ChannelEvent::Frame(self.progress));
        }

        events
    }

    /// Cancels the channel. A running channel reports an unfinished stop.
    pub fn stop(&mut self) -> Option<ChannelEvent> {
        let was_running = self.is_running();
        if self.phase != Phase::Finished {
            debug!("anim: {:?} cancelled", self.id);
        }
        self.phase = Phase::Finished;

        was_running.then_some(ChannelEvent::Stopped { finished: false })
    }
}

/// Scales eased progress onto `0..=max`, truncating toward zero.
pub fn anim_value(progress: f32, max: i32) -> i32 {
    (progress * max as f32) as i32
}

/// The startup pair: radius growth and a hand sweep twice as long, both
/// starting after the same delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceAnimation {
    radius: AnimationChannel,
    hands: AnimationChannel,
}

pub type EntranceEvents = Vec<(ChannelId, ChannelEvent), { 2 * MAX_CHANNEL_EVENTS }>;

impl EntranceAnimation {
    pub fn schedule(duration_ms: u32, delay_ms: u32, now_ms: u64) -> Self {
        Self {
            radius: AnimationChannel::schedule(
                ChannelId::Radius,
                ChannelTiming::new(duration_ms, delay_ms),
                Curve::EaseInOut,
                now_ms,
            ),
            hands: AnimationChannel::schedule(
                ChannelId::Hands,
                ChannelTiming::new(duration_ms.saturating_mul(2), delay_ms),
                Curve::EaseInOut,
                now_ms,
            ),
        }
    }

    pub fn channel(&self, id: ChannelId) -> &AnimationChannel {
        match id {
            ChannelId::Radius => &self.radius,
            ChannelId::Hands => &self.hands,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.radius.phase() == ChannelPhase::Finished && self.hands.phase() == ChannelPhase::Finished
    }

    pub fn advance(&mut self, now_ms: u64) -> EntranceEvents {
        let mut events = EntranceEvents::new();
        for channel in [&mut self.radius, &mut self.hands] {
            let id = channel.id();
            for event in channel.advance(now_ms) {
                let _ = events.push((id, event));
            }
        }
        events
    }

    pub fn stop(&mut self) -> EntranceEvents {
        let mut events = EntranceEvents::new();
        for channel in [&mut self.radius, &mut self.hands] {
            if let Some(event) = channel.stop() {
                let _ = events.push((channel.id(), event));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(duration_ms: u32, delay_ms: u32) -> AnimationChannel {
        AnimationChannel::schedule(
            ChannelId::Radius,
            ChannelTiming::new(duration_ms, delay_ms),
            Curve::EaseInOut,
            1_000,
        )
    }

    #[test]
    fn ease_in_out_is_symmetric_and_pinned() {
        assert_eq!(Curve::EaseInOut.apply(0.0), 0.0);
        assert_eq!(Curve::EaseInOut.apply(0.5), 0.5);
        assert_eq!(Curve::EaseInOut.apply(1.0), 1.0);
        assert!(Curve::EaseInOut.apply(0.25) < 0.25);
        assert!(Curve::EaseInOut.apply(0.75) > 0.75);
    }

    #[test]
    fn stays_idle_until_delay_elapses() {
        let mut ch = channel(500, 600);

        assert!(ch.advance(1_000).is_empty());
        assert!(ch.advance(1_599).is_empty());
        assert_eq!(ch.phase(), ChannelPhase::Idle);

        let events = ch.advance(1_600);
        assert_eq!(events.as_slice(), &[ChannelEvent::Started, ChannelEvent::Frame(0.0)]);
        assert_eq!(ch.phase(), ChannelPhase::Running);
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_one() {
        let mut ch = channel(500, 600);
        let mut last = 0.0f32;
        let mut frames = 0;
        let mut stopped = false;

        for now in (1_000..2_400).step_by(17) {
            for event in ch.advance(now) {
                match event {
                    ChannelEvent::Frame(p) => {
                        assert!(!stopped, "frame after stop");
                        assert!(p >= last);
                        assert!((0.0..=1.0).contains(&p));
                        last = p;
                        frames += 1;
                    }
                    ChannelEvent::Stopped { finished } => {
                        assert!(finished);
                        stopped = true;
                    }
                    ChannelEvent::Started => {}
                }
            }
        }

        assert!(stopped);
        assert!(frames > 10);
        assert_eq!(last, 1.0);
        assert_eq!(ch.progress(), 1.0);
        assert_eq!(ch.phase(), ChannelPhase::Finished);
        assert!(ch.advance(10_000).is_empty());
    }

    #[test]
    fn late_poll_runs_whole_lifecycle_at_once() {
        let mut ch = channel(500, 600);

        let events = ch.advance(5_000);
        assert_eq!(
            events.as_slice(),
            &[
                ChannelEvent::Started,
                ChannelEvent::Frame(1.0),
                ChannelEvent::Stopped { finished: true },
            ]
        );
    }

    #[test]
    fn zero_duration_finishes_on_start() {
        let mut ch = channel(0, 0);

        let events = ch.advance(1_000);
        assert_eq!(events.len(), 3);
        assert_eq!(ch.progress(), 1.0);
    }

    #[test]
    fn stop_reports_unfinished_only_while_running() {
        let mut idle = channel(500, 600);
        assert_eq!(idle.stop(), None);
        assert_eq!(idle.phase(), ChannelPhase::Finished);
        assert!(idle.advance(5_000).is_empty());

        let mut running = channel(500, 0);
        let _ = running.advance(1_100);
        assert_eq!(running.stop(), Some(ChannelEvent::Stopped { finished: false }));
        assert!(running.advance(5_000).is_empty());
    }

    #[test]
    fn anim_value_truncates() {
        assert_eq!(anim_value(0.5, 100), 50);
        assert_eq!(anim_value(0.5, 15), 7);
        assert_eq!(anim_value(1.0, 59), 59);
        assert_eq!(anim_value(0.0, 59), 0);
    }

    #[test]
    fn hand_sweep_outlasts_radius_growth() {
        let mut entrance = EntranceAnimation::schedule(500, 600, 0);

        assert_eq!(entrance.channel(ChannelId::Hands).timing().duration_ms, 1_000);
        let _ = entrance.advance(1_100);
        assert_eq!(entrance.channel(ChannelId::Radius).phase(), ChannelPhase::Finished);
        assert_eq!(entrance.channel(ChannelId::Hands).phase(), ChannelPhase::Running);
        assert!(!entrance.is_finished());

        let _ = entrance.advance(1_600);
        assert!(entrance.is_finished());
    }
}
