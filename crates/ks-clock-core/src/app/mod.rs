//! Watch face controller: owns all mutable face state and routes host
//! callbacks (minute ticks, animation frames, redraws) through it.

use log::{debug, info};

use crate::{
    angle::Point,
    animation::{ChannelEvent, ChannelId, ChannelPhase, EntranceAnimation, anim_value},
    background::BackgroundSelector,
    config::ClockConfig,
    render::{
        DisplayState, Geometry, HandCanvas, HandsDrawn, LayerHost, TickResult, render_hands,
    },
    time::{TimeOfDay, hours_to_minutes},
};

/// Everything that changes while the face is running.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClockFaceState {
    /// Most recent wall-clock time, hours on the 12-hour dial.
    pub last_time: TimeOfDay,
    /// Interpolated waypoint of the hand sweep.
    pub anim_time: TimeOfDay,
    /// Radius used for the current frame.
    pub radius: i32,
    /// Set while the hand sweep channel is running.
    pub animating: bool,
    pub background: BackgroundSelector,
}

pub struct ClockFace {
    config: ClockConfig,
    geometry: Geometry,
    state: ClockFaceState,
    entrance: EntranceAnimation,
    pending_redraw: bool,
}

include!("handlers.rs");
include!("runtime.rs");
