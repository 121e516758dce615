impl ClockFace {
    /// Creates the face centered at `center`, seeds it with the current
    /// wall-clock time and schedules the entrance animation from `now_ms`.
    pub fn new(config: ClockConfig, center: Point, initial: TimeOfDay, now_ms: u64) -> Self {
        let config = config.normalized();
        let entrance = EntranceAnimation::schedule(
            config.animation_duration_ms,
            config.animation_delay_ms,
            now_ms,
        );

        let mut face = Self {
            config,
            geometry: Geometry {
                center,
                hand_margin: config.hand_margin,
            },
            state: ClockFaceState {
                last_time: TimeOfDay::MIDNIGHT,
                anim_time: TimeOfDay::MIDNIGHT,
                radius: 0,
                animating: false,
                background: BackgroundSelector::new(config.background_unit),
            },
            entrance,
            pending_redraw: true,
        };
        face.on_minute_tick(initial.hours, initial.minutes);

        info!(
            "clock: face ready center=({}, {}) radius={} entrance={}ms+{}ms",
            center.x,
            center.y,
            config.final_radius,
            config.animation_delay_ms,
            config.animation_duration_ms
        );
        face
    }

    /// Advances the entrance animation and reports whether anything changed
    /// since the previous tick.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        for (channel, event) in self.entrance.advance(now_ms) {
            self.dispatch(channel, event);
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Time and radius the next frame is drawn with.
    pub fn display_state(&self) -> DisplayState {
        let time = if self.state.animating {
            self.state.anim_time
        } else {
            self.state.last_time
        };

        DisplayState {
            time,
            radius: self.state.radius,
            animating: self.state.animating,
        }
    }

    /// Draws one frame: background selection first, then the hands.
    pub fn render<C, L>(&mut self, canvas: &mut C, layers: &mut L) -> HandsDrawn
    where
        C: HandCanvas + ?Sized,
        L: LayerHost + ?Sized,
    {
        self.state.background.sync(self.state.last_time, layers);

        render_hands(
            &self.display_state(),
            &self.geometry,
            &self.config.hand_style,
            canvas,
        )
    }

    /// Halts both entrance channels. This is the window teardown path.
    pub fn teardown(&mut self) {
        for (channel, event) in self.entrance.stop() {
            self.dispatch(channel, event);
        }
        info!("clock: face torn down");
    }

    pub fn state(&self) -> &ClockFaceState {
        &self.state
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn channel_phase(&self, channel: ChannelId) -> ChannelPhase {
        self.entrance.channel(channel).phase()
    }

    pub fn entrance_finished(&self) -> bool {
        self.entrance.is_finished()
    }
}
