impl ClockFace {
    /// Stores the wall-clock time delivered by the minute tick.
    pub fn on_minute_tick(&mut self, hour_24: u8, minute: u8) {
        self.state.last_time = TimeOfDay::from_wall_clock(hour_24, minute);
        debug!(
            "tick: {:02}:{:02}",
            self.state.last_time.hours, self.state.last_time.minutes
        );
        self.request_redraw();
    }

    pub fn on_animation_start(&mut self, channel: ChannelId) {
        if channel == ChannelId::Hands {
            self.state.animating = true;
            self.request_redraw();
        }
    }

    /// Applies eased `progress` (clamped to `0.0..=1.0`) to the value driven
    /// by `channel`.
    pub fn on_animation_frame(&mut self, channel: ChannelId, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);

        match channel {
            ChannelId::Radius => {
                self.state.radius = anim_value(progress, self.config.final_radius);
            }
            ChannelId::Hands => {
                let last = self.state.last_time;
                self.state.anim_time = TimeOfDay::new(
                    anim_value(progress, hours_to_minutes(last.hours) as i32) as u8,
                    anim_value(progress, last.minutes as i32) as u8,
                );
            }
        }

        self.request_redraw();
    }

    pub fn on_animation_stop(&mut self, channel: ChannelId) {
        if channel == ChannelId::Hands {
            self.state.animating = false;
            self.request_redraw();
        }
    }

    fn dispatch(&mut self, channel: ChannelId, event: ChannelEvent) {
        match event {
            ChannelEvent::Started => self.on_animation_start(channel),
            ChannelEvent::Frame(progress) => self.on_animation_frame(channel, progress),
            ChannelEvent::Stopped { .. } => self.on_animation_stop(channel),
        }
    }

    /// Marks the face dirty; the host renders on its next loop iteration.
    fn request_redraw(&mut self) {
        self.pending_redraw = true;
    }
}
