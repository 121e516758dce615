//! Desktop host for the watch face: plays the part of the wearable runtime
//! (wall clock, minute ticks, frame scheduling, panel, image resources).

use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use ks_clock_core::{
    angle::Point,
    app::ClockFace,
    config::ClockConfig,
    graphics::GraphicsCanvas,
    render::TickResult,
    resources::Backgrounds,
};
use log::{debug, error, info};

use framebuffer::FrameBuffer;
use host::{SimImageLoader, SimLayers};
use wall_clock::MinuteTicker;

#[path = "main/framebuffer.rs"]
mod framebuffer;
#[path = "main/host.rs"]
mod host;
#[path = "main/wall_clock.rs"]
mod wall_clock;

const TITLE: &str = "ks-clock-face";
const FRAME_MS: u64 = 33;
/// Stops the simulator after this many seconds when set.
const RUN_SECS_ENV: &str = "CLOCK_FACE_RUN_SECS";

fn run_limit_ms() -> Option<u64> {
    let raw = std::env::var(RUN_SECS_ENV).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(secs) => Some(secs.saturating_mul(1_000)),
        Err(err) => {
            error!("{}={:?} ignored: {}", RUN_SECS_ENV, raw, err);
            None
        }
    }
}

fn log_preview(frame: &FrameBuffer, layers: &SimLayers) {
    info!(
        "preview: background={} lit_pixels={}",
        layers.showing(),
        frame.lit_pixels()
    );
    for row in frame.preview_rows() {
        info!("preview: {}", row.as_str());
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("boot: {} starting", TITLE);

    let run_limit_ms = run_limit_ms();

    let mut loader = SimImageLoader::new();
    let backgrounds = match Backgrounds::load(&mut loader) {
        Ok(backgrounds) => backgrounds,
        Err(err) => {
            error!("resources: background load failed: {:?}", err);
            return;
        }
    };
    let mut layers = SimLayers::new();
    let mut frame = FrameBuffer::new();

    let mut minute_ticker = MinuteTicker::now();
    let center = Point::new(
        (framebuffer::WIDTH / 2) as i32,
        (framebuffer::HEIGHT / 2) as i32,
    );
    let loop_start = Instant::now();
    let mut face = ClockFace::new(ClockConfig::default(), center, minute_ticker.current(), 0);
    let mut preview_logged = false;

    loop {
        let now_ms = loop_start.elapsed().as_millis();

        if let Some((hour, minute)) = minute_ticker.poll() {
            face.on_minute_tick(hour, minute);
        }

        if face.tick(now_ms) == TickResult::RenderRequested {
            frame.clear();
            let drawn = face.render(&mut GraphicsCanvas::new(&mut frame), &mut layers);
            let display = face.display_state();
            debug!(
                "frame: t={}ms time={:02}:{:02} radius={} animating={} hour={} minute={}",
                now_ms,
                display.time.hours,
                display.time.minutes,
                display.radius,
                display.animating,
                drawn.hour,
                drawn.minute
            );

            if face.entrance_finished() && !preview_logged {
                info!("entrance: finished after {}ms", now_ms);
                log_preview(&frame, &layers);
                preview_logged = true;
            }
        }

        if run_limit_ms.is_some_and(|limit| now_ms >= limit) {
            break;
        }

        Timer::after_millis(FRAME_MS).await;
    }

    face.teardown();
    backgrounds.release(&mut loader);
    info!(
        "shutdown: {} stopped, {} image handles outstanding",
        TITLE,
        loader.outstanding()
    );
}
