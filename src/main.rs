use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::core::audio::RaylibAudio;
use raylib::core::window::{get_current_monitor, get_monitor_height, get_monitor_width, WindowState};
use raylib::prelude::*;

use edge_glider::beep::Beeper;
use edge_glider::cli::Args;
use edge_glider::sprite::Sprite;
use edge_glider::{CycleEvent, MotionCycleController, ScreenBounds};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(1, 1)
        .title("Edge Glider")
        .undecorated()
        .transparent()
        .vsync()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let monitor = get_current_monitor();
    let bounds = ScreenBounds::new(
        get_monitor_width(monitor) as f32,
        get_monitor_height(monitor) as f32,
    );

    let mut sprite = Sprite::load(&mut rl, &thread, args.sprite.as_deref())
        .with_context(|| format!("failed to load sprite {:?}", args.sprite))?;

    // Square window so the sprite fits whatever its rotation
    let (max_width, max_height) = sprite.max_size();
    let window_size = max_width.max(max_height).ceil();
    rl.set_window_size(window_size as i32, window_size as i32);
    rl.set_window_state(WindowState::default().set_window_topmost(true));
    rl.set_window_opacity(0.0);
    info!("screen {}x{}, window {}px", bounds.width(), bounds.height(), window_size);

    // Audio problems only cost the beep
    let audio = if !args.no_beep {
        RaylibAudio::init_audio_device()
            .map_err(|e| warn!("audio device unavailable, beep disabled: {}", e))
            .ok()
    } else {
        None
    };
    let beeper = audio.as_ref().and_then(|audio| {
        Beeper::new(audio)
            .map_err(|e| warn!("beep disabled: {}", e))
            .ok()
    });

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut controller = MotionCycleController::new(bounds, window_size, rng);

    controller.run_cycle();
    if let Some(beeper) = &beeper {
        beeper.beep();
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        for event in controller.update(dt) {
            if let CycleEvent::CycleStarted(_) = event {
                if let Some(beeper) = &beeper {
                    beeper.beep();
                }
            }
        }

        sprite.rotate(controller.rotation());
        rl.set_window_position(controller.left().round() as i32, controller.top().round() as i32);
        rl.set_window_opacity(controller.opacity());

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLANK);
        sprite.draw(&mut d, window_size);
    }

    info!("window closed after {} cycles", controller.cycles());
    Ok(())
}
