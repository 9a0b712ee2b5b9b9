// main.rs
use anyhow::Result;
use clap::Parser;
use log::info;
use raylib::prelude::*;

use kube_game::audio_manager::AudioManager;
use kube_game::cli::{Args, init_logging};
use kube_game::config::{CLASSIC_TITLE, MAZE_TITLE, TARGET_FPS};
use kube_game::core::session::{Session, Variant};
use kube_game::render;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let variant = args.variant();
    let size = args.level_size()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(variant, size, seed);

    let (width, height) = render::screen_size(variant);
    let mut builder = raylib::init();
    builder.size(width, height);
    match variant {
        Variant::Classic => {
            builder.title(CLASSIC_TITLE).resizable().undecorated();
        }
        Variant::Maze => {
            builder.title(MAZE_TITLE);
        }
    }
    let (mut window, raylib_thread) = builder.build();
    window.set_target_fps(TARGET_FPS);

    let audio = if args.mute {
        None
    } else {
        AudioManager::new().map(|mut a| {
            a.load_sfx_auto();
            a
        })
    };

    while !window.window_should_close() {
        // input -> state
        let outcomes = session.handle_frame(&window);
        if let Some(audio) = &audio {
            for outcome in outcomes {
                audio.react(outcome);
            }
        }

        // state -> screen
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::RAYWHITE);
        render::draw_frame(&mut d, &session);
    }

    info!("window closed, seed was {}", session.seed());
    Ok(())
}
