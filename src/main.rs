use anyhow::Result;
use glam::Vec3;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use battlerock::engine::{
    AudioSource, ColliderTag, GameLoop, Input, OverlapEvent, RandomColor, TextSurface,
};
use battlerock::game::characters::{Appearance, Human, Stats};
use battlerock::game::ui::Typewriter;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Battlerock behavior demo...");

    // Spawn a human with a randomized appearance
    let appearance = Appearance::new()
        .with_body_types(&["slim", "heavy", "buff"])
        .with_hair_styles(&["short", "long", "mohawk"])
        .with_body_parts(&["head", "arms", "legs"]);

    let mut rng = StdRng::seed_from_u64(42);
    let mut colors = RandomColor::new(StdRng::seed_from_u64(7));

    let mut human = Human::new(Stats::default(), appearance, Vec3::new(5.0, 0.0, 0.0));
    human.randomize_appearance(&mut rng, &mut colors);
    info!(
        "Spawned human: body type {:?}, hair {:?} (bald: {}), skin {:?}",
        human.appearance.body_type(),
        human.appearance.hair_style(),
        human.appearance.is_bald(),
        human.appearance.skin_color(),
    );

    // A player wanders into the human's trigger volume and out again
    let player = Vec3::ZERO;
    let mut game_loop = GameLoop::new();
    let dt = game_loop.fixed_timestep();

    let mut tick: u64 = 0;
    while game_loop.elapsed_secs() < 2.0 {
        for _ in 0..game_loop.begin_frame() {
            tick += 1;

            if tick == 30 {
                human.on_overlap(OverlapEvent::Stay {
                    tag: ColliderTag::Player,
                    other: player,
                });
                info!("Player overlap: human is now {:?}", human.state());
            }
            if tick == 90 {
                human.on_overlap(OverlapEvent::Exit {
                    tag: ColliderTag::Player,
                    other: player,
                });
                info!("Player left: human is now {:?}", human.state());
            }

            human.physics_tick(dt, 0.0);
            human.integrate(dt);
        }
    }
    info!(
        "Human settled at {:?} in state {:?}",
        human.position(),
        human.state()
    );

    // Reveal a line of dialogue, cancelling it halfway with a simulated press
    let mut surface = TextSurface::with_text("WELCOME TO THE ARENA");
    let mut audio = AudioSource::new();
    let mut input = Input::new();
    let mut typewriter = Typewriter::new(0.05, 0.5);
    typewriter.activate(&mut surface);

    let mut shown = String::new();
    let mut revealing = GameLoop::new();
    let mut reveal_tick: u64 = 0;
    while typewriter.is_active()
        && typewriter.source() != Some(surface.text())
        && revealing.elapsed_secs() < 3.0
    {
        for _ in 0..revealing.begin_frame() {
            reveal_tick += 1;
            if reveal_tick == 45 {
                input.press_primary();
            }

            typewriter.update(
                revealing.fixed_timestep(),
                input.primary_pressed(),
                &mut surface,
                &mut audio,
            );
            input.clear();

            if surface.text() != shown {
                shown = surface.text().to_string();
                info!("[{:>3} cues] {}", audio.play_count(), shown);
            }
        }
    }

    info!("Demo finished");
    Ok(())
}
