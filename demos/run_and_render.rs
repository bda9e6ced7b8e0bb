use minifb::{Key, Window, WindowOptions};
use rand::Rng;
use windy_gridworld::utils::rng::rng_from_seed;
use windy_gridworld::{Env, RenderFrame, RenderMode, TimeLimit, WindyGridworldEnv};

fn rgba_to_u32(a: u8, r: u8, g: u8, b: u8) -> u32 {
    // Minifb expects ARGB on most platforms; construct accordingly.
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let env = WindyGridworldEnv::new().with_render_mode(RenderMode::RgbArray);
    let mut env = TimeLimit::new(env, 500);
    let (_obs, _info) = env.reset(None);

    let Some(RenderFrame::Pixels { width, height, .. }) = env.render() else {
        eprintln!("Environment did not produce a pixel frame; nothing to show in a window.");
        return;
    };
    let (width, height) = (width as usize, height as usize);

    let mut window = match Window::new("windy-gridworld: random policy", width, height, WindowOptions::default()) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Unable to open window: {e}");
            return;
        }
    };
    window.limit_update_rate(Some(std::time::Duration::from_millis(100)));

    let mut buffer: Vec<u32> = vec![0; width * height];
    let mut rng = rng_from_seed(123);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let action: i64 = rng.gen_range(0..4);
        match env.step(action) {
            Ok(step) if step.done() => {
                println!("episode ended at {} (terminated={})", step.observation, step.terminated);
                let _ = env.reset(None);
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("step failed: {e}");
                break;
            }
        }

        if let Some(RenderFrame::Pixels { width, height, data }) = env.render() {
            for (dst, px) in buffer.iter_mut().zip(data.chunks_exact(4)) {
                *dst = rgba_to_u32(px[3], px[0], px[1], px[2]);
            }
            if let Err(e) = window.update_with_buffer(&buffer, width as usize, height as usize) {
                eprintln!("Failed to update window buffer: {e}");
                break;
            }
        }
    }
}
