use rand::Rng;
use windy_gridworld::utils::rng::rng_from_seed;
use windy_gridworld::{Env, InfoValue, RecordEpisodeStatistics, TimeLimit, WindyGridworldEnv};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(7);
    let mut rng = rng_from_seed(seed);
    let mut env = RecordEpisodeStatistics::new(TimeLimit::new(WindyGridworldEnv::new(), 10_000));

    let (_obs, _info) = env.reset(None);
    println!("{}", env.inner().inner().render_text());

    loop {
        let action: i64 = rng.gen_range(0..4);
        let step = match env.step(action) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("step failed: {e}");
                return;
            }
        };
        if step.done() {
            println!("{}", env.inner().inner().render_text());
            if let (Some(InfoValue::I64(ret)), Some(InfoValue::I64(len))) =
                (step.info.get("episode_return"), step.info.get("episode_length"))
            {
                println!("seed {seed}: terminated={} return={ret} length={len}", step.terminated);
            }
            break;
        }
    }
}
