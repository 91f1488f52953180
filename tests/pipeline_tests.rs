//! Tests for the episodic training pipeline

use std::sync::{Arc, Mutex};

use gridworld::{
    Cell, Location, Observer, RandomWalkAgent, Result, TrainingConfig, TrainingPipeline, World,
};

/// Observer capturing episode starts and step sources through a shared handle.
struct TraceObserver {
    starts: Arc<Mutex<Vec<Location>>>,
    step_sources: Arc<Mutex<Vec<Location>>>,
}

impl Observer for TraceObserver {
    fn on_episode_start(&mut self, _episode: usize, start: Location) -> Result<()> {
        self.starts.lock().unwrap().push(start);
        Ok(())
    }

    fn on_step(
        &mut self,
        _episode: usize,
        _step: usize,
        from: Location,
        _to: Location,
    ) -> Result<()> {
        self.step_sources.lock().unwrap().push(from);
        Ok(())
    }
}

/// Small world with a wall so start sampling has something to reject.
fn walled_world() -> World {
    let f = Cell::open(-1.0);
    World::from_rows(vec![
        vec![f, f, f],
        vec![f, Cell::wall(), Cell::terminal(10.0)],
    ])
    .unwrap()
}

#[test]
fn start_sampling_never_returns_walls() {
    let world = walled_world();
    let starts = Arc::new(Mutex::new(Vec::new()));
    let step_sources = Arc::new(Mutex::new(Vec::new()));

    let config = TrainingConfig {
        episodes: 10_000,
        seed: Some(42),
        ..TrainingConfig::default()
    };
    let mut pipeline = TrainingPipeline::new(config).with_observer(Box::new(TraceObserver {
        starts: Arc::clone(&starts),
        step_sources: Arc::clone(&step_sources),
    }));
    let mut agent = RandomWalkAgent::new(&world, 0.3, 0.5);
    pipeline.run(&world, &mut agent).unwrap();

    let starts = starts.lock().unwrap();
    assert_eq!(starts.len(), 10_000);
    for &start in starts.iter() {
        assert!(world.is_valid(start), "sampled start {start} is a wall");
    }
}

#[test]
fn no_step_originates_from_a_terminal() {
    let world = walled_world();
    let starts = Arc::new(Mutex::new(Vec::new()));
    let step_sources = Arc::new(Mutex::new(Vec::new()));

    let config = TrainingConfig {
        episodes: 2000,
        seed: Some(7),
        ..TrainingConfig::default()
    };
    let mut pipeline = TrainingPipeline::new(config).with_observer(Box::new(TraceObserver {
        starts: Arc::clone(&starts),
        step_sources: Arc::clone(&step_sources),
    }));
    let mut agent = RandomWalkAgent::new(&world, 0.3, 0.5);
    pipeline.run(&world, &mut agent).unwrap();

    for &from in step_sources.lock().unwrap().iter() {
        assert!(
            !world.is_terminal(from),
            "step originated from terminal {from}"
        );
    }
}

#[test]
fn terminal_starts_end_episodes_with_zero_steps() {
    // A world where half the valid cells are terminal: terminal starts must
    // produce zero-step episodes rather than moves out of the terminal.
    let world = World::from_rows(vec![vec![Cell::open(-1.0), Cell::terminal(5.0)]]).unwrap();
    let starts = Arc::new(Mutex::new(Vec::new()));
    let step_sources = Arc::new(Mutex::new(Vec::new()));

    let config = TrainingConfig {
        episodes: 500,
        seed: Some(3),
        ..TrainingConfig::default()
    };
    let mut pipeline = TrainingPipeline::new(config).with_observer(Box::new(TraceObserver {
        starts: Arc::clone(&starts),
        step_sources: Arc::clone(&step_sources),
    }));
    let mut agent = RandomWalkAgent::new(&world, 0.3, 0.5);
    let result = pipeline.run(&world, &mut agent).unwrap();

    assert_eq!(result.episodes, 500);
    for &from in step_sources.lock().unwrap().iter() {
        assert!(!world.is_terminal(from));
    }
}

#[test]
fn terminal_state_values_stay_at_zero_init() {
    let world = walled_world();
    let config = TrainingConfig {
        episodes: 2000,
        seed: Some(11),
        ..TrainingConfig::default()
    };
    let mut pipeline = TrainingPipeline::new(config);
    let mut agent = RandomWalkAgent::new(&world, 0.3, 0.5);
    pipeline.run(&world, &mut agent).unwrap();

    // No update ever originates from a terminal, so its entry keeps the init.
    let terminal = world.location(1, 2).unwrap();
    assert_eq!(agent.state_values().get(terminal), 0.0);
}
