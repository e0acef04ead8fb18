//! End-to-end training of the DQN agent on a tiny deterministic environment.
use anyhow::Result;
use polecart_core::{
    record::{CsvRecorder, Record},
    replay_buffer::{
        OneStepProcessor, OneStepProcessorConfig, UniformReplayBuffer, UniformReplayBufferConfig,
    },
    Agent, DefaultEvaluator, Env as EnvTrait, Step, Trainer, TrainerConfig,
};
use polecart_dqn::{
    dqn::{Dqn, DqnConfig, EpsilonGreedyConfig},
    DiscreteAct, LinearQNet, LinearQNetConfig, VecObs,
};
use tempdir::TempDir;

const N_POSITIONS: usize = 5;
const MAX_EPISODE_STEPS: usize = 20;
const BATCH_SIZE: usize = 16;
const N_TRANSITIONS_WARMUP: usize = 32;
const MAX_EPISODES: usize = 150;
const EVAL_INTERVAL: usize = 25;
const SAVE_INTERVAL: usize = 50;

/// A walk on a line of `N_POSITIONS` cells. Action 0 moves left, action 1
/// moves right; reaching the right edge pays 1 and ends the episode, the
/// left edge ends it without reward. Observations are one-hot positions.
struct LineWorld {
    pos: usize,
    steps: usize,
}

#[derive(Clone)]
struct LineWorldConfig {}

impl LineWorld {
    fn obs(&self) -> VecObs {
        let mut v = vec![0.0f32; N_POSITIONS];
        v[self.pos] = 1.0;
        VecObs(v)
    }
}

impl EnvTrait for LineWorld {
    type Config = LineWorldConfig;
    type Obs = VecObs;
    type Act = DiscreteAct;
    type Info = ();

    fn build(_config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            pos: N_POSITIONS / 2,
            steps: 0,
        })
    }

    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        self.steps += 1;
        if a.0 == 0 {
            self.pos = self.pos.saturating_sub(1);
        } else {
            self.pos = (self.pos + 1).min(N_POSITIONS - 1);
        }

        let at_right = self.pos == N_POSITIONS - 1;
        let at_left = self.pos == 0;
        let reward = if at_right { 1.0 } else { 0.0 };
        let is_done = at_right || at_left || self.steps >= MAX_EPISODE_STEPS;

        let step = Step::new(self.obs(), a.clone(), reward, is_done, ());
        (step, Record::empty())
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.pos = N_POSITIONS / 2;
        self.steps = 0;
        Ok(self.obs())
    }
}

type Buffer = UniformReplayBuffer<VecObs>;
type Processor = OneStepProcessor<LineWorld, VecObs>;
type LineWorldDqn = Dqn<LineWorld, LinearQNet, Buffer>;

fn create_agent() -> Result<LineWorldDqn> {
    let qnet = LinearQNet::build(&LinearQNetConfig {
        n_features: N_POSITIONS,
        n_actions: 2,
        learning_rate: 0.1,
    })?;
    let config = DqnConfig::default()
        .discount_factor(0.9)
        .batch_size(BATCH_SIZE)
        .min_transitions_warmup(N_TRANSITIONS_WARMUP)
        .sync_interval(5)
        .sync_interval_decay(1)
        .explorer(EpsilonGreedyConfig::default().seed(7));
    Dqn::build(&config, qnet)
}

#[test]
fn dqn_learns_on_lineworld() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = TempDir::new("dqn_lineworld")?;
    let model_dir = dir.path().join("model");
    let csv_path = dir.path().join("train.csv");

    let trainer_config = TrainerConfig::default()
        .max_episodes(MAX_EPISODES)
        .eval_interval(EVAL_INTERVAL)
        .save_interval(SAVE_INTERVAL)
        .flush_record_interval(10)
        .model_dir(model_dir.to_str().unwrap());
    let mut trainer = Trainer::<LineWorld, Processor, Buffer>::build(
        trainer_config,
        LineWorldConfig {},
        OneStepProcessorConfig::default(),
        UniformReplayBufferConfig::default().capacity(1000),
    );

    let mut agent = create_agent()?;
    let mut recorder = CsvRecorder::new(&csv_path)?;
    let mut evaluator = DefaultEvaluator::<LineWorld>::new(&LineWorldConfig {}, 0, 2)?;

    trainer.train(&mut agent, &mut recorder, &mut evaluator)?;

    // One CSV row per episode, plus the header.
    let text = std::fs::read_to_string(&csv_path)?;
    assert_eq!(text.lines().count(), MAX_EPISODES + 1);

    // Evaluation saved a best model, interval saving a numbered one.
    assert!(model_dir.join("best").join("qnet.params").exists());
    assert!(model_dir.join("50").join("qnet_tgt.params").exists());

    // The greedy policy solved the task: from the middle it walks right.
    agent.eval();
    let mut env = LineWorld::build(&LineWorldConfig {}, 0)?;
    let mut obs = env.reset()?;
    let mut episode_return = 0.0;
    for _ in 0..MAX_EPISODE_STEPS {
        let act = polecart_core::Policy::sample(&mut agent, &obs);
        let (step, _) = env.step(&act);
        episode_return += step.reward;
        if step.is_done {
            break;
        }
        obs = step.obs;
    }
    assert_eq!(episode_return, 1.0);

    // Saved parameters restore into a fresh agent.
    let params_dir = dir.path().join("final");
    agent.save_params(&params_dir)?;
    let mut restored = create_agent()?;
    restored.load_params(&params_dir)?;
    assert_eq!(restored.qnet().parameters(), agent.qnet().parameters());

    Ok(())
}
