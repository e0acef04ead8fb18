//! DQN agent.
use super::{config::DqnConfig, explorer::EpsilonGreedy, loss::greedy_action, loss::td_targets,
    sync::SyncScheduler};
use crate::QNetwork;
use anyhow::Result;
use log::info;
use polecart_core::{
    record::{Record, RecordValue},
    replay_buffer::TransitionBatch,
    ActionId, Agent, Env, ExperienceBufferBase, Policy, ReplayBufferBase,
};
use std::{fs, marker::PhantomData, path::Path};

/// A DQN agent with a policy/target network pair.
///
/// The policy network `qnet` is updated once per environment step after the
/// warm-up threshold is reached; the target network `qnet_tgt` provides the
/// bootstrap targets and is read-only between synchronization events. On
/// synchronization, driven by the [`SyncScheduler`] at episode boundaries,
/// the target parameters are overwritten with a verbatim snapshot of the
/// policy parameters, never interpolated.
pub struct Dqn<E, Q, R>
where
    E: Env,
    Q: QNetwork<E::Obs>,
    R: ExperienceBufferBase + ReplayBufferBase<Batch = TransitionBatch<E::Obs>>,
    E::Act: From<ActionId>,
{
    pub(in crate::dqn) qnet: Q,
    pub(in crate::dqn) qnet_tgt: Q,
    pub(in crate::dqn) discount_factor: f32,
    pub(in crate::dqn) batch_size: usize,
    pub(in crate::dqn) min_transitions_warmup: usize,
    pub(in crate::dqn) explorer: EpsilonGreedy,
    pub(in crate::dqn) sync: SyncScheduler,
    pub(in crate::dqn) train: bool,
    pub(in crate::dqn) n_opts: usize,
    pub(in crate::dqn) phantom: PhantomData<(E, R)>,
}

impl<E, Q, R> Dqn<E, Q, R>
where
    E: Env,
    Q: QNetwork<E::Obs>,
    R: ExperienceBufferBase + ReplayBufferBase<Batch = TransitionBatch<E::Obs>>,
    E::Act: From<ActionId>,
{
    /// Constructs a DQN agent around the given policy network.
    ///
    /// The target network starts as a copy of `qnet`.
    pub fn build(config: &DqnConfig, qnet: Q) -> Result<Self> {
        config.check()?;
        let qnet_tgt = qnet.clone();

        Ok(Self {
            qnet,
            qnet_tgt,
            discount_factor: config.discount_factor,
            batch_size: config.batch_size,
            min_transitions_warmup: config.min_transitions_warmup,
            explorer: EpsilonGreedy::build(&config.explorer)?,
            sync: SyncScheduler::new(config.sync_interval, config.sync_interval_decay),
            train: true,
            n_opts: 0,
            phantom: PhantomData,
        })
    }

    /// The policy network.
    pub fn qnet(&self) -> &Q {
        &self.qnet
    }

    /// The target network.
    pub fn qnet_tgt(&self) -> &Q {
        &self.qnet_tgt
    }

    fn update_critic(&mut self, buffer: &mut R) -> Result<f32> {
        let batch = buffer.batch(self.batch_size)?;
        let tgt = td_targets(&self.qnet_tgt, &batch, self.discount_factor);
        let (obs, act, _, _, _) = batch.unpack();
        let loss = self.qnet.opt_step(&obs, &act, &tgt)?;
        self.n_opts += 1;
        Ok(loss)
    }

    fn sync_target(&mut self) -> Result<()> {
        self.qnet_tgt.load_parameters(&self.qnet.parameters())
    }
}

impl<E, Q, R> Policy<E> for Dqn<E, Q, R>
where
    E: Env,
    Q: QNetwork<E::Obs>,
    R: ExperienceBufferBase + ReplayBufferBase<Batch = TransitionBatch<E::Obs>>,
    E::Act: From<ActionId>,
{
    fn sample(&mut self, obs: &E::Obs) -> E::Act {
        let q = self.qnet.forward(obs);
        let a = if self.train {
            self.explorer.action(&q)
        } else {
            greedy_action(&q)
        };
        a.into()
    }
}

impl<E, Q, R> Agent<E, R> for Dqn<E, Q, R>
where
    E: Env,
    Q: QNetwork<E::Obs>,
    R: ExperienceBufferBase + ReplayBufferBase<Batch = TransitionBatch<E::Obs>>,
    E::Act: From<ActionId>,
{
    fn train(&mut self) {
        self.train = true;
    }

    fn eval(&mut self) {
        self.train = false;
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn opt(&mut self, buffer: &mut R) -> Result<Option<Record>> {
        if buffer.len() < self.min_transitions_warmup || buffer.len() < self.batch_size {
            return Ok(None);
        }
        let loss = self.update_critic(buffer)?;
        let eps = self.explorer.epsilon(self.explorer.n_steps()) as f32;
        Ok(Some(Record::from_slice(&[
            ("loss", RecordValue::Scalar(loss)),
            ("eps", RecordValue::Scalar(eps)),
        ])))
    }

    fn on_episode_end(&mut self, episode: usize) -> Result<Record> {
        if self.sync.should_sync(episode) {
            self.sync_target()?;
            info!("Synchronized the target network at episode {}", episode);
            Ok(Record::from_scalar("sync", 1.0))
        } else {
            Ok(Record::empty())
        }
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        fs::write(
            path.join("qnet.params"),
            bincode::serialize(&self.qnet.parameters())?,
        )?;
        fs::write(
            path.join("qnet_tgt.params"),
            bincode::serialize(&self.qnet_tgt.parameters())?,
        )?;
        Ok(())
    }

    fn load_params(&mut self, path: &Path) -> Result<()> {
        let params: Vec<f32> = bincode::deserialize(&fs::read(path.join("qnet.params"))?)?;
        self.qnet.load_parameters(&params)?;
        let params: Vec<f32> = bincode::deserialize(&fs::read(path.join("qnet_tgt.params"))?)?;
        self.qnet_tgt.load_parameters(&params)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiscreteAct, LinearQNet, LinearQNetConfig, VecObs};
    use polecart_core::{
        replay_buffer::{Transition, UniformReplayBuffer, UniformReplayBufferConfig},
        Step,
    };

    struct TestEnv;

    #[derive(Clone)]
    struct TestEnvConfig;

    impl Env for TestEnv {
        type Config = TestEnvConfig;
        type Obs = VecObs;
        type Act = DiscreteAct;
        type Info = ();

        fn build(_config: &Self::Config, _seed: i64) -> Result<Self> {
            Ok(Self)
        }

        fn step(&mut self, _a: &Self::Act) -> (Step<Self>, Record) {
            unimplemented!();
        }

        fn reset(&mut self) -> Result<Self::Obs> {
            unimplemented!();
        }
    }

    type TestBuffer = UniformReplayBuffer<VecObs>;
    type TestDqn = Dqn<TestEnv, LinearQNet, TestBuffer>;

    fn qnet() -> LinearQNet {
        LinearQNet::build(&LinearQNetConfig {
            n_features: 2,
            n_actions: 2,
            learning_rate: 0.1,
        })
        .unwrap()
    }

    fn buffer_with(n: usize) -> TestBuffer {
        let config = UniformReplayBufferConfig::default().capacity(64);
        let mut buffer = TestBuffer::build(&config).unwrap();
        for k in 0..n {
            let obs = VecObs(vec![1.0, k as f32 % 3.0]);
            let next_obs = VecObs(vec![0.5, (k + 1) as f32 % 3.0]);
            buffer
                .push(Transition::new(obs, k % 2, 1.0, next_obs, k % 7 == 0))
                .unwrap();
        }
        buffer
    }

    fn agent(config: DqnConfig) -> TestDqn {
        Dqn::build(&config, qnet()).unwrap()
    }

    #[test]
    fn skips_optimization_during_warmup() {
        let mut agent = agent(DqnConfig::default().batch_size(4).min_transitions_warmup(8));
        let mut buffer = buffer_with(7);
        assert!(agent.opt(&mut buffer).unwrap().is_none());
    }

    #[test]
    fn optimizes_once_warmed_up() {
        let mut agent = agent(DqnConfig::default().batch_size(4).min_transitions_warmup(8));
        let mut buffer = buffer_with(8);
        let record = agent.opt(&mut buffer).unwrap().unwrap();
        assert!(record.get_scalar("loss").is_ok());
        assert_eq!(agent.n_opts, 1);
    }

    #[test]
    fn target_is_untouched_by_optimization() {
        let mut agent = agent(DqnConfig::default().batch_size(4).min_transitions_warmup(4));
        let mut buffer = buffer_with(16);
        let tgt_before = agent.qnet_tgt().parameters();
        for _ in 0..10 {
            agent.opt(&mut buffer).unwrap().unwrap();
        }
        assert_ne!(agent.qnet().parameters(), tgt_before);
        assert_eq!(agent.qnet_tgt().parameters(), tgt_before);
    }

    #[test]
    fn sync_copies_the_policy_parameters_verbatim() {
        let mut agent = agent(
            DqnConfig::default()
                .batch_size(4)
                .min_transitions_warmup(4)
                .sync_interval(1)
                .sync_interval_decay(0),
        );
        let mut buffer = buffer_with(16);
        for _ in 0..5 {
            agent.opt(&mut buffer).unwrap().unwrap();
        }

        // First sync happens at episode 2 with interval 1.
        let record = agent.on_episode_end(1).unwrap();
        assert!(record.is_empty());
        assert_ne!(agent.qnet().parameters(), agent.qnet_tgt().parameters());

        let record = agent.on_episode_end(2).unwrap();
        assert_eq!(record.get_scalar("sync").unwrap(), 1.0);
        assert_eq!(agent.qnet().parameters(), agent.qnet_tgt().parameters());
    }

    #[test]
    fn greedy_in_eval_mode() {
        let mut agent = agent(DqnConfig::default());
        agent.eval();
        assert!(!agent.is_train());
        // With zeroed parameters all Q-values tie; the lowest index wins.
        let act = agent.sample(&VecObs(vec![1.0, 2.0]));
        assert_eq!(act.0, 0);
    }

    #[test]
    fn params_round_trip_through_files() {
        use tempdir::TempDir;

        let mut agent = agent(DqnConfig::default().batch_size(4).min_transitions_warmup(4));
        let mut buffer = buffer_with(16);
        for _ in 0..5 {
            agent.opt(&mut buffer).unwrap().unwrap();
        }

        let dir = TempDir::new("dqn_params").unwrap();
        agent.save_params(dir.path()).unwrap();

        let mut restored: TestDqn = Dqn::build(&DqnConfig::default(), qnet()).unwrap();
        restored.load_params(dir.path()).unwrap();
        assert_eq!(restored.qnet().parameters(), agent.qnet().parameters());
        assert_eq!(
            restored.qnet_tgt().parameters(),
            agent.qnet_tgt().parameters()
        );
    }
}
