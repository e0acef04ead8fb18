//! Train an [`Agent`].
mod config;

use crate::{
    record::{Record, RecordValue::Scalar, Recorder},
    Agent, Env, Evaluator, ExperienceBufferBase, ReplayBufferBase, StepProcessor,
};
use anyhow::Result;
pub use config::TrainerConfig;
use log::info;

/// Manages the episode-driven training loop.
///
/// Per episode, the loop resets the environment and then repeats: sample an
/// action from the agent, step the environment, turn the step into a
/// transition with the [`StepProcessor`], push it into the replay buffer and
/// let the agent try an optimization step. The agent reports `None` while the
/// buffer is still warming up, in which case the update is skipped and the
/// episode simply continues.
///
/// At every episode end [`Agent::on_episode_end`] runs, which is where the
/// DQN agent consults its target synchronization schedule. Evaluation, model
/// checkpointing and record flushing happen at configurable episode
/// intervals.
///
/// Everything runs single-threaded and strictly in sequence: one environment
/// step, then at most one optimization step.
pub struct Trainer<E, P, R>
where
    E: Env,
    P: StepProcessor<E>,
    R: ExperienceBufferBase<Item = P::Output> + ReplayBufferBase,
{
    /// Configuration of the environment for training.
    env_config: E::Config,

    /// Configuration of the transition producer.
    step_proc_config: P::Config,

    /// Configuration of the replay buffer.
    replay_buffer_config: R::Config,

    /// Where to save the trained model.
    model_dir: Option<String>,

    /// The number of training episodes.
    max_episodes: usize,

    /// Interval of evaluation in episodes.
    eval_interval: usize,

    /// Interval of saving the model in episodes.
    save_interval: usize,

    /// Interval of flushing records in episodes.
    flush_record_interval: usize,
}

impl<E, P, R> Trainer<E, P, R>
where
    E: Env,
    P: StepProcessor<E>,
    R: ExperienceBufferBase<Item = P::Output> + ReplayBufferBase,
{
    /// Constructs a trainer.
    pub fn build(
        config: TrainerConfig,
        env_config: E::Config,
        step_proc_config: P::Config,
        replay_buffer_config: R::Config,
    ) -> Self {
        Self {
            env_config,
            step_proc_config,
            replay_buffer_config,
            model_dir: config.model_dir,
            max_episodes: config.max_episodes,
            eval_interval: config.eval_interval,
            save_interval: config.save_interval,
            flush_record_interval: config.flush_record_interval,
        }
    }

    fn save_model<A: Agent<E, R>>(agent: &A, model_dir: String) {
        match agent.save_params(model_dir.as_ref()) {
            Ok(()) => info!("Saved the model in {:?}.", &model_dir),
            Err(_) => info!("Failed to save model in {:?}.", &model_dir),
        }
    }

    fn save_best_model<A: Agent<E, R>>(agent: &A, model_dir: String) {
        let model_dir = model_dir + "/best";
        Self::save_model(agent, model_dir);
    }

    fn save_model_with_episode<A: Agent<E, R>>(agent: &A, model_dir: String, episode: usize) {
        let model_dir = model_dir + format!("/{}", episode).as_str();
        Self::save_model(agent, model_dir);
    }

    /// Runs one episode and returns its metrics.
    ///
    /// The record contains `episode_len`, `episode_return` and, if at least
    /// one optimization step ran, the mean `loss` over the episode.
    fn train_episode<A: Agent<E, R>>(
        &mut self,
        agent: &mut A,
        env: &mut E,
        processor: &mut P,
        buffer: &mut R,
    ) -> Result<Record> {
        let init_obs = env.reset()?;
        processor.reset(init_obs.clone());
        let mut prev_obs = init_obs;
        let mut episode_return = 0f32;
        let mut episode_len = 0usize;
        let mut loss_sum = 0f32;
        let mut n_opts = 0usize;

        loop {
            let act = agent.sample(&prev_obs);
            let (step, _) = env.step(&act);
            let reward = step.reward;
            let is_done = step.is_done;
            let next_obs = step.obs.clone();

            buffer.push(processor.process(step))?;
            episode_return += reward;
            episode_len += 1;

            // None means the update was skipped, e.g. during warm-up.
            if let Some(record_agent) = agent.opt(buffer)? {
                if let Ok(loss) = record_agent.get_scalar("loss") {
                    loss_sum += loss;
                    n_opts += 1;
                }
            }

            if is_done {
                break;
            }
            prev_obs = next_obs;
        }

        let mut record = Record::from_slice(&[
            ("episode_len", Scalar(episode_len as f32)),
            ("episode_return", Scalar(episode_return)),
        ]);
        if n_opts > 0 {
            record.insert("loss", Scalar(loss_sum / n_opts as f32));
        }
        Ok(record)
    }

    /// Trains the agent.
    pub fn train<A, D>(
        &mut self,
        agent: &mut A,
        recorder: &mut dyn Recorder,
        evaluator: &mut D,
    ) -> Result<()>
    where
        A: Agent<E, R>,
        D: Evaluator<E, A>,
    {
        let mut env = E::build(&self.env_config, 0)?;
        let mut processor = P::build(&self.step_proc_config);
        let mut buffer = R::build(&self.replay_buffer_config)?;
        let mut max_eval_reward = f32::MIN;
        agent.train();

        for episode in 1..=self.max_episodes {
            let mut record = self.train_episode(agent, &mut env, &mut processor, &mut buffer)?;
            record = record.merge(agent.on_episode_end(episode)?);

            // Evaluation
            if self.eval_interval > 0 && episode % self.eval_interval == 0 {
                info!("Starts evaluation of the trained model");
                agent.eval();
                let eval_record = evaluator.evaluate(agent)?;
                agent.train();
                let eval_reward = eval_record.get_scalar("episode_return")?;
                record.insert("eval_return", Scalar(eval_reward));

                // Save the best model up to the current episode
                if eval_reward > max_eval_reward {
                    max_eval_reward = eval_reward;
                    if let Some(model_dir) = self.model_dir.as_ref() {
                        Self::save_best_model(agent, model_dir.clone());
                    }
                }
            }

            // Save the current model
            if self.save_interval > 0 && episode % self.save_interval == 0 {
                if let Some(model_dir) = self.model_dir.as_ref() {
                    Self::save_model_with_episode(agent, model_dir.clone(), episode);
                }
            }

            recorder.store(record);
            if episode % self.flush_record_interval == 0 {
                recorder.flush(episode as i64)?;
            }
        }

        recorder.flush(self.max_episodes as i64)?;
        Ok(())
    }
}
