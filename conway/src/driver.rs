// driver.rs - Cancellable frame loop on a tokio runtime
//
// One task owns the `Life` and does everything to it: commands and steps
// are taken from the same select loop, so an edit never lands halfway
// through a generation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::config::SimConfig;
use crate::error::{Error, Result};
use crate::grid::{BoundaryPolicy, GridState};
use crate::life::{Command, Frame, Life};
use crate::patterns::{self, PatternCatalog, Selector};
use crate::rules::RuleParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// Steps the grid `fps` times a second and hands every generation to a
/// render callback until stopped.
///
/// `stop()` waits for a frame that is being delivered to finish and
/// guarantees no frame is delivered after it returns. Consequently it must
/// not be called from inside the callback.
#[derive(Debug)]
pub struct AnimationDriver {
    // Fresh per run, so a task that outlives its abort can never see Running again
    state: Arc<Mutex<DriverState>>,
    commands: Option<mpsc::UnboundedSender<Command>>,
    task: Option<JoinHandle<()>>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DriverState::Stopped)),
            commands: None,
            task: None,
        }
    }

    pub fn state(&self) -> DriverState {
        *lock(&self.state)
    }

    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    /// Spawns the frame loop on the current tokio runtime.
    pub fn start<F>(&mut self, grid: GridState, rules: RuleParameters, fps: u32, on_frame: F) -> Result<()>
    where
        F: FnMut(&Frame<'_>) + Send + 'static,
    {
        if self.is_running() {
            return Err(Error::AlreadyRunning);
        }
        if fps == 0 {
            return Err(Error::ZeroFrameRate);
        }
        let runtime = Handle::try_current()?;

        let period = Duration::from_nanos(1_000_000_000 / u64::from(fps));
        let state = Arc::new(Mutex::new(DriverState::Running));
        let (tx, rx) = mpsc::unbounded_channel();

        tracing::info!(fps, population = grid.population(), policy = ?grid.policy(), "starting animation");
        let life = Life::new(grid, rules);
        self.task = Some(runtime.spawn(run(life, period, on_frame, rx, Arc::clone(&state))));
        self.commands = Some(tx);
        self.state = state;
        Ok(())
    }

    /// Picks a pattern from `catalog`, seeds a grid with `policy` at
    /// `config.origin` and starts. Failures are logged and returned; the
    /// driver then stays stopped.
    pub fn launch<F>(
        &mut self,
        catalog: &PatternCatalog,
        selector: Selector,
        config: &SimConfig,
        policy: BoundaryPolicy,
        on_frame: F,
    ) -> Result<()>
    where
        F: FnMut(&Frame<'_>) + Send + 'static,
    {
        let result = catalog.pick(selector).and_then(|pattern| {
            let mut grid = GridState::new(policy);
            patterns::apply(&mut grid, pattern, config.origin);
            self.start(grid, config.rules, config.fps, on_frame)
        });
        if let Err(err) = &result {
            tracing::error!(error = %err, "failed to initialise the game of life");
        }
        result
    }

    /// Queues an edit for the frame loop. False if nothing is running.
    pub fn send(&self, command: Command) -> bool {
        match &self.commands {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    pub fn stop(&mut self) {
        {
            let mut state = lock(&self.state);
            if *state == DriverState::Running {
                tracing::info!("stopping animation");
            }
            *state = DriverState::Stopped;
        }
        self.commands = None;
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock(state: &Mutex<DriverState>) -> MutexGuard<'_, DriverState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Calls `on_frame` unless the run has been stopped. The state lock is held
/// for the duration of the call so `stop()` cannot slip in between.
fn deliver<F>(state: &Mutex<DriverState>, on_frame: &mut F, frame: &Frame<'_>) -> bool
where
    F: FnMut(&Frame<'_>),
{
    let state = lock(state);
    if *state != DriverState::Running {
        return false;
    }
    on_frame(frame);
    true
}

async fn run<F>(
    mut life: Life,
    period: Duration,
    mut on_frame: F,
    mut commands: mpsc::UnboundedReceiver<Command>,
    state: Arc<Mutex<DriverState>>,
) where
    F: FnMut(&Frame<'_>) + Send + 'static,
{
    let tick = time::sleep(period);
    tokio::pin!(tick);

    loop {
        tokio::select! {
            biased;

            Some(command) = commands.recv() => {
                life.apply(command);
                if !deliver(&state, &mut on_frame, &life.frame()) {
                    break;
                }
            }

            () = &mut tick => {
                life.update_generation();
                if !deliver(&state, &mut on_frame, &life.frame()) {
                    break;
                }
                // Paced from the end of the frame, not the start
                tick.as_mut().reset(Instant::now() + period);
            }
        }
    }
    tracing::debug!(generation = life.generation(), "frame loop finished");
}
